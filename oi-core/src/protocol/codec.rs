//! Field-level encoding used by every command and sensor packet.
//!
//! Words travel big-endian (high byte first) and signed values are two's
//! complement.

pub const fn encode_signed_word(value: i16) -> [u8; 2] {
    value.to_be_bytes()
}

pub const fn encode_unsigned_word(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

pub const fn encode_signed_byte(value: i8) -> u8 {
    value as u8
}

pub const fn decode_unsigned_word(hi: u8, lo: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}

pub const fn decode_signed_word(hi: u8, lo: u8) -> i16 {
    let combined = decode_unsigned_word(hi, lo) as i32;

    if combined > 0x7FFF {
        (combined - 0x1_0000) as i16
    } else {
        combined as i16
    }
}

pub const fn decode_signed_byte(byte: u8) -> i8 {
    let value = byte as i16;

    if value > 0x7F {
        (value - 0x100) as i8
    } else {
        value as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_word_round_trips_over_full_range() {
        for v in i16::MIN..=i16::MAX {
            let [hi, lo] = encode_signed_word(v);
            assert_eq!(decode_signed_word(hi, lo), v);
        }
    }

    #[test]
    fn unsigned_word_round_trips_over_full_range() {
        for v in u16::MIN..=u16::MAX {
            let [hi, lo] = encode_unsigned_word(v);
            assert_eq!(decode_unsigned_word(hi, lo), v);
        }
    }

    #[test]
    fn signed_byte_round_trips() {
        for v in i8::MIN..=i8::MAX {
            assert_eq!(decode_signed_byte(encode_signed_byte(v)), v);
        }
    }

    #[test]
    fn words_are_big_endian() {
        assert_eq!(encode_signed_word(200), [0x00, 0xC8]);
        assert_eq!(encode_signed_word(500), [0x01, 0xF4]);
        assert_eq!(encode_signed_word(-1), [0xFF, 0xFF]);
        assert_eq!(encode_signed_word(i16::MIN), [0x80, 0x00]);
        assert_eq!(encode_unsigned_word(0xBEEF), [0xBE, 0xEF]);
    }

    #[test]
    fn sign_boundaries() {
        assert_eq!(decode_signed_word(0x7F, 0xFF), 32767);
        assert_eq!(decode_signed_word(0x80, 0x00), -32768);
        assert_eq!(decode_signed_word(0xFF, 0x38), -200);
        assert_eq!(decode_signed_byte(0x7F), 127);
        assert_eq!(decode_signed_byte(0x80), -128);
        assert_eq!(decode_signed_byte(0xFF), -1);
    }
}
