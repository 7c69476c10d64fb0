pub mod codec;
pub mod command;
pub mod error;
pub mod opcode;
pub mod sensor;

use serde::{Deserialize, Serialize};

/// Largest script the device buffer holds.
pub const MAX_SCRIPT_LEN: usize = 100;

pub const SONG_SLOTS: u8 = 16;
/// Note and duration values accepted in one song definition.
pub const MAX_SONG_VALUES: usize = 32;
pub const SONG_MEMORY: usize = 256;
pub const SONG_SLOT_STRIDE: usize = 32;

pub const MAX_VELOCITY: i16 = 500;
pub const MAX_RADIUS: i16 = 2000;

pub const RADIUS_STRAIGHT: i16 = 0x7FFF;
pub const RADIUS_STRAIGHT_ALT: i16 = i16::MIN;
pub const RADIUS_CLOCKWISE: i16 = -1;
pub const RADIUS_COUNTER_CLOCKWISE: i16 = 1;

/// Song memory left for a definition starting at `slot`.
pub const fn song_budget(slot: u8) -> usize {
    SONG_MEMORY.saturating_sub(slot as usize * SONG_SLOT_STRIDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_match_wire_values() {
        assert_eq!(codec::encode_signed_word(RADIUS_STRAIGHT), [0x7F, 0xFF]);
        assert_eq!(codec::encode_signed_word(RADIUS_STRAIGHT_ALT), [0x80, 0x00]);
        assert_eq!(codec::encode_signed_word(RADIUS_CLOCKWISE), [0xFF, 0xFF]);
        assert_eq!(codec::encode_signed_word(RADIUS_COUNTER_CLOCKWISE), [0x00, 0x01]);
    }

    #[test]
    fn song_budget_shrinks_per_slot() {
        assert_eq!(song_budget(0), 256);
        assert_eq!(song_budget(1), 224);
        assert_eq!(song_budget(7), 32);
        assert_eq!(song_budget(8), 0);
        assert_eq!(song_budget(15), 0);
    }
}
