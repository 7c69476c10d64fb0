use super::codec::encode_signed_word;
use super::opcode::Opcode;
use super::sensor::SensorId;
use crate::Demo;

pub const LED_PLAY: u8 = 0x02;
pub const LED_ADVANCE: u8 = 0x08;

pub const LOW_SIDE_DRIVER_0: u8 = 0x01;
pub const LOW_SIDE_DRIVER_1: u8 = 0x02;
pub const LOW_SIDE_DRIVER_2: u8 = 0x04;

pub const DIGITAL_OUTPUT_0: u8 = 0x01;
pub const DIGITAL_OUTPUT_1: u8 = 0x02;
pub const DIGITAL_OUTPUT_2: u8 = 0x04;

pub const fn led_bits(play: bool, advance: bool) -> u8 {
    (if play { LED_PLAY } else { 0 }) | (if advance { LED_ADVANCE } else { 0 })
}

pub const fn low_side_driver_bits(driver0: bool, driver1: bool, driver2: bool) -> u8 {
    (if driver0 { LOW_SIDE_DRIVER_0 } else { 0 })
        | (if driver1 { LOW_SIDE_DRIVER_1 } else { 0 })
        | (if driver2 { LOW_SIDE_DRIVER_2 } else { 0 })
}

pub const fn digital_output_bits(pin0: bool, pin1: bool, pin2: bool) -> u8 {
    (if pin0 { DIGITAL_OUTPUT_0 } else { 0 })
        | (if pin1 { DIGITAL_OUTPUT_1 } else { 0 })
        | (if pin2 { DIGITAL_OUTPUT_2 } else { 0 })
}

/// A single command with its arguments, ready to be laid out on the wire.
///
/// Encoding does not validate ranges. Callers that need the documented
/// song or script limits check them before building the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Start,
    Safe,
    Full,
    Demo(Demo),
    Drive { velocity: i16, radius: i16 },
    DriveDirect { right: i16, left: i16 },
    LowSideDrivers { bits: u8 },
    Leds { bits: u8, color: u8, intensity: u8 },
    /// `notes` holds note/duration pairs back to back.
    Song { slot: u8, notes: &'a [u8] },
    PlaySong { slot: u8 },
    Sensors(SensorId),
    PwmLowSideDrivers { duty0: u8, duty1: u8, duty2: u8 },
    DigitalOutputs { bits: u8 },
    QueryList(&'a [SensorId]),
    SendIr(u8),
    Script(&'a [u8]),
    PlayScript,
    ShowScript,
    WaitDistance { millimeters: i16 },
    WaitAngle { degrees: i16 },
}

impl Command<'_> {
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::Start => Opcode::Start,
            Command::Safe => Opcode::Safe,
            Command::Full => Opcode::Full,
            Command::Demo(_) => Opcode::Demo,
            Command::Drive { .. } => Opcode::Drive,
            Command::DriveDirect { .. } => Opcode::DriveDirect,
            Command::LowSideDrivers { .. } => Opcode::LowSideDrivers,
            Command::Leds { .. } => Opcode::Leds,
            Command::Song { .. } => Opcode::Song,
            Command::PlaySong { .. } => Opcode::PlaySong,
            Command::Sensors(_) => Opcode::Sensors,
            Command::PwmLowSideDrivers { .. } => Opcode::PwmLowSideDrivers,
            Command::DigitalOutputs { .. } => Opcode::DigitalOutputs,
            Command::QueryList(_) => Opcode::QueryList,
            Command::SendIr(_) => Opcode::SendIr,
            Command::Script(_) => Opcode::Script,
            Command::PlayScript => Opcode::PlayScript,
            Command::ShowScript => Opcode::ShowScript,
            Command::WaitDistance { .. } => Opcode::WaitDistance,
            Command::WaitAngle { .. } => Opcode::WaitAngle,
        }
    }

    /// Number of bytes `encode` produces.
    pub fn encoded_len(&self) -> usize {
        1 + match self {
            Command::Start
            | Command::Safe
            | Command::Full
            | Command::PlayScript
            | Command::ShowScript => 0,
            Command::Demo(_)
            | Command::LowSideDrivers { .. }
            | Command::PlaySong { .. }
            | Command::Sensors(_)
            | Command::DigitalOutputs { .. }
            | Command::SendIr(_) => 1,
            Command::WaitDistance { .. } | Command::WaitAngle { .. } => 2,
            Command::Leds { .. } | Command::PwmLowSideDrivers { .. } => 3,
            Command::Drive { .. } | Command::DriveDirect { .. } => 4,
            Command::Song { notes, .. } => 2 + notes.len(),
            Command::QueryList(ids) => 1 + ids.len(),
            Command::Script(bytes) => 1 + bytes.len(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.push(self.opcode().byte());

        match *self {
            Command::Start
            | Command::Safe
            | Command::Full
            | Command::PlayScript
            | Command::ShowScript => {}
            Command::Demo(demo) => buf.push(demo as u8),
            Command::Drive { velocity, radius } => {
                buf.extend_from_slice(&encode_signed_word(velocity));
                buf.extend_from_slice(&encode_signed_word(radius));
            }
            Command::DriveDirect { right, left } => {
                buf.extend_from_slice(&encode_signed_word(right));
                buf.extend_from_slice(&encode_signed_word(left));
            }
            Command::LowSideDrivers { bits } | Command::DigitalOutputs { bits } => buf.push(bits),
            Command::Leds {
                bits,
                color,
                intensity,
            } => buf.extend_from_slice(&[bits, color, intensity]),
            Command::Song { slot, notes } => {
                buf.push(slot);
                buf.push((notes.len() >> 1) as u8);
                buf.extend_from_slice(notes);
            }
            Command::PlaySong { slot } => buf.push(slot),
            Command::Sensors(id) => buf.push(id as u8),
            Command::PwmLowSideDrivers {
                duty0,
                duty1,
                duty2,
            } => buf.extend_from_slice(&[duty2, duty1, duty0]),
            Command::QueryList(ids) => {
                debug_assert!(ids.len() <= u8::MAX as usize);
                buf.push(ids.len() as u8);
                buf.extend(ids.iter().map(|id| *id as u8));
            }
            Command::SendIr(value) => buf.push(value),
            Command::Script(bytes) => {
                debug_assert!(bytes.len() <= u8::MAX as usize);
                buf.push(bytes.len() as u8);
                buf.extend_from_slice(bytes);
            }
            Command::WaitDistance { millimeters } => {
                buf.extend_from_slice(&encode_signed_word(millimeters))
            }
            Command::WaitAngle { degrees } => buf.extend_from_slice(&encode_signed_word(degrees)),
        }
    }
}
