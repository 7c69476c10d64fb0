use super::{error::ProtocolError, *};
use crate::Mode;

/// Command opcodes understood by the Open Interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Opcode {
    Start = 128,
    Safe = 131,
    Full = 132,
    Demo = 136,
    Drive = 137,
    LowSideDrivers = 138,
    Leds = 139,
    Song = 140,
    PlaySong = 141,
    Sensors = 142,
    PwmLowSideDrivers = 144,
    DriveDirect = 145,
    DigitalOutputs = 147,
    QueryList = 149,
    SendIr = 151,
    Script = 152,
    PlayScript = 153,
    ShowScript = 154,
    /// Only meaningful inside a script.
    WaitDistance = 156,
    /// Only meaningful inside a script.
    WaitAngle = 157,
}

impl Opcode {
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Whether the firmware accepts this opcode while in `mode`.
    ///
    /// The firmware silently ignores commands that are not available in its
    /// current mode, so this is advisory for callers that track the mode
    /// through the `oi_mode` sensor.
    pub const fn allowed_in(self, mode: Mode) -> bool {
        match self {
            Opcode::Start => true,
            Opcode::Drive
            | Opcode::DriveDirect
            | Opcode::Leds
            | Opcode::LowSideDrivers
            | Opcode::PwmLowSideDrivers
            | Opcode::DigitalOutputs
            | Opcode::SendIr
            | Opcode::PlaySong => matches!(mode, Mode::Safe | Mode::Full),
            Opcode::Safe
            | Opcode::Full
            | Opcode::Demo
            | Opcode::Song
            | Opcode::Sensors
            | Opcode::QueryList
            | Opcode::Script
            | Opcode::PlayScript
            | Opcode::ShowScript
            | Opcode::WaitDistance
            | Opcode::WaitAngle => !matches!(mode, Mode::Off),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        opcode.byte()
    }
}

impl TryFrom<u8> for Opcode {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            128 => Ok(Opcode::Start),
            131 => Ok(Opcode::Safe),
            132 => Ok(Opcode::Full),
            136 => Ok(Opcode::Demo),
            137 => Ok(Opcode::Drive),
            138 => Ok(Opcode::LowSideDrivers),
            139 => Ok(Opcode::Leds),
            140 => Ok(Opcode::Song),
            141 => Ok(Opcode::PlaySong),
            142 => Ok(Opcode::Sensors),
            144 => Ok(Opcode::PwmLowSideDrivers),
            145 => Ok(Opcode::DriveDirect),
            147 => Ok(Opcode::DigitalOutputs),
            149 => Ok(Opcode::QueryList),
            151 => Ok(Opcode::SendIr),
            152 => Ok(Opcode::Script),
            153 => Ok(Opcode::PlayScript),
            154 => Ok(Opcode::ShowScript),
            156 => Ok(Opcode::WaitDistance),
            157 => Ok(Opcode::WaitAngle),
            _ => Err(ProtocolError::UnknownOpcode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_byte_values() {
        assert_eq!(Opcode::Start.byte(), 128);
        assert_eq!(Opcode::Safe.byte(), 131);
        assert_eq!(Opcode::Drive.byte(), 137);
        assert_eq!(Opcode::QueryList.byte(), 149);
        assert_eq!(Opcode::ShowScript.byte(), 154);
        assert_eq!(Opcode::WaitAngle.byte(), 157);
    }

    #[test]
    fn parses_known_and_rejects_gaps() {
        assert_eq!(Opcode::try_from(145u8), Ok(Opcode::DriveDirect));
        assert_eq!(Opcode::try_from(143u8), Err(ProtocolError::UnknownOpcode(143)));
        assert_eq!(Opcode::try_from(0u8), Err(ProtocolError::UnknownOpcode(0)));
    }

    #[test]
    fn actuators_need_safe_or_full() {
        assert!(!Opcode::Drive.allowed_in(Mode::Passive));
        assert!(Opcode::Drive.allowed_in(Mode::Safe));
        assert!(Opcode::Leds.allowed_in(Mode::Full));
        assert!(Opcode::Sensors.allowed_in(Mode::Passive));
        assert!(!Opcode::Sensors.allowed_in(Mode::Off));
        assert!(Opcode::Start.allowed_in(Mode::Off));
    }
}
