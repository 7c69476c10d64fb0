pub mod protocol;
pub mod script;
pub mod telemetry;

use serde::{Deserialize, Serialize};

pub use protocol::command::Command;
pub use protocol::error::{ParseResult, ProtocolError};
pub use protocol::opcode::Opcode;
pub use protocol::sensor::{Field, SensorId};
pub use script::Script;
pub use telemetry::Telemetry;

/// Operating mode reported by the firmware through the `oi_mode` sensor.
///
/// The host never owns this state. Sending Safe or Full requests a transition
/// and the firmware may fall back on its own (a wheel drop in Safe mode drops
/// it back to Passive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Mode {
    Off = 0,
    Passive = 1,
    Safe = 2,
    Full = 3,
}

impl TryFrom<u8> for Mode {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Off),
            1 => Ok(Mode::Passive),
            2 => Ok(Mode::Safe),
            3 => Ok(Mode::Full),
            _ => Err(ProtocolError::UnknownMode(value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChargingState {
    NotCharging = 0,
    Reconditioning = 1,
    FullCharging = 2,
    Trickle = 3,
    Waiting = 4,
    Fault = 5,
}

impl TryFrom<u8> for ChargingState {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChargingState::NotCharging),
            1 => Ok(ChargingState::Reconditioning),
            2 => Ok(ChargingState::FullCharging),
            3 => Ok(ChargingState::Trickle),
            4 => Ok(ChargingState::Waiting),
            5 => Ok(ChargingState::Fault),
            _ => Err(ProtocolError::UnknownChargingState(value)),
        }
    }
}

/// Built-in behaviours started with the Demo command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Demo {
    Cover = 0,
    CoverAndDock = 1,
    SpotCover = 2,
    Mouse = 3,
    FigureEight = 4,
    Wimp = 5,
    Home = 6,
    Tag = 7,
    Pachelbel = 8,
    Banjo = 9,
    /// Stops whichever demo is running.
    Abort = 255,
}

impl TryFrom<u8> for Demo {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Demo::Cover),
            1 => Ok(Demo::CoverAndDock),
            2 => Ok(Demo::SpotCover),
            3 => Ok(Demo::Mouse),
            4 => Ok(Demo::FigureEight),
            5 => Ok(Demo::Wimp),
            6 => Ok(Demo::Home),
            7 => Ok(Demo::Tag),
            8 => Ok(Demo::Pachelbel),
            9 => Ok(Demo::Banjo),
            255 => Ok(Demo::Abort),
            _ => Err(ProtocolError::UnknownDemo(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_byte() {
        assert_eq!(Mode::try_from(2u8), Ok(Mode::Safe));
        assert_eq!(Mode::try_from(4u8), Err(ProtocolError::UnknownMode(4)));
    }

    #[test]
    fn demo_ids_skip_to_abort() {
        assert_eq!(Demo::try_from(9u8), Ok(Demo::Banjo));
        assert_eq!(Demo::try_from(255u8), Ok(Demo::Abort));
        assert_eq!(Demo::try_from(10u8), Err(ProtocolError::UnknownDemo(10)));
        assert_eq!(Demo::Abort as u8, 255);
    }

    #[test]
    fn charging_state_from_byte() {
        assert_eq!(ChargingState::try_from(3u8), Ok(ChargingState::Trickle));
        assert_eq!(
            ChargingState::try_from(6u8),
            Err(ProtocolError::UnknownChargingState(6))
        );
    }
}
