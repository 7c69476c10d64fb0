use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing used by the engine between and around commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Pause after every command so the firmware can process it.
    pub settle_delay_ms: u64,
    /// Interval between button polls while waiting for a press.
    pub button_poll_ms: u64,
    /// Waiting time after which the LEDs blink (and the beep replays).
    pub liveness_interval_ms: u64,
}

impl RobotConfig {
    /// No pauses at all. Meant for in-memory transports.
    pub const fn immediate() -> Self {
        Self {
            settle_delay_ms: 0,
            button_poll_ms: 0,
            liveness_interval_ms: 0,
        }
    }

    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub const fn button_poll_interval(&self) -> Duration {
        Duration::from_millis(self.button_poll_ms)
    }

    pub const fn liveness_interval(&self) -> Duration {
        Duration::from_millis(self.liveness_interval_ms)
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 20,
            button_poll_ms: 16,
            liveness_interval_ms: 500,
        }
    }
}
