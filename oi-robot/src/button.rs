use oi_core::Telemetry;
use serde::{Deserialize, Serialize};

/// Slot the wait beep is stored in.
pub const BEEP_SLOT: u8 = 0;
pub const BEEP_NOTES: [u8; 4] = [58, 16, 62, 16];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Play,
    Advance,
}

impl Button {
    pub fn is_down(self, telemetry: &Telemetry) -> bool {
        match self {
            Button::Play => telemetry.is_play_button_down(),
            Button::Advance => telemetry.is_advance_button_down(),
        }
    }

    /// `(play, advance)` LED toggles that blink the LED beside this button.
    pub const fn led_toggles(self) -> (bool, bool) {
        match self {
            Button::Play => (true, false),
            Button::Advance => (false, true),
        }
    }
}

/// Progress of a press-and-release wait.
///
/// A release only counts once this wait has polled the button down itself.
/// A "down" left in the cache by an earlier read never ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonWait {
    #[default]
    WaitingForPress,
    WaitingForRelease,
    Done,
}

impl ButtonWait {
    pub const fn advance(self, down: bool) -> Self {
        match (self, down) {
            (ButtonWait::WaitingForPress, true) => ButtonWait::WaitingForRelease,
            (ButtonWait::WaitingForRelease, false) => ButtonWait::Done,
            (state, _) => state,
        }
    }

    pub const fn is_done(self) -> bool {
        matches!(self, ButtonWait::Done)
    }
}
