use std::thread;
use std::time::Duration;

use oi_core::protocol::command::{digital_output_bits, led_bits, low_side_driver_bits};
use oi_core::protocol::{MAX_SCRIPT_LEN, MAX_SONG_VALUES, SONG_SLOTS, song_budget};
use oi_core::{Command, Demo, SensorId, Telemetry};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};

use crate::button::{BEEP_NOTES, BEEP_SLOT, Button, ButtonWait};
use crate::config::RobotConfig;
use crate::error::{InvalidArgument, Result};
use crate::transport::Transport;

/// Last LED command sent, mirrored so the LEDs can be toggled without a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedState {
    pub color: u8,
    pub intensity: u8,
    pub play: bool,
    pub advance: bool,
}

/// Protocol engine for one robot connection.
///
/// Owns the transport and the telemetry cache. Operations take `&mut self`,
/// so one exchange is in flight at a time; wrap the robot in a
/// [`SharedRobot`](crate::SharedRobot) to share it between threads.
pub struct Robot<T: Transport> {
    transport: T,
    telemetry: Telemetry,
    leds: LedState,
    config: RobotConfig,
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

impl<T: Transport> Robot<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, RobotConfig::default())
    }

    pub fn with_config(transport: T, config: RobotConfig) -> Self {
        Self {
            transport,
            telemetry: Telemetry::new(),
            leds: LedState::default(),
            config,
        }
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Values from the most recent sensor reads. Never touches the transport.
    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn leds_state(&self) -> LedState {
        self.leds
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn send(&mut self, command: Command<'_>) -> Result<()> {
        let bytes = command.encode();
        debug!(opcode = ?command.opcode(), len = bytes.len(), "sending command");

        self.transport.write_bytes(&bytes)?;
        pause(self.config.settle_delay());
        Ok(())
    }

    fn read_into_cache(&mut self, id: SensorId) -> Result<()> {
        let bytes = self.transport.read_unsigned_bytes(id.wire_width())?;
        self.telemetry.apply(id, &bytes)?;
        trace!(sensor = ?id, ?bytes, "decoded sensor packet");
        Ok(())
    }

    /// Wakes the interface up in Passive mode.
    pub fn start(&mut self) -> Result<()> {
        self.send(Command::Start)?;
        info!("open interface started");
        Ok(())
    }

    pub fn safe(&mut self) -> Result<()> {
        self.send(Command::Safe)?;
        info!("requested safe mode");
        Ok(())
    }

    pub fn full(&mut self) -> Result<()> {
        self.send(Command::Full)?;
        info!("requested full mode");
        Ok(())
    }

    pub fn demo(&mut self, demo: Demo) -> Result<()> {
        self.send(Command::Demo(demo))?;
        info!(?demo, "started demo");
        Ok(())
    }

    /// Drives along an arc of `radius` mm at `velocity` mm/s.
    ///
    /// Values go out unchanged, including the straight and turn-in-place
    /// sentinels in [`oi_core::protocol`].
    pub fn drive(&mut self, velocity: i16, radius: i16) -> Result<()> {
        self.send(Command::Drive { velocity, radius })
    }

    pub fn drive_direct(&mut self, right: i16, left: i16) -> Result<()> {
        self.send(Command::DriveDirect { right, left })
    }

    pub fn leds(&mut self, color: u8, intensity: u8, play: bool, advance: bool) -> Result<()> {
        self.send(Command::Leds {
            bits: led_bits(play, advance),
            color,
            intensity,
        })?;

        self.leds = LedState {
            color,
            intensity,
            play,
            advance,
        };
        Ok(())
    }

    /// Green power LED at full or zero intensity.
    pub fn leds_on(&mut self, power: bool, play: bool, advance: bool) -> Result<()> {
        self.leds(0, if power { 255 } else { 0 }, play, advance)
    }

    /// Inverts the selected LEDs relative to the last LED command.
    pub fn leds_toggle(&mut self, power: bool, play: bool, advance: bool) -> Result<()> {
        let LedState {
            color,
            mut intensity,
            play: mut play_on,
            advance: mut advance_on,
        } = self.leds;

        if power {
            intensity ^= 0xFF;
        }
        if play {
            play_on = !play_on;
        }
        if advance {
            advance_on = !advance_on;
        }

        self.leds(color, intensity, play_on, advance_on)
    }

    pub fn low_side_drivers(&mut self, driver0: bool, driver1: bool, driver2: bool) -> Result<()> {
        self.send(Command::LowSideDrivers {
            bits: low_side_driver_bits(driver0, driver1, driver2),
        })
    }

    /// Duty cycles run from 0 to 128.
    pub fn pwm_low_side_drivers(&mut self, duty0: u8, duty1: u8, duty2: u8) -> Result<()> {
        self.send(Command::PwmLowSideDrivers {
            duty0,
            duty1,
            duty2,
        })
    }

    pub fn set_digital_outputs(&mut self, pin0: bool, pin1: bool, pin2: bool) -> Result<()> {
        self.send(Command::DigitalOutputs {
            bits: digital_output_bits(pin0, pin1, pin2),
        })
    }

    pub fn send_ir(&mut self, value: u8) -> Result<()> {
        self.send(Command::SendIr(value))
    }

    /// Defines song `slot` from `notes[start..start + length]`, note and
    /// duration values alternating.
    pub fn song(&mut self, slot: u8, notes: &[u8], start: usize, length: usize) -> Result<()> {
        if slot >= SONG_SLOTS {
            warn!(slot, "song slot out of range");
            return Err(InvalidArgument::SongSlot(slot).into());
        }
        if length % 2 == 1 {
            warn!(length, "odd song length");
            return Err(InvalidArgument::OddSongLength(length).into());
        }

        let max = song_budget(slot).min(MAX_SONG_VALUES);
        if length < 1 || length > max {
            warn!(slot, length, max, "song length out of range");
            return Err(InvalidArgument::SongLength { slot, length, max }.into());
        }

        let end = start.saturating_add(length);
        let Some(notes) = notes.get(start..end) else {
            return Err(InvalidArgument::SongRange {
                start,
                end,
                available: notes.len(),
            }
            .into());
        };

        self.send(Command::Song { slot, notes })
    }

    pub fn song_all(&mut self, slot: u8, notes: &[u8]) -> Result<()> {
        self.song(slot, notes, 0, notes.len())
    }

    pub fn play_song(&mut self, slot: u8) -> Result<()> {
        if slot >= SONG_SLOTS {
            warn!(slot, "song slot out of range");
            return Err(InvalidArgument::SongSlot(slot).into());
        }

        self.send(Command::PlaySong { slot })
    }

    /// Requests one packet (or group) and decodes the reply into the cache.
    pub fn read_sensors(&mut self, id: SensorId) -> Result<()> {
        self.send(Command::Sensors(id))?;
        self.read_into_cache(id)
    }

    /// Requests several packets in one query, decoding each reply in the
    /// order the ids were given.
    pub fn read_sensor_list(&mut self, ids: &[SensorId]) -> Result<()> {
        // The count travels in one byte.
        let max = self
            .transport
            .max_command_payload_size()
            .saturating_sub(2)
            .min(u8::MAX as usize);
        if ids.len() > max {
            warn!(requested = ids.len(), max, "sensor query too long");
            return Err(InvalidArgument::TooManySensors {
                requested: ids.len(),
                max,
            }
            .into());
        }

        self.send(Command::QueryList(ids))?;
        for id in ids {
            self.read_into_cache(*id)?;
        }
        Ok(())
    }

    /// Uploads `script` and starts it.
    ///
    /// Unless `immediate`, this then reads sensor group 2 before returning.
    /// The firmware answers once the script has released the serial port,
    /// which is the only hint of completion the protocol offers; treat it as
    /// best effort.
    #[instrument(skip(self, script), fields(len = script.len()))]
    pub fn play_script(&mut self, script: &[u8], immediate: bool) -> Result<()> {
        if script.len() > MAX_SCRIPT_LEN {
            warn!(max = MAX_SCRIPT_LEN, "script too long");
            return Err(InvalidArgument::ScriptTooLong {
                length: script.len(),
                max: MAX_SCRIPT_LEN,
            }
            .into());
        }

        self.send(Command::Script(script))?;
        self.send(Command::PlayScript)?;

        if !immediate {
            self.read_sensors(SensorId::Group2)?;
            debug!("script playback returned");
        }
        Ok(())
    }

    /// Reads back the script stored on the robot.
    pub fn show_script(&mut self) -> Result<Vec<u8>> {
        self.send(Command::ShowScript)?;

        let len = self.transport.read_unsigned_byte()?;
        let script = self.transport.read_unsigned_bytes(len as usize)?;
        Ok(script)
    }

    /// Blocks until `button` is pressed and released.
    ///
    /// While waiting, the LED beside the button blinks (and the beep replays
    /// when `beep` is set). The LEDs are restored afterwards. There is no
    /// timeout; only a transport failure ends the wait early.
    #[instrument(skip(self))]
    pub fn wait_button_pressed(&mut self, button: Button, beep: bool) -> Result<()> {
        let restore = self.leds;
        if beep {
            self.song_all(BEEP_SLOT, &BEEP_NOTES)?;
        }

        let poll = self.config.button_poll_interval();
        let liveness = self.config.liveness_interval();
        let (toggle_play, toggle_advance) = button.led_toggles();

        let mut state = ButtonWait::default();
        let mut waited = Duration::ZERO;
        loop {
            self.read_sensors(SensorId::Buttons)?;
            state = state.advance(button.is_down(&self.telemetry));
            if state.is_done() {
                break;
            }

            pause(poll);
            waited += poll;
            if waited > liveness {
                if beep {
                    self.play_song(BEEP_SLOT)?;
                }
                self.leds_toggle(false, toggle_play, toggle_advance)?;
                waited = Duration::ZERO;
            }
        }

        self.leds(
            restore.color,
            restore.intensity,
            restore.play,
            restore.advance,
        )?;
        info!(?button, "button pressed");
        Ok(())
    }
}
