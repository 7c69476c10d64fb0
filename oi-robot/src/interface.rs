use oi_core::{Demo, SensorId, Telemetry};

use crate::button::Button;
use crate::error::Result;
use crate::robot::{LedState, Robot};
use crate::transport::Transport;

/// The full command surface of an Open Interface robot.
///
/// Implemented by [`Robot`], by the cloneable [`SharedRobot`](crate::SharedRobot)
/// handle and by [`Adapter`], so code written against the trait can be handed
/// any of them.
pub trait OpenInterface {
    fn start(&mut self) -> Result<()>;
    fn safe(&mut self) -> Result<()>;
    fn full(&mut self) -> Result<()>;
    fn demo(&mut self, demo: Demo) -> Result<()>;
    fn drive(&mut self, velocity: i16, radius: i16) -> Result<()>;
    fn drive_direct(&mut self, right: i16, left: i16) -> Result<()>;
    fn leds(&mut self, color: u8, intensity: u8, play: bool, advance: bool) -> Result<()>;
    fn leds_on(&mut self, power: bool, play: bool, advance: bool) -> Result<()>;
    fn leds_toggle(&mut self, power: bool, play: bool, advance: bool) -> Result<()>;
    fn low_side_drivers(&mut self, driver0: bool, driver1: bool, driver2: bool) -> Result<()>;
    fn pwm_low_side_drivers(&mut self, duty0: u8, duty1: u8, duty2: u8) -> Result<()>;
    fn set_digital_outputs(&mut self, pin0: bool, pin1: bool, pin2: bool) -> Result<()>;
    fn send_ir(&mut self, value: u8) -> Result<()>;
    fn song(&mut self, slot: u8, notes: &[u8], start: usize, length: usize) -> Result<()>;
    fn play_song(&mut self, slot: u8) -> Result<()>;
    fn read_sensors(&mut self, id: SensorId) -> Result<()>;
    fn read_sensor_list(&mut self, ids: &[SensorId]) -> Result<()>;
    fn play_script(&mut self, script: &[u8], immediate: bool) -> Result<()>;
    fn show_script(&mut self) -> Result<Vec<u8>>;
    fn wait_button_pressed(&mut self, button: Button, beep: bool) -> Result<()>;

    /// Snapshot of the cached sensor values.
    fn telemetry(&self) -> Telemetry;
    fn leds_state(&self) -> LedState;

    fn song_all(&mut self, slot: u8, notes: &[u8]) -> Result<()> {
        self.song(slot, notes, 0, notes.len())
    }
}

impl<T: Transport> OpenInterface for Robot<T> {
    fn start(&mut self) -> Result<()> {
        Robot::start(self)
    }

    fn safe(&mut self) -> Result<()> {
        Robot::safe(self)
    }

    fn full(&mut self) -> Result<()> {
        Robot::full(self)
    }

    fn demo(&mut self, demo: Demo) -> Result<()> {
        Robot::demo(self, demo)
    }

    fn drive(&mut self, velocity: i16, radius: i16) -> Result<()> {
        Robot::drive(self, velocity, radius)
    }

    fn drive_direct(&mut self, right: i16, left: i16) -> Result<()> {
        Robot::drive_direct(self, right, left)
    }

    fn leds(&mut self, color: u8, intensity: u8, play: bool, advance: bool) -> Result<()> {
        Robot::leds(self, color, intensity, play, advance)
    }

    fn leds_on(&mut self, power: bool, play: bool, advance: bool) -> Result<()> {
        Robot::leds_on(self, power, play, advance)
    }

    fn leds_toggle(&mut self, power: bool, play: bool, advance: bool) -> Result<()> {
        Robot::leds_toggle(self, power, play, advance)
    }

    fn low_side_drivers(&mut self, driver0: bool, driver1: bool, driver2: bool) -> Result<()> {
        Robot::low_side_drivers(self, driver0, driver1, driver2)
    }

    fn pwm_low_side_drivers(&mut self, duty0: u8, duty1: u8, duty2: u8) -> Result<()> {
        Robot::pwm_low_side_drivers(self, duty0, duty1, duty2)
    }

    fn set_digital_outputs(&mut self, pin0: bool, pin1: bool, pin2: bool) -> Result<()> {
        Robot::set_digital_outputs(self, pin0, pin1, pin2)
    }

    fn send_ir(&mut self, value: u8) -> Result<()> {
        Robot::send_ir(self, value)
    }

    fn song(&mut self, slot: u8, notes: &[u8], start: usize, length: usize) -> Result<()> {
        Robot::song(self, slot, notes, start, length)
    }

    fn play_song(&mut self, slot: u8) -> Result<()> {
        Robot::play_song(self, slot)
    }

    fn read_sensors(&mut self, id: SensorId) -> Result<()> {
        Robot::read_sensors(self, id)
    }

    fn read_sensor_list(&mut self, ids: &[SensorId]) -> Result<()> {
        Robot::read_sensor_list(self, ids)
    }

    fn play_script(&mut self, script: &[u8], immediate: bool) -> Result<()> {
        Robot::play_script(self, script, immediate)
    }

    fn show_script(&mut self) -> Result<Vec<u8>> {
        Robot::show_script(self)
    }

    fn wait_button_pressed(&mut self, button: Button, beep: bool) -> Result<()> {
        Robot::wait_button_pressed(self, button, beep)
    }

    fn telemetry(&self) -> Telemetry {
        Robot::telemetry(self).clone()
    }

    fn leds_state(&self) -> LedState {
        Robot::leds_state(self)
    }
}

/// Forwards every call to the wrapped interface.
///
/// A starting point for decorators: wrap a robot, then shadow the methods
/// whose behaviour should change.
#[derive(Debug, Clone, Default)]
pub struct Adapter<R> {
    inner: R,
}

impl<R: OpenInterface> Adapter<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: OpenInterface> OpenInterface for Adapter<R> {
    fn start(&mut self) -> Result<()> {
        self.inner.start()
    }

    fn safe(&mut self) -> Result<()> {
        self.inner.safe()
    }

    fn full(&mut self) -> Result<()> {
        self.inner.full()
    }

    fn demo(&mut self, demo: Demo) -> Result<()> {
        self.inner.demo(demo)
    }

    fn drive(&mut self, velocity: i16, radius: i16) -> Result<()> {
        self.inner.drive(velocity, radius)
    }

    fn drive_direct(&mut self, right: i16, left: i16) -> Result<()> {
        self.inner.drive_direct(right, left)
    }

    fn leds(&mut self, color: u8, intensity: u8, play: bool, advance: bool) -> Result<()> {
        self.inner.leds(color, intensity, play, advance)
    }

    fn leds_on(&mut self, power: bool, play: bool, advance: bool) -> Result<()> {
        self.inner.leds_on(power, play, advance)
    }

    fn leds_toggle(&mut self, power: bool, play: bool, advance: bool) -> Result<()> {
        self.inner.leds_toggle(power, play, advance)
    }

    fn low_side_drivers(&mut self, driver0: bool, driver1: bool, driver2: bool) -> Result<()> {
        self.inner.low_side_drivers(driver0, driver1, driver2)
    }

    fn pwm_low_side_drivers(&mut self, duty0: u8, duty1: u8, duty2: u8) -> Result<()> {
        self.inner.pwm_low_side_drivers(duty0, duty1, duty2)
    }

    fn set_digital_outputs(&mut self, pin0: bool, pin1: bool, pin2: bool) -> Result<()> {
        self.inner.set_digital_outputs(pin0, pin1, pin2)
    }

    fn send_ir(&mut self, value: u8) -> Result<()> {
        self.inner.send_ir(value)
    }

    fn song(&mut self, slot: u8, notes: &[u8], start: usize, length: usize) -> Result<()> {
        self.inner.song(slot, notes, start, length)
    }

    fn play_song(&mut self, slot: u8) -> Result<()> {
        self.inner.play_song(slot)
    }

    fn read_sensors(&mut self, id: SensorId) -> Result<()> {
        self.inner.read_sensors(id)
    }

    fn read_sensor_list(&mut self, ids: &[SensorId]) -> Result<()> {
        self.inner.read_sensor_list(ids)
    }

    fn play_script(&mut self, script: &[u8], immediate: bool) -> Result<()> {
        self.inner.play_script(script, immediate)
    }

    fn show_script(&mut self) -> Result<Vec<u8>> {
        self.inner.show_script()
    }

    fn wait_button_pressed(&mut self, button: Button, beep: bool) -> Result<()> {
        self.inner.wait_button_pressed(button, beep)
    }

    fn telemetry(&self) -> Telemetry {
        self.inner.telemetry()
    }

    fn leds_state(&self) -> LedState {
        self.inner.leds_state()
    }
}
