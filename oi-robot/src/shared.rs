use std::sync::{Arc, Mutex, PoisonError};

use oi_core::{Demo, SensorId, Telemetry};

use crate::button::Button;
use crate::error::Result;
use crate::interface::OpenInterface;
use crate::robot::{LedState, Robot};
use crate::transport::Transport;

/// Cloneable handle that serializes access to one robot.
///
/// Responses carry no request id, so the lock is held for each whole
/// command/response exchange. Use [`SharedRobot::with`] to keep other
/// threads out for a sequence of commands.
pub struct SharedRobot<T: Transport> {
    inner: Arc<Mutex<Robot<T>>>,
}

impl<T: Transport> SharedRobot<T> {
    pub fn new(robot: Robot<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(robot)),
        }
    }

    /// Runs `f` with exclusive access to the robot.
    pub fn with<R>(&self, f: impl FnOnce(&mut Robot<T>) -> Result<R>) -> Result<R> {
        let mut robot = self.inner.lock()?;
        f(&mut *robot)
    }

    /// Cached sensor values. Still readable after a panic poisoned the lock.
    pub fn telemetry(&self) -> Telemetry {
        let robot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        robot.telemetry().clone()
    }

    pub fn leds_state(&self) -> LedState {
        let robot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        robot.leds_state()
    }
}

impl<T: Transport> Clone for SharedRobot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> OpenInterface for SharedRobot<T> {
    fn start(&mut self) -> Result<()> {
        self.with(|robot| robot.start())
    }

    fn safe(&mut self) -> Result<()> {
        self.with(|robot| robot.safe())
    }

    fn full(&mut self) -> Result<()> {
        self.with(|robot| robot.full())
    }

    fn demo(&mut self, demo: Demo) -> Result<()> {
        self.with(|robot| robot.demo(demo))
    }

    fn drive(&mut self, velocity: i16, radius: i16) -> Result<()> {
        self.with(|robot| robot.drive(velocity, radius))
    }

    fn drive_direct(&mut self, right: i16, left: i16) -> Result<()> {
        self.with(|robot| robot.drive_direct(right, left))
    }

    fn leds(&mut self, color: u8, intensity: u8, play: bool, advance: bool) -> Result<()> {
        self.with(|robot| robot.leds(color, intensity, play, advance))
    }

    fn leds_on(&mut self, power: bool, play: bool, advance: bool) -> Result<()> {
        self.with(|robot| robot.leds_on(power, play, advance))
    }

    fn leds_toggle(&mut self, power: bool, play: bool, advance: bool) -> Result<()> {
        self.with(|robot| robot.leds_toggle(power, play, advance))
    }

    fn low_side_drivers(&mut self, driver0: bool, driver1: bool, driver2: bool) -> Result<()> {
        self.with(|robot| robot.low_side_drivers(driver0, driver1, driver2))
    }

    fn pwm_low_side_drivers(&mut self, duty0: u8, duty1: u8, duty2: u8) -> Result<()> {
        self.with(|robot| robot.pwm_low_side_drivers(duty0, duty1, duty2))
    }

    fn set_digital_outputs(&mut self, pin0: bool, pin1: bool, pin2: bool) -> Result<()> {
        self.with(|robot| robot.set_digital_outputs(pin0, pin1, pin2))
    }

    fn send_ir(&mut self, value: u8) -> Result<()> {
        self.with(|robot| robot.send_ir(value))
    }

    fn song(&mut self, slot: u8, notes: &[u8], start: usize, length: usize) -> Result<()> {
        self.with(|robot| robot.song(slot, notes, start, length))
    }

    fn play_song(&mut self, slot: u8) -> Result<()> {
        self.with(|robot| robot.play_song(slot))
    }

    fn read_sensors(&mut self, id: SensorId) -> Result<()> {
        self.with(|robot| robot.read_sensors(id))
    }

    fn read_sensor_list(&mut self, ids: &[SensorId]) -> Result<()> {
        self.with(|robot| robot.read_sensor_list(ids))
    }

    fn play_script(&mut self, script: &[u8], immediate: bool) -> Result<()> {
        self.with(|robot| robot.play_script(script, immediate))
    }

    fn show_script(&mut self) -> Result<Vec<u8>> {
        self.with(|robot| robot.show_script())
    }

    fn wait_button_pressed(&mut self, button: Button, beep: bool) -> Result<()> {
        self.with(|robot| robot.wait_button_pressed(button, beep))
    }

    fn telemetry(&self) -> Telemetry {
        SharedRobot::telemetry(self)
    }

    fn leds_state(&self) -> LedState {
        SharedRobot::leds_state(self)
    }
}
