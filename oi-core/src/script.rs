//! Off-device builder for scripts uploaded with the Script command.
//!
//! Arguments are clamped into their legal ranges rather than rejected. A
//! command that would not fit is refused whole, so the buffer always holds
//! complete commands.

use crate::protocol::command::Command;
use crate::protocol::error::{ParseResult, ProtocolError};
use crate::protocol::{
    MAX_RADIUS, MAX_SCRIPT_LEN, MAX_VELOCITY, RADIUS_CLOCKWISE, RADIUS_COUNTER_CLOCKWISE,
    RADIUS_STRAIGHT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    bytes: Vec<u8>,
    capacity: usize,
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_velocity(velocity: i32) -> i16 {
    velocity.clamp(-(MAX_VELOCITY as i32), MAX_VELOCITY as i32) as i16
}

fn clamp_radius(radius: i32) -> i16 {
    radius.clamp(-(MAX_RADIUS as i32), MAX_RADIUS as i32) as i16
}

impl Script {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SCRIPT_LEN)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, command: Command<'_>) -> ParseResult<()> {
        if command.encoded_len() > self.remaining() {
            return Err(ProtocolError::ScriptOverflow {
                capacity: self.capacity,
            });
        }

        command.encode_into(&mut self.bytes);
        Ok(())
    }

    pub fn drive(&mut self, velocity: i32, radius: i32) -> ParseResult<()> {
        self.push(Command::Drive {
            velocity: clamp_velocity(velocity),
            radius: clamp_radius(radius),
        })
    }

    pub fn drive_straight(&mut self, velocity: i32) -> ParseResult<()> {
        self.push(Command::Drive {
            velocity: clamp_velocity(velocity),
            radius: RADIUS_STRAIGHT,
        })
    }

    /// Spins on the spot. A negative velocity is replaced by 1 mm/s.
    pub fn turn_in_place(&mut self, velocity: i32, clockwise: bool) -> ParseResult<()> {
        let velocity = if velocity < 0 {
            1
        } else {
            velocity.min(MAX_VELOCITY as i32) as i16
        };
        let radius = if clockwise {
            RADIUS_CLOCKWISE
        } else {
            RADIUS_COUNTER_CLOCKWISE
        };

        self.push(Command::Drive { velocity, radius })
    }

    pub fn drive_direct(&mut self, right: i32, left: i32) -> ParseResult<()> {
        self.push(Command::DriveDirect {
            right: clamp_velocity(right),
            left: clamp_velocity(left),
        })
    }

    pub fn stop(&mut self) -> ParseResult<()> {
        self.push(Command::DriveDirect { right: 0, left: 0 })
    }

    /// Pauses the script until the robot has covered `millimeters`.
    pub fn wait_distance(&mut self, millimeters: i32) -> ParseResult<()> {
        self.push(Command::WaitDistance {
            millimeters: millimeters.clamp(0, i16::MAX as i32) as i16,
        })
    }

    /// Pauses the script until the robot has turned `degrees`, counter-clockwise positive.
    pub fn wait_angle(&mut self, degrees: i32) -> ParseResult<()> {
        self.push(Command::WaitAngle {
            degrees: degrees.clamp(-(i16::MAX as i32), i16::MAX as i32) as i16,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_clamps_velocity() {
        let mut script = Script::new();
        script.drive(9999, 0).unwrap();
        assert_eq!(script.bytes(), [137, 0x01, 0xF4, 0x00, 0x00]);

        script.drive(-9999, -9999).unwrap();
        assert_eq!(&script.bytes()[5..], [137, 0xFE, 0x0C, 0xF8, 0x30]);
    }

    #[test]
    fn each_drive_adds_five_bytes() {
        let mut script = Script::new();
        for n in 1..=20 {
            script.drive(100, 100).unwrap();
            assert_eq!(script.len(), n * 5);
        }
        assert_eq!(script.remaining(), 0);

        assert_eq!(
            script.drive(0, 0),
            Err(ProtocolError::ScriptOverflow { capacity: 100 })
        );
        assert_eq!(script.len(), 100);
    }

    #[test]
    fn overflow_on_the_101st_byte() {
        let mut script = Script::new();
        for _ in 0..33 {
            script.wait_angle(90).unwrap();
        }
        assert_eq!(script.len(), 99);

        let err = script.wait_angle(90).unwrap_err();
        assert_eq!(err, ProtocolError::ScriptOverflow { capacity: 100 });
        assert_eq!(script.len(), 99);
    }

    #[test]
    fn rejected_command_appends_nothing() {
        let mut script = Script::with_capacity(7);
        script.wait_distance(10).unwrap();
        assert!(script.drive(100, 0).is_err());
        assert_eq!(script.bytes(), [156, 0x00, 0x0A]);
    }

    #[test]
    fn sentinel_radii() {
        let mut script = Script::new();
        script.drive_straight(200).unwrap();
        script.turn_in_place(100, true).unwrap();
        script.turn_in_place(100, false).unwrap();

        assert_eq!(
            script.bytes(),
            [
                137, 0x00, 0xC8, 0x7F, 0xFF, //
                137, 0x00, 0x64, 0xFF, 0xFF, //
                137, 0x00, 0x64, 0x00, 0x01,
            ]
        );
    }

    #[test]
    fn turn_in_place_replaces_negative_velocity() {
        let mut script = Script::new();
        script.turn_in_place(-50, true).unwrap();
        script.turn_in_place(800, true).unwrap();
        assert_eq!(&script.bytes()[1..3], [0x00, 0x01]);
        assert_eq!(&script.bytes()[6..8], [0x01, 0xF4]);
    }

    #[test]
    fn waits_are_clamped() {
        let mut script = Script::new();
        script.wait_distance(-5).unwrap();
        script.wait_distance(100_000).unwrap();
        script.wait_angle(-100_000).unwrap();

        assert_eq!(
            script.bytes(),
            [156, 0x00, 0x00, 156, 0x7F, 0xFF, 157, 0x80, 0x01]
        );
    }

    #[test]
    fn stop_is_zero_drive_direct() {
        let mut script = Script::new();
        script.stop().unwrap();
        assert_eq!(script.bytes(), [145, 0, 0, 0, 0]);
    }
}
