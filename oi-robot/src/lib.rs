//! Blocking client for the Create Open Interface.
//!
//! [`Robot`] drives one connection over any [`Transport`]. Commands are
//! encoded whole by `oi-core` and written in a single call, and sensor
//! replies land in the robot's [`Telemetry`](oi_core::Telemetry) cache.

pub mod button;
pub mod config;
pub mod error;
pub mod interface;
pub mod robot;
pub mod shared;
pub mod transport;

pub use button::{Button, ButtonWait};
pub use config::RobotConfig;
pub use error::{ConnectionLost, Error, InvalidArgument, Result};
pub use interface::{Adapter, OpenInterface};
pub use robot::{LedState, Robot};
pub use shared::SharedRobot;
pub use transport::{MAX_COMMAND_SIZE, MockTransport, StreamTransport, Transport};
