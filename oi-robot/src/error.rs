use std::sync::PoisonError;

use oi_core::ProtocolError;

pub type Result<T> = std::result::Result<T, Error>;

/// The byte stream to the robot failed. The in-flight command is abandoned.
#[derive(Debug, thiserror::Error)]
#[error("connection lost: {0}")]
pub struct ConnectionLost(#[from] pub std::io::Error);

/// A caller-supplied value broke a documented range, checked before anything
/// is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("song slot {0} is outside 0..=15")]
    SongSlot(u8),
    #[error("song length {0} must be even")]
    OddSongLength(usize),
    #[error("song length {length} for slot {slot} is outside 1..={max}")]
    SongLength { slot: u8, length: usize, max: usize },
    #[error("song range {start}..{end} is outside the {available} given values")]
    SongRange {
        start: usize,
        end: usize,
        available: usize,
    },
    #[error("{requested} sensor ids exceed the per-request limit of {max}")]
    TooManySensors { requested: usize, max: usize },
    #[error("script of {length} bytes exceeds the {max} byte limit")]
    ScriptTooLong { length: usize, max: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ConnectionLost(#[from] ConnectionLost),
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
    #[error("robot lock poisoned: {0}")]
    LockPoisoned(String),
}

impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Error::LockPoisoned(err.to_string())
    }
}
