pub type ParseResult<T> = core::result::Result<T, ProtocolError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unknown sensor id {0}")]
    UnknownSensorId(u8),
    #[error("unknown opcode {0}")]
    UnknownOpcode(u8),
    #[error("unknown OI mode {0}")]
    UnknownMode(u8),
    #[error("unknown demo {0}")]
    UnknownDemo(u8),
    #[error("unknown charging state {0}")]
    UnknownChargingState(u8),
    #[error("insufficient data: needed {needed} bytes, {available} available")]
    InsufficientData { needed: usize, available: usize },
    #[error("script exceeds its capacity of {capacity} bytes")]
    ScriptOverflow { capacity: usize },
}
