use std::collections::VecDeque;
use std::io;

use super::{MAX_COMMAND_SIZE, Transport};
use crate::error::ConnectionLost;

/// In-memory transport that records every write and replays queued responses.
///
/// Reading past the queued bytes, or any call after `disconnect`, fails with
/// `ConnectionLost` the way a dropped link would.
#[derive(Debug, Clone)]
pub struct MockTransport {
    writes: Vec<Vec<u8>>,
    responses: VecDeque<u8>,
    max_command_size: usize,
    connected: bool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            responses: VecDeque::new(),
            max_command_size: MAX_COMMAND_SIZE,
            connected: true,
        }
    }

    pub fn with_max_command_size(mut self, max_command_size: usize) -> Self {
        self.max_command_size = max_command_size;
        self
    }

    /// Queues bytes the robot will "send" back.
    pub fn queue_response(&mut self, bytes: &[u8]) {
        self.responses.extend(bytes);
    }

    pub fn pending_response(&self) -> usize {
        self.responses.len()
    }

    /// Each `write_bytes` call, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Everything written so far as one byte stream.
    pub fn written(&self) -> Vec<u8> {
        self.writes.concat()
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    fn check_connected(&self) -> Result<(), ConnectionLost> {
        if self.connected {
            Ok(())
        } else {
            Err(ConnectionLost(io::Error::new(
                io::ErrorKind::NotConnected,
                "mock transport disconnected",
            )))
        }
    }
}

impl Transport for MockTransport {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ConnectionLost> {
        self.check_connected()?;
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ConnectionLost> {
        self.check_connected()?;

        if self.responses.len() < buf.len() {
            return Err(ConnectionLost(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "wanted {} bytes, {} queued",
                    buf.len(),
                    self.responses.len()
                ),
            )));
        }

        let count = buf.len();
        for (slot, byte) in buf.iter_mut().zip(self.responses.drain(..count)) {
            *slot = byte;
        }
        Ok(())
    }

    fn max_command_payload_size(&self) -> usize {
        self.max_command_size
    }
}
