pub mod mock;
pub mod stream;

pub use mock::MockTransport;
pub use stream::StreamTransport;

use oi_core::protocol::codec::{decode_signed_byte, decode_signed_word, decode_unsigned_word};

use crate::error::ConnectionLost;

/// Largest command deliverable within the firmware's 15 ms refresh window at
/// 19200 baud.
pub const MAX_COMMAND_SIZE: usize = 26;

/// A blocking, ordered byte stream to the robot.
///
/// Reads block until every requested byte has arrived. Any failure ends the
/// current exchange with `ConnectionLost`.
pub trait Transport {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ConnectionLost>;

    /// Fills `buf` completely.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ConnectionLost>;

    /// Largest single command this transport delivers in one piece.
    fn max_command_payload_size(&self) -> usize {
        MAX_COMMAND_SIZE
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), ConnectionLost> {
        self.write_bytes(&[byte])
    }

    fn read_unsigned_byte(&mut self) -> Result<u8, ConnectionLost> {
        let mut buf = [0; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_signed_byte(&mut self) -> Result<i8, ConnectionLost> {
        self.read_unsigned_byte().map(decode_signed_byte)
    }

    fn read_unsigned_word(&mut self) -> Result<u16, ConnectionLost> {
        let mut buf = [0; 2];
        self.read_exact(&mut buf)?;
        Ok(decode_unsigned_word(buf[0], buf[1]))
    }

    fn read_signed_word(&mut self) -> Result<i16, ConnectionLost> {
        let mut buf = [0; 2];
        self.read_exact(&mut buf)?;
        Ok(decode_signed_word(buf[0], buf[1]))
    }

    fn read_unsigned_bytes(&mut self, count: usize) -> Result<Vec<u8>, ConnectionLost> {
        let mut buf = vec![0; count];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ConnectionLost> {
        (**self).write_bytes(bytes)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ConnectionLost> {
        (**self).read_exact(buf)
    }

    fn max_command_payload_size(&self) -> usize {
        (**self).max_command_payload_size()
    }
}
