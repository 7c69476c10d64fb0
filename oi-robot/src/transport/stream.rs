use std::io::{Read, Write};

use super::{MAX_COMMAND_SIZE, Transport};
use crate::error::ConnectionLost;

/// Adapts any blocking byte stream, a TCP socket or an open serial port.
///
/// Every write is flushed before returning, so a command is on its way to the
/// robot once `write_bytes` succeeds.
#[derive(Debug)]
pub struct StreamTransport<S> {
    stream: S,
    max_command_size: usize,
}

impl<S: Read + Write> StreamTransport<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            max_command_size: MAX_COMMAND_SIZE,
        }
    }

    pub fn with_max_command_size(mut self, max_command_size: usize) -> Self {
        self.max_command_size = max_command_size;
        self
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read + Write> Transport for StreamTransport<S> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ConnectionLost> {
        self.stream.write_all(bytes)?;
        self.stream.flush()?;
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ConnectionLost> {
        self.stream.read_exact(buf)?;
        Ok(())
    }

    fn max_command_payload_size(&self) -> usize {
        self.max_command_size
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;

    /// Reads from a fixed buffer and records what is written.
    struct Loop {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
        flushes: usize,
    }

    impl Read for Loop {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for Loop {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn transport(input: &[u8]) -> StreamTransport<Loop> {
        StreamTransport::new(Loop {
            input: Cursor::new(input.to_vec()),
            output: Vec::new(),
            flushes: 0,
        })
    }

    #[test]
    fn writes_are_flushed() {
        let mut transport = transport(&[]);
        transport.write_bytes(&[128, 131]).unwrap();
        transport.write_byte(132).unwrap();

        assert_eq!(transport.get_ref().output, [128, 131, 132]);
        assert_eq!(transport.get_ref().flushes, 2);
    }

    #[test]
    fn typed_reads_decode_big_endian() {
        let mut transport = transport(&[0xFF, 0x38, 0xFF, 0x38, 0xF6, 7, 8, 9]);

        assert_eq!(transport.read_signed_word().unwrap(), -200);
        assert_eq!(transport.read_unsigned_word().unwrap(), 0xFF38);
        assert_eq!(transport.read_signed_byte().unwrap(), -10);
        assert_eq!(transport.read_unsigned_bytes(3).unwrap(), [7, 8, 9]);
    }

    #[test]
    fn end_of_stream_is_a_lost_connection() {
        let mut transport = transport(&[0x01]);
        let err = transport.read_unsigned_word().unwrap_err();
        assert_eq!(err.0.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn payload_limit_is_configurable() {
        assert_eq!(transport(&[]).max_command_payload_size(), MAX_COMMAND_SIZE);
        assert_eq!(
            transport(&[]).with_max_command_size(64).max_command_payload_size(),
            64
        );
    }
}
