use std::net::TcpStream;
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use oi_robot::{StreamTransport, Transport};
use tracing::info;

use crate::config::{Config, LinkConfig};

/// Byte stream to the robot, whichever kind the configuration picked.
pub type Link = Box<dyn Transport + Send>;

pub fn open(config: &Config) -> color_eyre::Result<Link> {
    match &config.link {
        LinkConfig::Tcp { addr } => {
            let stream = TcpStream::connect(addr)
                .wrap_err_with(|| format!("failed to connect to {addr}"))?;
            stream.set_nodelay(true)?;
            info!(%addr, "connected over tcp");

            Ok(Box::new(
                StreamTransport::new(stream).with_max_command_size(config.max_command_size),
            ))
        }
        LinkConfig::Serial {
            path,
            baud_rate,
            timeout_ms,
        } => {
            let port = serialport::new(path.to_string_lossy(), *baud_rate)
                .timeout(Duration::from_millis(*timeout_ms))
                .open()
                .wrap_err_with(|| format!("failed to open serial port at {}", path.display()))?;
            info!(path = %path.display(), baud_rate, "opened serial port");

            Ok(Box::new(
                StreamTransport::new(port).with_max_command_size(config.max_command_size),
            ))
        }
    }
}
