use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use oi_robot::{MAX_COMMAND_SIZE, RobotConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub link: LinkConfig,
    /// Largest command the link delivers in one piece.
    #[serde(default = "default_max_command_size")]
    pub max_command_size: usize,
    /// Mode requested right after Start.
    #[serde(default)]
    pub start_mode: StartMode,
    #[serde(default)]
    pub robot: RobotConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LinkConfig {
    /// A serial bridge reachable over TCP.
    Tcp { addr: SocketAddr },
    Serial {
        path: PathBuf,
        #[serde(default = "default_baud_rate")]
        baud_rate: u32,
        /// A read that stalls longer than this drops the connection.
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    Passive,
    #[default]
    Safe,
    Full,
}

fn default_max_command_size() -> usize {
    MAX_COMMAND_SIZE
}

fn default_baud_rate() -> u32 {
    57600
}

fn default_timeout_ms() -> u64 {
    60_000
}

impl Config {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link: LinkConfig::Serial {
                path: PathBuf::from("/dev/ttyUSB0"),
                baud_rate: default_baud_rate(),
                timeout_ms: default_timeout_ms(),
            },
            max_command_size: default_max_command_size(),
            start_mode: StartMode::default(),
            robot: RobotConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tcp_link_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [link]
            type = "tcp"
            addr = "192.168.4.1:8888"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.link,
            LinkConfig::Tcp {
                addr: "192.168.4.1:8888".parse().unwrap()
            }
        );
        assert_eq!(config.max_command_size, 26);
        assert_eq!(config.start_mode, StartMode::Safe);
        assert_eq!(config.robot, RobotConfig::default());
    }

    #[test]
    fn serial_link_fills_in_baud_rate() {
        let config: Config = toml::from_str(
            r#"
            start_mode = "full"

            [link]
            type = "serial"
            path = "/dev/ttyACM0"

            [robot]
            settle_delay_ms = 25
            "#,
        )
        .unwrap();

        assert_eq!(
            config.link,
            LinkConfig::Serial {
                path: PathBuf::from("/dev/ttyACM0"),
                baud_rate: 57600,
                timeout_ms: 60_000,
            }
        );
        assert_eq!(config.start_mode, StartMode::Full);
        assert_eq!(config.robot.settle_delay_ms, 25);
        assert_eq!(config.robot.button_poll_ms, 16);
    }

    #[test]
    fn unknown_link_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [link]
            type = "bluetooth"
            "#,
        );
        assert!(result.is_err());
    }
}
