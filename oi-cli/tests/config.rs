use std::io::Write;
use std::path::PathBuf;

use oi_cli::{Config, LinkConfig, StartMode};
use tempfile::NamedTempFile;

#[test]
fn loads_config_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        max_command_size = 64
        start_mode = "passive"

        [link]
        type = "serial"
        path = "/dev/ttyUSB1"
        baud_rate = 19200

        [robot]
        liveness_interval_ms = 250
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.max_command_size, 64);
    assert_eq!(config.start_mode, StartMode::Passive);
    assert_eq!(
        config.link,
        LinkConfig::Serial {
            path: PathBuf::from("/dev/ttyUSB1"),
            baud_rate: 19200,
            timeout_ms: 60_000,
        }
    );
    assert_eq!(config.robot.liveness_interval_ms, 250);
    assert_eq!(config.robot.settle_delay_ms, 20);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn missing_link_section_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "start_mode = \"full\"").unwrap();

    assert!(Config::load(file.path()).is_err());
}

#[test]
fn shipped_sample_parses() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("oi-cli.toml");
    let config = Config::load(&path).unwrap();

    assert_eq!(config.start_mode, StartMode::Safe);
    assert!(matches!(config.link, LinkConfig::Serial { baud_rate: 57600, .. }));
}

#[test]
fn defaults_describe_a_serial_cable() {
    let config = Config::default();
    assert!(matches!(config.link, LinkConfig::Serial { .. }));
    assert_eq!(config.max_command_size, oi_robot::MAX_COMMAND_SIZE);
}
