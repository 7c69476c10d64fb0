use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use oi_cli::{Config, Link, StartMode};
use oi_core::protocol::RADIUS_STRAIGHT;
use oi_core::{Demo, Script, SensorId};
use oi_robot::{Button, Robot};
use tracing::info;

#[derive(Parser)]
#[command(name = "oi-cli")]
#[command(about = "Drive a Create robot over its Open Interface")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "oi-cli.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read sensor packets and print every cached value
    Sensors {
        /// Packet or group ids, group 6 when omitted
        ids: Vec<u8>,
    },
    /// Drive for a while, then stop
    Drive {
        #[arg(long, default_value_t = 200, allow_hyphen_values = true)]
        velocity: i16,
        #[arg(long, default_value_t = RADIUS_STRAIGHT, allow_hyphen_values = true)]
        radius: i16,
        #[arg(long, default_value_t = 1000)]
        millis: u64,
    },
    /// Upload and run a script tracing a square
    Square {
        #[arg(long, default_value_t = 500)]
        side_mm: i32,
        #[arg(long, default_value_t = 200)]
        velocity: i32,
    },
    /// Print the script stored on the robot
    ShowScript,
    /// Block until a button is pressed and released
    WaitButton {
        /// Wait for Advance instead of Play
        #[arg(long)]
        advance: bool,
        #[arg(long)]
        beep: bool,
    },
    /// Start a built-in demo (255 stops it)
    Demo { id: u8 },
    /// Play a short tune
    Song,
}

const TUNE_SLOT: u8 = 1;
const TUNE: [u8; 8] = [60, 16, 64, 16, 67, 16, 72, 32];

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "oi_cli=info,oi_robot=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        info!(path = ?cli.config, "Loading configuration");
        Config::load(&cli.config)?
    } else {
        info!("No configuration file found, using defaults");
        Config::default()
    };

    let link = oi_cli::open(&config)?;
    let mut robot = Robot::with_config(link, config.robot);

    robot.start()?;
    match config.start_mode {
        StartMode::Passive => {}
        StartMode::Safe => robot.safe()?,
        StartMode::Full => robot.full()?,
    }

    run(&mut robot, cli.command)
}

fn run(robot: &mut Robot<Link>, command: Command) -> color_eyre::Result<()> {
    match command {
        Command::Sensors { ids } => {
            let ids = if ids.is_empty() {
                vec![SensorId::Group6]
            } else {
                ids.into_iter()
                    .map(SensorId::try_from)
                    .collect::<Result<Vec<_>, _>>()?
            };

            if let [id] = ids.as_slice() {
                robot.read_sensors(*id)?;
            } else {
                robot.read_sensor_list(&ids)?;
            }

            for (field, value) in robot.telemetry().iter() {
                println!("{:<30} {value}", field.name());
            }
        }
        Command::Drive {
            velocity,
            radius,
            millis,
        } => {
            info!(velocity, radius, millis, "driving");
            robot.drive(velocity, radius)?;
            thread::sleep(Duration::from_millis(millis));
            robot.drive_direct(0, 0)?;
        }
        Command::Square { side_mm, velocity } => {
            let mut script = Script::new();
            for _ in 0..4 {
                script.drive_straight(velocity)?;
                script.wait_distance(side_mm)?;
                script.turn_in_place(velocity, false)?;
                script.wait_angle(90)?;
            }
            script.stop()?;

            info!(len = script.len(), "uploading square script");
            robot.play_script(script.bytes(), false)?;
        }
        Command::ShowScript => {
            let script = robot.show_script()?;
            println!("{script:?}");
        }
        Command::WaitButton { advance, beep } => {
            let button = if advance { Button::Advance } else { Button::Play };
            robot.wait_button_pressed(button, beep)?;
        }
        Command::Demo { id } => robot.demo(Demo::try_from(id)?)?,
        Command::Song => {
            robot.song_all(TUNE_SLOT, &TUNE)?;
            robot.play_song(TUNE_SLOT)?;
        }
    }

    Ok(())
}
