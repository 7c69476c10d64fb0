pub mod config;
pub mod link;

pub use config::{Config, LinkConfig, StartMode};
pub use link::{Link, open};
