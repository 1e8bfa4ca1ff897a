//! Logger setup.
//!
//! Everything in the workspace logs through the `log` facade; the binary
//! installs `env_logger` once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
