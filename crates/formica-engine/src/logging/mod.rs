//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only uses the `log` facade;
//! `init_logging` wires `env_logger` for hosts that want the default backend.

mod init;

pub use init::{init_logging, LoggingConfig};
