//! Logging setup for applications using the client.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the application, optionally through [`init_logging`].

mod logging;

pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
