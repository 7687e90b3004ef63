//! Diagnostic logging setup.
//!
//! All diagnostics in the crate go through `tracing` macros; this module
//! wires them to a formatted stderr subscriber.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
