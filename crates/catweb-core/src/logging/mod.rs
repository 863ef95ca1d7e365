//! Logger bootstrap for binaries built on these crates.
//!
//! Library code only talks to the `log` facade; installing a backend is left
//! to whoever owns `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
