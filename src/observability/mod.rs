//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Bootstrap stages produce:
//!     → logging.rs (structured log events on stderr)
//!
//! Every bootstrap run opens a span carrying its boot ID and environment.
//! ```
//!
//! # Design Decisions
//! - stdout belongs to the application; logs go to stderr
//! - Log level from RUST_LOG first, then config

pub mod logging;

pub use logging::init_logging;
