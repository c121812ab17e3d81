//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; the request ID flows through every
//!   per-request log line
//! - No metrics exposition: the HTTP surface is exactly the two service
//!   routes, so observability stays on the logging side

pub mod logging;

pub use logging::init_logging;
