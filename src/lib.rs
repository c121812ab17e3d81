//! stringsvc — a JSON-over-HTTP string-processing service.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 STRING SERVICE                │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌──────────┐   │
//!   ─────────────────┼─▶│  http   │──▶│ endpoint │──▶│ service  │   │
//!                    │  │ decode  │   │  invoke  │   │ (domain) │   │
//!                    │  └─────────┘   └────┬─────┘   └──────────┘   │
//!                    │                     │                        │
//!   Client Response  │  ┌─────────┐        │                        │
//!   ◀────────────────┼──│  http   │◀───────┘                        │
//!                    │  │ encode  │                                 │
//!                    │  └─────────┘                                 │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns           │ │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                    │  │  │ config │ │observability│ │lifecycle│ │ │
//!                    │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Domain errors never cross the endpoint boundary as failures: an empty
//! input to `/uppercase` produces a normal 200 response whose body carries
//! the rejection in its `err` field. Only malformed request bodies (decode
//! errors) surface as HTTP error statuses.

// Request path
pub mod endpoint;
pub mod http;
pub mod service;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::{ServiceError, StringService};
