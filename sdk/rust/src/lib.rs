//! Typed client for the string service HTTP API.

pub mod client;

pub use client::{CountResult, StringClient, UppercaseResult};
