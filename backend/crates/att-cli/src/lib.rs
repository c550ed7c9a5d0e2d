//! att-cli library
//!
//! Exports the HTTP client for use in tests and other crates. The clap
//! command tree lives with the binary.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
