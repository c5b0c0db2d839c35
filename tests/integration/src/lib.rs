//! Integration test utilities for the channel list server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
