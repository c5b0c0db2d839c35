//! # vdr-api
//!
//! REST API server built with Axum framework, serving the recorder's
//! channel list as JSON, HTML or XML.

pub mod channels;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
