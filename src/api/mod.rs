//! Survey API Server module
//!
//! Provides the HTTP REST surface over the export pipeline.
//! Run with `survey-server`.

pub mod handlers;
pub mod server;

pub use server::{router, run_api_server, ApiConfig, AppState};
