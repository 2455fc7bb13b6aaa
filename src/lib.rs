//! LED Strip Client Library
//!
//! This library exports the core modules used by the `ledstrip` binary
//! and the test suite.

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod services;

// Re-export commonly used types for convenience
pub use config::AppSettings;
pub use error::AppError;
