//! # QR Menu Shared
//!
//! Shared configuration, telemetry, constants and small helpers used by every
//! other crate in the workspace.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
