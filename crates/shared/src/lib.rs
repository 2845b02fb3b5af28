//! Shared configuration for imgup.
//!
//! This crate owns the process-wide settings every other crate reads:
//! - Object store credentials, bucket and public URL settings
//! - Logging settings for the binary

pub mod config;

pub use config::{AppConfig, LogConfig, S3Config};
