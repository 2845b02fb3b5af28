//! Core upload logic for imgup.
//!
//! This crate has no CLI or configuration-loading concerns; it receives an
//! `S3Config` and an object store handle from the caller.
//!
//! # Modules
//!
//! - `storage` - Object store seam, S3 backend, key and public URL derivation
//! - `upload` - Image upload service

pub mod storage;
pub mod upload;

pub use storage::{ObjectStore, S3Store, StorageError};
pub use upload::{ImageUploadService, UploadError};
