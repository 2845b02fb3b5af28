//! Object storage for uploaded images.
//!
//! This module provides the seam between the upload service and the
//! object store:
//! - `ObjectStore` trait: one PUT-object call per request
//! - `S3Store`: AWS S3 and S3-compatible stores (MinIO, R2, Spaces) via `aws-sdk-s3`
//! - Storage key and public URL derivation from static configuration
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       ObjectStore                                │
//! │              put_object(PutObjectRequest)                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ S3Store (aws-sdk-s3)       │ test fakes                         │
//! └─────────────────────────────────────────────────────────────────┘
//!            │
//!            ▼
//!   public_url(config, key)   domain > endpoint > region > default
//! ```

mod error;
mod s3;
mod store;
mod url;

pub use error::StorageError;
pub use s3::S3Store;
pub use store::{ObjectAcl, ObjectStore, PutObjectRequest};
pub use url::{UPLOAD_PREFIX, public_url, storage_key};
