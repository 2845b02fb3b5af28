//! Image upload service.
//!
//! Reads one local image, classifies its content type from the file name,
//! stores it publicly under `uploads/<file name>` and returns its public URL.

mod error;
pub mod mime;
mod service;
mod source;


pub use error::UploadError;
pub use service::ImageUploadService;
pub use source::{FileSource, LocalFileSource};
