//! File sources for image bytes.

use std::future::Future;
use std::io;
use std::path::Path;

/// Reads whole files into memory.
pub trait FileSource: Send + Sync {
    /// Read the entire file at `path`.
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send;
}

/// Local filesystem source using non-blocking `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSource;

impl FileSource for LocalFileSource {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}
