//! Object store seam.

use std::future::Future;

use super::error::StorageError;

/// Canned access control applied to a stored object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectAcl {
    /// Anyone with the URL can read the object.
    #[default]
    PublicRead,
}

impl ObjectAcl {
    /// Canned ACL value as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicRead => "public-read",
        }
    }
}

/// A single PUT-object request.
///
/// Built fresh for every upload and consumed by the store.
#[derive(Clone, PartialEq, Eq)]
pub struct PutObjectRequest {
    /// Target bucket.
    pub bucket: String,
    /// Object key inside the bucket.
    pub key: String,
    /// Object contents.
    pub body: Vec<u8>,
    /// Canned ACL.
    pub acl: ObjectAcl,
    /// Content type header; the store default applies when absent.
    pub content_type: Option<String>,
}

impl std::fmt::Debug for PutObjectRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PutObjectRequest")
            .field("bucket", &self.bucket)
            .field("key", &self.key)
            .field("body_len", &self.body.len())
            .field("acl", &self.acl)
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Object store client.
///
/// Implementations make exactly one attempt per call; retrying is left to
/// the caller.
pub trait ObjectStore: Send + Sync {
    /// Store an object.
    fn put_object(
        &self,
        request: PutObjectRequest,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acl_wire_values() {
        assert_eq!(ObjectAcl::PublicRead.as_str(), "public-read");
        assert_eq!(ObjectAcl::default(), ObjectAcl::PublicRead);
    }

    #[test]
    fn test_debug_omits_body() {
        let request = PutObjectRequest {
            bucket: "mybucket".to_string(),
            key: "uploads/a.png".to_string(),
            body: vec![0xAB; 4096],
            acl: ObjectAcl::PublicRead,
            content_type: Some("image/png".to_string()),
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("body_len: 4096"));
        assert!(!debug.contains("171"));
    }
}
