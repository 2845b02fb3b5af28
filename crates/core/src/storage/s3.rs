//! S3 object store backed by `aws-sdk-s3`.

use aws_sdk_s3::Client;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use imgup_shared::S3Config;
use tracing::debug;

use super::error::StorageError;
use super::store::{ObjectAcl, ObjectStore, PutObjectRequest};
use super::url::endpoint_base;

/// Object store for AWS S3 and S3-compatible services.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Create a store from configuration.
    ///
    /// SDK-level retries are disabled: every `put_object` call results in
    /// exactly one request.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials or the bucket name are missing.
    pub fn from_config(config: &S3Config) -> Result<Self, StorageError> {
        if config.bucket.trim().is_empty() {
            return Err(StorageError::configuration("bucket name is empty"));
        }
        if config.access_key_id.trim().is_empty() || config.secret_access_key.trim().is_empty() {
            return Err(StorageError::configuration("access key credentials are empty"));
        }

        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "imgup-static",
        );

        let mut builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region_name().to_string()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint) = config.endpoint() {
            builder = builder
                .endpoint_url(endpoint_base(endpoint))
                .force_path_style(true);
        }

        Ok(Self::from_client(Client::from_conf(builder.build())))
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl ObjectStore for S3Store {
    async fn put_object(&self, request: PutObjectRequest) -> Result<(), StorageError> {
        debug!(
            bucket = %request.bucket,
            key = %request.key,
            size = request.body.len(),
            acl = request.acl.as_str(),
            "Sending PutObject"
        );

        self.client
            .put_object()
            .bucket(request.bucket)
            .key(request.key)
            .body(ByteStream::from(request.body))
            .acl(canned_acl(request.acl))
            .set_content_type(request.content_type)
            .send()
            .await?;

        Ok(())
    }
}

fn canned_acl(acl: ObjectAcl) -> ObjectCannedAcl {
    match acl {
        ObjectAcl::PublicRead => ObjectCannedAcl::PublicRead,
    }
}
