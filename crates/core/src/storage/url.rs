//! Storage key and public URL derivation.

use imgup_shared::S3Config;

/// Key prefix for every uploaded object.
pub const UPLOAD_PREFIX: &str = "uploads";

/// Global S3 host used for the default region.
const GLOBAL_S3_HOST: &str = "s3.amazonaws.com";

/// Storage key for a file name: `uploads/<file_name>`.
#[must_use]
pub fn storage_key(file_name: &str) -> String {
    format!("{UPLOAD_PREFIX}/{file_name}")
}

/// Public URL of a stored object.
///
/// Rules in priority order:
/// 1. custom domain: `https://<domain>/<key>`
/// 2. custom endpoint: `https://<endpoint>/<bucket>/<key>`
/// 3. non-default region: `https://s3-<region>.amazonaws.com/<bucket>/<key>`
/// 4. otherwise: `https://s3.amazonaws.com/<bucket>/<key>`
///
/// An endpoint that already carries a scheme is used as the base verbatim.
#[must_use]
pub fn public_url(config: &S3Config, key: &str) -> String {
    if let Some(domain) = config.domain() {
        return format!("https://{}/{key}", domain.trim_end_matches('/'));
    }

    let base = match config.endpoint() {
        Some(endpoint) => endpoint_base(endpoint),
        None if !config.is_default_region() => {
            format!("https://s3-{}.amazonaws.com", config.region_name())
        }
        None => format!("https://{GLOBAL_S3_HOST}"),
    };

    format!("{base}/{}/{key}", config.bucket)
}

/// Base URL for a configured endpoint, shared by the S3 client and public
/// URLs. Bare hosts get `https://`; trailing `/` is dropped.
pub(crate) fn endpoint_base(endpoint: &str) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("https://{endpoint}")
    }
}
