//! Application configuration management.

use std::fmt;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Object store configuration.
    pub s3: S3Config,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// S3-compatible object store configuration.
///
/// `endpoint` and `domain` are optional. Blank values are treated the same
/// as absent ones, so an empty environment variable does not switch the
/// public URL format.
#[derive(Clone, Deserialize)]
pub struct S3Config {
    /// Access key ID used to sign requests.
    pub access_key_id: String,
    /// Secret access key used to sign requests.
    pub secret_access_key: String,
    /// Region of the bucket.
    #[serde(default = "default_region")]
    pub region: String,
    /// Custom S3-compatible endpoint, e.g. `s3.example.com`.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bucket that receives uploads.
    pub bucket: String,
    /// Custom domain serving the bucket, e.g. `images.example.com`.
    #[serde(default)]
    pub domain: Option<String>,
}

/// AWS default region. Public URLs for it use the global S3 host.
pub const DEFAULT_REGION: &str = "us-east-1";

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl S3Config {
    /// Create a config for the given bucket with the default region.
    #[must_use]
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: default_region(),
            endpoint: None,
            bucket: bucket.into(),
            domain: None,
        }
    }

    /// Set the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set a custom endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set a custom public domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Custom endpoint, if one is configured and not blank.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        non_blank(self.endpoint.as_deref())
    }

    /// Custom public domain, if one is configured and not blank.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        non_blank(self.domain.as_deref())
    }

    /// Region to sign and address requests with. Blank means the default.
    #[must_use]
    pub fn region_name(&self) -> &str {
        let region = self.region.trim();
        if region.is_empty() {
            DEFAULT_REGION
        } else {
            region
        }
    }

    /// Whether the region is unset or the AWS default region.
    #[must_use]
    pub fn is_default_region(&self) -> bool {
        self.region_name() == DEFAULT_REGION
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl fmt::Debug for S3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("bucket", &self.bucket)
            .field("domain", &self.domain)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "imgup=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Environment variables use the `IMGUP` prefix and `__` as the nesting
    /// separator, e.g. `IMGUP_S3__BUCKET`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("IMGUP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const S3_VARS: [&str; 6] = [
        "IMGUP_S3__ACCESS_KEY_ID",
        "IMGUP_S3__SECRET_ACCESS_KEY",
        "IMGUP_S3__REGION",
        "IMGUP_S3__ENDPOINT",
        "IMGUP_S3__BUCKET",
        "IMGUP_S3__DOMAIN",
    ];

    fn with_s3_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
        let mut all: Vec<(&str, Option<&str>)> = S3_VARS.iter().map(|k| (*k, None)).collect();
        all.push(("IMGUP_LOG__FILTER", None));
        all.push(("IMGUP_LOG__JSON", None));
        all.push(("RUN_MODE", Some("test")));
        for &(key, value) in vars {
            if let Some(slot) = all.iter_mut().find(|slot| slot.0 == key) {
                slot.1 = Some(value);
            }
        }
        temp_env::with_vars(all, f)
    }

    #[test]
    fn test_load_from_environment() {
        let config = with_s3_env(
            &[
                ("IMGUP_S3__ACCESS_KEY_ID", "AKIDEXAMPLE"),
                ("IMGUP_S3__SECRET_ACCESS_KEY", "secret"),
                ("IMGUP_S3__REGION", "eu-west-1"),
                ("IMGUP_S3__BUCKET", "mybucket"),
                ("IMGUP_S3__DOMAIN", "img.example.com"),
            ],
            AppConfig::load,
        )
        .expect("config should load");

        assert_eq!(config.s3.access_key_id, "AKIDEXAMPLE");
        assert_eq!(config.s3.region, "eu-west-1");
        assert_eq!(config.s3.bucket, "mybucket");
        assert_eq!(config.s3.endpoint(), None);
        assert_eq!(config.s3.domain(), Some("img.example.com"));
        assert_eq!(config.log.filter, "imgup=info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_load_defaults_region() {
        let config = with_s3_env(
            &[
                ("IMGUP_S3__ACCESS_KEY_ID", "AKIDEXAMPLE"),
                ("IMGUP_S3__SECRET_ACCESS_KEY", "secret"),
                ("IMGUP_S3__BUCKET", "mybucket"),
            ],
            AppConfig::load,
        )
        .expect("config should load");

        assert_eq!(config.s3.region, DEFAULT_REGION);
        assert!(config.s3.is_default_region());
    }

    #[test]
    fn test_load_log_settings() {
        let config = with_s3_env(
            &[
                ("IMGUP_S3__ACCESS_KEY_ID", "AKIDEXAMPLE"),
                ("IMGUP_S3__SECRET_ACCESS_KEY", "secret"),
                ("IMGUP_S3__BUCKET", "mybucket"),
                ("IMGUP_LOG__FILTER", "imgup=debug"),
                ("IMGUP_LOG__JSON", "true"),
            ],
            AppConfig::load,
        )
        .expect("config should load");

        assert_eq!(config.log.filter, "imgup=debug");
        assert!(config.log.json);
    }

    #[test]
    fn test_load_requires_bucket() {
        let result = with_s3_env(
            &[
                ("IMGUP_S3__ACCESS_KEY_ID", "AKIDEXAMPLE"),
                ("IMGUP_S3__SECRET_ACCESS_KEY", "secret"),
            ],
            AppConfig::load,
        );
        assert!(result.is_err());
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    #[case(Some("s3.other.com"), Some("s3.other.com"))]
    fn test_blank_endpoint_is_unset(#[case] endpoint: Option<&str>, #[case] expected: Option<&str>) {
        let mut config = S3Config::new("key", "secret", "bucket");
        config.endpoint = endpoint.map(String::from);
        assert_eq!(config.endpoint(), expected);
    }

    #[rstest]
    #[case("us-east-1", true)]
    #[case("", true)]
    #[case("eu-west-1", false)]
    #[case("ap-southeast-2", false)]
    fn test_is_default_region(#[case] region: &str, #[case] expected: bool) {
        let config = S3Config::new("key", "secret", "bucket").with_region(region);
        assert_eq!(config.is_default_region(), expected);
    }

    #[rstest]
    #[case("", DEFAULT_REGION)]
    #[case("  ", DEFAULT_REGION)]
    #[case(" eu-west-1 ", "eu-west-1")]
    fn test_region_name(#[case] region: &str, #[case] expected: &str) {
        let config = S3Config::new("key", "secret", "bucket").with_region(region);
        assert_eq!(config.region_name(), expected);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = S3Config::new("AKIDEXAMPLE", "very-secret-value", "bucket");
        let debug = format!("{config:?}");
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("very-secret-value"));
        assert!(debug.contains("<redacted>"));
    }
}
