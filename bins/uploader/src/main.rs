//! Image uploader.
//!
//! Usage:
//!   imgup <IMAGE_PATH>   - Upload one image and print its public URL
//!
//! Configuration comes from `config/default`, `config/{RUN_MODE}` and
//! `IMGUP_*` environment variables (a `.env` file is loaded first).

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use imgup_core::{ImageUploadService, S3Store};
use imgup_shared::{AppConfig, LogConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: imgup <IMAGE_PATH>";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let Some(image_path) = std::env::args_os().nth(1) else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log);

    let store = S3Store::from_config(&config.s3).context("failed to create S3 client")?;
    info!(
        bucket = %config.s3.bucket,
        region = config.s3.region_name(),
        endpoint = config.s3.endpoint().unwrap_or("<aws>"),
        "Object store configured"
    );

    let service = ImageUploadService::new(Arc::new(store), config.s3);
    let url = service
        .upload_image(&image_path)
        .await
        .with_context(|| format!("failed to upload {}", image_path.to_string_lossy()))?;

    println!("{url}");
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    // Logs go to stderr so stdout carries only the URL.
    let registry = tracing_subscriber::registry().with(filter);
    if log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
