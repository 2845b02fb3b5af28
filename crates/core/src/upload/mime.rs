//! Image content type classification by file extension.
//!
//! Classification looks at the name only; file contents are never inspected.

use std::path::Path;

/// Content type for an image path, or `None` for unknown extensions.
#[must_use]
pub fn image_content_type(path: impl AsRef<Path>) -> Option<&'static str> {
    let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
    let content_type = match ext.as_str() {
        "bmp" => "image/bmp",
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        _ => return None,
    };
    Some(content_type)
}
