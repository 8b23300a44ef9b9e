// Reads an image file into a self-describing data URL
//
// The blob is never decoded or inspected beyond the file extension; the
// store treats images as opaque strings end to end.

use crate::error::{PantryError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// Read an image file and encode it as `data:<mime>;base64,<payload>`.
///
/// The read is async and awaited before the recipe is constructed, so a
/// slow read can never interleave with a later submission. A failed read
/// is reported instead of leaving the submission hanging.
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// * `Ok(String)` - The data URL
/// * `Err(PantryError::ImageRead)` - If the file cannot be read
pub async fn load_data_url<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| PantryError::ImageRead {
            path: path.display().to_string(),
            source,
        })?;

    Ok(format!(
        "data:{};base64,{}",
        mime_for(path),
        STANDARD.encode(&bytes)
    ))
}

/// Guess the MIME type from the file extension
fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
