//! Background Image Loading

use crate::AssetError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;
use tracing::{info, warn};

fn read_encoded(path: &Path) -> Result<String, AssetError> {
    let bytes = std::fs::read(path)?;
    Ok(STANDARD.encode(bytes))
}

/// Load the page background as a base64 payload for inline CSS.
///
/// A missing or unreadable file degrades gracefully: a warning is
/// logged and the dashboard renders without a background.
pub fn load_background(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match read_encoded(path) {
        Ok(encoded) => {
            info!("Loaded background image from {}", path.display());
            Some(encoded)
        }
        Err(err) => {
            warn!(
                "Background image not found at {} ({err}); continuing without a background",
                path.display()
            );
            None
        }
    }
}
