//! Clipboard collaborator backed by arboard.

use arboard::Clipboard;
use tracing::{debug, warn};

use crate::host::ClipboardAccess;

/// System clipboard access. Any failure (no display server, non-text
/// contents) degrades to `None`, which makes paste a no-op upstream.
pub struct SystemClipboard;

impl ClipboardAccess for SystemClipboard {
    fn contents(&mut self) -> Option<String> {
        match Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => {
                debug!("read {} bytes from clipboard", text.len());
                Some(text)
            }
            Err(err) => {
                warn!("clipboard unavailable: {}", err);
                None
            }
        }
    }
}
