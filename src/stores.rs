//! Clipboard implementations
//!
//! `SystemClipboard` talks to the OS clipboard through `copypasta-ext`.
//! `MemoryClipboard` keeps the text in memory and can be told to fail,
//! which is what the form and CLI tests use.

use crate::traits::ClipboardSink;
use anyhow::{anyhow, Result};
use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

/// System clipboard backed by `copypasta-ext`
///
/// The X11 fork provider keeps the selection alive after the process exits,
/// which matters for the one-shot `--copy` command.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn put_text(&mut self, text: &str) -> Result<()> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| anyhow!("Clipboard unavailable: {}", e))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| anyhow!("Failed to write clipboard: {}", e))?;

        tracing::debug!(bytes = text.len(), "summary copied to system clipboard");
        Ok(())
    }
}

/// In-memory clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard that rejects every write
    pub fn failing() -> Self {
        MemoryClipboard {
            contents: None,
            fail: true,
        }
    }
}

impl ClipboardSink for MemoryClipboard {
    fn put_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(anyhow!("clipboard write rejected"));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_stores_text() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.put_text("TRIP COST SPLIT").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("TRIP COST SPLIT"));
    }

    #[test]
    fn test_failing_clipboard_keeps_nothing() {
        let mut clipboard = MemoryClipboard::failing();
        assert!(clipboard.put_text("text").is_err());
        assert!(clipboard.contents.is_none());
    }
}
