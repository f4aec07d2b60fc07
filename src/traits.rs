//! Common trait definitions
//!
//! Abstracts the one side effect the calculator has, writing the summary
//! to the clipboard, so the form logic can be tested without a display
//! server.

use anyhow::Result;

/// Destination for copied summary text
///
/// Production code uses `SystemClipboard`, tests use `MemoryClipboard`.
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn put_text(&mut self, text: &str) -> Result<()>;
}
