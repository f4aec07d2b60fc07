//! Utility functions
//!
//! Pure helpers for coercing form input and presenting results.
//! Nothing in here touches the terminal, the clipboard or the filesystem.

pub mod formatting;
pub mod validation;
