//! fuelsplit library
//!
//! Core of the trip fuel split calculator: input sanitization, the cost
//! calculation, presentation formatting, and the interactive form state.
//! Modules are exposed for integration testing.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod splitter;
pub mod stores;
pub mod traits;
pub mod ui;
pub mod utils;

// Re-export commonly used types for testing
pub use app::{App, AppMode, FormField};
pub use config::{Config, FormDefaults, FuelPresets};
pub use splitter::{calculate, sanitize, FuelType, RawTripInput, RoundingUnit, TripInput, TripResult};
pub use stores::{MemoryClipboard, SystemClipboard};
pub use traits::ClipboardSink;
pub use utils::formatting::{compose_summary, format_currency};
