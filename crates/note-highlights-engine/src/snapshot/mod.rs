//! # Snapshot Testing Support
//!
//! Utilities for testing extraction via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`render`**: Renders an extraction pass as a stable, line-per-entry
//!   listing for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for extractor correctness (offsets in
//!   bounds, document order, positions agreeing with offsets, trimmed text
//!   matching the spanned source)

pub mod invariants;
pub mod render;

pub use invariants::check as invariants;
pub use render::render;
