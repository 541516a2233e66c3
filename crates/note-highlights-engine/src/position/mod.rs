//! # Position Resolution
//!
//! Maps absolute char offsets to zero-based (line, column) positions and
//! normalizes position ranges for navigation.
//!
//! ## Modules
//!
//! - **`line_offsets`**: `LineOffsets` table built in one pass; binary search
//!   per lookup, so resolving an offset is O(log lines)
//! - **`range`**: `LineSource` geometry of a target document plus
//!   `normalize_range()`, which clamps both ends and orders them
//! - **`span`**: `Span`, a char range into a document
//! - **`types`**: `Position` and `PositionRange`
//!
//! Every operation here is total. Negative or out-of-range offsets, empty
//! text and reversed ranges all have defined results instead of errors.

pub mod line_offsets;
pub mod range;
pub mod span;
pub mod types;

pub use line_offsets::{LineOffsets, resolve_position};
pub use range::{LineSource, clamp_position, normalize_range};
pub use span::Span;
pub use types::{Position, PositionRange};
