pub mod highlights;
pub mod io;
pub mod panel;
pub mod position;
pub mod snapshot;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use highlights::{HighlightEntry, collect_highlights};
pub use panel::PanelState;
pub use position::{
    LineOffsets, LineSource, Position, PositionRange, normalize_range, resolve_position,
};
