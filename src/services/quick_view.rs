//! Quick-view panel placement in the catalog grid.
//!
//! The panel opens as a full-width row directly below the row holding the
//! selected card, with an arrow pointing up at that card.

use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuickViewError {
    #[error("grid must have at least one column")]
    NoColumns,
    #[error("index {index} is outside a grid of {total} items")]
    OutOfRange { index: usize, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub columns: usize,
    pub row: usize,
    pub column: usize,
    /// Index of the card the panel is rendered after.
    pub insert_after: usize,
    /// Horizontal arrow position as a percentage of the grid width.
    pub arrow_offset_pct: f64,
}

/// Column count for the responsive grid at a given viewport width.
#[must_use]
pub fn columns_for_width(viewport_px: u32) -> usize {
    match viewport_px {
        0..640 => 1,
        640..1024 => 2,
        1024..1280 => 3,
        _ => 4,
    }
}

pub fn quick_view_placement(index: usize, total: usize, columns: usize) -> Result<Placement, QuickViewError> {
    if columns == 0 {
        return Err(QuickViewError::NoColumns);
    }
    if index >= total {
        return Err(QuickViewError::OutOfRange { index, total });
    }

    let row = index / columns;
    let column = index % columns;
    let insert_after = ((row + 1) * columns).min(total) - 1;
    #[allow(clippy::cast_precision_loss)]
    let arrow_offset_pct = (column as f64 + 0.5) / columns as f64 * 100.0;

    Ok(Placement { columns, row, column, insert_after, arrow_offset_pct })
}

#[cfg(test)]
#[path = "quick_view_test.rs"]
mod tests;
