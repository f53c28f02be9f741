//! Knobs for the conversion.

/// The column layout used for the emitted graph: every node sits at the same
/// x coordinate, and the nodes are stacked downwards \p row_spacing apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub column_x: i64,
    pub row_spacing: i64,
}

impl LayoutOptions {
    pub fn new(column_x: i64, row_spacing: i64) -> Self {
        Self {
            column_x,
            row_spacing,
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new(250, 120)
    }
}
