//! A placeholder layout: one vertical column of nodes.

use super::{FlowGraph, Position};
use crate::core::config::LayoutOptions;

/// Places the nodes top to bottom, in their current order. Nodes never
/// overlap vertically, and all of them share the same x coordinate.
pub fn assign_positions(graph: &mut FlowGraph, options: &LayoutOptions) {
    for (i, node) in graph.nodes.iter_mut().enumerate() {
        node.position =
            Position::new(options.column_x, i as i64 * options.row_spacing);
    }
    log::debug!("Placed {} nodes in a single column", graph.nodes.len());
}
