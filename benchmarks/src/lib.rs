//! Shared helpers for courier benchmark suites.

use courier_kernel::graph::{Graph, GraphBuilder, GraphError, NodeId};

/// Node id of the grid cell at `(row, col)`.
#[must_use]
pub fn grid_id(row: usize, col: usize) -> NodeId {
    NodeId::new(format!("r{row}c{col}"))
}

/// Build a `size × size` 4-connected grid.
///
/// Edge costs lie in `[1.0, 2.0]` and vary deterministically by cell, so
/// BFS hop order and weighted order disagree. The stored heuristic is the
/// straight-line distance to the bottom-right corner, which never exceeds
/// the remaining cost because every edge spans distance 1.
///
/// # Errors
///
/// Propagates any [`GraphError`] from the builder.
#[allow(clippy::cast_precision_loss)]
pub fn grid_graph(size: usize) -> Result<Graph, GraphError> {
    let corner = size.saturating_sub(1) as f64;
    let mut builder = GraphBuilder::new();
    for row in 0..size {
        for col in 0..size {
            let (x, y) = (col as f64, row as f64);
            let h = (corner - x).hypot(corner - y);
            builder.add_node(grid_id(row, col), x, y, h)?;
        }
    }
    for row in 0..size {
        for col in 0..size {
            let cost = 1.0 + ((row * 31 + col * 17) % 5) as f64 * 0.25;
            if col + 1 < size {
                builder.add_edge(grid_id(row, col), grid_id(row, col + 1), cost)?;
            }
            if row + 1 < size {
                builder.add_edge(grid_id(row, col), grid_id(row + 1, col), cost)?;
            }
        }
    }
    Ok(builder.build())
}
