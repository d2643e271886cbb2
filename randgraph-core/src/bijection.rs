//! Triangular enumeration of undirected edges.
//!
//! Every loop-free undirected edge `{i, j}` with `i > j` has the unique index
//! `i * (i - 1) / 2 + j`. Row `i` therefore holds the `i` edges
//! `(i, 0), (i, 1), ..., (i, i - 1)` and the edges of a graph on `n` nodes
//! occupy exactly the indices `[0, n * (n - 1) / 2)`.
//!
//! The inverse mapping first estimates the row with a floating-point square
//! root and then corrects the estimate with exact integer arithmetic, so it
//! stays exact once `f64` can no longer represent the index.

use crate::pair::{Edge, UnorderedPair};

/// Number of indices that precede `row`, i.e. `row * (row - 1) / 2`.
fn row_start(row: u128) -> u128 {
    row.saturating_mul(row.saturating_sub(1)) / 2
}

/// Closed-form row estimate; may be off by a few rows for large indices.
fn estimate_row(index: u128) -> u128 {
    let k = index as f64;
    (((8.0 * (k + 1.0) + 1.0).sqrt() - 1.0) / 2.0).ceil() as u128
}

/// Returns the row `i` whose half-open index range contains `index`.
fn row_of(index: u128) -> u128 {
    let mut row = estimate_row(index).max(1);
    while row_start(row) > index {
        row -= 1;
    }
    while row_start(row + 1) <= index {
        row += 1;
    }
    row
}

/// Maps an edge index to its edge `(i, j)` with `i > j`.
///
/// Returns `None` when the endpoints do not fit in `usize`, which cannot
/// happen for indices below `max_edges(n)` of any `usize` node count `n`.
///
/// # Examples
/// ```
/// use randgraph_core::{UnorderedPair, index_to_edge};
///
/// assert_eq!(index_to_edge(0), Some(UnorderedPair::new(1, 0)));
/// assert_eq!(index_to_edge(1), Some(UnorderedPair::new(2, 0)));
/// assert_eq!(index_to_edge(2), Some(UnorderedPair::new(2, 1)));
/// assert_eq!(index_to_edge(3), Some(UnorderedPair::new(3, 0)));
/// ```
#[must_use]
pub fn index_to_edge(index: u128) -> Option<Edge> {
    let row = row_of(index);
    let column = index - row_start(row);
    let first = usize::try_from(row).ok()?;
    let second = usize::try_from(column).ok()?;
    Some(UnorderedPair::new(first, second))
}

/// Maps an edge to its index in the triangular enumeration.
///
/// Returns `None` for loops, which have no index.
///
/// # Examples
/// ```
/// use randgraph_core::{UnorderedPair, edge_to_index};
///
/// assert_eq!(edge_to_index(&UnorderedPair::new(3, 1)), Some(4));
/// assert_eq!(edge_to_index(&UnorderedPair::new(1, 3)), Some(4));
/// assert_eq!(edge_to_index(&UnorderedPair::new(2, 2)), None);
/// ```
#[must_use]
pub fn edge_to_index(edge: &Edge) -> Option<u128> {
    let (a, b) = (*edge.first(), *edge.second());
    if a == b {
        return None;
    }
    let (high, low) = if a > b { (a, b) } else { (b, a) };
    Some(row_start(high as u128) + low as u128)
}
