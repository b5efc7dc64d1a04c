use super::grid::{Cell, GridIndex, GridStore};

/// Verdict on extending the path from its tail to a candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveLegality {
    /// Axis-aligned single step; append directly.
    Legal,
    /// Diagonal step made legal by routing through the given empty bridge
    /// cell, which the engine inserts into the path first.
    Bridged(Cell),
    /// More than one cell of travel on an axis, or a diagonal with both
    /// bridge cells occupied.
    Illegal,
}

/// Decide whether the path may extend from `tail` to `candidate`.
///
/// A diagonal step has two orthogonal bridge candidates: the cell on the
/// tail's row in the candidate's column, and the cell in the tail's column
/// on the candidate's row. The column-sharing bridge wins when both are
/// empty. Pure decision; inserting the bridge is the caller's job.
pub fn check_move<G: GridStore>(
    grid: &G,
    index: GridIndex,
    tail: Cell,
    candidate: Cell,
) -> MoveLegality {
    let row_delta = index.row(candidate).abs_diff(index.row(tail));
    let col_delta = index.col(candidate).abs_diff(index.col(tail));

    if row_delta > 1 || col_delta > 1 {
        return MoveLegality::Illegal;
    }

    if row_delta == 1 && col_delta == 1 {
        let col_bridge = if index.col(candidate) > index.col(tail) {
            tail + 1
        } else {
            tail - 1
        };
        let row_bridge = if index.row(candidate) > index.row(tail) {
            tail + index.width()
        } else {
            tail - index.width()
        };

        if grid.is_empty(col_bridge) {
            return MoveLegality::Bridged(col_bridge);
        }
        if grid.is_empty(row_bridge) {
            return MoveLegality::Bridged(row_bridge);
        }
        return MoveLegality::Illegal;
    }

    MoveLegality::Legal
}
