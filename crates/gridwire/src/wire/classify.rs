use super::grid::{Cell, GridIndex};
use super::segment::{Rotation, Segment};

/// Direction of travel between two cells, in raw index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Travel {
    Increasing,
    Decreasing,
}

impl Travel {
    /// Travel direction of the step `from -> to`. The cells must differ.
    pub fn between(from: Cell, to: Cell) -> Self {
        if to > from {
            Self::Increasing
        } else {
            Self::Decreasing
        }
    }
}

/// Classify the segment at `current` given its neighbors along the path.
///
/// `prior` is the cell the path came from (the source, at path start) and
/// `next` the cell it continues to. If all three run along one row or one
/// column the segment is straight, oriented along the travel axis; otherwise
/// it is a corner oriented by [`corner_rotation`].
pub fn classify(index: GridIndex, prior: Cell, current: Cell, next: Cell) -> Segment {
    let row_run = index.same_row(prior, current) && index.same_row(current, next);
    let col_run = index.same_col(prior, current) && index.same_col(current, next);

    if row_run || col_run {
        // Row-wise runs lie along the horizontal axis.
        let rotation = if row_run { Rotation::R90 } else { Rotation::R0 };
        return Segment::straight(rotation);
    }

    let incoming = Travel::between(prior, current);
    let outgoing = Travel::between(current, next);
    Segment::corner(corner_rotation(incoming, outgoing))
}

/// The straight orientation for a lone step `from -> to`, used when a cell is
/// placed before its successor is known.
pub fn straight_rotation(index: GridIndex, from: Cell, to: Cell) -> Rotation {
    if index.same_row(from, to) {
        Rotation::R90
    } else {
        Rotation::R0
    }
}

/// Fixed corner-orientation table keyed by (incoming, outgoing) travel.
///
/// Reversing a traversal swaps Increasing/Increasing with
/// Decreasing/Decreasing and leaves the mixed pairs in place, so the two
/// ends of a reversible corner map to opposite rotations.
pub fn corner_rotation(incoming: Travel, outgoing: Travel) -> Rotation {
    match (incoming, outgoing) {
        (Travel::Increasing, Travel::Increasing) => Rotation::R90,
        (Travel::Increasing, Travel::Decreasing) => Rotation::R180,
        (Travel::Decreasing, Travel::Increasing) => Rotation::R0,
        (Travel::Decreasing, Travel::Decreasing) => Rotation::R270,
    }
}
