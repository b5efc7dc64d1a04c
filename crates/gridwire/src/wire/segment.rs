use std::collections::HashMap;

use super::grid::Cell;

/// Shape of the wire piece sitting on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Straight,
    Corner,
}

/// One of the four fixed segment orientations.
///
/// `R0` is a straight piece along the column axis, or a corner piece opening
/// east and south; the other rotations turn that base glyph clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn degrees(self) -> f32 {
        match self {
            Self::R0 => 0.0,
            Self::R90 => 90.0,
            Self::R180 => 180.0,
            Self::R270 => 270.0,
        }
    }

    /// The rotation half a turn away.
    pub fn opposite(self) -> Rotation {
        match self {
            Self::R0 => Self::R180,
            Self::R90 => Self::R270,
            Self::R180 => Self::R0,
            Self::R270 => Self::R90,
        }
    }
}

/// A classified wire segment: shape plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub rotation: Rotation,
}

impl Segment {
    pub fn straight(rotation: Rotation) -> Self {
        Self {
            kind: SegmentKind::Straight,
            rotation,
        }
    }

    pub fn corner(rotation: Rotation) -> Self {
        Self {
            kind: SegmentKind::Corner,
            rotation,
        }
    }
}

/// Visual material of a placed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    /// In-progress wire, not yet connected to the goal.
    Pending,
    /// Part of a finalized source-to-goal connection.
    Connected,
}

/// Segment rendering capability consumed by the path engine.
///
/// `place` replaces any segment already on the cell. `remove` and `recolor`
/// on a cell without a segment are no-ops.
pub trait SegmentRenderer {
    fn place(&mut self, cell: Cell, segment: Segment);

    fn remove(&mut self, cell: Cell);

    fn recolor(&mut self, cell: Cell, material: Material);
}

/// A segment as currently rendered on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedSegment {
    pub segment: Segment,
    pub material: Material,
}

/// Retained segment store: the standard `SegmentRenderer`.
///
/// Frame-based hosts read this each paint pass instead of receiving draw
/// commands; keying by cell is what makes `place` an implicit replace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentMap {
    placed: HashMap<Cell, PlacedSegment>,
}

impl SegmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Option<&PlacedSegment> {
        self.placed.get(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, &PlacedSegment)> {
        self.placed.iter().map(|(&cell, placed)| (cell, placed))
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

impl SegmentRenderer for SegmentMap {
    fn place(&mut self, cell: Cell, segment: Segment) {
        self.placed.insert(
            cell,
            PlacedSegment {
                segment,
                material: Material::Pending,
            },
        );
    }

    fn remove(&mut self, cell: Cell) {
        self.placed.remove(&cell);
    }

    fn recolor(&mut self, cell: Cell, material: Material) {
        if let Some(placed) = self.placed.get_mut(&cell) {
            placed.material = material;
        }
    }
}
