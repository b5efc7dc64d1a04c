//! The wire-drawing engine.
//!
//! The player drags the pointer across the board to lay a wire from a
//! producer building to the goal cell, one 4-adjacent step at a time.
//! [`PathController`] consumes one pointer sample per frame, validates each
//! step with [`check_move`] (synthesizing a bridge cell for shallow
//! diagonals), classifies segment shapes with [`classify`], and drives a
//! [`SegmentRenderer`] for the visual state. Backtracking over the drawn
//! path rolls it back; releasing the button before the goal abandons it.

pub mod classify;
pub mod controller;
pub mod grid;
pub mod segment;
pub mod state;
pub mod validate;

#[cfg(test)]
mod tests;

pub use classify::{Travel, classify, corner_rotation, straight_rotation};
pub use controller::{CompletedPath, PathController, PointerSample, PointerSource};
pub use grid::{BuildingKind, Cell, GridIndex, GridStore, TileGrid, TileType};
pub use segment::{
    Material, PlacedSegment, Rotation, Segment, SegmentKind, SegmentMap, SegmentRenderer,
};
pub use state::PathState;
pub use validate::{MoveLegality, check_move};
