use tracing::{debug, warn};

use super::classify::{classify, straight_rotation};
use super::grid::{Cell, GridIndex, GridStore, TileType};
use super::segment::{Material, Segment, SegmentRenderer};
use super::state::PathState;
use super::validate::{MoveLegality, check_move};

/// Pointer sampling capability: one sample per tick.
pub trait PointerSource {
    /// Whether the primary button is currently held.
    fn button_down(&self) -> bool;

    /// The cell under the pointer, or `None` when not hovering the board.
    fn hovered_cell(&self) -> Option<Cell>;
}

/// Plain value implementation of [`PointerSource`] for hosts that sample
/// input into a snapshot each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub button_down: bool,
    pub cell: Option<Cell>,
}

impl PointerSource for PointerSample {
    fn button_down(&self) -> bool {
        self.button_down
    }

    fn hovered_cell(&self) -> Option<Cell> {
        self.cell
    }
}

/// A finalized source-to-goal connection.
///
/// `cells` starts with the source cell and ends with the last wire cell
/// before the goal; consecutive cells are 4-directionally adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPath {
    cells: Vec<Cell>,
}

impl CompletedPath {
    pub fn source(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// The wire-drawing state machine.
///
/// One instance owns the tile store, the segment renderer, the in-progress
/// path, and the book-keeping for completed connections. The frame driver
/// calls [`tick`](Self::tick) once per frame with the current pointer
/// sample; everything else happens synchronously inside that call.
pub struct PathController<G, R> {
    grid: G,
    renderer: R,
    index: GridIndex,
    path: PathState,
    eligible: Vec<Cell>,
    connected: Vec<Cell>,
    completed: Vec<CompletedPath>,
    button_was_down: bool,
}

impl<G: GridStore, R: SegmentRenderer> PathController<G, R> {
    pub fn new(grid: G, renderer: R) -> Self {
        let index = GridIndex::new(grid.width());
        Self {
            grid,
            renderer,
            index,
            path: PathState::new(),
            eligible: Vec::new(),
            connected: Vec::new(),
            completed: Vec::new(),
            button_was_down: false,
        }
    }

    /// Register a building cell as eligible to start a path.
    pub fn register_source(&mut self, cell: Cell) {
        if !self.eligible.contains(&cell) {
            self.eligible.push(cell);
        }
    }

    /// Whether the building at `cell` has a finalized connection.
    pub fn is_connected(&self, cell: Cell) -> bool {
        self.connected.contains(&cell)
    }

    pub fn connected(&self) -> &[Cell] {
        &self.connected
    }

    pub fn eligible_sources(&self) -> &[Cell] {
        &self.eligible
    }

    pub fn completed_paths(&self) -> &[CompletedPath] {
        &self.completed
    }

    pub fn in_progress(&self) -> bool {
        self.path.in_progress()
    }

    pub fn path(&self) -> &PathState {
        &self.path
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Mutable grid access for the building-placement owner. Wire-type
    /// transitions stay the controller's own business.
    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Advance the state machine by one pointer sample.
    ///
    /// With `delete_mode` set, drawing is fully suspended; only the
    /// button-edge tracker advances so leaving delete mode mid-hold does
    /// not produce a phantom press.
    pub fn tick<P: PointerSource>(&mut self, pointer: &P, delete_mode: bool) {
        let down = pointer.button_down();
        let pressed = down && !self.button_was_down;
        self.button_was_down = down;

        if delete_mode {
            return;
        }

        if !self.path.in_progress() {
            if pressed {
                if let Some(cell) = pointer.hovered_cell() {
                    if self.eligible.contains(&cell) {
                        self.path.begin(cell);
                    }
                }
            }
            return;
        }

        // Releasing the button before the goal abandons the whole path.
        if !down {
            self.discard_path();
            return;
        }

        // Button held but pointer off the board: hold position.
        let Some(hovered) = pointer.hovered_cell() else {
            return;
        };

        if self.grid.is_empty(hovered) {
            self.advance(hovered);
        } else if self.grid.type_of(hovered) == TileType::Goal {
            self.try_finalize(hovered);
        } else if (self.path.contains(hovered) || self.path.source() == Some(hovered))
            && self.path.tail() != Some(hovered)
        {
            self.rollback_to(hovered);
        }
    }

    /// Extend the path onto an empty hovered cell.
    fn advance(&mut self, hovered: Cell) {
        let Some(tail) = self.path.tail() else {
            return;
        };
        match check_move(&self.grid, self.index, tail, hovered) {
            MoveLegality::Illegal => {
                debug!(tail, hovered, "illegal move, discarding path");
                self.discard_path();
            }
            MoveLegality::Bridged(bridge) => {
                self.append(bridge);
                self.append(hovered);
            }
            MoveLegality::Legal => self.append(hovered),
        }
    }

    /// Place `cell` as the new tail: the old tail's segment gets its final
    /// shape now that its successor is known, and the new cell starts as a
    /// straight piece along the travel axis.
    fn append(&mut self, cell: Cell) {
        let Some(tail) = self.path.tail() else {
            return;
        };
        self.render_tail_with_successor(cell);
        let rotation = straight_rotation(self.index, tail, cell);
        self.place_wire(cell, Segment::straight(rotation));
        self.path.push(cell);
    }

    /// Re-classify and re-render the current tail using `next` as its
    /// successor. The source cell carries the building, never a segment.
    fn render_tail_with_successor(&mut self, next: Cell) {
        let (Some(prior), Some(tail)) = (self.path.prior_tail(), self.path.tail()) else {
            return;
        };
        if self.path.source() == Some(tail) {
            return;
        }
        let segment = classify(self.index, prior, tail, next);
        self.place_wire(tail, segment);
    }

    /// Finalize if the goal is reachable from the tail this tick; an
    /// unreachable goal sample is simply ignored.
    fn try_finalize(&mut self, goal: Cell) {
        let Some(tail) = self.path.tail() else {
            return;
        };
        match check_move(&self.grid, self.index, tail, goal) {
            MoveLegality::Illegal => {}
            MoveLegality::Bridged(bridge) => {
                self.append(bridge);
                self.finalize(goal);
            }
            MoveLegality::Legal => self.finalize(goal),
        }
    }

    /// Commit the path as a completed connection. Two phases, back to back:
    /// the tail segment is rendered with the goal as successor, then the
    /// whole path is recolored and recorded.
    fn finalize(&mut self, goal: Cell) {
        self.render_tail_with_successor(goal);

        let Some(source) = self.path.source() else {
            return;
        };
        let material = self.completion_material(source);
        for &cell in self.path.visited() {
            self.renderer.recolor(cell, material);
        }

        let mut cells = self.path.take();
        cells.insert(0, source);
        debug!(source, goal, len = cells.len(), "wire connected to goal");

        self.connected.push(source);
        self.completed.push(CompletedPath { cells });
        self.eligible.retain(|&c| c != source);
    }

    /// Completion material for the path starting at `source`. Every
    /// producer building maps to the connected material; anything else on
    /// the source cell means the board state is corrupt, so log it and
    /// fall back rather than abort the player's drag.
    fn completion_material(&self, source: Cell) -> Material {
        match self.grid.type_of(source) {
            TileType::Building(_) => Material::Connected,
            other => {
                warn!(source, ?other, "wire source is not a producer building");
                Material::Connected
            }
        }
    }

    /// Un-draw back to `hovered`, which is a visited cell or the source.
    /// Reaching the source keeps the path alive with no visited cells so
    /// the player can draw again without re-pressing.
    fn rollback_to(&mut self, hovered: Cell) {
        while self.path.tail() != Some(hovered) {
            let Some(cell) = self.path.pop() else {
                break;
            };
            self.remove_wire(cell);
            if self.path.visited().is_empty() && self.path.source() != Some(hovered) {
                self.path.reset();
                return;
            }
        }

        // The new tail lost its successor: revert it to the straight piece
        // it had when it was placed.
        let (Some(prior), Some(tail)) = (self.path.prior_tail(), self.path.tail()) else {
            return;
        };
        if self.path.source() != Some(tail) {
            let rotation = straight_rotation(self.index, prior, tail);
            self.place_wire(tail, Segment::straight(rotation));
        }
    }

    /// Remove every placed segment and reset to idle.
    fn discard_path(&mut self) {
        for cell in self.path.take() {
            self.remove_wire(cell);
        }
    }

    fn place_wire(&mut self, cell: Cell, segment: Segment) {
        self.renderer.place(cell, segment);
        self.grid.set_type(cell, TileType::Wire);
    }

    /// Remove the segment at `cell` if one exists. Guarded on the tile
    /// actually holding a wire so building and goal cells pass through
    /// unharmed.
    fn remove_wire(&mut self, cell: Cell) {
        if self.grid.type_of(cell) == TileType::Wire {
            self.renderer.remove(cell);
            self.grid.set_type(cell, TileType::Cleared);
        }
    }

    /// Delete every completed connection starting at `source`, freeing the
    /// wire cells. Called when the owning building is removed; the building
    /// tile itself is the remover's own transition.
    pub fn remove_full_path(&mut self, source: Cell) {
        self.connected.retain(|&c| c != source);
        self.eligible.retain(|&c| c != source);

        let mut kept = Vec::with_capacity(self.completed.len());
        for path in std::mem::take(&mut self.completed) {
            if path.source() == source {
                for &cell in path.cells() {
                    self.remove_wire(cell);
                }
            } else {
                kept.push(path);
            }
        }
        self.completed = kept;
    }
}
