mod completion;
mod corners;
mod rollback;

use super::controller::{PathController, PointerSample};
use super::grid::{BuildingKind, Cell, GridIndex, GridStore, TileGrid, TileType};
use super::segment::SegmentMap;

/// All engine tests run on a 6x6 board.
const W: usize = 6;
const H: usize = 6;

type TestController = PathController<TileGrid, SegmentMap>;

/// The cell at (col, row) on the test board.
fn cell(col: usize, row: usize) -> Cell {
    row * W + col
}

fn index() -> GridIndex {
    GridIndex::new(W)
}

/// Empty board with no buildings.
fn empty_board() -> TestController {
    PathController::new(TileGrid::new(W, H), SegmentMap::new())
}

/// Board with a registered solar source and a goal cell.
fn board(source: Cell, goal: Cell) -> TestController {
    let mut ctrl = empty_board();
    add_source(&mut ctrl, source, BuildingKind::Solar);
    ctrl.grid_mut().set_type(goal, TileType::Goal);
    ctrl
}

/// Place and register a producer building, acting as the placement owner.
fn add_source(ctrl: &mut TestController, cell: Cell, kind: BuildingKind) {
    ctrl.grid_mut().set_type(cell, TileType::Building(kind));
    ctrl.register_source(cell);
}

/// One tick with the button held over `cell`.
fn hover(ctrl: &mut TestController, cell: Cell) {
    ctrl.tick(
        &PointerSample {
            button_down: true,
            cell: Some(cell),
        },
        false,
    );
}

/// Hover each cell in order with the button held.
fn drag(ctrl: &mut TestController, cells: &[Cell]) {
    for &c in cells {
        hover(ctrl, c);
    }
}

/// One tick with the button up and the pointer off the board.
fn release(ctrl: &mut TestController) {
    ctrl.tick(
        &PointerSample {
            button_down: false,
            cell: None,
        },
        false,
    );
}

/// Assert every consecutive pair of `cells` is 4-directionally adjacent.
fn assert_adjacent_chain(cells: &[Cell]) {
    let index = index();
    for pair in cells.windows(2) {
        assert_eq!(
            index.manhattan(pair[0], pair[1]),
            1,
            "cells {} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}
