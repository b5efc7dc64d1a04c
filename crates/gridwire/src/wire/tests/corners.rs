use super::*;
use crate::wire::classify::{Travel, classify, corner_rotation};
use crate::wire::segment::{Rotation, SegmentKind};

#[test]
fn corner_table_is_fixed() {
    use Travel::{Decreasing, Increasing};
    assert_eq!(corner_rotation(Increasing, Increasing), Rotation::R90);
    assert_eq!(corner_rotation(Increasing, Decreasing), Rotation::R180);
    assert_eq!(corner_rotation(Decreasing, Increasing), Rotation::R0);
    assert_eq!(corner_rotation(Decreasing, Decreasing), Rotation::R270);
}

#[test]
fn row_then_column_turn_is_a_corner() {
    // (0,0) -> (1,0) -> (1,1): east then south.
    let segment = classify(index(), cell(0, 0), cell(1, 0), cell(1, 1));
    assert_eq!(segment.kind, SegmentKind::Corner);
    assert_eq!(segment.rotation, Rotation::R90);
}

#[test]
fn reversed_turn_is_diametrically_opposite() {
    let forward = classify(index(), cell(0, 0), cell(1, 0), cell(1, 1));
    let backward = classify(index(), cell(1, 1), cell(1, 0), cell(0, 0));
    assert_eq!(backward.kind, SegmentKind::Corner);
    assert_eq!(backward.rotation, forward.rotation.opposite());
}

#[test]
fn straight_row_run_lies_on_the_row_axis() {
    let segment = classify(index(), cell(1, 2), cell(2, 2), cell(3, 2));
    assert_eq!(segment.kind, SegmentKind::Straight);
    assert_eq!(segment.rotation, Rotation::R90);
}

#[test]
fn straight_column_run_lies_on_the_column_axis() {
    let segment = classify(index(), cell(2, 1), cell(2, 2), cell(2, 3));
    assert_eq!(segment.kind, SegmentKind::Straight);
    assert_eq!(segment.rotation, Rotation::R0);
}

/// Drag a three-cell turn through the controller and return the rotation
/// rendered on the middle cell.
fn rendered_turn(source: Cell, middle: Cell, exit: Cell) -> Rotation {
    let mut ctrl = board(source, cell(5, 5));
    drag(&mut ctrl, &[source, middle, exit]);
    let placed = ctrl.renderer().get(middle).expect("corner rendered");
    assert_eq!(placed.segment.kind, SegmentKind::Corner);
    placed.segment.rotation
}

#[test]
fn east_then_south_renders_r90() {
    // Both legs travel in increasing index order.
    assert_eq!(
        rendered_turn(cell(1, 1), cell(2, 1), cell(2, 2)),
        Rotation::R90
    );
}

#[test]
fn east_then_north_renders_r180() {
    assert_eq!(
        rendered_turn(cell(1, 1), cell(2, 1), cell(2, 0)),
        Rotation::R180
    );
}

#[test]
fn west_then_south_renders_r0() {
    assert_eq!(
        rendered_turn(cell(3, 1), cell(2, 1), cell(2, 2)),
        Rotation::R0
    );
}

#[test]
fn west_then_north_renders_r270() {
    assert_eq!(
        rendered_turn(cell(3, 1), cell(2, 1), cell(2, 0)),
        Rotation::R270
    );
}

#[test]
fn continuing_past_a_corner_leaves_it_in_place() {
    let mut ctrl = board(cell(1, 1), cell(5, 5));
    drag(
        &mut ctrl,
        &[cell(1, 1), cell(2, 1), cell(2, 2), cell(2, 3)],
    );

    let corner = ctrl.renderer().get(cell(2, 1)).expect("corner");
    assert_eq!(corner.segment.kind, SegmentKind::Corner);
    let run = ctrl.renderer().get(cell(2, 2)).expect("straight");
    assert_eq!(run.segment.kind, SegmentKind::Straight);
    assert_eq!(run.segment.rotation, Rotation::R0);
}
