use super::*;
use crate::wire::segment::{Rotation, SegmentKind};

#[test]
fn dragging_back_pops_the_tail() {
    let mut ctrl = board(cell(1, 1), cell(5, 5));
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1), cell(4, 1)]);
    hover(&mut ctrl, cell(3, 1));

    assert_eq!(ctrl.path().visited(), &[cell(2, 1), cell(3, 1)]);
    assert!(ctrl.renderer().get(cell(4, 1)).is_none());
    assert!(ctrl.grid().is_empty(cell(4, 1)));
}

#[test]
fn rollback_skips_several_cells_at_once() {
    let mut ctrl = board(cell(1, 1), cell(5, 5));
    drag(
        &mut ctrl,
        &[cell(1, 1), cell(2, 1), cell(3, 1), cell(3, 2), cell(3, 3)],
    );
    hover(&mut ctrl, cell(2, 1));

    assert_eq!(ctrl.path().visited(), &[cell(2, 1)]);
    for c in [cell(3, 1), cell(3, 2), cell(3, 3)] {
        assert!(ctrl.grid().is_empty(c));
        assert!(ctrl.renderer().get(c).is_none());
    }
}

#[test]
fn rollback_restores_state_and_segments_exactly() {
    let mut ctrl = board(cell(1, 1), cell(5, 5));
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1)]);

    let segments_before = ctrl.renderer().clone();
    let visited_before = ctrl.path().visited().to_vec();

    // Turn south (the old tail becomes a corner), then drag back.
    hover(&mut ctrl, cell(3, 2));
    hover(&mut ctrl, cell(3, 1));

    assert_eq!(ctrl.path().visited(), visited_before.as_slice());
    assert_eq!(ctrl.renderer(), &segments_before);
}

#[test]
fn rollback_to_source_keeps_the_drag_alive() {
    let mut ctrl = board(cell(1, 1), cell(5, 5));
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(2, 2)]);
    hover(&mut ctrl, cell(1, 1));

    assert!(ctrl.in_progress());
    assert!(ctrl.path().visited().is_empty());
    assert!(ctrl.renderer().is_empty());

    // Drawing may resume from the source without another press.
    hover(&mut ctrl, cell(1, 2));
    assert_eq!(ctrl.path().visited(), &[cell(1, 2)]);
}

#[test]
fn rolled_back_corner_reverts_to_straight() {
    let mut ctrl = board(cell(1, 1), cell(5, 5));
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1), cell(3, 2)]);

    // (3,1) is a corner while (3,2) hangs off it.
    let corner = ctrl.renderer().get(cell(3, 1)).expect("segment");
    assert_eq!(corner.segment.kind, SegmentKind::Corner);

    hover(&mut ctrl, cell(3, 1));
    let reverted = ctrl.renderer().get(cell(3, 1)).expect("segment");
    assert_eq!(reverted.segment.kind, SegmentKind::Straight);
    assert_eq!(reverted.segment.rotation, Rotation::R90);
}

#[test]
fn extending_in_a_new_direction_after_rollback_reclassifies() {
    let mut ctrl = board(cell(1, 1), cell(5, 5));
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1)]);
    hover(&mut ctrl, cell(2, 1));
    hover(&mut ctrl, cell(2, 2));

    assert_eq!(ctrl.path().visited(), &[cell(2, 1), cell(2, 2)]);
    let turned = ctrl.renderer().get(cell(2, 1)).expect("segment");
    assert_eq!(turned.segment.kind, SegmentKind::Corner);
    assert_eq!(turned.segment.rotation, Rotation::R90);
}
