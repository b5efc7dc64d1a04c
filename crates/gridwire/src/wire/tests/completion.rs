use super::*;
use crate::wire::segment::{Material, Rotation, SegmentKind};

/// Source at (1,1), goal at (4,1), clear row between them.
fn straight_shot() -> TestController {
    board(cell(1, 1), cell(4, 1))
}

#[test]
fn reaching_the_goal_completes_the_connection() {
    let mut ctrl = straight_shot();
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1), cell(4, 1)]);

    assert!(!ctrl.in_progress());
    assert!(ctrl.is_connected(cell(1, 1)));
    assert_eq!(ctrl.completed_paths().len(), 1);
    assert_eq!(
        ctrl.completed_paths()[0].cells(),
        &[cell(1, 1), cell(2, 1), cell(3, 1)]
    );
    assert!(ctrl.eligible_sources().is_empty());
}

#[test]
fn completed_path_is_a_4_adjacent_chain() {
    let mut ctrl = straight_shot();
    drag(
        &mut ctrl,
        &[cell(1, 1), cell(2, 1), cell(2, 2), cell(3, 2), cell(3, 1), cell(4, 1)],
    );

    assert_adjacent_chain(ctrl.completed_paths()[0].cells());
    assert_eq!(ctrl.completed_paths()[0].source(), cell(1, 1));
}

#[test]
fn completion_recolors_every_segment() {
    let mut ctrl = straight_shot();
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1), cell(4, 1)]);

    for c in [cell(2, 1), cell(3, 1)] {
        let placed = ctrl.renderer().get(c).expect("segment kept");
        assert_eq!(placed.material, Material::Connected);
        assert_eq!(ctrl.grid().type_of(c), TileType::Wire);
    }
}

#[test]
fn no_segment_lands_on_the_goal_cell() {
    let mut ctrl = straight_shot();
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1), cell(4, 1)]);

    assert!(ctrl.renderer().get(cell(4, 1)).is_none());
    assert_eq!(ctrl.grid().type_of(cell(4, 1)), TileType::Goal);
}

#[test]
fn final_segment_is_classified_against_the_goal() {
    // Path turns south right before a goal at (2,3): the tail must end up a
    // column straight and the cell before it a corner.
    let mut ctrl = board(cell(1, 1), cell(2, 3));
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(2, 2), cell(2, 3)]);

    let corner = ctrl.renderer().get(cell(2, 1)).expect("corner");
    assert_eq!(corner.segment.kind, SegmentKind::Corner);
    assert_eq!(corner.segment.rotation, Rotation::R90);
    let tail = ctrl.renderer().get(cell(2, 2)).expect("tail");
    assert_eq!(tail.segment.kind, SegmentKind::Straight);
    assert_eq!(tail.segment.rotation, Rotation::R0);
    assert_eq!(tail.material, Material::Connected);
}

#[test]
fn diagonal_finish_synthesizes_the_bridge_first() {
    let mut ctrl = board(cell(1, 1), cell(3, 2));
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1)]);
    hover(&mut ctrl, cell(3, 2));

    assert!(ctrl.is_connected(cell(1, 1)));
    assert_eq!(
        ctrl.completed_paths()[0].cells(),
        &[cell(1, 1), cell(2, 1), cell(3, 1)]
    );
    assert_adjacent_chain(ctrl.completed_paths()[0].cells());
}

#[test]
fn unreachable_goal_sample_is_ignored() {
    let mut ctrl = straight_shot();
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1)]);
    // The goal is two cells east of the tail.
    hover(&mut ctrl, cell(4, 1));

    assert!(ctrl.in_progress());
    assert_eq!(ctrl.path().visited(), &[cell(2, 1)]);
    assert!(!ctrl.is_connected(cell(1, 1)));
}

#[test]
fn connected_source_cannot_start_a_new_path() {
    let mut ctrl = straight_shot();
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1), cell(4, 1)]);
    release(&mut ctrl);
    hover(&mut ctrl, cell(1, 1));

    assert!(!ctrl.in_progress());
}

#[test]
fn corrupt_source_tile_still_completes_with_default_material() {
    let mut ctrl = straight_shot();
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1)]);
    // Corrupt the board under the in-progress path; the finalizer logs and
    // falls back instead of aborting the drag.
    ctrl.grid_mut().set_type(cell(1, 1), TileType::Empty);
    hover(&mut ctrl, cell(4, 1));

    assert!(ctrl.is_connected(cell(1, 1)));
    let placed = ctrl.renderer().get(cell(2, 1)).expect("segment kept");
    assert_eq!(placed.material, Material::Connected);
}

#[test]
fn second_source_can_connect_after_the_first() {
    let mut ctrl = straight_shot();
    add_source(&mut ctrl, cell(1, 3), BuildingKind::Windmill);
    drag(&mut ctrl, &[cell(1, 1), cell(2, 1), cell(3, 1), cell(4, 1)]);
    release(&mut ctrl);
    drag(
        &mut ctrl,
        &[
            cell(1, 3),
            cell(2, 3),
            cell(3, 3),
            cell(4, 3),
            cell(4, 2),
            cell(4, 1),
        ],
    );

    assert!(ctrl.is_connected(cell(1, 1)));
    assert!(ctrl.is_connected(cell(1, 3)));
    assert_eq!(ctrl.completed_paths().len(), 2);
}
