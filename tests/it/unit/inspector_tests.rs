//! Inspector view derivation, write-back and the sync guard.

use crate::helpers::{glyph, positions, text_tool, TestBoardBuilder};
use symbolboard::inspector::NO_SELECTION_LABEL;
use symbolboard::Inspector;

#[test]
fn test_initial_view_reflects_board() {
    let (mut board, _) = TestBoardBuilder::new()
        .with_image("Infantry", (320, 200), (100.0, 120.0))
        .build_with_ids();
    let inspector = Inspector::attach(&mut board);

    let view = inspector.view();
    assert_eq!(view.lines, vec!["1. Infantry @ (100, 120)"]);
    assert_eq!(view.selection_label, "Infantry");
    assert_eq!(view.slider_percent, 50);
    assert!(!view.text_controls_enabled);
}

#[test]
fn test_view_refreshes_on_every_event() {
    let mut board = TestBoardBuilder::new().with_glyph("Armor", (100, 100)).build();
    let inspector = Inspector::attach(&mut board);
    assert_eq!(inspector.view().lines.len(), 0);
    assert_eq!(inspector.view().selection_label, NO_SELECTION_LABEL);

    board.place(&glyph("Armor"), (10.0, 20.0));
    board.place(&text_tool(), (30.5, 40.9));

    let view = inspector.view();
    assert_eq!(
        view.lines,
        vec![
            "1. Armor @ (10, 20)".to_string(),
            "2. Text Box (Unit Code): \"UNIT\" @ (30, 40)".to_string(),
        ]
    );
    assert_eq!(view.selection_label, "Text Box (Unit Code) (text)");
    assert_eq!(view.text_value, "UNIT");
    assert!(view.text_controls_enabled);
    // Placed + SelectionChanged for each placement
    assert_eq!(inspector.refresh_count(), 4);
}

#[test]
fn test_listing_text() {
    let (mut board, _) = TestBoardBuilder::new().with_text((1.0, 2.0)).build_with_ids();
    let inspector = Inspector::attach(&mut board);
    assert_eq!(
        inspector.view().listing(),
        "Placed symbols:\n\n1. Text Box (Unit Code): \"UNIT\" @ (1, 2)\n"
    );
}

#[test]
fn test_view_resets_when_selection_clears() {
    let (mut board, _) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    let inspector = Inspector::attach(&mut board);
    board.set_selected_scale_absolute(2.5);
    assert_eq!(inspector.view().slider_percent, 250);

    board.select(None);
    let view = inspector.view();
    assert_eq!(view.selection_label, NO_SELECTION_LABEL);
    assert_eq!(view.slider_percent, 100);
    assert_eq!(view.text_value, "");
    assert!(!view.text_controls_enabled);
}

#[test]
fn test_slider_writes_back_through_board() {
    let (mut board, ids) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    let inspector = Inspector::attach(&mut board);

    assert!(inspector.slider_moved(&mut board, 150.0));
    assert_eq!(board.get_item(ids[0]).unwrap().scale, 1.5);
    assert_eq!(inspector.view().slider_percent, 150);

    // The slider range is 20..=400
    inspector.slider_moved(&mut board, 1000.0);
    assert_eq!(board.selected_scale(), Some(4.0));
    inspector.slider_moved(&mut board, 1.0);
    assert_eq!(board.selected_scale(), Some(0.2));
}

#[test]
fn test_slider_ignored_while_syncing() {
    let (mut board, _) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    let inspector = Inspector::attach(&mut board);

    {
        let _guard = inspector.sync_guard();
        assert!(inspector.is_syncing());
        assert!(!inspector.slider_moved(&mut board, 300.0));
    }
    assert!(!inspector.is_syncing());
    assert_eq!(board.selected_scale(), Some(1.0));
    assert!(inspector.slider_moved(&mut board, 300.0));
}

#[test]
fn test_sync_guards_nest() {
    let mut board = TestBoardBuilder::new().build();
    let inspector = Inspector::attach(&mut board);
    let outer = inspector.sync_guard();
    {
        let _inner = inspector.sync_guard();
    }
    assert!(inspector.is_syncing());
    drop(outer);
    assert!(!inspector.is_syncing());
}

#[test]
fn test_refresh_does_not_leave_sync_flag_set() {
    let (mut board, _) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    let inspector = Inspector::attach(&mut board);
    board.nudge_selected(1.0, 1.0);
    assert!(!inspector.is_syncing());
}

#[test]
fn test_slider_without_selection() {
    let (mut board, _) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    board.select(None);
    let inspector = Inspector::attach(&mut board);
    assert!(!inspector.slider_moved(&mut board, 200.0));
}

#[test]
fn test_buttons_route_to_board() {
    let (mut board, ids) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    let inspector = Inspector::attach(&mut board);

    assert!(inspector.apply_text(&mut board, "  HQ "));
    assert_eq!(inspector.view().text_value, "HQ");

    let copy = inspector.duplicate(&mut board).unwrap();
    assert_eq!(inspector.view().lines.len(), 2);
    assert_eq!(board.selected_id(), Some(copy));

    assert!(inspector.delete(&mut board));
    assert_eq!(inspector.view().lines.len(), 1);
    assert!(board.get_item(ids[0]).is_some());
    assert_eq!(inspector.view().selection_label, NO_SELECTION_LABEL);
}

#[test]
fn test_detach_freezes_view() {
    let mut board = TestBoardBuilder::new().build();
    let mut inspector = Inspector::attach(&mut board);
    assert!(inspector.is_attached());

    assert!(inspector.detach(&mut board));
    board.place(&text_tool(), positions::LEFT);
    assert!(inspector.view().lines.is_empty());
    assert_eq!(inspector.refresh_count(), 0);
    assert!(!inspector.detach(&mut board));
}

#[test]
fn test_two_inspectors_stay_in_step() {
    let mut board = TestBoardBuilder::new().build();
    let a = Inspector::attach(&mut board);
    let b = Inspector::attach(&mut board);
    board.place(&text_tool(), positions::LEFT);
    assert_eq!(a.view(), b.view());
}
