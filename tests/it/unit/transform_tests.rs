//! Resize, absolute scale and nudge on the selection.

use crate::helpers::{
    assert_close, assert_position, assert_scales_in_range, positions, text_tool, EventLog,
    TestBoardBuilder,
};
use symbolboard::{BoardEvent, Settings};

#[test]
fn test_resize_three_steps_from_one() {
    let (mut board, ids) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();

    for _ in 0..3 {
        assert!(board.resize_selected_by(1.15));
    }
    let scale = board.get_item(ids[0]).unwrap().scale;
    assert_close(scale, 1.520875);
    assert_close(board.selected_scale().unwrap(), 1.520875);
}

#[test]
fn test_resize_never_leaves_range() {
    let (mut board, _) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .with_text(positions::RIGHT)
        .build_with_ids();

    for factor in [1e9, 1e-9, 0.0, -3.0, 50.0, 0.01, f32::MAX, f32::MIN_POSITIVE] {
        board.resize_selected_by(factor);
        assert_scales_in_range(&board);
    }
    board.resize_selected_by(1e9);
    assert_eq!(board.selected_scale(), Some(4.0));
    board.resize_selected_by(1e-9);
    assert_eq!(board.selected_scale(), Some(0.2));
}

#[test]
fn test_resize_at_bound_is_silent() {
    let (mut board, _) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    board.set_selected_scale_absolute(4.0);
    let log = EventLog::attach(&mut board);

    assert!(!board.resize_selected_by(1.15));
    assert_eq!(log.len(), 0);
}

#[test]
fn test_non_finite_factor_is_ignored() {
    let (mut board, _) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    assert!(!board.resize_selected_by(f32::NAN));
    assert!(!board.resize_selected_by(f32::INFINITY));
    assert_eq!(board.selected_scale(), Some(1.0));
}

#[test]
fn test_absolute_scale_reads_back_clamped() {
    let (mut board, _) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();

    for (input, expected) in [(0.05, 0.2), (0.2, 0.2), (1.37, 1.37), (4.0, 4.0), (12.0, 4.0), (-1.0, 0.2)] {
        board.set_selected_scale_absolute(input);
        assert_eq!(board.selected_scale(), Some(expected), "input {}", input);
    }
}

#[test]
fn test_absolute_scale_always_emits() {
    let (mut board, ids) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    let log = EventLog::attach(&mut board);

    board.set_selected_scale_absolute(1.0);
    board.set_selected_scale_absolute(1.0);
    assert_eq!(log.events(), vec![BoardEvent::Moved { id: ids[0] }; 2]);
}

#[test]
fn test_text_font_follows_scale() {
    let (mut board, ids) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    board.set_selected_scale_absolute(2.0);
    assert_eq!(board.get_item(ids[0]).unwrap().font_size(), Some(36.0));
}

#[test]
fn test_transforms_without_selection_are_noops() {
    let (mut board, ids) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    board.select(None);
    let log = EventLog::attach(&mut board);

    assert!(!board.resize_selected_by(2.0));
    assert!(!board.set_selected_scale_absolute(2.0));
    assert!(!board.nudge_selected(5.0, 5.0));
    assert_eq!(board.selected_scale(), None);
    assert_eq!(board.get_item(ids[0]).unwrap().scale, 1.0);
    assert_eq!(log.len(), 0);
}

#[test]
fn test_nudge_moves_selection() {
    let (mut board, ids) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    assert!(board.nudge_selected(5.0, -5.0));
    assert_position(&board, ids[0], (105.0, 95.0));
}

#[test]
fn test_custom_scale_range_from_settings() {
    let settings = Settings {
        min_scale: 0.5,
        max_scale: 2.0,
        ..Settings::default()
    };
    let (mut board, _) = TestBoardBuilder::new()
        .with_settings(settings)
        .with_text(positions::LEFT)
        .build_with_ids();

    board.set_selected_scale_absolute(10.0);
    assert_eq!(board.selected_scale(), Some(2.0));
    board.resize_selected_by(0.01);
    assert_eq!(board.selected_scale(), Some(0.5));
}

#[test]
fn test_scale_range_from_settings_cannot_widen() {
    let settings = Settings {
        min_scale: 0.01,
        max_scale: 50.0,
        ..Settings::default()
    };
    let (mut board, _) = TestBoardBuilder::new()
        .with_settings(settings)
        .with_text(positions::LEFT)
        .build_with_ids();

    board.set_selected_scale_absolute(40.0);
    assert_eq!(board.selected_scale(), Some(4.0));
    board.set_selected_scale_absolute(0.05);
    assert_eq!(board.selected_scale(), Some(0.2));
}

#[test]
fn test_non_finite_nudge_is_ignored() {
    let (mut board, ids) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    let log = EventLog::attach(&mut board);

    assert!(!board.nudge_selected(f32::NAN, 0.0));
    assert!(!board.nudge_selected(0.0, f32::INFINITY));
    assert!(!board.nudge_selected(f32::NEG_INFINITY, f32::NAN));
    assert_position(&board, ids[0], positions::LEFT);
    assert_eq!(log.len(), 0);
}

#[test]
fn test_board_keeps_working_after_bad_nudge() {
    let (mut board, ids) = TestBoardBuilder::new().with_text((0.0, 0.0)).build_with_ids();
    board.nudge_selected(f32::NAN, 0.0);

    for i in 0..20 {
        board.place(&text_tool(), (i as f32 * 30.0, 40.0));
    }
    assert_eq!(board.len(), 21);
    assert_eq!(board.hit_test(0.0, 0.0), Some(ids[0]));
}
