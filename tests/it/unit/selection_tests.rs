//! Two-step select-then-drag gesture and pointer capture.

use crate::helpers::{assert_position, click, drag, positions, EventLog, TestBoardBuilder};
use symbolboard::{BoardEvent, EventKind, GesturePhase, InputEvent, InputResponse, PointerButton};

fn down(pos: (f32, f32)) -> InputEvent {
    InputEvent::PointerDown {
        pos,
        button: PointerButton::Primary,
    }
}

fn up(pos: (f32, f32)) -> InputEvent {
    InputEvent::PointerUp {
        pos,
        button: PointerButton::Primary,
    }
}

#[test]
fn test_first_press_selects_without_dragging() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .with_image("B", (100, 100), positions::RIGHT)
        .build_with_ids();
    assert_eq!(board.selected_id(), Some(ids[1]));

    assert_eq!(board.handle_input(down(positions::LEFT)), InputResponse::Handled);
    assert_eq!(board.selected_id(), Some(ids[0]));
    assert_eq!(board.phase(), GesturePhase::Selected);
    assert!(!board.has_pointer_capture());

    // Moving after a selecting press does not move anything
    board.handle_input(InputEvent::PointerMove { pos: (150.0, 150.0) });
    assert_position(&board, ids[0], positions::LEFT);
}

#[test]
fn test_press_on_selected_item_drags_it() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .build_with_ids();

    board.handle_input(down(positions::LEFT));
    assert_eq!(board.phase(), GesturePhase::Dragging);
    assert!(board.has_pointer_capture());

    board.handle_input(InputEvent::PointerMove { pos: (110.0, 95.0) });
    board.handle_input(InputEvent::PointerMove { pos: (130.0, 120.0) });
    assert_position(&board, ids[0], (130.0, 120.0));

    assert_eq!(board.handle_input(up((130.0, 120.0))), InputResponse::Handled);
    assert_eq!(board.phase(), GesturePhase::Selected);
    assert!(!board.has_pointer_capture());
    assert_eq!(board.selected_id(), Some(ids[0]));
}

#[test]
fn test_capture_applies_moves_off_the_item() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .build_with_ids();

    drag(&mut board, positions::LEFT, &[(2000.0, 2000.0), (2100.0, 1900.0)]);
    assert_position(&board, ids[0], (2100.0, 1900.0));
}

#[test]
fn test_each_move_emits_moved() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .build_with_ids();
    let log = EventLog::attach(&mut board);

    drag(&mut board, positions::LEFT, &[(101.0, 100.0), (102.0, 100.0), (103.0, 100.0)]);

    assert_eq!(
        log.events(),
        vec![BoardEvent::Moved { id: ids[0] }; 3],
        "drag is a series of committed moves"
    );
}

#[test]
fn test_moves_without_drag_are_ignored() {
    let (mut board, _) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .build_with_ids();
    let log = EventLog::attach(&mut board);

    let response = board.handle_input(InputEvent::PointerMove { pos: (300.0, 300.0) });
    assert_eq!(response, InputResponse::Ignored);
    assert_eq!(board.handle_input(up((300.0, 300.0))), InputResponse::Ignored);
    assert_eq!(log.len(), 0);
}

#[test]
fn test_press_on_empty_board_clears_selection() {
    let (mut board, _) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .build_with_ids();
    let log = EventLog::attach(&mut board);

    click(&mut board, positions::EMPTY);
    assert_eq!(board.selected_id(), None);
    assert_eq!(board.phase(), GesturePhase::Idle);
    assert_eq!(log.kinds(), vec![EventKind::SelectionChanged]);

    // Already idle: nothing to clear
    assert_eq!(board.handle_input(down(positions::EMPTY)), InputResponse::Ignored);
}

#[test]
fn test_select_then_drag_needs_two_presses() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .build_with_ids();
    board.select(None);

    drag(&mut board, positions::LEFT, &[(200.0, 200.0)]);
    assert_position(&board, ids[0], positions::LEFT);
    assert_eq!(board.selected_id(), Some(ids[0]));

    drag(&mut board, positions::LEFT, &[(200.0, 200.0)]);
    assert_position(&board, ids[0], (200.0, 200.0));
}

#[test]
fn test_select_unknown_id_clears() {
    let (mut board, _) = TestBoardBuilder::new().with_text(positions::LEFT).build_with_ids();
    assert!(board.select(Some(999)));
    assert_eq!(board.selected_id(), None);
}

#[test]
fn test_middle_button_is_ignored() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .build_with_ids();
    board.select(None);
    let response = board.handle_input(InputEvent::PointerDown {
        pos: positions::LEFT,
        button: PointerButton::Middle,
    });
    assert_eq!(response, InputResponse::Ignored);
    assert_eq!(board.selected_id(), None);
    assert!(board.get_item(ids[0]).is_some());
}

#[test]
fn test_deleting_dragged_item_releases_capture() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .build_with_ids();
    board.handle_input(down(positions::LEFT));
    assert!(board.has_pointer_capture());

    board.delete_item(ids[0]);
    assert!(!board.has_pointer_capture());
    assert_eq!(board.phase(), GesturePhase::Idle);
}

#[test]
fn test_non_finite_pointer_events_are_ignored() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_image("A", (100, 100), positions::LEFT)
        .build_with_ids();

    assert_eq!(board.handle_input(down((f32::NAN, 0.0))), InputResponse::Ignored);
    assert_eq!(board.selected_id(), Some(ids[0]));

    board.handle_input(down(positions::LEFT));
    assert!(board.has_pointer_capture());
    let bad_move = InputEvent::PointerMove {
        pos: (f32::INFINITY, f32::NAN),
    };
    assert_eq!(board.handle_input(bad_move), InputResponse::Ignored);
    assert!(board.has_pointer_capture());
    assert_position(&board, ids[0], positions::LEFT);

    // The drag anchor survives, so the next real move is a normal delta
    board.handle_input(InputEvent::PointerMove { pos: (110.0, 120.0) });
    board.handle_input(up((110.0, 120.0)));
    assert_position(&board, ids[0], (110.0, 120.0));
    assert_eq!(board.hit_test(110.0, 120.0), Some(ids[0]));
}
