//! Click/move protocol of the line string mode

use geosketch_core::{
    ChangeKind, GeometryStore, KeyEvent, LinearProjector, ModeError, MouseButton, PointerEvent,
    StoreError,
};
use geosketch_modes::{DrawMode, LineStringOptions, LINE_STRING_MODE};

use crate::support::{started, QueuedProjector};

fn event(lng: f64, lat: f64, x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(lng, lat, x, y)
}

#[test]
fn test_single_click_creates_anchor_and_preview() {
    let mut f = started(LineStringOptions::default(), QueuedProjector::default());
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();

    assert_eq!(f.coordinates(), vec![[0.0, 0.0], [0.0, 0.0]]);
    assert_eq!(f.kinds(), vec![ChangeKind::Create]);

    let features = f.store.borrow().copy_all();
    assert_eq!(features[0].geometry.type_name(), "LineString");
    assert_eq!(features[0].mode(), Some(LINE_STRING_MODE));
}

#[test]
fn test_move_without_click_does_nothing() {
    let mut f = started(LineStringOptions::default(), QueuedProjector::default());
    f.mode.on_mouse_move(&event(1.0, 1.0, 1.0, 1.0)).unwrap();

    assert_eq!(f.feature_count(), 0);
    assert_eq!(f.change_count(), 0);
}

#[test]
fn test_move_after_click_overwrites_preview() {
    let mut f = started(LineStringOptions::default(), QueuedProjector::default());
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    f.mode.on_mouse_move(&event(1.0, 1.0, 1.0, 1.0)).unwrap();

    assert_eq!(f.coordinates(), vec![[0.0, 0.0], [1.0, 1.0]]);
    assert_eq!(f.kinds(), vec![ChangeKind::Create, ChangeKind::Update]);
}

#[test]
fn test_second_click_appends_duplicate() {
    let mut f = started(LineStringOptions::default(), QueuedProjector::default());
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    f.mode.on_mouse_move(&event(1.0, 1.0, 1.0, 1.0)).unwrap();
    // within the closing distance on screen, but a line needs two vertices
    f.mode.on_click(&event(1.0, 1.0, 1.0, 1.0)).unwrap();

    assert_eq!(f.coordinates(), vec![[0.0, 0.0], [1.0, 1.0], [1.0, 1.0]]);
    assert_eq!(f.change_count(), 3);
    assert!(f.mode.is_drawing());
}

#[test]
fn test_closing_click_finishes_line() {
    let project = QueuedProjector::default().then(50.0, 50.0).then(100.0, 100.0);
    let mut f = started(LineStringOptions::default(), project);

    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    f.mode.on_mouse_move(&event(1.0, 1.0, 50.0, 50.0)).unwrap();
    f.mode.on_click(&event(1.0, 1.0, 50.0, 50.0)).unwrap();
    f.mode.on_mouse_move(&event(2.0, 2.0, 100.0, 100.0)).unwrap();
    // last vertex projects to (50, 50): too far, appended
    f.mode.on_click(&event(2.0, 2.0, 100.0, 100.0)).unwrap();
    assert_eq!(f.coordinates().len(), 4);

    // last vertex projects to (100, 100): closing
    f.mode.on_click(&event(2.0, 2.0, 100.0, 100.0)).unwrap();

    assert_eq!(f.coordinates(), vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    assert_eq!(f.change_count(), 6);
    assert!(!f.mode.is_drawing());
}

#[test]
fn test_click_after_finish_starts_new_line() {
    let mut f = started(LineStringOptions::default(), LinearProjector::new(1000.0));
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    f.mode.on_click(&event(1.0, 0.0, 1000.0, 0.0)).unwrap();
    f.mode.on_click(&event(1.0, 0.0, 1000.0, 0.0)).unwrap();
    assert_eq!(f.coordinates(), vec![[0.0, 0.0], [1.0, 0.0]]);

    f.mode.on_click(&event(1.0, 0.0, 1000.0, 0.0)).unwrap();
    assert_eq!(f.feature_count(), 2);
    assert_eq!(f.kinds().last(), Some(&ChangeKind::Create));
}

#[test]
fn test_closing_threshold_is_inclusive() {
    let options = LineStringOptions {
        pointer_distance: 10.0,
        ..Default::default()
    };
    let mut f = started(options, LinearProjector::new(1000.0));
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    f.mode.on_click(&event(1.0, 0.0, 1000.0, 0.0)).unwrap();

    // 11 px away keeps drawing
    f.mode.on_click(&event(1.0, 0.0, 1011.0, 0.0)).unwrap();
    assert!(f.mode.is_drawing());

    // exactly 10 px away finishes
    f.mode.on_click(&event(1.0, 0.0, 1010.0, 0.0)).unwrap();
    assert!(!f.mode.is_drawing());
}

#[test]
fn test_escape_without_line_is_no_op() {
    let mut f = started(LineStringOptions::default(), QueuedProjector::default());
    f.mode.on_key_up(&KeyEvent::new("Escape")).unwrap();
    assert_eq!(f.change_count(), 0);
}

#[test]
fn test_escape_deletes_line_in_progress() {
    let mut f = started(LineStringOptions::default(), QueuedProjector::default());
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    assert_eq!(f.feature_count(), 1);

    f.mode.on_key_up(&KeyEvent::new("Escape")).unwrap();
    assert_eq!(f.feature_count(), 0);
    assert!(!f.mode.is_drawing());
    assert_eq!(f.kinds().last(), Some(&ChangeKind::Delete));
}

#[test]
fn test_other_keys_are_ignored() {
    let mut f = started(LineStringOptions::default(), QueuedProjector::default());
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    f.mode.on_key_up(&KeyEvent::new("Enter")).unwrap();
    assert_eq!(f.feature_count(), 1);
}

#[test]
fn test_clean_up_is_idempotent() {
    let mut f = started(LineStringOptions::default(), QueuedProjector::default());
    f.mode.clean_up();
    assert_eq!(f.change_count(), 0);

    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    f.mode.clean_up();
    assert_eq!(f.feature_count(), 0);
    f.mode.clean_up();
    assert_eq!(f.feature_count(), 0);
}

#[test]
fn test_clean_up_keeps_finished_lines() {
    let mut f = started(LineStringOptions::default(), LinearProjector::new(1000.0));
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    f.mode.on_click(&event(1.0, 0.0, 1000.0, 0.0)).unwrap();
    f.mode.on_click(&event(1.0, 0.0, 1000.0, 0.0)).unwrap();

    f.mode.clean_up();
    assert_eq!(f.feature_count(), 1);
}

#[test]
fn test_drag_handlers_do_nothing() {
    let mut f = started(LineStringOptions::default(), QueuedProjector::default());
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    let before = f.coordinates();

    f.mode.on_drag_start();
    f.mode.on_drag();
    f.mode.on_drag_end();

    assert_eq!(f.coordinates(), before);
    assert_eq!(f.change_count(), 1);
}

#[test]
fn test_store_failure_propagates_without_notifying() {
    let mut f = started(LineStringOptions::default(), LinearProjector::new(1000.0));
    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    let session = f.mode.session().cloned();
    let id = session.as_ref().map(|s| s.feature_id());
    f.store.borrow_mut().clear();

    let err = f.mode.on_mouse_move(&event(1.0, 1.0, 1000.0, 1000.0)).unwrap_err();
    assert!(matches!(
        err,
        ModeError::Store(StoreError::FeatureNotFound { id: missing }) if Some(missing) == id
    ));

    let err = f.mode.on_click(&event(1.0, 1.0, 1000.0, 1000.0)).unwrap_err();
    assert!(matches!(err, ModeError::Store(_)));

    assert_eq!(f.change_count(), 1);
    assert!(f.mode.is_drawing());
    assert_eq!(f.mode.session().cloned(), session);
}

#[test]
fn test_only_left_button_places_vertices() {
    let mut f = started(LineStringOptions::default(), LinearProjector::new(1000.0));
    for button in [MouseButton::Right, MouseButton::Middle, MouseButton::Neither] {
        f.mode
            .on_click(&event(0.0, 0.0, 0.0, 0.0).with_button(button))
            .unwrap();
    }
    assert_eq!(f.feature_count(), 0);
    assert_eq!(f.change_count(), 0);

    f.mode.on_click(&event(0.0, 0.0, 0.0, 0.0)).unwrap();
    f.mode
        .on_click(&event(1.0, 0.0, 1000.0, 0.0).with_button(MouseButton::Right))
        .unwrap();
    assert_eq!(f.coordinates(), vec![[0.0, 0.0], [0.0, 0.0]]);
    assert_eq!(f.change_count(), 1);
}
