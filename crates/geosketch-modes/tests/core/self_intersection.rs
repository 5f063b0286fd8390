//! Self-intersection guard wired into the click protocol

use geosketch_core::{PointerEvent, Position};
use geosketch_modes::{DrawMode, LineStringOptions};

use crate::support::{started, Fixture};

// A recorded map path whose fourth vertex crosses the first segment.
const PATH: [Position; 4] = [
    [6.50390625, 32.99023555965106],
    [-9.931640625, 5.090944175033399],
    [19.86328125, 2.0210651187669897],
    [-8.173828125, 24.367113562651262],
];

fn at(position: Position) -> PointerEvent {
    // container coordinates equal the geographic ones
    PointerEvent::new(position[0], position[1], position[0], position[1])
}

/// Projects far apart so no click counts as closing.
fn fixture(allow_self_intersections: bool) -> Fixture {
    let options = LineStringOptions {
        allow_self_intersections,
        ..Default::default()
    };
    started(options, |lng: f64, lat: f64| {
        geosketch_core::ScreenPoint::new(lng * 1000.0, lat * 1000.0)
    })
}

fn draw_first_three(f: &mut Fixture) {
    f.mode.on_click(&at(PATH[0])).unwrap();
    f.mode.on_mouse_move(&at(PATH[1])).unwrap();
    f.mode.on_click(&at(PATH[1])).unwrap();
    f.mode.on_mouse_move(&at(PATH[2])).unwrap();
    f.mode.on_click(&at(PATH[2])).unwrap();
    f.mode.on_mouse_move(&at(PATH[3])).unwrap();
}

#[test]
fn test_crossing_click_is_ignored() {
    let mut f = fixture(false);
    draw_first_three(&mut f);
    assert_eq!(f.change_count(), 6);
    let before = f.coordinates();

    f.mode.on_click(&at(PATH[3])).unwrap();

    assert_eq!(f.change_count(), 6);
    assert_eq!(f.coordinates(), before);
    assert!(f.mode.is_drawing());
}

#[test]
fn test_line_continues_after_rejection() {
    let mut f = fixture(false);
    draw_first_three(&mut f);
    f.mode.on_click(&at(PATH[3])).unwrap();

    // a vertex further right does not cross anything
    f.mode.on_click(&at([30.0, 10.0])).unwrap();
    assert_eq!(f.change_count(), 7);
    assert_eq!(f.coordinates()[3], [30.0, 10.0]);
}

#[test]
fn test_crossing_allowed_by_default() {
    let mut f = fixture(true);
    draw_first_three(&mut f);
    f.mode.on_click(&at(PATH[3])).unwrap();

    assert_eq!(f.change_count(), 7);
    assert_eq!(f.coordinates().len(), 5);
}
