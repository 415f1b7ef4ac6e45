use studio_core::geometry::{Point, Rect, Size};
use studio_core::pointer::{PointerEvent, PointerPhase, TouchPoint};
use studio_core::widget::{DEFAULT_ANCHOR_INSET, DEFAULT_EDGE_MARGIN, DragBounds, DragController};

fn bounds() -> DragBounds {
    DragBounds::new(Size::new(390.0, 844.0), Size::new(56.0, 56.0), DEFAULT_EDGE_MARGIN)
}

#[test]
fn mixed_device_session_stays_in_bounds() {
    let b = bounds();
    let mut ctl = DragController::new(b.bottom_right_anchor(DEFAULT_ANCHOR_INSET));
    let pos = ctl.position();
    let rect = Rect::new(pos.left, pos.top, 56.0, 56.0);

    let touch = |x, y| TouchPoint {
        identifier: 7,
        client_x: x,
        client_y: y,
    };
    let press = PointerEvent::touch(&[touch(pos.left + 28.0, pos.top + 28.0)], PointerPhase::Down, Point::default())
        .expect("contact present");
    ctl.start_drag(&press, rect);

    let path = [(-40.0, 10.0), (195.0, 422.0), (1000.0, -30.0), (380.0, 900.0)];
    for (x, y) in path {
        let ev = PointerEvent::touch(&[touch(x, y)], PointerPhase::Move, Point::default())
            .expect("contact present");
        let update = ctl.update_drag(&ev, &b);
        let p = update.position().expect("session active");
        assert!(b.contains(p), "{p:?} outside {b:?}");
    }

    let release = PointerEvent::touch(&[], PointerPhase::Cancel, Point::new(380.0, 900.0))
        .expect("release without contacts");
    assert!(release.phase.is_release());
    assert!(ctl.end_drag());
    assert!(!ctl.is_tap());
}

#[test]
fn touch_press_without_contacts_is_rejected() {
    assert!(PointerEvent::touch(&[], PointerPhase::Down, Point::default()).is_none());
    assert!(PointerEvent::touch(&[], PointerPhase::Move, Point::default()).is_none());
}

#[test]
fn stationary_press_release_is_a_tap_once() {
    let b = bounds();
    let mut ctl = DragController::new(b.bottom_right_anchor(DEFAULT_ANCHOR_INSET));
    let pos = ctl.position();
    let rect = Rect::new(pos.left, pos.top, 56.0, 56.0);

    ctl.start_drag(&PointerEvent::mouse(pos.left + 1.0, pos.top + 1.0, PointerPhase::Down), rect);
    assert!(!ctl.is_tap(), "no tap while the button is still down");
    ctl.end_drag();
    assert!(ctl.is_tap());
}
