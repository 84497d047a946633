#![cfg(not(target_arch = "wasm32"))]

use webgl_viz::demos::{Demo, Eigshow};
use webgl_viz::geometry::Vec2;
use webgl_viz::interaction::{DragState, GrabRule, InteractionState, PointerMove};

const RULE: GrabRule = GrabRule {
    max_magnitude: 100.0,
    perp_tolerance: 0.1,
};

#[test]
fn hover_then_press_drags() {
    let reference = Vec2::Y;
    let mut s = InteractionState::default();
    assert_eq!(s.state(), DragState::Idle);

    assert_eq!(
        s.pointer_move(Vec2::new(0.0, 40.0), reference, RULE),
        PointerMove::Hover { near: true }
    );
    assert_eq!(s.state(), DragState::Hovering);

    s.pointer_down();
    assert_eq!(s.state(), DragState::Dragging);
    let p = Vec2::new(-30.0, 5.0);
    assert_eq!(s.pointer_move(p, reference, RULE), PointerMove::Drag(p));

    s.pointer_up();
    assert_eq!(s.state(), DragState::Hovering);
    assert!(!s.is_button_down());
}

#[test]
fn press_while_idle_never_drags() {
    let reference = Vec2::Y;
    let mut s = InteractionState::default();
    s.pointer_down();
    assert_eq!(s.state(), DragState::Idle);

    // Arriving over the vector with the button already held only hovers.
    assert_eq!(
        s.pointer_move(Vec2::new(0.0, 40.0), reference, RULE),
        PointerMove::Hover { near: true }
    );
    s.pointer_down();
    assert!(!s.is_dragging());

    s.pointer_up();
    s.pointer_down();
    assert!(s.is_dragging());
}

#[test]
fn leaving_the_vector_returns_to_idle() {
    let mut s = InteractionState::default();
    s.pointer_move(Vec2::new(0.0, 40.0), Vec2::Y, RULE);
    s.pointer_move(Vec2::new(40.0, 40.0), Vec2::Y, RULE);
    assert_eq!(s.state(), DragState::Idle);
}

#[test]
fn idle_press_leaves_eigshow_vector_unchanged() {
    let mut demo = Eigshow::default();
    let before = demo.vector();
    demo.pointer_down();
    demo.pointer_move(Vec2::new(70.0, 20.0));
    demo.pointer_move(Vec2::new(-20.0, 30.0));
    assert_eq!(demo.vector(), before);
}
