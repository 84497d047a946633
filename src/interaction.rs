//! Pointer grab/drag handling for vectors anchored at the surface centre.

use crate::geometry::{is_near_vector, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is within grab tolerance, button up (or held since before it
    /// arrived).
    Hovering,
    Dragging,
}

/// Parameters of [`is_near_vector`] for one draggable vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrabRule {
    pub max_magnitude: f64,
    pub perp_tolerance: f64,
}

/// What a pointer move means for the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerMove {
    /// The dragged vector should follow this point.
    Drag(Vec2),
    Hover { near: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    state: DragState,
    button_down: bool,
}

impl InteractionState {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_button_down(&self) -> bool {
        self.button_down
    }

    pub fn is_hovering(&self) -> bool {
        self.state == DragState::Hovering
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Only a press that lands while hovering starts a drag.
    pub fn pointer_down(&mut self) {
        if self.state == DragState::Hovering && !self.button_down {
            self.state = DragState::Dragging;
        }
        self.button_down = true;
    }

    pub fn pointer_up(&mut self) {
        if self.state == DragState::Dragging {
            self.state = DragState::Hovering;
        }
        self.button_down = false;
    }

    pub fn pointer_move(&mut self, query: Vec2, reference: Vec2, rule: GrabRule) -> PointerMove {
        if self.state == DragState::Dragging {
            return PointerMove::Drag(query);
        }
        let near = is_near_vector(query, reference, rule.max_magnitude, rule.perp_tolerance);
        self.state = if near { DragState::Hovering } else { DragState::Idle };
        PointerMove::Hover { near }
    }
}

/// Client coordinates to surface-local ones: origin at the centre of `rect`,
/// y pointing up. `rect` is `(left, top, width, height)`.
pub fn surface_point(client: Vec2, rect: (f64, f64, f64, f64)) -> Vec2 {
    let (left, top, width, height) = rect;
    let bottom = top + height;
    Vec2::new(
        client.x - left - width / 2.0,
        bottom - client.y - height / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_centre_is_origin() {
        let rect = (10.0, 20.0, 400.0, 300.0);
        assert_eq!(surface_point(Vec2::new(210.0, 170.0), rect), Vec2::ZERO);
        assert_eq!(surface_point(Vec2::new(210.0, 20.0), rect), Vec2::new(0.0, 150.0));
        assert_eq!(surface_point(Vec2::new(10.0, 320.0), rect), Vec2::new(-200.0, -150.0));
    }
}
