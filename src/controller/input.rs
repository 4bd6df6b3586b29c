use glam::Vec2;

use super::config::Viewport;
use crate::core::{ArrowKey, InputEvent, InputListener, PointerButton, Propagation};

/// Movement intents, one per direction; any combination may be held
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementState {
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }

    fn with_key(mut self, key: ArrowKey, held: bool) -> Self {
        match key {
            ArrowKey::Up => self.forward = held,
            ArrowKey::Down => self.backward = held,
            ArrowKey::Left => self.left = held,
            ArrowKey::Right => self.right = held,
        }
        self
    }

    fn with_button(mut self, button: PointerButton, held: bool) -> Self {
        match button {
            PointerButton::Primary => self.forward = held,
            PointerButton::Secondary => self.backward = held,
            PointerButton::Auxiliary => {}
        }
        self
    }
}

/// Everything the controller learns from input events between two frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    pub movement: MovementState,
    /// Pointer offset from the viewport center in pixels.
    ///
    /// This is a position, not a per-frame motion: it keeps its value until
    /// the next pointer move, so holding the pointer off-center keeps turning.
    pub pointer_delta: Vec2,
    pub viewport: Viewport,
    vertical: bool,
}

impl InputState {
    pub fn new(viewport: Viewport, enable_vertical: bool) -> Self {
        Self {
            movement: MovementState::default(),
            pointer_delta: Vec2::ZERO,
            viewport,
            vertical: enable_vertical,
        }
    }

    /// Fold one event into the state
    pub fn apply(self, event: &InputEvent) -> Self {
        let mut next = self;
        match *event {
            InputEvent::PointerMove { x, y } => {
                let center = self.viewport.center();
                next.pointer_delta.x = x - center.x;
                if self.vertical {
                    next.pointer_delta.y = y - center.y;
                }
            }
            InputEvent::PointerDown(button) => {
                next.movement = self.movement.with_button(button, true);
            }
            InputEvent::PointerUp(button) => {
                next.movement = self.movement.with_button(button, false);
            }
            InputEvent::KeyDown(key) => next.movement = self.movement.with_key(key, true),
            InputEvent::KeyUp(key) => next.movement = self.movement.with_key(key, false),
            InputEvent::ContextMenu => {}
            InputEvent::Resize { width, height } => {
                // A minimised window reports 0x0, keep the last usable size
                if width > 0 && height > 0 {
                    next.viewport = Viewport::new(width, height);
                }
            }
        }
        next
    }
}

impl InputListener for InputState {
    fn on_event(&mut self, event: &InputEvent) -> Propagation {
        *self = self.apply(event);
        event.propagation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(vertical: bool) -> InputState {
        InputState::new(Viewport::new(800, 600), vertical)
    }

    #[test]
    fn test_new_state_idle() {
        let input = state(false);
        assert!(input.movement.is_idle());
        assert_eq!(input.pointer_delta, Vec2::ZERO);
    }

    #[test]
    fn test_keys_set_and_clear_intents() {
        let input = state(false)
            .apply(&InputEvent::KeyDown(ArrowKey::Up))
            .apply(&InputEvent::KeyDown(ArrowKey::Left));
        assert!(input.movement.forward);
        assert!(input.movement.left);
        assert!(!input.movement.backward);
        assert!(!input.movement.right);

        let input = input.apply(&InputEvent::KeyUp(ArrowKey::Up));
        assert!(!input.movement.forward);
        assert!(input.movement.left);
    }

    #[test]
    fn test_opposite_intents_coexist() {
        let input = state(false)
            .apply(&InputEvent::KeyDown(ArrowKey::Left))
            .apply(&InputEvent::KeyDown(ArrowKey::Right));
        assert!(input.movement.left && input.movement.right);
    }

    #[test]
    fn test_pointer_buttons() {
        let input = state(false).apply(&InputEvent::PointerDown(PointerButton::Primary));
        assert!(input.movement.forward);

        let input = input.apply(&InputEvent::PointerDown(PointerButton::Secondary));
        assert!(input.movement.backward);

        let input = input
            .apply(&InputEvent::PointerUp(PointerButton::Primary))
            .apply(&InputEvent::PointerUp(PointerButton::Secondary));
        assert!(input.movement.is_idle());
    }

    #[test]
    fn test_auxiliary_button_ignored() {
        let before = state(false);
        let after = before.apply(&InputEvent::PointerDown(PointerButton::Auxiliary));
        assert_eq!(before, after);
    }

    #[test]
    fn test_pointer_move_horizontal_only() {
        let input = state(false).apply(&InputEvent::PointerMove { x: 500.0, y: 100.0 });
        assert_eq!(input.pointer_delta, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_pointer_move_with_vertical() {
        let input = state(true).apply(&InputEvent::PointerMove { x: 300.0, y: 450.0 });
        assert_eq!(input.pointer_delta, Vec2::new(-100.0, 150.0));
    }

    #[test]
    fn test_pointer_delta_persists() {
        let input = state(false)
            .apply(&InputEvent::PointerMove { x: 600.0, y: 300.0 })
            .apply(&InputEvent::KeyDown(ArrowKey::Down))
            .apply(&InputEvent::KeyUp(ArrowKey::Down));
        assert_eq!(input.pointer_delta.x, 200.0);
    }

    #[test]
    fn test_context_menu_changes_nothing() {
        let before = state(true).apply(&InputEvent::KeyDown(ArrowKey::Up));
        let after = before.apply(&InputEvent::ContextMenu);
        assert_eq!(before, after);
    }

    #[test]
    fn test_resize_moves_center() {
        let input = state(false)
            .apply(&InputEvent::Resize {
                width: 1000,
                height: 1000,
            })
            .apply(&InputEvent::PointerMove { x: 500.0, y: 0.0 });
        assert_eq!(input.pointer_delta.x, 0.0);
    }

    #[test]
    fn test_zero_resize_ignored() {
        let input = state(false).apply(&InputEvent::Resize {
            width: 0,
            height: 0,
        });
        assert_eq!(input.viewport, Viewport::new(800, 600));
    }

    #[test]
    fn test_listener_reports_propagation() {
        let mut input = state(false);
        assert_eq!(input.on_event(&InputEvent::ContextMenu), Propagation::Stop);
        assert_eq!(
            input.on_event(&InputEvent::KeyDown(ArrowKey::Right)),
            Propagation::Continue
        );
        assert!(input.movement.right);
    }
}
