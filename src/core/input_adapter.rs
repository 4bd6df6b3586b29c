use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::event::{ArrowKey, InputEvent, PointerButton};

/// Translate a Winit WindowEvent into the controller's input events.
///
/// Returns an empty list for events the controller does not care about.
/// A right-button press also yields [`InputEvent::ContextMenu`], mirroring
/// what a browser fires after the button goes down.
pub fn translate(event: &WindowEvent) -> Vec<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => vec![InputEvent::PointerMove {
            x: position.x as f32,
            y: position.y as f32,
        }],
        WindowEvent::MouseInput { state, button, .. } => {
            let button = pointer_button(*button);
            match state {
                ElementState::Pressed if button == PointerButton::Secondary => {
                    vec![InputEvent::PointerDown(button), InputEvent::ContextMenu]
                }
                ElementState::Pressed => vec![InputEvent::PointerDown(button)],
                ElementState::Released => vec![InputEvent::PointerUp(button)],
            }
        }
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(keycode) = event.physical_key else {
                return Vec::new();
            };
            match (arrow_key(keycode), event.state) {
                (Some(key), ElementState::Pressed) => vec![InputEvent::KeyDown(key)],
                (Some(key), ElementState::Released) => vec![InputEvent::KeyUp(key)],
                (None, _) => Vec::new(),
            }
        }
        WindowEvent::Resized(size) => vec![InputEvent::Resize {
            width: size.width,
            height: size.height,
        }],
        _ => Vec::new(),
    }
}

/// Map Winit KeyCode to ArrowKey
pub fn arrow_key(keycode: KeyCode) -> Option<ArrowKey> {
    match keycode {
        KeyCode::ArrowUp => Some(ArrowKey::Up),
        KeyCode::ArrowDown => Some(ArrowKey::Down),
        KeyCode::ArrowLeft => Some(ArrowKey::Left),
        KeyCode::ArrowRight => Some(ArrowKey::Right),
        _ => None,
    }
}

/// Map Winit MouseButton to PointerButton
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Auxiliary,
    }
}
