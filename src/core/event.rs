/// Pointer button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button
    Primary,
    /// Usually the right mouse button
    Secondary,
    /// Any other button (middle, back, forward...)
    Auxiliary,
}

/// Arrow key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

/// Toolkit-independent input event consumed by the camera controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position in surface pixels, origin at the top-left corner
    PointerMove { x: f32, y: f32 },
    PointerDown(PointerButton),
    PointerUp(PointerButton),
    KeyDown(ArrowKey),
    KeyUp(ArrowKey),
    /// Request for the native context menu
    ContextMenu,
    /// Rendering surface changed size
    Resize { width: u32, height: u32 },
}

/// Whether the host should keep running its default handling for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

impl Propagation {
    /// Combine the answers of two listeners; any `Stop` wins
    pub fn merge(self, other: Propagation) -> Propagation {
        match (self, other) {
            (Propagation::Continue, Propagation::Continue) => Propagation::Continue,
            _ => Propagation::Stop,
        }
    }
}

impl InputEvent {
    /// Pointer events and the context menu are swallowed, keys are not
    pub fn propagation(&self) -> Propagation {
        match self {
            InputEvent::PointerMove { .. }
            | InputEvent::PointerDown(_)
            | InputEvent::PointerUp(_)
            | InputEvent::ContextMenu => Propagation::Stop,
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) | InputEvent::Resize { .. } => {
                Propagation::Continue
            }
        }
    }
}
