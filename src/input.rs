//! Platform-agnostic input vocabulary.
//!
//! The windowing system is an external collaborator; its runtime is expected
//! to map platform events into these types before handing them to the
//! controller.

/// Keyboard key identifier.
///
/// Intentionally minimal: only the keys the camera bindings consume are
/// represented. Unmapped keys carry a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Input events delivered by the host surface.
///
/// Pointer coordinates are absolute logical pixels; drag deltas are derived
/// by the controller. Wheel deltas use the 120-units-per-notch convention.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved {
        x: f32,
        y: f32,
    },
    PointerButton {
        button: MouseButton,
        state: MouseButtonState,
        x: f32,
        y: f32,
    },
    MouseWheel {
        delta: f32,
    },
    Key {
        key: Key,
        state: KeyState,
    },
}
