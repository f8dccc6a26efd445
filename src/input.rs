use std::collections::HashMap;

use cgmath::Vector2;
use glium::glutin::dpi::PhysicalPosition;
use glium::glutin::event::{ElementState, KeyboardInput, VirtualKeyCode};

use crate::vector2;

/// Input state gathered from window events, read back once per frame.
pub struct Input {
    pub keyboard: KeyboardMap,
    pub mouse: MouseState,
}

impl Input {
    /// `cursor` seeds the mouse position so that the first frame does not see
    /// a spurious movement from (0, 0).
    pub fn new(cursor: Vector2<f32>) -> Self {
        Input {
            keyboard: KeyboardMap::new(),
            mouse: MouseState::new(cursor),
        }
    }
}

/// Represents the state of the keyboard.
///
/// Maintains a `HashMap` of `VirtualKeyCode` variants and the current `ElementState` they are observed to be in.
/// Processes `KeyboardInput` events as they are received and updates the state accordingly.
pub struct KeyboardMap {
    map: HashMap<VirtualKeyCode, ElementState>,
}

impl KeyboardMap {
    pub fn new() -> Self {
        KeyboardMap {
            map: HashMap::new(),
        }
    }

    /// Checks whether a key is currently pressed.
    pub fn is_pressed(&self, virtual_keycode: VirtualKeyCode) -> bool {
        match self.map.get(&virtual_keycode) {
            Some(ElementState::Pressed) => true,
            _ => false,
        }
    }

    /// Processes a `KeyboardInput` event and updates the `KeyboardMap` state accordingly.
    pub fn process_event(&mut self, event: KeyboardInput) {
        match event {
            KeyboardInput {
                virtual_keycode: Some(code),
                state,
                ..
            } => match state {
                ElementState::Pressed => self.map.insert(code, state),
                ElementState::Released => self.map.remove(&code),
            },
            _ => return,
        };
    }
}

/// Tracks the latest observed cursor position in window coordinates.
///
/// The camera reads cursor movement relative to the viewport center each
/// frame; after the cursor is warped back to the center, `recenter` resets the
/// stored position so a frame without mouse events reads as no movement.
pub struct MouseState {
    position: Vector2<f32>,
}

impl MouseState {
    pub fn new(position: Vector2<f32>) -> Self {
        MouseState { position }
    }

    /// Processes a cursor-moved event.
    pub fn process_event(&mut self, position: PhysicalPosition<f64>) {
        self.position = vector2!(position.x as f32, position.y as f32);
    }

    /// How far the cursor has travelled from `origin`.
    pub fn movement_from(&self, origin: Vector2<f32>) -> Vector2<f32> {
        self.position - origin
    }

    pub fn recenter(&mut self, center: Vector2<f32>) {
        self.position = center;
    }
}

#[cfg(test)]
mod tests {
    use glium::glutin::dpi::PhysicalPosition;
    use glium::glutin::event::{ElementState, KeyboardInput, ScanCode, VirtualKeyCode};

    use super::{KeyboardMap, MouseState};
    use crate::vector2;

    #[allow(deprecated)]
    fn key_event(code: VirtualKeyCode, state: ElementState) -> KeyboardInput {
        KeyboardInput {
            scancode: 0 as ScanCode,
            state,
            virtual_keycode: Some(code),
            modifiers: Default::default(),
        }
    }

    #[test]
    fn test_key_pressed_after_press_event() {
        let mut keyboard = KeyboardMap::new();
        keyboard.process_event(key_event(VirtualKeyCode::W, ElementState::Pressed));

        assert!(keyboard.is_pressed(VirtualKeyCode::W));
        assert!(!keyboard.is_pressed(VirtualKeyCode::S));
    }

    #[test]
    fn test_key_released_after_release_event() {
        let mut keyboard = KeyboardMap::new();
        keyboard.process_event(key_event(VirtualKeyCode::A, ElementState::Pressed));
        keyboard.process_event(key_event(VirtualKeyCode::A, ElementState::Released));

        assert!(!keyboard.is_pressed(VirtualKeyCode::A));
    }

    #[test]
    fn test_mouse_movement_is_measured_from_origin() {
        let mut mouse = MouseState::new(vector2!(400.0, 300.0));
        mouse.process_event(PhysicalPosition::new(410.0, 280.0));

        let movement = mouse.movement_from(vector2!(400.0, 300.0));
        assert_eq!(movement, vector2!(10.0, -20.0));
    }

    #[test]
    fn test_mouse_movement_is_zero_after_recenter() {
        let mut mouse = MouseState::new(vector2!(400.0, 300.0));
        mouse.process_event(PhysicalPosition::new(150.0, 600.0));
        mouse.recenter(vector2!(400.0, 300.0));

        let movement = mouse.movement_from(vector2!(400.0, 300.0));
        assert_eq!(movement, vector2!(0.0, 0.0));
    }
}
