use winit::event::{self, DeviceEvent, ElementState, VirtualKeyCode};

/// Input gathered since the last simulation tick.
///
/// Key presses and releases are edges: they stay visible for exactly one
/// tick, until `reset` is called.
pub struct Input {
    pub mouse: MouseInput,
    pub keyboard: KeyboardInput,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            mouse: MouseInput::new(),
            keyboard: KeyboardInput::new(),
        }
    }

    pub fn update(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::MouseMotion { delta: (x, y) } => self.mouse.update_delta(x, y),
            DeviceEvent::Key(event::KeyboardInput {
                virtual_keycode: Some(key),
                state,
                ..
            }) => match state {
                ElementState::Pressed => self.keyboard.press(key),
                ElementState::Released => self.keyboard.release(key),
            },
            _ => {}
        }
    }

    pub fn key(&self, key: VirtualKeyCode) -> KeyState {
        self.keyboard.get(key)
    }

    pub fn reset(&mut self) {
        self.mouse.reset();
        self.keyboard.reset();
    }
}

pub struct MouseInput {
    pub raw_x: f64,
    pub raw_y: f64,
}

impl Default for MouseInput {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseInput {
    pub fn new() -> Self {
        Self {
            raw_x: 0.0,
            raw_y: 0.0,
        }
    }

    pub fn update_delta(&mut self, x: f64, y: f64) {
        self.raw_x += x;
        self.raw_y += y;
    }

    pub fn reset(&mut self) {
        self.raw_x = 0.0;
        self.raw_y = 0.0;
    }
}

const KEY_COUNT: usize = VirtualKeyCode::Cut as usize + 1;

pub struct KeyboardInput {
    keys: [KeyState; KEY_COUNT],
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self {
            keys: [KeyState::new(); KEY_COUNT],
        }
    }

    pub fn get(&self, key: VirtualKeyCode) -> KeyState {
        self.keys.get(key as usize).copied().unwrap_or_default()
    }

    /// Auto-repeated presses of a key already held do not count as new edges.
    pub fn press(&mut self, key: VirtualKeyCode) {
        if let Some(key_state) = self.keys.get_mut(key as usize) {
            if !key_state.held {
                key_state.pressed = true;
            }
            key_state.held = true;
        }
    }

    pub fn release(&mut self, key: VirtualKeyCode) {
        if let Some(key_state) = self.keys.get_mut(key as usize) {
            key_state.released = true;
            key_state.held = false;
        }
    }

    pub fn reset(&mut self) {
        for key in &mut self.keys {
            key.reset();
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyState {
    pub held: bool,
    pub released: bool,
    pub pressed: bool,
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            held: false,
            released: false,
            pressed: false,
        }
    }

    pub fn reset(&mut self) {
        self.released = false;
        self.pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_an_edge_and_hold_is_a_level() {
        let mut input = Input::new();
        input.keyboard.press(VirtualKeyCode::P);
        let key = input.key(VirtualKeyCode::P);
        assert!(key.pressed && key.held && !key.released);

        input.reset();
        let key = input.key(VirtualKeyCode::P);
        assert!(!key.pressed && key.held);

        input.keyboard.release(VirtualKeyCode::P);
        let key = input.key(VirtualKeyCode::P);
        assert!(key.released && !key.held);
        input.reset();
        assert_eq!(input.key(VirtualKeyCode::P), KeyState::new());
    }

    #[test]
    fn repeated_press_while_held_is_not_a_new_edge() {
        let mut keyboard = KeyboardInput::new();
        keyboard.press(VirtualKeyCode::L);
        keyboard.reset();
        keyboard.press(VirtualKeyCode::L);
        assert!(!keyboard.get(VirtualKeyCode::L).pressed);
    }

    #[test]
    fn mouse_motion_accumulates_until_reset() {
        let mut input = Input::new();
        input.update(DeviceEvent::MouseMotion { delta: (2.0, -1.0) });
        input.update(DeviceEvent::MouseMotion { delta: (0.5, 0.5) });
        assert_eq!((input.mouse.raw_x, input.mouse.raw_y), (2.5, -0.5));
        input.reset();
        assert_eq!((input.mouse.raw_x, input.mouse.raw_y), (0.0, 0.0));
    }

    #[test]
    fn every_key_code_has_a_slot() {
        let mut keyboard = KeyboardInput::new();
        keyboard.press(VirtualKeyCode::Cut);
        assert!(keyboard.get(VirtualKeyCode::Cut).held);
    }
}
