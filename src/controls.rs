use serde::{Deserialize, Serialize};
use winit::event::VirtualKeyCode;

use crate::{
    animation::{AnimationCommand, Pose},
    geometry::Vec3,
    input::Input,
};

/// Two keys driving one value down and up while held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub decrease: VirtualKeyCode,
    pub increase: VirtualKeyCode,
}

impl KeyPair {
    pub const fn new(decrease: VirtualKeyCode, increase: VirtualKeyCode) -> Self {
        Self { decrease, increase }
    }

    /// `-1.0`, `0.0` or `1.0` depending on which keys are held.
    pub fn axis(&self, input: &Input) -> f32 {
        let mut value = 0.0;
        if input.key(self.increase).held {
            value += 1.0;
        }
        if input.key(self.decrease).held {
            value -= 1.0;
        }
        value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys {
    pub forward: VirtualKeyCode,
    pub back: VirtualKeyCode,
    pub left: VirtualKeyCode,
    pub right: VirtualKeyCode,
}

impl MoveKeys {
    /// Held direction as `(right, forward)`, each in `[-1, 1]`.
    pub fn axes(&self, input: &Input) -> (f32, f32) {
        (
            KeyPair::new(self.left, self.right).axis(input),
            KeyPair::new(self.back, self.forward).axis(input),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bindings {
    pub capture: VirtualKeyCode,
    pub play: VirtualKeyCode,
    pub cancel: VirtualKeyCode,
    pub clear: VirtualKeyCode,
    pub toggle_ball: VirtualKeyCode,
    pub toggle_dog: VirtualKeyCode,
    pub save: VirtualKeyCode,
    pub load: VirtualKeyCode,
    pub quit: VirtualKeyCode,
    pub camera: MoveKeys,
    pub body: MoveKeys,
    pub body_height: KeyPair,
    pub yaw: KeyPair,
    pub head: KeyPair,
    pub tail: KeyPair,
    pub front_legs: KeyPair,
    pub rear_legs: KeyPair,
}

impl Default for Bindings {
    fn default() -> Self {
        use VirtualKeyCode::*;
        Self {
            capture: L,
            play: P,
            cancel: O,
            clear: Back,
            toggle_ball: N,
            toggle_dog: Q,
            save: F5,
            load: F9,
            quit: Escape,
            camera: MoveKeys {
                forward: W,
                back: S,
                left: A,
                right: D,
            },
            body: MoveKeys {
                forward: Up,
                back: Down,
                left: Left,
                right: Right,
            },
            body_height: KeyPair::new(PageDown, PageUp),
            yaw: KeyPair::new(Z, X),
            head: KeyPair::new(Key1, Key2),
            tail: KeyPair::new(Key3, Key4),
            front_legs: KeyPair::new(Key5, Key6),
            rear_legs: KeyPair::new(Key7, Key8),
        }
    }
}

impl Bindings {
    /// Commands whose key went down since the last tick, in a fixed order.
    pub fn commands(&self, input: &Input) -> Vec<AnimationCommand> {
        [
            (self.cancel, AnimationCommand::CancelPlayback),
            (self.clear, AnimationCommand::ClearCaptures),
            (self.load, AnimationCommand::LoadKeyframes),
            (self.capture, AnimationCommand::CapturePose),
            (self.save, AnimationCommand::SaveKeyframes),
            (self.play, AnimationCommand::StartPlayback),
            (self.toggle_ball, AnimationCommand::ToggleBall),
            (self.toggle_dog, AnimationCommand::ToggleDog),
        ]
        .into_iter()
        .filter(|(key, _)| input.key(*key).pressed)
        .map(|(_, command)| command)
        .collect()
    }

    pub fn quit_requested(&self, input: &Input) -> bool {
        input.key(self.quit).pressed
    }

    /// Change to the live pose requested by held posing keys this tick.
    pub fn manual_delta(&self, input: &Input, speed: &ManualSpeed) -> Pose {
        let (right, forward) = self.body.axes(input);
        let up = self.body_height.axis(input);
        Pose {
            position: Vec3::new(right, up, forward) * speed.translation,
            yaw: self.yaw.axis(input) * speed.rotation,
            head: self.head.axis(input) * speed.rotation,
            tail: self.tail.axis(input) * speed.rotation,
            front_legs: self.front_legs.axis(input) * speed.rotation,
            rear_legs: self.rear_legs.axis(input) * speed.rotation,
        }
    }
}

/// Manual posing rates, per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualSpeed {
    pub translation: f32,
    /// Degrees.
    pub rotation: f32,
}

impl Default for ManualSpeed {
    fn default() -> Self {
        Self {
            translation: 0.02,
            rotation: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_keys_become_commands() {
        let bindings = Bindings::default();
        let mut input = Input::new();
        input.keyboard.press(bindings.play);
        input.keyboard.press(bindings.capture);
        assert_eq!(
            bindings.commands(&input),
            [AnimationCommand::CapturePose, AnimationCommand::StartPlayback]
        );
        input.reset();
        assert!(bindings.commands(&input).is_empty());
    }

    #[test]
    fn held_keys_pose_the_model() {
        let bindings = Bindings::default();
        let speed = ManualSpeed {
            translation: 0.5,
            rotation: 2.0,
        };
        let mut input = Input::new();
        input.keyboard.press(bindings.body.right);
        input.keyboard.press(bindings.yaw.decrease);
        input.keyboard.press(bindings.head.increase);
        input.keyboard.press(bindings.head.decrease);
        input.reset();

        let delta = bindings.manual_delta(&input, &speed);
        assert_eq!(delta.position, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(delta.yaw, -2.0);
        assert_eq!(delta.head, 0.0);
    }

    #[test]
    fn quit_is_edge_triggered() {
        let bindings = Bindings::default();
        let mut input = Input::new();
        input.keyboard.press(VirtualKeyCode::Escape);
        assert!(bindings.quit_requested(&input));
        input.reset();
        assert!(!bindings.quit_requested(&input));
    }
}
