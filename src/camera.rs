use serde::{Deserialize, Serialize};

use crate::{
    controls::MoveKeys,
    geometry::{Transform, Vec3},
    input::Input,
};

const PITCH_MAX: f32 = 1.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    /// Units per tick.
    pub move_speed: f32,
    /// Radians per unit of raw mouse motion.
    pub look_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.5, -3.0],
            move_speed: 0.05,
            look_speed: 0.002,
        }
    }
}

/// Free-fly camera: held keys move it along its own axes, mouse motion
/// turns it.
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    move_speed: f32,
    look_speed: f32,
}

impl FlyCamera {
    pub fn new(settings: &CameraSettings) -> Self {
        Self {
            position: settings.position.into(),
            yaw: 0.0,
            pitch: 0.0,
            move_speed: settings.move_speed,
            look_speed: settings.look_speed,
        }
    }

    pub fn update(&mut self, input: &Input, keys: &MoveKeys) {
        self.yaw += input.mouse.raw_x as f32 * self.look_speed;
        self.pitch = (self.pitch + input.mouse.raw_y as f32 * self.look_speed)
            .clamp(-PITCH_MAX, PITCH_MAX);

        let (right, forward) = keys.axes(input);
        if right != 0.0 || forward != 0.0 {
            let transform = self.transform();
            let direction = Vec3::from(transform.forward()) * forward
                + Vec3::from(transform.left()) * right;
            self.position = self.position + direction.normalize() * self.move_speed;
        }
    }

    /// World transform of the camera; its forward row is the view direction.
    pub fn transform(&self) -> Transform {
        Transform::new()
            .rotate_x_world(self.pitch)
            .rotate_y_world(self.yaw)
            .translate_world(self.position.into())
    }
}
