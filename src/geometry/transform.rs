/// Affine transform stored as three basis rows plus a translation.
///
/// A point `p` maps to `p.x * rows[0] + p.y * rows[1] + p.z * rows[2] + translation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotation_scale: [[f32; 3]; 3],
    pub translation: [f32; 3],
}

impl Transform {
    pub fn new() -> Self {
        Transform {
            rotation_scale: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0; 3],
        }
    }

    pub fn left(&self) -> [f32; 3] {
        self.rotation_scale[0]
    }

    pub fn up(&self) -> [f32; 3] {
        self.rotation_scale[1]
    }

    pub fn forward(&self) -> [f32; 3] {
        self.rotation_scale[2]
    }

    pub fn translate_world(&self, offset: [f32; 3]) -> Self {
        Transform {
            translation: [
                self.translation[0] + offset[0],
                self.translation[1] + offset[1],
                self.translation[2] + offset[2],
            ],
            rotation_scale: self.rotation_scale,
        }
    }

    pub fn scale(&self, coeffs: [f32; 3]) -> Self {
        let mut rotation_scale = self.rotation_scale;
        for row in &mut rotation_scale {
            for (value, coeff) in row.iter_mut().zip(coeffs) {
                *value *= coeff;
            }
        }
        Transform {
            rotation_scale,
            translation: self.translation,
        }
    }

    pub fn rotate_x_world(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let rotate = |v: [f32; 3]| [v[0], v[1] * c - v[2] * s, v[1] * s + v[2] * c];
        self.map_world(rotate)
    }

    pub fn rotate_y_world(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let rotate = |v: [f32; 3]| [v[0] * c + v[2] * s, v[1], v[2] * c - v[0] * s];
        self.map_world(rotate)
    }

    pub fn rotate_z_world(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let rotate = |v: [f32; 3]| [v[0] * c - v[1] * s, v[1] * c + v[0] * s, v[2]];
        self.map_world(rotate)
    }

    fn map_world(&self, f: impl Fn([f32; 3]) -> [f32; 3]) -> Self {
        Transform {
            rotation_scale: [
                f(self.rotation_scale[0]),
                f(self.rotation_scale[1]),
                f(self.rotation_scale[2]),
            ],
            translation: f(self.translation),
        }
    }

    /// Only works for non-scaled transforms
    pub fn reverse(&self) -> Self {
        let r = &self.rotation_scale;
        let t = &self.translation;
        Transform {
            rotation_scale: [
                [r[0][0], r[1][0], r[2][0]],
                [r[0][1], r[1][1], r[2][1]],
                [r[0][2], r[1][2], r[2][2]],
            ],
            translation: [
                -t[0] * r[0][0] - t[1] * r[0][1] - t[2] * r[0][2],
                -t[0] * r[1][0] - t[1] * r[1][1] - t[2] * r[1][2],
                -t[0] * r[2][0] - t[1] * r[2][1] - t[2] * r[2][2],
            ],
        }
    }

    pub fn to_homogeneous(&self) -> [[f32; 4]; 4] {
        let r = &self.rotation_scale;
        let t = &self.translation;
        [
            [r[0][0], r[0][1], r[0][2], 0.0],
            [r[1][0], r[1][1], r[1][2], 0.0],
            [r[2][0], r[2][1], r[2][2], 0.0],
            [t[0], t[1], t[2], 1.0],
        ]
    }

    /// `self.compose(other)` applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let row = |v: [f32; 3]| -> [f32; 3] {
            let r = &self.rotation_scale;
            [
                v[0] * r[0][0] + v[1] * r[1][0] + v[2] * r[2][0],
                v[0] * r[0][1] + v[1] * r[1][1] + v[2] * r[2][1],
                v[0] * r[0][2] + v[1] * r[1][2] + v[2] * r[2][2],
            ]
        };
        let translation = row(other.translation);
        Transform {
            rotation_scale: [
                row(other.rotation_scale[0]),
                row(other.rotation_scale[1]),
                row(other.rotation_scale[2]),
            ],
            translation: [
                translation[0] + self.translation[0],
                translation[1] + self.translation[1],
                translation[2] + self.translation[2],
            ],
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::new()
    }
}
