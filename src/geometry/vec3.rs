use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector when the input has no length.
    pub fn normalize(&self) -> Self {
        let norm = self.dot(*self).sqrt();
        if norm == 0.0 {
            return Self::ZERO;
        }
        *self * (1.0 / norm)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Vec3 {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
            z: f(self.z, other.z),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, other: f32) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn add_and_scale_are_component_wise() {
        let v = Vec3::new(1.0, -2.0, 0.5) + Vec3::new(0.5, 1.0, 1.5) * 2.0;
        assert_eq!(v, Vec3::new(2.0, 0.0, 3.5));
        assert_eq!(<[f32; 3]>::from(v), [2.0, 0.0, 3.5]);
    }

    #[test]
    fn normalize_keeps_direction() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert_relative_eq!(v.x, 0.6);
        assert_relative_eq!(v.z, 0.8);
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }
}
