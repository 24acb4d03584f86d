use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::geometry::Vec3;

/// Parameters of the articulated model at one instant. Angles are in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    pub position: Vec3,
    pub yaw: f32,
    pub head: f32,
    pub tail: f32,
    pub front_legs: f32,
    pub rear_legs: f32,
}

impl Pose {
    pub fn at(position: Vec3) -> Self {
        Pose {
            position,
            ..Default::default()
        }
    }

    pub fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Pose {
            position: self.position.zip_with(other.position, &f),
            yaw: f(self.yaw, other.yaw),
            head: f(self.head, other.head),
            tail: f(self.tail, other.tail),
            front_legs: f(self.front_legs, other.front_legs),
            rear_legs: f(self.rear_legs, other.rear_legs),
        }
    }

    /// Largest absolute per-field difference between two poses.
    pub fn max_difference(&self, other: &Self) -> f32 {
        let diff = self.zip_with(*other, |a, b| (a - b).abs());
        [
            diff.position.x,
            diff.position.y,
            diff.position.z,
            diff.yaw,
            diff.head,
            diff.tail,
            diff.front_legs,
            diff.rear_legs,
        ]
        .into_iter()
        .fold(0.0, f32::max)
    }
}

impl Add for Pose {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }
}
