use std::num::NonZeroU32;

use crate::animation::Pose;

/// Per-step change of every pose field between two adjacent keyframes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Increments(Pose);

impl Increments {
    pub fn per_step(&self) -> &Pose {
        &self.0
    }
}

pub fn compute_increments(from: &Pose, to: &Pose, step_count: NonZeroU32) -> Increments {
    let steps = step_count.get() as f32;
    Increments(to.zip_with(*from, |b, a| (b - a) / steps))
}

/// Moves `live` one step along `increments`.
pub fn advance(live: Pose, increments: &Increments) -> Pose {
    live + increments.0
}
