//! Procedural motion that runs regardless of keyframe playback.

/// Monotonic angle, wrapped to `[0, 360)` degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spinner {
    pub angle: f32,
    pub delta: f32,
    pub enabled: bool,
}

impl Spinner {
    pub fn new(delta: f32) -> Self {
        Self {
            angle: 0.0,
            delta,
            enabled: false,
        }
    }

    pub fn tick(&mut self) {
        if self.enabled {
            self.angle = (self.angle + self.delta).rem_euclid(360.0);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Rising => 1.0,
            Direction::Falling => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Rising => Direction::Falling,
            Direction::Falling => Direction::Rising,
        }
    }
}

/// Triangle wave between `min` and `max`.
///
/// The direction flips on the tick that lands on or past a bound; the angle
/// is never clamped back inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleOscillator {
    pub angle: f32,
    pub step: f32,
    pub min: f32,
    pub max: f32,
    pub direction: Direction,
    pub enabled: bool,
}

impl TriangleOscillator {
    pub fn new(step: f32, min: f32, max: f32) -> Self {
        Self {
            angle: 0.0,
            step,
            min,
            max,
            direction: Direction::Rising,
            enabled: false,
        }
    }

    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        self.angle += self.step * self.direction.sign();
        if self.angle >= self.max || self.angle <= self.min {
            self.direction = self.direction.flipped();
        }
    }
}
