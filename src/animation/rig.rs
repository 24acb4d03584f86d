use crate::{animation::Pose, geometry::Transform};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Floor,
    Body,
    Head,
    Tail,
    FrontLeftLeg,
    FrontRightLeg,
    RearLeftLeg,
    RearRightLeg,
    Ball,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Which animated value turns a part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drive {
    Fixed,
    BodyYaw,
    Head,
    Tail,
    FrontLegs,
    RearLegs,
    BallSpin,
}

impl Drive {
    fn angle(self, pose: &Pose, ball_angle: f32) -> f32 {
        match self {
            Drive::Fixed => 0.0,
            Drive::BodyYaw => pose.yaw,
            Drive::Head => pose.head,
            Drive::Tail => pose.tail,
            Drive::FrontLegs => pose.front_legs,
            Drive::RearLegs => pose.rear_legs,
            Drive::BallSpin => ball_angle,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PartSpec {
    pub part: Part,
    pub asset: &'static str,
    /// Index into the rig table; parents always come before their children.
    pub parent: Option<usize>,
    pub offset: [f32; 3],
    pub axis: Axis,
    pub drive: Drive,
    /// `-1.0` mirrors the driven angle, used for the right-hand legs.
    pub mirror: f32,
    pub scale: f32,
}

impl PartSpec {
    fn local_transform(&self, angle_degrees: f32, extra_offset: [f32; 3]) -> Transform {
        let angle = (angle_degrees * self.mirror).to_radians();
        let rotated = Transform::new().scale([self.scale; 3]);
        let rotated = match self.axis {
            Axis::X => rotated.rotate_x_world(angle),
            Axis::Y => rotated.rotate_y_world(angle),
            Axis::Z => rotated.rotate_z_world(angle),
        };
        rotated.translate_world([
            self.offset[0] + extra_offset[0],
            self.offset[1] + extra_offset[1],
            self.offset[2] + extra_offset[2],
        ])
    }
}

/// Table of model parts evaluated into world transforms in one pass.
pub struct Rig {
    parts: Vec<PartSpec>,
}

impl Default for Rig {
    fn default() -> Self {
        Rig::dog()
    }
}

impl Rig {
    pub fn new(parts: Vec<PartSpec>) -> Self {
        Self { parts }
    }

    /// The quadruped from the keyframe demo: floor, body with head, tail and
    /// four legs, and a free ball.
    pub fn dog() -> Self {
        let part = |part, asset, parent, offset, axis, drive, mirror| PartSpec {
            part,
            asset,
            parent,
            offset,
            axis,
            drive,
            mirror,
            scale: 1.0,
        };
        #[rustfmt::skip]
        let parts = vec![
            part(Part::Floor, "Models/piso.obj", None, [0.0; 3], Axis::Y, Drive::Fixed, 1.0),
            part(Part::Body, "Models/DogBody.obj", None, [0.0; 3], Axis::Y, Drive::BodyYaw, 1.0),
            part(Part::Head, "Models/HeadDog.obj", Some(1), [0.0, 0.093, 0.208], Axis::Z, Drive::Head, 1.0),
            part(Part::Tail, "Models/TailDog.obj", Some(1), [0.0, 0.026, -0.288], Axis::Z, Drive::Tail, 1.0),
            part(Part::FrontLeftLeg, "Models/F_LeftLegDog.obj", Some(1), [0.112, -0.044, 0.074], Axis::X, Drive::FrontLegs, 1.0),
            part(Part::FrontRightLeg, "Models/F_RightLegDog.obj", Some(1), [-0.111, -0.055, 0.074], Axis::X, Drive::FrontLegs, -1.0),
            part(Part::RearLeftLeg, "Models/B_LeftLegDog.obj", Some(1), [0.082, -0.046, -0.218], Axis::X, Drive::RearLegs, -1.0),
            part(Part::RearRightLeg, "Models/B_RightLegDog.obj", Some(1), [-0.083, -0.057, -0.231], Axis::X, Drive::RearLegs, 1.0),
            part(Part::Ball, "Models/ball.obj", None, [0.0, 0.0, 0.0], Axis::Y, Drive::BallSpin, 1.0),
        ];
        Rig::new(parts)
    }

    pub fn parts(&self) -> &[PartSpec] {
        &self.parts
    }

    pub fn index_of(&self, part: Part) -> Option<usize> {
        self.parts.iter().position(|spec| spec.part == part)
    }

    /// World transform of every part, in table order.
    ///
    /// The body is additionally moved to the pose position.
    pub fn compute_transforms(&self, pose: &Pose, ball_angle: f32) -> Vec<Transform> {
        let mut result: Vec<Transform> = Vec::with_capacity(self.parts.len());
        for spec in &self.parts {
            let extra_offset = match spec.drive {
                Drive::BodyYaw => pose.position.into(),
                _ => [0.0; 3],
            };
            let local = spec.local_transform(spec.drive.angle(pose, ball_angle), extra_offset);
            let world = match spec.parent.and_then(|parent| result.get(parent)) {
                Some(parent) => parent.compose(&local),
                None => local,
            };
            result.push(world);
        }
        result
    }
}
