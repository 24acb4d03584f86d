pub use transform::Transform;
pub use vec3::Vec3;

mod transform;
mod vec3;
