pub mod camera;
pub mod light;
pub mod material;
pub mod object;
pub mod presets;
pub mod scene;
mod validate;

pub use camera::Camera;
pub use light::{Light, LightKind, RadialAttenuation};
pub use material::Material;
pub use object::{Primitive, PrimitiveId, PrimitiveKind};
pub use scene::Scene;
