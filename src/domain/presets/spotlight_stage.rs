use crate::domain::{Camera, Light, Material, Primitive, RadialAttenuation, Scene};
use crate::error::RenderError;
use crate::math::Vec3;

pub const SCENE_ID: &str = "spotlight_stage";

/// Three spheres on a dark stage, each picked out by its own narrow spot.
pub fn build() -> Result<Scene, RenderError> {
    let stage = Material::matte(Vec3::new(0.6, 0.6, 0.6));
    let actor = Material::matte(Vec3::new(0.9, 0.9, 0.9)).with_specular(Vec3::splat(0.6));
    let attenuation = RadialAttenuation::new(0.5, 0.02, 0.005);

    let actors = [-1.8, 0.0, 1.8];
    let colors = [
        Vec3::new(1.6, 0.3, 0.3),
        Vec3::new(0.3, 1.6, 0.3),
        Vec3::new(0.3, 0.3, 1.6),
    ];

    let mut primitives = vec![Primitive::plane(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        stage,
    )];
    let mut lights = Vec::with_capacity(actors.len());
    for (x, color) in actors.into_iter().zip(colors) {
        let center = Vec3::new(x, -0.4, 7.0);
        let source = Vec3::new(x, 5.0, 5.0);
        primitives.push(Primitive::sphere(center, 0.6, actor));
        lights.push(Light::spot(
            source,
            color,
            attenuation,
            center - source,
            14f64.to_radians(),
            8.0,
        ));
    }

    Scene::new(Camera::new(2.0, 1.2), primitives, lights)
}
