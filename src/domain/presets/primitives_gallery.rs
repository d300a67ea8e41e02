use crate::domain::{Camera, Light, Material, Primitive, RadialAttenuation, Scene};
use crate::error::RenderError;
use crate::math::Vec3;

pub const SCENE_ID: &str = "primitives_gallery";

pub fn build() -> Result<Scene, RenderError> {
    let floor_y = -1.0;

    let floor = Material::matte(Vec3::new(0.85, 0.85, 0.8)).with_reflectivity(0.15);
    let back_wall = Material::matte(Vec3::new(0.35, 0.4, 0.55));
    let stone = Material::matte(Vec3::new(0.72, 0.66, 0.58)).with_specular(Vec3::splat(0.3));
    let mirror = Material::matte(Vec3::new(0.05, 0.05, 0.05))
        .with_specular(Vec3::splat(1.0))
        .with_reflectivity(0.9);
    let lacquer = Material::matte(Vec3::new(0.8, 0.1, 0.1))
        .with_specular(Vec3::splat(0.8))
        .with_reflectivity(0.25);

    Scene::new(
        Camera::new(1.6, 1.2),
        vec![
            Primitive::plane(Vec3::new(0.0, floor_y, 0.0), Vec3::new(0.0, 1.0, 0.0), floor),
            Primitive::plane(Vec3::new(0.0, 0.0, 14.0), Vec3::new(0.0, 0.0, -1.0), back_wall),
            Primitive::sphere(Vec3::new(-1.6, floor_y + 0.7, 6.5), 0.7, stone),
            Primitive::sphere(Vec3::new(0.0, floor_y + 1.0, 8.0), 1.0, mirror),
            Primitive::sphere(Vec3::new(1.5, floor_y + 0.55, 5.8), 0.55, lacquer),
        ],
        vec![
            Light::point(
                Vec3::new(-3.0, 4.0, 2.0),
                Vec3::new(1.0, 0.96, 0.9),
                RadialAttenuation::new(1.0, 0.05, 0.01),
            ),
            Light::point(
                Vec3::new(4.0, 2.0, 4.0),
                Vec3::new(0.3, 0.36, 0.45),
                RadialAttenuation::new(1.0, 0.0, 0.02),
            ),
        ],
    )
}
