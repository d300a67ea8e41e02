use image::Rgba;

use crate::domain::{Light, Material, PrimitiveId, Scene};
use crate::intersection::{nearest_hit, occluded};
use crate::math::{reflect, Ray, Vec3};

use super::RenderSettings;

/// Pixel written when a primary ray hits nothing.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Local surface state at a hit, shared by every light.
#[derive(Clone, Copy, Debug)]
struct SurfacePoint {
    owner: PrimitiveId,
    position: Vec3,
    normal: Vec3,
    material: Material,
}

pub fn shade_pixel(scene: &Scene, ray: Ray, settings: &RenderSettings) -> Rgba<u8> {
    match trace(scene, ray, 0, settings) {
        Some(color) => to_rgba(color),
        None => BACKGROUND,
    }
}

/// Linear color seen along `ray`, or `None` when it escapes the scene.
///
/// `depth` counts reflection bounces already taken; a reflective surface
/// spawns another bounce only while `depth < settings.max_depth`.
pub fn trace(scene: &Scene, ray: Ray, depth: u32, settings: &RenderSettings) -> Option<Vec3> {
    let hit = nearest_hit(scene, ray, settings.hit_epsilon)?;
    let primitive = scene.primitive(hit.primitive)?;

    let position = ray.at(hit.t);
    // A zero-radius sphere has no usable normal; treat it as a miss.
    let normal = primitive.normal_at(position).ok()?;
    let surface = SurfacePoint {
        owner: hit.primitive,
        position,
        normal,
        material: primitive.material,
    };

    let mut color = settings.ambient;
    for light in scene.lights() {
        color = color + light_contribution(scene, light, &surface, ray.direction, settings);
    }

    let reflectivity = surface.material.reflectivity;
    if depth < settings.max_depth && reflectivity > 0.0 {
        let bounce = Ray::new(position, reflect(ray.direction, normal));
        if let Some(reflected) = trace(scene, bounce, depth + 1, settings) {
            color = color + (reflected * reflectivity);
        }
    }

    Some(color)
}

fn light_contribution(
    scene: &Scene,
    light: &Light,
    surface: &SurfacePoint,
    view: Vec3,
    settings: &RenderSettings,
) -> Vec3 {
    let Ok(to_light) = (light.position - surface.position).try_normalize() else {
        // The light sits on the surface point; it has no direction to shade with.
        return Vec3::ZERO;
    };
    let distance = surface.position.distance(light.position);

    let shadow_ray = Ray {
        origin: surface.position,
        direction: to_light,
    };
    if occluded(scene, shadow_ray, distance, surface.owner, settings.hit_epsilon) {
        return Vec3::ZERO;
    }

    let reflected = reflect(to_light, surface.normal);
    let diffuse = diffuse_term(
        surface.normal,
        to_light,
        surface.material.diffuse_color,
        light.color,
    );
    let specular = specular_term(
        view,
        reflected,
        surface.normal,
        to_light,
        surface.material.specular_color,
        light.color,
        settings.shininess,
    );

    let frad = light.attenuation.factor(distance);
    let fang = light.angular_factor(to_light);
    (diffuse + specular) * (frad * fang)
}

/// Lambert term `Kd * I * (N.L)`, zero when the light is behind the surface.
pub fn diffuse_term(normal: Vec3, to_light: Vec3, diffuse_color: Vec3, intensity: Vec3) -> Vec3 {
    let cosine = normal.dot(to_light);
    if cosine > 0.0 {
        diffuse_color * intensity * cosine
    } else {
        Vec3::ZERO
    }
}

/// Phong term `Ks * I * (V.R)^n`, where `R` is the light direction mirrored
/// about the normal and `V` the incoming view direction.
pub fn specular_term(
    view: Vec3,
    reflected: Vec3,
    normal: Vec3,
    to_light: Vec3,
    specular_color: Vec3,
    intensity: Vec3,
    shininess: f64,
) -> Vec3 {
    let alignment = view.dot(reflected);
    if alignment > 0.0 && normal.dot(to_light) > 0.0 {
        specular_color * intensity * alignment.powf(shininess)
    } else {
        Vec3::ZERO
    }
}

/// Clamps to [0, 1] and quantizes to 8 bits. NaN channels become 0.
pub fn to_rgba(color: Vec3) -> Rgba<u8> {
    Rgba([
        quantize(color.x),
        quantize(color.y),
        quantize(color.z),
        u8::MAX,
    ])
}

fn quantize(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}
