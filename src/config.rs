use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::domain::{Camera, Light, Material, Primitive, RadialAttenuation, Scene};
use crate::error::RenderError;
use crate::math::Vec3;

/// One element of the top-level scene array, discriminated by `"type"`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneEntry {
    Camera(CameraEntry),
    Sphere(SphereEntry),
    Plane(PlaneEntry),
    Light(LightEntry),
}

#[derive(Debug, Deserialize)]
pub struct CameraEntry {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize)]
pub struct MaterialEntry {
    pub diffuse_color: [f64; 3],
    pub specular_color: [f64; 3],
    #[serde(default)]
    pub reflectivity: f64,
    #[serde(default)]
    pub refractivity: f64,
    #[serde(default = "default_ior")]
    pub ior: f64,
}

#[derive(Debug, Deserialize)]
pub struct SphereEntry {
    #[serde(flatten)]
    pub material: MaterialEntry,
    pub position: [f64; 3],
    pub radius: f64,
}

#[derive(Debug, Deserialize)]
pub struct PlaneEntry {
    #[serde(flatten)]
    pub material: MaterialEntry,
    pub position: [f64; 3],
    pub normal: [f64; 3],
}

#[derive(Debug, Deserialize)]
pub struct LightEntry {
    pub color: [f64; 3],
    pub position: [f64; 3],
    #[serde(rename = "radial-a2", default = "default_radial_a2")]
    pub radial_a2: f64,
    #[serde(rename = "radial-a1", default)]
    pub radial_a1: f64,
    #[serde(rename = "radial-a0", default)]
    pub radial_a0: f64,
    /// Cone half-angle in degrees; absent or zero means a point light.
    pub theta: Option<f64>,
    #[serde(rename = "angular-a0")]
    pub angular_a0: Option<f64>,
    pub direction: Option<[f64; 3]>,
}

const fn default_ior() -> f64 {
    1.0
}

const fn default_radial_a2() -> f64 {
    1.0
}

pub fn load_scene(path: &Path) -> Result<Scene, RenderError> {
    let raw = fs::read_to_string(path)?;
    parse_scene(&raw)
}

pub fn parse_scene(raw: &str) -> Result<Scene, RenderError> {
    let entries: Vec<SceneEntry> = serde_json::from_str(raw)?;
    build_scene(entries)
}

pub fn build_scene(entries: Vec<SceneEntry>) -> Result<Scene, RenderError> {
    let mut camera = None;
    let mut primitives = Vec::new();
    let mut lights = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let invalid = |error: String| RenderError::InvalidScene(format!("entry #{index}: {error}"));
        match entry {
            SceneEntry::Camera(entry) => {
                validate_camera(&entry).map_err(invalid)?;
                if camera.is_some() {
                    warn!("scene entry #{index} redefines the camera; the last one wins");
                }
                camera = Some(Camera::new(entry.width, entry.height));
            }
            SceneEntry::Sphere(entry) => {
                let material = material_from(&entry.material).map_err(invalid)?;
                if entry.radius < 0.0 {
                    return Err(invalid(format!(
                        "negative sphere radius is not allowed, got {}",
                        entry.radius
                    )));
                }
                primitives.push(Primitive::sphere(
                    Vec3::from(entry.position),
                    entry.radius,
                    material,
                ));
            }
            SceneEntry::Plane(entry) => {
                let material = material_from(&entry.material).map_err(invalid)?;
                let normal = Vec3::from(entry.normal)
                    .try_normalize()
                    .map_err(|_| invalid("plane normal must not be the zero vector".into()))?;
                primitives.push(Primitive::plane(Vec3::from(entry.position), normal, material));
            }
            SceneEntry::Light(entry) => {
                lights.push(light_from(&entry).map_err(invalid)?);
            }
        }
    }

    let camera = camera
        .ok_or_else(|| RenderError::InvalidScene("scene must contain a camera".into()))?;
    Scene::new(camera, primitives, lights)
}

fn validate_camera(entry: &CameraEntry) -> Result<(), String> {
    if entry.width < 0.0 {
        return Err("negative camera width is not allowed".into());
    }
    if entry.height < 0.0 {
        return Err("negative camera height is not allowed".into());
    }
    Ok(())
}

fn material_from(entry: &MaterialEntry) -> Result<Material, String> {
    validate_primitive_color(entry.diffuse_color, "diffuse_color")?;
    validate_primitive_color(entry.specular_color, "specular_color")?;
    Ok(Material {
        diffuse_color: Vec3::from(entry.diffuse_color),
        specular_color: Vec3::from(entry.specular_color),
        reflectivity: entry.reflectivity,
        refractivity: entry.refractivity,
        ior: entry.ior,
    })
}

fn validate_primitive_color(value: [f64; 3], field: &str) -> Result<(), String> {
    if value.iter().any(|channel| *channel < 0.0) {
        return Err(format!("{field} cannot be negative"));
    }
    if value.iter().any(|channel| *channel > 1.0) {
        return Err(format!("{field} cannot be greater than 1.0"));
    }
    Ok(())
}

fn light_from(entry: &LightEntry) -> Result<Light, String> {
    if entry.color.iter().any(|channel| *channel < 0.0) {
        return Err("light color cannot be negative".into());
    }

    let attenuation = RadialAttenuation::new(entry.radial_a0, entry.radial_a1, entry.radial_a2);
    if attenuation.a0 == 0.0 && attenuation.a1 == 0.0 && attenuation.a2 == 0.0 {
        return Err("light constants must have one constant not equal to 0".into());
    }
    if attenuation.a0 < 0.0 || attenuation.a1 < 0.0 || attenuation.a2 < 0.0 {
        return Err("light constants must not be negative".into());
    }

    let color = Vec3::from(entry.color);
    let position = Vec3::from(entry.position);
    let theta = entry.theta.unwrap_or(0.0);
    if theta == 0.0 {
        return Ok(Light::point(position, color, attenuation));
    }

    let angular_a0 = entry
        .angular_a0
        .ok_or("spot light requires angular-a0")?;
    if angular_a0 < 0.0 {
        return Err("light constants must not be negative".into());
    }
    let direction = entry
        .direction
        .ok_or("spot light requires direction")
        .map(Vec3::from)?
        .try_normalize()
        .map_err(|_| "spot light direction must not be the zero vector".to_string())?;

    Ok(Light::spot(
        position,
        color,
        attenuation,
        direction,
        theta.to_radians(),
        angular_a0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LightKind, PrimitiveKind};

    const BASIC_SCENE: &str = r#"[
        {"type": "camera", "width": 2.0, "height": 2.0},
        {"type": "sphere", "diffuse_color": [1, 0, 0], "specular_color": [1, 1, 1],
         "position": [0, 1, 5], "radius": 2, "reflectivity": 0.25},
        {"type": "plane", "diffuse_color": [0, 0, 1], "specular_color": [0, 0, 0],
         "position": [0, 0, 7], "normal": [0, 0, -4]},
        {"type": "light", "color": [2, 2, 2], "position": [1, 3, 0],
         "radial-a2": 0.125, "radial-a1": 0.125, "radial-a0": 0.125},
        {"type": "light", "color": [2, 2, 2], "position": [0, 20, 0],
         "theta": 20, "angular-a0": 0.5, "direction": [0, -2, 0]}
    ]"#;

    #[test]
    fn parses_full_scene() {
        let scene = parse_scene(BASIC_SCENE).expect("scene parses");
        assert_eq!(scene.camera(), Camera::new(2.0, 2.0));
        assert_eq!(scene.primitives().len(), 2);
        assert_eq!(scene.lights().len(), 2);

        let sphere = scene.primitives()[0];
        assert_eq!(sphere.material.reflectivity, 0.25);
        assert_eq!(sphere.material.ior, 1.0);
        assert!(matches!(sphere.kind, PrimitiveKind::Sphere { radius, .. } if radius == 2.0));

        match scene.primitives()[1].kind {
            PrimitiveKind::Plane { normal, .. } => assert_eq!(normal, Vec3::new(0.0, 0.0, -1.0)),
            other => panic!("expected plane, got {other:?}"),
        }

        assert_eq!(scene.lights()[0].kind, LightKind::Point);
        match scene.lights()[1].kind {
            LightKind::Spot {
                direction,
                theta,
                angular_a0,
            } => {
                assert_eq!(direction, Vec3::new(0.0, -1.0, 0.0));
                assert!((theta - 20f64.to_radians()).abs() < 1e-12);
                assert_eq!(angular_a0, 0.5);
            }
            other => panic!("expected spot light, got {other:?}"),
        }
    }

    #[test]
    fn light_attenuation_defaults_to_inverse_square() {
        let scene = parse_scene(
            r#"[{"type": "camera", "width": 1, "height": 1},
                {"type": "light", "color": [1, 1, 1], "position": [0, 0, 0]}]"#,
        )
        .expect("scene parses");
        assert_eq!(scene.lights()[0].attenuation, RadialAttenuation::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn zero_theta_is_point_light() {
        let scene = parse_scene(
            r#"[{"type": "camera", "width": 1, "height": 1},
                {"type": "light", "color": [1, 1, 1], "position": [0, 0, 0], "theta": 0}]"#,
        )
        .expect("scene parses");
        assert_eq!(scene.lights()[0].kind, LightKind::Point);
    }

    #[test]
    fn rejects_out_of_range_primitive_color() {
        let result = parse_scene(
            r#"[{"type": "camera", "width": 1, "height": 1},
                {"type": "sphere", "diffuse_color": [1.5, 0, 0], "specular_color": [0, 0, 0],
                 "position": [0, 0, 5], "radius": 1}]"#,
        );
        assert!(matches!(result, Err(RenderError::InvalidScene(ref message)) if message.contains("greater than 1.0")));
    }

    #[test]
    fn rejects_all_zero_light_constants() {
        let result = parse_scene(
            r#"[{"type": "camera", "width": 1, "height": 1},
                {"type": "light", "color": [1, 1, 1], "position": [0, 0, 0],
                 "radial-a0": 0, "radial-a1": 0, "radial-a2": 0}]"#,
        );
        assert!(matches!(result, Err(RenderError::InvalidScene(_))));
    }

    #[test]
    fn rejects_spot_without_direction() {
        let result = parse_scene(
            r#"[{"type": "camera", "width": 1, "height": 1},
                {"type": "light", "color": [1, 1, 1], "position": [0, 0, 0],
                 "theta": 15, "angular-a0": 1}]"#,
        );
        assert!(matches!(result, Err(RenderError::InvalidScene(ref message)) if message.contains("direction")));
    }

    #[test]
    fn rejects_negative_radius() {
        let result = parse_scene(
            r#"[{"type": "camera", "width": 1, "height": 1},
                {"type": "sphere", "diffuse_color": [0, 0, 0], "specular_color": [0, 0, 0],
                 "position": [0, 0, 5], "radius": -1}]"#,
        );
        assert!(matches!(result, Err(RenderError::InvalidScene(_))));
    }

    #[test]
    fn rejects_unknown_entry_type() {
        let result = parse_scene(r#"[{"type": "cube", "size": 1}]"#);
        assert!(matches!(result, Err(RenderError::SceneFile(_))));
    }

    #[test]
    fn rejects_short_vector() {
        let result = parse_scene(
            r#"[{"type": "camera", "width": 1, "height": 1},
                {"type": "light", "color": [1, 1], "position": [0, 0, 0]}]"#,
        );
        assert!(matches!(result, Err(RenderError::SceneFile(_))));
    }

    #[test]
    fn requires_camera() {
        let result = parse_scene("[]");
        assert!(matches!(result, Err(RenderError::InvalidScene(ref message)) if message.contains("camera")));
    }

    #[test]
    fn rejects_non_array_root() {
        let result = parse_scene(r#"{"type": "camera", "width": 1, "height": 1}"#);
        assert!(matches!(result, Err(RenderError::SceneFile(_))));
    }
}
