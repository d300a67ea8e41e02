use crate::error::RenderError;

use super::{Camera, Light, Primitive, PrimitiveId};

/// A fully built scene. Construction validates every invariant the renderer
/// relies on, so nothing is re-checked per ray.
#[derive(Clone, Debug)]
pub struct Scene {
    camera: Camera,
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(
        camera: Camera,
        primitives: Vec<Primitive>,
        lights: Vec<Light>,
    ) -> Result<Self, RenderError> {
        camera.validate_physical().map_err(RenderError::InvalidScene)?;
        for (index, primitive) in primitives.iter().enumerate() {
            primitive.validate_physical().map_err(|error| {
                RenderError::InvalidScene(format!(
                    "primitive #{index} ({}): {error}",
                    primitive.name()
                ))
            })?;
        }
        for (index, light) in lights.iter().enumerate() {
            light
                .validate_physical()
                .map_err(|error| RenderError::InvalidScene(format!("light #{index}: {error}")))?;
        }

        Ok(Self {
            camera,
            primitives,
            lights,
        })
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn primitive(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(id.0)
    }

    /// Primitives paired with their ids, in scene order.
    pub fn enumerate_primitives(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> {
        self.primitives
            .iter()
            .enumerate()
            .map(|(index, primitive)| (PrimitiveId(index), primitive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Material, RadialAttenuation};
    use crate::math::Vec3;

    #[test]
    fn accepts_valid_scene() {
        let scene = Scene::new(
            Camera::new(2.0, 2.0),
            vec![Primitive::sphere(
                Vec3::new(0.0, 0.0, 5.0),
                1.0,
                Material::matte(Vec3::new(1.0, 0.0, 0.0)),
            )],
            vec![Light::point(Vec3::ZERO, Vec3::splat(1.0), RadialAttenuation::CONSTANT)],
        );
        let scene = scene.expect("scene should validate");
        assert_eq!(scene.primitives().len(), 1);
        assert!(scene.primitive(PrimitiveId(0)).is_some());
        assert!(scene.primitive(PrimitiveId(1)).is_none());
    }

    #[test]
    fn reports_offending_primitive() {
        let error = Scene::new(
            Camera::new(2.0, 2.0),
            vec![
                Primitive::sphere(Vec3::ZERO, 1.0, Material::default()),
                Primitive::sphere(Vec3::ZERO, 1.0, Material::matte(Vec3::splat(2.0))),
            ],
            vec![],
        )
        .expect_err("color above 1 must be rejected");
        assert!(matches!(error, RenderError::InvalidScene(ref message) if message.contains("#1")));
    }

    #[test]
    fn rejects_bad_camera() {
        let result = Scene::new(Camera::new(0.0, 2.0), vec![], vec![]);
        assert!(matches!(result, Err(RenderError::InvalidScene(_))));
    }
}
