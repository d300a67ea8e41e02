use crate::domain::Camera;
use crate::math::{Ray, Vec3};

use super::RenderSettings;

/// Maps raster coordinates onto the camera's view plane.
#[derive(Clone, Copy, Debug)]
pub struct View {
    pub camera: Camera,
    pub width: u32,
    pub height: u32,
}

impl View {
    pub fn new(camera: Camera, settings: &RenderSettings) -> Self {
        Self {
            camera,
            width: settings.width,
            height: settings.height,
        }
    }

    /// Center of pixel (`row`, `col`) on the plane `z = 1`. Row 0 is the top
    /// of the image, so y decreases as rows increase.
    pub fn pixel_point(&self, row: u32, col: u32) -> Vec3 {
        let pixel_width = self.camera.width / self.width as f64;
        let pixel_height = self.camera.height / self.height as f64;
        let x = -(self.camera.width / 2.0) + (pixel_width * (col as f64 + 0.5));
        let y = -(-(self.camera.height / 2.0) + (pixel_height * (row as f64 + 0.5)));
        Vec3::new(x, y, Camera::VIEW_PLANE_DISTANCE)
    }

    pub fn primary_ray(&self, row: u32, col: u32) -> Ray {
        Ray::new(Vec3::ZERO, self.pixel_point(row, col))
    }
}
