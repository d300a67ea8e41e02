/// Pinhole camera fixed at the origin, looking down +Z at a view plane
/// placed at `z = 1`. Only the extent of that plane is configurable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
}

impl Camera {
    pub const VIEW_PLANE_DISTANCE: f64 = 1.0;

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate_physical(&self) -> Result<(), String> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(format!("camera width must be finite and > 0, got {}", self.width));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(format!(
                "camera height must be finite and > 0, got {}",
                self.height
            ));
        }
        Ok(())
    }
}
