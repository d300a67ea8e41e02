use crate::math::Vec3;

pub const DEFAULT_MAX_DEPTH: u32 = 6;
/// Upper bound on `max_depth`; each bounce is one stack frame of `trace`.
pub const MAX_SUPPORTED_DEPTH: u32 = 64;
pub const DEFAULT_AMBIENT: Vec3 = Vec3::splat(0.1);
pub const DEFAULT_SHININESS: f64 = 20.0;
/// Hits closer than this to a ray origin are ignored, which keeps secondary
/// rays from re-hitting the surface they start on.
pub const DEFAULT_HIT_EPSILON: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Reflection bounces allowed after the primary hit.
    pub max_depth: u32,
    pub ambient: Vec3,
    pub shininess: f64,
    pub hit_epsilon: f64,
    /// Size of a dedicated worker pool; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl RenderSettings {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            max_depth: DEFAULT_MAX_DEPTH,
            ambient: DEFAULT_AMBIENT,
            shininess: DEFAULT_SHININESS,
            hit_epsilon: DEFAULT_HIT_EPSILON,
            threads: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_ambient(mut self, ambient: Vec3) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}
