//! Recursive ray caster: spheres and planes lit by point and spot lights,
//! with hard shadows, Phong highlights and mirror reflection.

pub mod config;
pub mod cpu;
pub mod domain;
pub mod error;
pub mod intersection;
pub mod math;
pub mod output;
pub mod render;

pub use cpu::render_cpu;
pub use domain::Scene;
pub use error::RenderError;
pub use render::RenderSettings;
