pub mod settings;
pub mod shading;
pub mod validation;
pub mod view;

pub use settings::RenderSettings;
pub use shading::{shade_pixel, trace};
pub use view::View;
