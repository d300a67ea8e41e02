mod primitives_gallery;
mod spotlight_stage;

use crate::domain::Scene;
use crate::error::RenderError;

pub const SCENE_IDS: &[&str] = &[primitives_gallery::SCENE_ID, spotlight_stage::SCENE_ID];

pub fn build_scene(scene_id: &str) -> Result<Scene, RenderError> {
    if scene_id.eq_ignore_ascii_case(primitives_gallery::SCENE_ID) {
        return primitives_gallery::build();
    }
    if scene_id.eq_ignore_ascii_case(spotlight_stage::SCENE_ID) {
        return spotlight_stage::build();
    }

    Err(RenderError::UnknownPreset(scene_id.to_string()))
}
