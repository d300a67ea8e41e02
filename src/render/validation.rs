use super::settings::MAX_SUPPORTED_DEPTH;
use super::RenderSettings;

pub fn validate_settings(settings: &RenderSettings) -> Result<(), String> {
    if settings.width == 0 || settings.height == 0 {
        return Err(format!(
            "image width and height must be positive, got {}x{}",
            settings.width, settings.height
        ));
    }

    if settings.max_depth > MAX_SUPPORTED_DEPTH {
        return Err(format!(
            "max depth must be at most {MAX_SUPPORTED_DEPTH}, got {}",
            settings.max_depth
        ));
    }

    let ambient = settings.ambient;
    if !ambient.is_finite() || ambient.x < 0.0 || ambient.y < 0.0 || ambient.z < 0.0 {
        return Err(format!(
            "ambient components must be finite and >= 0, got ({}, {}, {})",
            ambient.x, ambient.y, ambient.z
        ));
    }

    if !settings.shininess.is_finite() || settings.shininess < 0.0 {
        return Err(format!(
            "shininess must be finite and >= 0, got {}",
            settings.shininess
        ));
    }

    if !settings.hit_epsilon.is_finite() || settings.hit_epsilon < 0.0 {
        return Err(format!(
            "hit epsilon must be finite and >= 0, got {}",
            settings.hit_epsilon
        ));
    }

    if settings.threads == Some(0) {
        return Err("thread count must be at least 1".into());
    }

    Ok(())
}
