use crate::math::Vec3;

const UNIT_LENGTH_TOLERANCE: f64 = 1e-6;

pub(crate) fn validate_vec3_finite(value: Vec3, field: &str) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!(
            "{field} components must be finite, got ({}, {}, {})",
            value.x, value.y, value.z
        ));
    }
    Ok(())
}

pub(crate) fn validate_vec3_non_negative(value: Vec3, field: &str) -> Result<(), String> {
    validate_vec3_finite(value, field)?;
    if value.x < 0.0 || value.y < 0.0 || value.z < 0.0 {
        return Err(format!(
            "{field} components must be >= 0, got ({}, {}, {})",
            value.x, value.y, value.z
        ));
    }
    Ok(())
}

pub(crate) fn validate_unit_color(value: Vec3, field: &str) -> Result<(), String> {
    validate_vec3_non_negative(value, field)?;
    if value.x > 1.0 || value.y > 1.0 || value.z > 1.0 {
        return Err(format!(
            "{field} components must be <= 1, got ({}, {}, {})",
            value.x, value.y, value.z
        ));
    }
    Ok(())
}

pub(crate) fn validate_unit_vector(value: Vec3, field: &str) -> Result<(), String> {
    validate_vec3_finite(value, field)?;
    let length = value.magnitude();
    if (length - 1.0).abs() > UNIT_LENGTH_TOLERANCE {
        return Err(format!("{field} must be unit length, got length {length}"));
    }
    Ok(())
}

pub(crate) fn validate_scalar(value: f64, field: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{field} must be finite and >= 0, got {value}"));
    }
    Ok(())
}
