use crate::domain::{Primitive, PrimitiveId, PrimitiveKind, Scene};
use crate::math::{Ray, Vec3};

/// Below this `|N.D|` a ray is treated as parallel to a plane.
const PARALLEL_EPSILON: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub t: f64,
    pub primitive: PrimitiveId,
}

/// Nearest intersection strictly beyond `epsilon` along the ray, if any.
pub fn intersect(primitive: &Primitive, ray: Ray, epsilon: f64) -> Option<f64> {
    match primitive.kind {
        PrimitiveKind::Sphere { center, radius } => intersect_sphere(center, radius, ray, epsilon),
        PrimitiveKind::Plane { point, normal } => intersect_plane(point, normal, ray, epsilon),
    }
}

pub fn intersect_sphere(center: Vec3, radius: f64, ray: Ray, epsilon: f64) -> Option<f64> {
    let offset = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * ray.direction.dot(offset);
    let c = offset.dot(offset) - (radius * radius);

    let discriminant = (b * b) - (4.0 * a * c);
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = (-b - root) / (2.0 * a);
    let far = (-b + root) / (2.0 * a);
    // `near <= far`, so the first root past epsilon is the closest visible one.
    if near > epsilon {
        Some(near)
    } else if far > epsilon {
        Some(far)
    } else {
        None
    }
}

pub fn intersect_plane(point: Vec3, normal: Vec3, ray: Ray, epsilon: f64) -> Option<f64> {
    let vd = normal.dot(ray.origin - point);
    if vd == 0.0 {
        return None;
    }
    let v0 = normal.dot(ray.direction);
    if v0.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = -(vd / v0);
    (t > epsilon).then_some(t)
}

/// Linear scan for the closest hit. On an exact tie the earlier primitive wins.
pub fn nearest_hit(scene: &Scene, ray: Ray, epsilon: f64) -> Option<Hit> {
    let mut closest: Option<Hit> = None;
    for (id, primitive) in scene.enumerate_primitives() {
        let Some(t) = intersect(primitive, ray, epsilon) else {
            continue;
        };
        match closest {
            Some(previous) if previous.t <= t => {}
            _ => closest = Some(Hit { t, primitive: id }),
        }
    }
    closest
}

/// Shadow test: whether anything other than `skip` blocks `ray` before
/// `max_distance`.
pub fn occluded(scene: &Scene, ray: Ray, max_distance: f64, skip: PrimitiveId, epsilon: f64) -> bool {
    scene
        .enumerate_primitives()
        .filter(|(id, _)| *id != skip)
        .any(|(_, primitive)| {
            intersect(primitive, ray, epsilon).is_some_and(|t| t < max_distance)
        })
}
