use image::RgbaImage;
use log::debug;
use rayon::prelude::*;

use crate::domain::Scene;
use crate::error::RenderError;
use crate::render::shading::BACKGROUND;
use crate::render::validation::validate_settings;
use crate::render::{shade_pixel, RenderSettings, View};

/// Renders `scene` into a `width x height` RGBA buffer, row-major with the
/// origin at the top-left. Pixels whose primary ray escapes stay fully
/// transparent black.
pub fn render_cpu(scene: &Scene, settings: &RenderSettings) -> Result<RgbaImage, RenderError> {
    validate_settings(settings).map_err(RenderError::InvalidSettings)?;

    match settings.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            debug!("rendering on a dedicated pool of {threads} threads");
            Ok(pool.install(|| rasterize(scene, settings)))
        }
        None => Ok(rasterize(scene, settings)),
    }
}

fn rasterize(scene: &Scene, settings: &RenderSettings) -> RgbaImage {
    let view = View::new(scene.camera(), settings);
    let width = settings.width as usize;
    let height = settings.height as usize;
    debug!(
        "rasterizing {width}x{height} pixels over {} primitives and {} lights",
        scene.primitives().len(),
        scene.lights().len()
    );

    let mut pixels = vec![BACKGROUND; width * height];

    // One scanline per task; rows are disjoint so no synchronization is needed.
    pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, slots)| {
            let row = row as u32;
            for (col, slot) in slots.iter_mut().enumerate() {
                let ray = view.primary_ray(row, col as u32);
                *slot = shade_pixel(scene, ray, settings);
            }
        });

    let mut image = RgbaImage::new(settings.width, settings.height);
    for (index, pixel) in pixels.into_iter().enumerate() {
        let x = (index % width) as u32;
        let y = (index / width) as u32;
        image.put_pixel(x, y, pixel);
    }
    image
}
