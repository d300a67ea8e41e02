use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use raytrace::config::load_scene;
use raytrace::domain::presets::{build_scene, SCENE_IDS};
use raytrace::math::Vec3;
use raytrace::output::save_image;
use raytrace::render::settings::{DEFAULT_AMBIENT, DEFAULT_MAX_DEPTH};
use raytrace::{render_cpu, RenderSettings, Scene};

const PRESET_PREFIX: &str = "preset:";

/// Render a JSON scene description to an image.
#[derive(Debug, Parser)]
#[command(
    version,
    after_help = "Example: raytrace 1920 1080 scene.json out.ppm"
)]
struct Args {
    /// Width of the image to render, in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    render_width: u32,

    /// Height of the image to render, in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    render_height: u32,

    /// Scene file in JSON format, or `preset:<id>` for a built-in scene
    input_scene: String,

    /// Output image; `.ppm` writes a binary P6 pixmap, `.png` keeps alpha
    output_file: PathBuf,

    /// Maximum number of mirror bounces after the primary hit
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Ambient light as `r,g,b`
    #[arg(long, value_parser = parse_color)]
    ambient: Option<Vec3>,

    /// Worker threads; defaults to one per core
    #[arg(long)]
    threads: Option<usize>,
}

fn parse_color(raw: &str) -> Result<Vec3, String> {
    let channels = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|error| error.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    match channels.as_slice() {
        [r, g, b] => Ok(Vec3::new(*r, *g, *b)),
        _ => Err(format!("expected three comma separated numbers, got '{raw}'")),
    }
}

fn read_scene(input: &str) -> Result<Scene, Box<dyn std::error::Error>> {
    if let Some(id) = input.strip_prefix(PRESET_PREFIX) {
        info!("Building preset scene '{id}'");
        return build_scene(id).map_err(|err| {
            error!("Available presets: {}", SCENE_IDS.join(", "));
            err.into()
        });
    }

    info!("Reading input scene file '{input}'");
    Ok(load_scene(Path::new(input))?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scene = read_scene(&args.input_scene)?;

    let settings = RenderSettings::new(args.render_width, args.render_height)
        .with_max_depth(args.max_depth)
        .with_ambient(args.ambient.unwrap_or(DEFAULT_AMBIENT))
        .with_threads(args.threads);

    info!(
        "Raytracing {} primitives and {} lights into {}x{} pixels",
        scene.primitives().len(),
        scene.lights().len(),
        settings.width,
        settings.height
    );
    let started = Instant::now();
    let image = render_cpu(&scene, &settings)?;
    info!("Rendered in {} ms", started.elapsed().as_millis());

    info!("Saving image to '{}'", args.output_file.display());
    save_image(&image, &args.output_file)?;

    info!("Finished!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ambient_triplet() {
        assert_eq!(parse_color("0.1, 0.2,0.3"), Ok(Vec3::new(0.1, 0.2, 0.3)));
        assert!(parse_color("0.1,0.2").is_err());
        assert!(parse_color("a,b,c").is_err());
    }

    #[test]
    fn cli_rejects_zero_width() {
        assert!(Args::try_parse_from(["raytrace", "0", "10", "scene.json", "out.ppm"]).is_err());
    }

    #[test]
    fn cli_accepts_reference_usage() {
        let args = Args::try_parse_from(["raytrace", "1920", "1080", "scene.json", "out.ppm"])
            .expect("valid arguments");
        assert_eq!(args.render_width, 1920);
        assert_eq!(args.render_height, 1080);
        assert_eq!(args.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(args.ambient, None);
    }

    #[test]
    fn preset_prefix_selects_builtin_scene() {
        assert!(read_scene("preset:primitives_gallery").is_ok());
        assert!(read_scene("preset:nope").is_err());
    }
}
