mod scenes;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use lux_renderer::{ImageBuffer, RenderConfig, RenderMode, Scene, SceneResult};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(version, about = "Render an example scene with the lux ray tracer")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Render a single quick pass without supersampling
    #[arg(long)]
    draft: bool,

    /// Where to write the image (must end in .png)
    #[arg(short, long)]
    output: PathBuf,

    /// Animation frame handed to the scene
    #[arg(long, default_value_t = 0)]
    frame: u32,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneChoice::Spheres)]
    scene: SceneChoice,

    /// JSON file with render settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible render
    #[arg(long)]
    seed: Option<u64>,

    /// Number of worker threads (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SceneChoice {
    Spheres,
    AllElements,
}

impl SceneChoice {
    fn build(self, frame: u32) -> SceneResult<Scene> {
        match self {
            SceneChoice::Spheres => scenes::spheres(frame),
            SceneChoice::AllElements => scenes::all_elements(frame),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    check_output_path(&args.output)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.threads.is_some() {
        config.worker_threads = args.threads;
    }

    let scene = args
        .scene
        .build(args.frame)
        .with_context(|| format!("failed to build {:?} scene", args.scene))?;
    let mode = if args.draft {
        RenderMode::Draft
    } else {
        RenderMode::Finish
    };

    let start = Instant::now();
    let image = scene.render_with_config(mode, args.width, args.height, &config)?;
    save_png(&image, &args.output)?;
    log::info!(
        "Wrote {} in {:.2?}",
        args.output.display(),
        start.elapsed()
    );

    Ok(())
}

fn check_output_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => Ok(()),
        _ => bail!("output file must end in .png: {}", path.display()),
    }
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .context("image buffer does not match its dimensions")?;
    rgba.save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_renderer::Color;

    #[test]
    fn test_output_must_be_png() {
        assert!(check_output_path(Path::new("frames/out.png")).is_ok());
        assert!(check_output_path(Path::new("out.jpg")).is_err());
        assert!(check_output_path(Path::new("out")).is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["lux", "--output", "a.png"]).unwrap();
        assert_eq!(args.width, 1920);
        assert_eq!(args.height, 1080);
        assert!(!args.draft);
        assert_eq!(args.frame, 0);
        assert_eq!(args.scene, SceneChoice::Spheres);

        let args = Args::try_parse_from([
            "lux",
            "-o",
            "b.png",
            "--draft",
            "--scene",
            "all-elements",
            "--seed",
            "4",
        ])
        .unwrap();
        assert!(args.draft);
        assert_eq!(args.scene, SceneChoice::AllElements);
        assert_eq!(args.seed, Some(4));

        assert!(Args::try_parse_from(["lux"]).is_err());
    }

    #[test]
    fn test_load_config() {
        let path = std::env::temp_dir().join(format!("lux-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"max_depth": 3, "worker_threads": 2}"#).unwrap();
        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.max_depth, 3);
        assert_eq!(config.worker_threads, Some(2));
        assert_eq!(config.seed, None);

        assert!(load_config(Path::new("/nonexistent/lux.json")).is_err());
    }

    #[test]
    fn test_save_png() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(1, 0, Color::new(1.0, 0.5, 0.0));
        let path = std::env::temp_dir().join(format!("lux-out-{}.png", std::process::id()));
        save_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.get_pixel(1, 0).0, [255, 127, 0, 255]);
        assert_eq!(loaded.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
