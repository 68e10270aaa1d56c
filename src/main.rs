mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter};
use weekend_pathtracer::{render, write_ppm, RenderSettings, SceneKind, Shading};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let settings = RenderSettings {
        image_width: args.width,
        image_height: args.height(),
        samples_per_pixel: args.samples,
        max_depth: args.max_depth,
        seed: args.seed,
        show_progress: !args.quiet,
        shading: if args.normals {
            Shading::Normals
        } else {
            Shading::PathTraced
        },
    };
    settings.validate()?;

    let scene = SceneKind::from(args.scene);
    let (world, camera) = scene.build(settings.aspect_ratio(), settings.seed)?;
    info!("{:?} scene with {} spheres", scene, world.len());

    let image = render(&camera, &world, &settings)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path))?;
            write_ppm(&mut BufWriter::new(file), &image)
                .with_context(|| format!("writing {}", path))?;
            info!("wrote {}", path);
        }
        None => {
            let stdout = io::stdout();
            write_ppm(&mut BufWriter::new(stdout.lock()), &image)
                .context("writing image to stdout")?;
        }
    }

    Ok(())
}
