//! Occluder demo
//!
//! A white point light at the origin and a small circular occluder swinging left
//! and right in front of it. Every frame is lit on the CPU and written out as a PNG.
//!
//! ```text
//! cargo run --example occluder -- --frames 60 --output target/occluder
//! ```

use std::path::PathBuf;

use clap::Parser;
use glam::Vec4;
use light2d::{
    extract_frame, AmbientLight2d, BindingMode, Camera2d, CircularOccluder2d, ColorBuffer,
    LightingConfig, LightingPass, LightingResult, PointLight2d, SamplingMode, Transform, With,
    World,
};

/// Render the moving occluder scene to a PNG sequence.
#[derive(Parser, Debug)]
#[command(name = "occluder", about = "Render a moving occluder in front of a point light")]
struct Args {
    /// Number of frames to render.
    #[arg(long, default_value = "60")]
    frames: u32,

    /// Seconds between frames.
    #[arg(long, default_value = "0.05")]
    time_step: f32,

    /// Output image width in pixels.
    #[arg(long, default_value = "640")]
    width: u32,

    /// Output image height in pixels.
    #[arg(long, default_value = "360")]
    height: u32,

    /// Directory the frames are written to.
    #[arg(long, default_value = "occluder_frames")]
    output: PathBuf,

    /// Use the fixed 82-slot light and occluder arrays.
    #[arg(long)]
    fixed: bool,
}

fn setup(world: &mut World, width: u32, height: u32) {
    world.spawn((
        Camera2d::new(width as f32, height as f32),
        Transform::default(),
        AmbientLight2d::new(Vec4::new(0.15, 0.15, 0.2, 1.0)),
    ));

    world.spawn((
        PointLight2d {
            intensity: 3.0,
            radius: 400.0,
            falloff: 1.0,
            ..Default::default()
        },
        Transform::default(),
    ));

    world.spawn((
        CircularOccluder2d::new(10.0),
        Transform::from_xy(100.0, 50.0),
    ));
}

fn move_occluder(world: &mut World, time: f32) {
    let mut query = world.query_filtered::<&mut Transform, With<CircularOccluder2d>>();
    for mut transform in query.iter_mut(world) {
        transform.translation.x = time.sin() * 100.0;
    }
}

fn main() -> LightingResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    std::fs::create_dir_all(&args.output).map_err(image::ImageError::IoError)?;

    let binding = if args.fixed {
        BindingMode::Fixed
    } else {
        BindingMode::Dynamic
    };
    let pass = LightingPass::new(LightingConfig {
        binding,
        sampling: SamplingMode::Nearest,
        ..Default::default()
    })?;

    let base = ColorBuffer::checkerboard(
        args.width,
        args.height,
        32,
        Vec4::new(0.8, 0.8, 0.8, 1.0),
        Vec4::new(0.5, 0.5, 0.55, 1.0),
    );

    let mut world = World::new();
    setup(&mut world, args.width, args.height);

    for frame_index in 0..args.frames {
        move_occluder(&mut world, frame_index as f32 * args.time_step);

        let frame = extract_frame(&mut world, pass.config().binding)?;
        let lit = pass.run(&frame, &base)?;

        let path = args.output.join(format!("frame_{frame_index:04}.png"));
        lit.save(&path)?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
