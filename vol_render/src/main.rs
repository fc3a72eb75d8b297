use std::{f32::consts::TAU, path::Path};

use anyhow::{anyhow, Context};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use nalgebra::vector;
use volvis_lib::{
    camera::OrbitCamera,
    common::CuttingPlane,
    render::{RegionSettings, RenderRequest, Renderer, RendererFront},
    volumetric::Volume,
};

mod args;
mod config;
mod generators;
mod output;

use crate::{
    args::get_command,
    generators::{generate_field, get_sample_generator},
    output::{frame_path, write_frame_file},
};

pub fn main() -> anyhow::Result<()> {
    let cmd = get_command();
    let args = cmd.get_matches();

    let cfg = Config::from_args(&args).map_err(|e| anyhow!("Error: {e}"))?;
    init_logging(cfg.verbosity)?;
    info!("{:?}", cfg);

    let generator = get_sample_generator(&cfg);
    let field = generate_field(generator.as_ref(), cfg.dims)?;
    let volume = Volume::new(field);

    render_turntable(volume, &cfg)
}

fn init_logging(verbosity: u64) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

/// Request template for every frame, view matrix gets replaced
fn base_request(volume: &Volume, cfg: &Config, camera: &OrbitCamera) -> RenderRequest {
    let region = |mode| {
        let mut settings = RegionSettings::for_volume(volume, mode);
        settings.iso_value = cfg.iso_value;
        settings.iso_color = cfg.iso_color;
        settings
    };

    let view_matrix = camera.view_matrix();
    let request = RenderRequest::new(view_matrix, region(cfg.front_mode)).with_shading(cfg.shading);

    match cfg.back_mode {
        Some(back_mode) => {
            // plane stays fixed to the field, camera turns around it
            let plane = CuttingPlane::from_view(volume.center(), &view_matrix);
            request
                .with_back(region(back_mode))
                .with_cutting_plane(plane)
        }
        None => request,
    }
}

/// Render `cfg.frames` frames, camera making one full turn around the field
fn render_turntable(volume: Volume, cfg: &Config) -> anyhow::Result<()> {
    let center = volume.center();
    let mut camera = OrbitCamera::new(center + vector![0.0, 0.0, volume.diagonal()], center);
    let mut request = base_request(&volume, cfg, &camera);

    let mut front = RendererFront::new();
    front.start_rendering(Renderer::new(volume, cfg.render_options));
    let buffer = front
        .get_buffer_handle()
        .context("Render thread did not start")?;

    let progress = ProgressBar::new(cfg.frames as u64).with_style(
        ProgressStyle::default_bar().template("{prefix} [{elapsed}] {wide_bar} {pos}/{len} {msg}"),
    );
    progress.set_prefix("Rendering");

    let stem = Path::new(&cfg.file_name);
    let angle_step = TAU / cfg.frames as f32;

    for index in 0..cfg.frames {
        request.view_matrix = camera.view_matrix();
        front
            .send_request(request.clone())
            .context("Render thread is gone")?;
        let frame = front
            .wait_for_latest()
            .context("Render thread stopped before finishing the frame")?;

        let path = frame_path(stem, index, cfg.format);
        {
            let pixels = buffer.lock();
            write_frame_file(&path, &pixels, cfg.format)
                .with_context(|| format!("Cannot write {}", path.display()))?;
        }
        info!(
            "Frame {} (request {}/{}) in {:?}, {} rays hit, saved to {}",
            index,
            frame.generation,
            front.generation(),
            frame.stats.elapsed,
            frame.stats.rays_hit,
            path.display()
        );

        progress.set_message(format!("{:?}", frame.stats.elapsed));
        progress.inc(1);
        camera.orbit(angle_step, 0.0);
    }

    front.finish();
    progress.finish_with_message("done");
    Ok(())
}
