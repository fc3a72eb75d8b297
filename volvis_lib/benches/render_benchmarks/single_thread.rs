use crate::common::{BenchOptions, DEFAULT_CAMERA_ANGLES, FIELD_SIDE};
use criterion::Criterion;
use volvis_lib::render::{RaycastMode, RenderOptions};

pub fn render_st_mip(c: &mut Criterion) {
    let render_options = RenderOptions::builder()
        .multi_thread(false)
        .build_unchecked();

    let bench_options = BenchOptions::new(
        render_options,
        format!("Render ST | MIP | {FIELD_SIDE}^3"),
        RaycastMode::Mip,
        false,
        &DEFAULT_CAMERA_ANGLES,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_st_iso(c: &mut Criterion) {
    let render_options = RenderOptions::builder()
        .multi_thread(false)
        .build_unchecked();

    let bench_options = BenchOptions::new(
        render_options,
        format!("Render ST | iso | {FIELD_SIDE}^3"),
        RaycastMode::IsoSurface,
        false,
        &DEFAULT_CAMERA_ANGLES,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_st_iso_shaded(c: &mut Criterion) {
    let render_options = RenderOptions::builder()
        .multi_thread(false)
        .build_unchecked();

    let bench_options = BenchOptions::new(
        render_options,
        format!("Render ST | iso | shaded | {FIELD_SIDE}^3"),
        RaycastMode::IsoSurface,
        true,
        &DEFAULT_CAMERA_ANGLES,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_st_composite(c: &mut Criterion) {
    let render_options = RenderOptions::builder()
        .multi_thread(false)
        .build_unchecked();

    let bench_options = BenchOptions::new(
        render_options,
        format!("Render ST | composite | {FIELD_SIDE}^3"),
        RaycastMode::Compositing,
        false,
        &DEFAULT_CAMERA_ANGLES,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_st_composite_shaded(c: &mut Criterion) {
    let render_options = RenderOptions::builder()
        .multi_thread(false)
        .build_unchecked();

    let bench_options = BenchOptions::new(
        render_options,
        format!("Render ST | composite | shaded | {FIELD_SIDE}^3"),
        RaycastMode::Compositing,
        true,
        &DEFAULT_CAMERA_ANGLES,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_st_tf2d(c: &mut Criterion) {
    let render_options = RenderOptions::builder()
        .multi_thread(false)
        .build_unchecked();

    let bench_options = BenchOptions::new(
        render_options,
        format!("Render ST | 2D TF | {FIELD_SIDE}^3"),
        RaycastMode::Transfer2D,
        false,
        &DEFAULT_CAMERA_ANGLES,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_st_slicer(c: &mut Criterion) {
    let render_options = RenderOptions::builder()
        .multi_thread(false)
        .build_unchecked();

    let bench_options = BenchOptions::new(
        render_options,
        format!("Render ST | slicer | {FIELD_SIDE}^3"),
        RaycastMode::Slicer,
        false,
        &DEFAULT_CAMERA_ANGLES,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}
