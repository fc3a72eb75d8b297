use crate::common::{get_volume, BenchOptions, DEFAULT_CAMERA_ANGLES, FIELD_SIDE};
use criterion::Criterion;
use volvis_lib::{
    render::{RaycastMode, RenderOptions, Renderer, RendererFront},
    test_helpers::request_for,
};

pub fn render_interactive_composite(c: &mut Criterion) {
    let render_options = RenderOptions::builder()
        .multi_thread(true)
        .interactive(true)
        .build_unchecked();

    let bench_options = BenchOptions::new(
        render_options,
        format!("Render MT | composite | interactive | {FIELD_SIDE}^3"),
        RaycastMode::Compositing,
        false,
        &DEFAULT_CAMERA_ANGLES,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

/// Request to frame round trip through the render thread
pub fn render_front_roundtrip(c: &mut Criterion) {
    let volume = get_volume();
    let request = request_for(&volume, RaycastMode::Mip);
    let renderer = Renderer::new(volume, RenderOptions::default());

    let mut front = RendererFront::new();
    front.start_rendering(renderer);

    c.bench_function(&format!("Front | MIP | {FIELD_SIDE}^3"), |b| {
        b.iter(|| {
            front.send_request(request.clone()).unwrap();
            front.wait_for_latest().unwrap()
        });
    });

    // Cleanup
    front.finish();
}
