use criterion::Criterion;

use nalgebra::vector;
use volvis_lib::{
    camera::OrbitCamera,
    render::{render_frame, PixelBuffer, RaycastMode, RenderOptions, RenderRequest},
    test_helpers::{request_for, sphere_volume},
    volumetric::Volume,
};

/// Side of the benchmarked field
pub const FIELD_SIDE: usize = 128;
pub const SPHERE_RADIUS: f32 = 50.0;
pub const SPHERE_VALUE: i16 = 200;

/// Orbit angles (phi, theta) cycled through between iterations
pub const DEFAULT_CAMERA_ANGLES: [(f32, f32); 4] =
    [(0.0, 0.0), (0.6, 0.3), (1.9, -0.4), (3.5, 0.9)];

pub fn get_volume() -> Volume {
    sphere_volume(FIELD_SIDE, SPHERE_RADIUS, SPHERE_VALUE)
}

pub struct BenchOptions {
    pub render_options: RenderOptions,
    pub bench_name: String,
    pub mode: RaycastMode,
    pub shading: bool,
    pub camera_angles: &'static [(f32, f32)],
}

impl BenchOptions {
    pub fn new(
        render_options: RenderOptions,
        bench_name: String,
        mode: RaycastMode,
        shading: bool,
        camera_angles: &'static [(f32, f32)],
    ) -> Self {
        Self {
            render_options,
            bench_name,
            mode,
            shading,
            camera_angles,
        }
    }

    pub fn get_benchmark(self) -> impl FnOnce(&mut Criterion) {
        move |c: &mut Criterion| {
            let BenchOptions {
                render_options,
                bench_name,
                mode,
                shading,
                camera_angles,
            } = self;

            let volume = get_volume();
            let requests = camera_requests(&volume, mode, shading, camera_angles);
            let mut buffer = PixelBuffer::for_dims(volume.get_size());

            c.bench_function(&bench_name, |b| {
                let mut positions = requests.iter().cycle();
                b.iter(|| {
                    let request = positions.next().unwrap();
                    render_frame(&volume, request, &render_options, &mut buffer)
                });
            });
        }
    }
}

/// Requests for camera positions orbiting the volume
fn camera_requests(
    volume: &Volume,
    mode: RaycastMode,
    shading: bool,
    angles: &[(f32, f32)],
) -> Vec<RenderRequest> {
    let center = volume.center();
    let start = center + vector![0.0, 0.0, volume.diagonal()];

    angles
        .iter()
        .map(|&(phi, theta)| {
            let mut camera = OrbitCamera::new(start, center);
            camera.orbit(phi, theta);

            let mut request = request_for(volume, mode).with_shading(shading);
            request.view_matrix = camera.view_matrix();
            request
        })
        .collect()
}
