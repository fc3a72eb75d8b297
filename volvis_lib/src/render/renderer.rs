use std::time::{Duration, Instant};

use log::{debug, warn};
use nalgebra::{Point3, Vector3};

use crate::{
    camera::ViewBasis,
    color::{self, pack_argb},
    common::{BoundBox, Ray},
    volumetric::{Field, Volume},
};

use super::{
    pixel_buffer::{side_for_dims, CLEARED},
    ray_marcher::{RayMarcher, RaySegment},
    PixelBuffer, RaycastMode, RenderOptions, RenderRequest,
};

/// Measurements of one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub elapsed: Duration,
    /// Rays that entered the field, the slicer casts none
    pub rays_hit: usize,
}

/// Renders frames of one volume
#[derive(Debug)]
pub struct Renderer {
    volume: Volume,
    options: RenderOptions,
}

impl Renderer {
    pub fn new(volume: Volume, options: RenderOptions) -> Renderer {
        Renderer { volume, options }
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// Replace the volume, returning the previous one
    pub fn set_volume(&mut self, volume: Volume) -> Volume {
        std::mem::replace(&mut self.volume, volume)
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_render_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Empty buffer with the size frames of the current volume have
    pub fn new_buffer(&self) -> PixelBuffer {
        PixelBuffer::for_dims(self.volume.get_size())
    }

    pub fn render(&self, request: &RenderRequest, buffer: &mut PixelBuffer) -> FrameStats {
        render_frame(&self.volume, request, &self.options, buffer)
    }
}

/// Render one frame of `volume` into `buffer`.
///
/// The buffer is resized to fit the volume if needed, then cleared.
/// Pixels whose ray misses the field stay cleared.
pub fn render_frame(
    volume: &Volume,
    request: &RenderRequest,
    options: &RenderOptions,
    buffer: &mut PixelBuffer,
) -> FrameStats {
    let start = Instant::now();

    let side = side_for_dims(volume.get_size());
    if buffer.side() != side {
        debug!("Resizing pixel buffer {} -> {}", buffer.side(), side);
        buffer.resize(side);
    } else {
        buffer.clear();
    }

    let basis = ViewBasis::from_view_matrix(&request.view_matrix);
    let view_len = basis.view.norm();
    if !(view_len.is_finite() && view_len > 0.0) {
        warn!("Degenerate view matrix, frame left empty");
        return FrameStats {
            elapsed: start.elapsed(),
            rays_hit: 0,
        };
    }

    // Computed once up front, render threads only read it
    volume.gradients().max_magnitude();

    let frame = Frame::new(volume, request, options, basis, side);
    let rays_hit = sweep(&frame, buffer.data_mut(), options.thread_count());

    let elapsed = start.elapsed();
    debug!(
        "Frame {}x{} ({}) in {:?}, {} rays hit",
        side, side, request.front.mode, elapsed, rays_hit
    );
    FrameStats { elapsed, rays_hit }
}

/// Splits pixels into bands of rows, one band per thread
fn sweep(frame: &Frame, pixels: &mut [u32], threads: usize) -> usize {
    let side = frame.side;
    if threads <= 1 {
        return frame.render_band(0, pixels);
    }

    let increment = frame.increment;
    let band_rows = side.div_ceil(threads);
    // blocks of the interactive mode must not cross bands
    let band_rows = band_rows.div_ceil(increment) * increment;

    let result = crossbeam::scope(|s| {
        let handles: Vec<_> = pixels
            .chunks_mut(band_rows * side)
            .enumerate()
            .map(|(band, chunk)| s.spawn(move |_| frame.render_band(band * band_rows, chunk)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .sum::<std::thread::Result<usize>>()
    });

    match result {
        Ok(Ok(rays_hit)) => rays_hit,
        Ok(Err(panic)) | Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Everything constant during a frame
struct Frame<'a> {
    volume: &'a Volume,
    request: &'a RenderRequest,
    marcher: RayMarcher<'a>,
    bound_box: BoundBox,
    basis: ViewBasis,
    ray_direction: Vector3<f32>,
    center: Point3<f32>,
    half_diagonal: f32,
    side: usize,
    /// Pixel coordinate of the image center
    image_center: f32,
    increment: usize,
}

impl<'a> Frame<'a> {
    fn new(
        volume: &'a Volume,
        request: &'a RenderRequest,
        options: &RenderOptions,
        basis: ViewBasis,
        side: usize,
    ) -> Frame<'a> {
        Frame {
            volume,
            request,
            marcher: RayMarcher::new(volume, options.sample_step, request.shading),
            bound_box: volume.get_bound_box(),
            basis,
            ray_direction: basis.ray_direction().normalize(),
            center: volume.center(),
            half_diagonal: volume.diagonal() / 2.0,
            side,
            image_center: (side / 2) as f32,
            increment: options.pixel_increment.max(1),
        }
    }

    /// Point of the plane through the field center, perpendicular to the view
    fn plane_point(&self, i: usize, j: usize) -> Point3<f32> {
        self.center
            + self.basis.u * (i as f32 - self.image_center)
            + self.basis.v * (j as f32 - self.image_center)
    }

    /// Renders rows starting at `first_row`, `band` holds whole rows.
    /// Returns number of rays that hit the field.
    fn render_band(&self, first_row: usize, band: &mut [u32]) -> usize {
        match self.request.front.mode {
            RaycastMode::Slicer => {
                self.slice_band(first_row, band);
                0
            }
            _ => self.raycast_band(first_row, band),
        }
    }

    fn slice_band(&self, first_row: usize, band: &mut [u32]) {
        let field = self.volume.field();
        let max = field.maximum() as f32;

        for (row, pixels) in band.chunks_mut(self.side).enumerate() {
            let j = first_row + row;
            for (i, pixel) in pixels.iter_mut().enumerate() {
                let pos = self.plane_point(i, j);
                // truncated, like an integer intensity
                let value = field.sample_trilinear(pos) as i32 as f32;

                let gray = if max > 0.0 { value / max } else { 0.0 };
                let opacity = if value > 0.0 { 1.0 } else { 0.0 };
                *pixel = pack_argb(&color::mono(gray, opacity));
            }
        }
    }

    fn raycast_band(&self, first_row: usize, band: &mut [u32]) -> usize {
        let side = self.side;
        let rows = band.len() / side;
        let mut rays_hit = 0;

        for row in (0..rows).step_by(self.increment) {
            for i in (0..side).step_by(self.increment) {
                let j = first_row + row;
                let pixel = match self.cast(i, j) {
                    Some(pixel) => pixel,
                    None => continue,
                };
                rays_hit += 1;

                // fill the whole block in interactive mode
                for block_row in row..usize::min(row + self.increment, rows) {
                    let start = block_row * side + i;
                    let end = block_row * side + usize::min(i + self.increment, side);
                    band[start..end].fill(pixel);
                }
            }
        }
        rays_hit
    }

    /// Packed color of the ray through pixel `(i, j)`, `None` if it misses the field
    fn cast(&self, i: usize, j: usize) -> Option<u32> {
        let origin = self.plane_point(i, j) + self.basis.view * self.half_diagonal;
        let ray = Ray::new(origin, self.ray_direction);
        let (entry, exit) = self.bound_box.entry_exit(&ray)?;

        let region = match &self.request.cutting_plane {
            Some(plane) if !plane.is_front(&entry) => &self.request.back,
            _ => &self.request.front,
        };

        // slicer in the back region leaves the pixel empty
        let pixel = match region.accumulator() {
            Some(accumulator) => {
                let segment = RaySegment::new(entry, exit, self.ray_direction);
                pack_argb(&self.marcher.march(&segment, &accumulator))
            }
            None => CLEARED,
        };
        Some(pixel)
    }
}
