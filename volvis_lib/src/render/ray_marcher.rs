use nalgebra::{Point3, Vector3};

use crate::{
    color::RGBA,
    transfer_function::{TransferFunction, TransferFunction2D},
    volumetric::Volume,
};

use super::{accumulators, render_options::MIN_SAMPLE_STEP, shading::Lighting};

/// Part of a ray inside of the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    pub entry: Point3<f32>,
    pub exit: Point3<f32>,
    /// Normalized
    pub direction: Vector3<f32>,
}

impl RaySegment {
    pub fn new(entry: Point3<f32>, exit: Point3<f32>, direction: Vector3<f32>) -> RaySegment {
        RaySegment {
            entry,
            exit,
            direction,
        }
    }

    pub fn length(&self) -> f32 {
        nalgebra::distance(&self.entry, &self.exit)
    }

    /// `1 + floor(length / step)`.
    /// Steps below [`MIN_SAMPLE_STEP`] (or not finite) count as [`MIN_SAMPLE_STEP`].
    pub fn sample_count(&self, step: f32) -> usize {
        let step = usable_step(step);
        ((self.length() / step).floor() as usize).saturating_add(1)
    }

    /// Positions from entry towards exit, `step` apart
    pub fn samples(&self, step: f32) -> SamplePositions {
        let step = usable_step(step);
        SamplePositions {
            pos: self.entry,
            increment: self.direction * step,
            remaining: self.sample_count(step),
        }
    }
}

fn usable_step(step: f32) -> f32 {
    if step.is_finite() && step > MIN_SAMPLE_STEP {
        step
    } else {
        MIN_SAMPLE_STEP
    }
}

/// Iterator over sample positions of a [`RaySegment`]
#[derive(Debug, Clone)]
pub struct SamplePositions {
    pos: Point3<f32>,
    increment: Vector3<f32>,
    remaining: usize,
}

impl Iterator for SamplePositions {
    type Item = Point3<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.pos;
        self.pos += self.increment;
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SamplePositions {}

/// What is collected along a ray, with the parameters it needs
#[derive(Debug, Clone, Copy)]
pub enum Accumulator<'a> {
    Mip,
    IsoSurface { threshold: f32, color: RGBA },
    Compositing { tf: &'a TransferFunction },
    Transfer2D { tf: &'a TransferFunction2D },
}

impl Accumulator<'_> {
    /// Shading is applied by compositing and isosurfaces only
    pub fn supports_shading(&self) -> bool {
        matches!(
            self,
            Accumulator::IsoSurface { .. } | Accumulator::Compositing { .. }
        )
    }
}

/// Samples rays through a volume
#[derive(Debug, Clone, Copy)]
pub struct RayMarcher<'a> {
    volume: &'a Volume,
    sample_step: f32,
    shading: bool,
}

impl<'a> RayMarcher<'a> {
    pub fn new(volume: &'a Volume, sample_step: f32, shading: bool) -> RayMarcher<'a> {
        RayMarcher {
            volume,
            sample_step,
            shading,
        }
    }

    /// Color of one ray segment
    pub fn march(&self, segment: &RaySegment, accumulator: &Accumulator) -> RGBA {
        let samples = segment.samples(self.sample_step);
        let lighting = if self.shading && accumulator.supports_shading() {
            Some(Lighting::headlight(&segment.direction))
        } else {
            None
        };

        match *accumulator {
            Accumulator::Mip => accumulators::trace_mip(self.volume.field(), samples),
            Accumulator::IsoSurface { threshold, color } => {
                accumulators::trace_iso(self.volume, samples, threshold, color, lighting)
            }
            Accumulator::Compositing { tf } => {
                accumulators::composite_1d(self.volume, samples, tf, lighting)
            }
            Accumulator::Transfer2D { tf } => accumulators::composite_2d(self.volume, samples, tf),
        }
    }
}
