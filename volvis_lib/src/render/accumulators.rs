//! Per ray accumulation of samples into a color.

use std::f32::consts::FRAC_PI_2;

use nalgebra::{Point3, Vector3};

use crate::{
    color::{self, RGBA},
    transfer_function::{TransferFunction, TransferFunction2D},
    volumetric::{Field, ScalarField, Volume},
};

use super::{ray_marcher::SamplePositions, shading::Lighting};

/// Intensities are divided by this for maximum intensity projection
const MIP_NORMALIZATION: f32 = 255.0;

/// Isosurface refinement stops once half of the bracket is shorter
const ISO_MIN_STEP: f32 = 0.01;

/// 1D compositing stops after a sample more opaque than this
const OPAQUE_1D: f32 = 0.99;

/// 2D compositing stops once accumulated opacity reaches this
const OPAQUE_2D: f32 = 0.999;

/// Maximum intensity projection.
/// Grayscale of the brightest nearest-neighbour sample, transparent if nothing is above zero.
pub fn trace_mip(field: &ScalarField, samples: SamplePositions) -> RGBA {
    let maximum = samples
        .map(|pos| field.sample_nearest(pos) / MIP_NORMALIZATION)
        .fold(0.0, f32::max);

    let opacity = if maximum > 0.0 { 1.0 } else { 0.0 };
    color::mono(maximum, opacity)
}

/// Opaque `iso_color` where the ray first reaches `threshold`, transparent if it never does
pub fn trace_iso(
    volume: &Volume,
    samples: SamplePositions,
    threshold: f32,
    iso_color: RGBA,
    lighting: Option<Lighting>,
) -> RGBA {
    let field = volume.field();

    let (below, above) = match find_iso_crossing(field, samples, threshold) {
        Some(bracket) => bracket,
        None => return color::zero(),
    };
    let surface = refine_crossing(field, below, above, threshold);

    let surface_color = color::from_rgb(&iso_color.xyz(), 1.0);
    match lighting {
        Some(lighting) => {
            let gradient = volume.gradients().sample_trilinear(surface);
            lighting.shade(surface_color, &gradient)
        }
        None => surface_color,
    }
}

/// First sample with trilinear intensity at or above `threshold`, paired with the sample
/// before it. When the first sample already crosses, both positions are the first sample.
pub fn find_iso_crossing(
    field: &ScalarField,
    samples: SamplePositions,
    threshold: f32,
) -> Option<(Point3<f32>, Point3<f32>)> {
    let mut previous = None;
    for pos in samples {
        if field.sample_trilinear(pos) >= threshold {
            return Some((previous.unwrap_or(pos), pos));
        }
        previous = Some(pos);
    }
    None
}

/// Bisection between a position below `threshold` and one at or above it.
///
/// Returns the middle of the final bracket, which is less than [`ISO_MIN_STEP`]
/// from both of its ends.
pub fn refine_crossing(
    field: &ScalarField,
    mut below: Point3<f32>,
    mut above: Point3<f32>,
    threshold: f32,
) -> Point3<f32> {
    let mut half = (above - below) / 2.0;
    while half.norm() >= ISO_MIN_STEP {
        let mid = below + half;
        if field.sample_trilinear(mid) >= threshold {
            above = mid;
        } else {
            below = mid;
        }
        half = (above - below) / 2.0;
    }
    below + half
}

/// Front to back compositing through a 1D transfer function.
///
/// Equivalent to blending back to front with the "over" operator, where the blending
/// starts at the last sample or at the first sample with opacity above [`OPAQUE_1D`].
/// Resulting opacity is the accumulated opacity of the blended samples.
pub fn composite_1d(
    volume: &Volume,
    samples: SamplePositions,
    tf: &TransferFunction,
    lighting: Option<Lighting>,
) -> RGBA {
    let field = volume.field();
    let gradients = volume.gradients();

    let mut rgb = Vector3::zeros();
    let mut transmittance = 1.0;

    for pos in samples {
        let intensity = field.sample_trilinear(pos);
        let mut sample = tf.color_at(intensity.round() as i32);
        if let Some(lighting) = lighting {
            sample = lighting.shade(sample, &gradients.sample_nearest(pos));
        }

        rgb += transmittance * sample.w * sample.xyz();
        transmittance *= 1.0 - sample.w;

        if sample.w > OPAQUE_1D {
            break;
        }
    }

    color::from_rgb(&rgb, 1.0 - transmittance)
}

/// Front to back compositing of the 2D transfer function widget
pub fn composite_2d(volume: &Volume, samples: SamplePositions, tf: &TransferFunction2D) -> RGBA {
    let field = volume.field();
    let gradients = volume.gradients();
    let max_gradient = gradients.max_magnitude();

    let mut acc = color::zero();
    for pos in samples {
        if acc.w >= OPAQUE_2D {
            break;
        }

        let gradient = gradients.sample_nearest(pos);
        let intensity = field.sample_trilinear(pos);
        let opacity = compute_opacity_2d_tf(
            tf.base_intensity,
            tf.radius,
            intensity,
            gradient.mag,
            max_gradient,
        );

        let weight = (1.0 - acc.w) * opacity;
        acc.x += weight * tf.color.x;
        acc.y += weight * tf.color.y;
        acc.z += weight * tf.color.z;
        acc.w += weight;
    }
    acc
}

/// Opacity of a sample under the triangle widget.
///
/// The triangle has its apex at (`intensity`, 0) and spans `intensity ± radius` at
/// `max_grad_magnitude`. Inside of the triangle the opacity grows with the angle
/// between the sample and the intensity axis, measured at the apex.
///
/// Samples with zero gradient are never classified. A sample right above the apex
/// (`voxel_value == intensity`) with nonzero gradient has the largest possible angle.
pub fn compute_opacity_2d_tf(
    intensity: f32,
    radius: f32,
    voxel_value: f32,
    grad_magnitude: f32,
    max_grad_magnitude: f32,
) -> f32 {
    if max_grad_magnitude <= 0.0 {
        return 0.0;
    }

    // atan2 keeps the on-axis case at 90 degrees instead of dividing by zero
    let angle = grad_magnitude.atan2((voxel_value - intensity).abs());
    let wedge_angle = if intensity > 0.0 {
        (radius / intensity).atan()
    } else {
        FRAC_PI_2
    };

    if wedge_angle < angle {
        let s = (radius * grad_magnitude / max_grad_magnitude).abs();
        if voxel_value > intensity - s && voxel_value < intensity + s {
            return 1.0 - wedge_angle / angle;
        }
    }
    0.0
}
