//! Module with helper functions
//! Synthetic fields for unit tests, integration tests and benchmarks

use std::sync::Arc;

use nalgebra::{vector, Matrix4, Point3, Vector3};

use crate::{
    color::RGBA,
    premade::transfer_functions,
    render::{RaycastMode, RegionSettings, RenderRequest},
    volumetric::{ScalarField, Volume},
};

/// 2x2x2 field, every voxel different
pub fn white_field() -> ScalarField {
    let data = vec![0, 32, 64, 64 + 32, 128, 128 + 32, 128 + 64, 255];
    ScalarField::new(vector![2, 2, 2], data).unwrap()
}

pub fn uniform_field(size: Vector3<usize>, value: i16) -> ScalarField {
    ScalarField::new(size, vec![value; size.x * size.y * size.z]).unwrap()
}

/// Intensity grows linearly along X, `slope * x`
pub fn ramp_field(size: Vector3<usize>, slope: f32) -> ScalarField {
    ScalarField::from_fn(size, |x, _, _| (slope * x as f32) as i16).unwrap()
}

/// Cube with a ball of `value` in the middle, zero elsewhere
pub fn sphere_field(side: usize, radius: f32, value: i16) -> ScalarField {
    let center = Point3::from(Vector3::repeat(side as f32 / 2.0));
    ScalarField::from_fn(vector![side, side, side], |x, y, z| {
        let pos = Point3::new(x as f32, y as f32, z as f32);
        if (pos - center).norm() <= radius {
            value
        } else {
            0
        }
    })
    .unwrap()
}

/// Deterministic, irregular values in `<0;250>`
pub fn pattern_field(size: Vector3<usize>) -> ScalarField {
    ScalarField::from_fn(size, |x, y, z| ((x * 7 + y * 13 + z * 29) % 251) as i16).unwrap()
}

pub fn uniform_volume(size: Vector3<usize>, value: i16) -> Volume {
    Volume::new(uniform_field(size, value))
}

pub fn sphere_volume(side: usize, radius: f32, value: i16) -> Volume {
    Volume::new(sphere_field(side, radius, value))
}

/// Looking along -Z, image axes aligned with X and Y
pub fn front_view() -> Matrix4<f32> {
    Matrix4::identity()
}

/// Request with the same `mode` in both regions and the default transfer functions
pub fn request_for(volume: &Volume, mode: RaycastMode) -> RenderRequest {
    RenderRequest::new(front_view(), RegionSettings::for_volume(volume, mode))
}

/// Request compositing through a transfer function mapping every positive intensity to `rgba`
pub fn opaque_request(volume: &Volume, rgba: RGBA) -> RenderRequest {
    let mut settings = RegionSettings::for_volume(volume, RaycastMode::Compositing);
    settings.tf = Arc::new(transfer_functions::opaque(volume.field().range(), rgba));
    RenderRequest::new(front_view(), settings)
}
