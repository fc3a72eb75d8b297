use crate::{
    color::{self, RGBA},
    transfer_function::{TransferFunction, TransferFunction2D},
    volumetric::IntensityRange,
};

/// Default 1D transfer function.
///
/// Transparent below 40, orange around 75, faint dark tissue up to 205,
/// white above. Points outside of `range` are clamped onto its ends.
pub fn test_function(range: IntensityRange) -> TransferFunction {
    let mut tf = TransferFunction::new(range);
    let points = [
        (40, color::zero()),
        (75, color::new(1.0, 0.666, 0.0, 1.0)),
        (103, color::new(0.0, 0.0, 0.0, 0.3)),
        (205, color::zero()),
        (206, color::new(1.0, 1.0, 1.0, 1.0)),
    ];
    for (value, color) in points {
        if range.contains(value) {
            tf.add_control_point(value, color);
        }
    }
    tf
}

/// Every intensity above zero is opaque `rgba`.
/// Fully transparent if the range has nothing above zero.
pub fn opaque(range: IntensityRange, rgba: RGBA) -> TransferFunction {
    let mut tf = TransferFunction::new(range);
    if range.max <= 0 {
        tf.add_control_point(range.max as i32, color::zero());
        return tf;
    }
    let first_visible = range.clamp(1);
    tf.add_control_point(range.max as i32, rgba);
    tf.add_control_point(first_visible, rgba);
    if first_visible > range.min as i32 + 1 {
        tf.add_control_point(first_visible - 1, color::zero());
    }
    tf
}

/// Default widget, light green with low opacity
pub fn default_2d(range: IntensityRange) -> TransferFunction2D {
    TransferFunction2D::for_range(range, color::new(0.0, 0.8, 0.6, 0.3))
}
