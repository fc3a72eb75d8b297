//! Mappings from intensity (and gradient magnitude) to color.
//!
//! Renderer only reads transfer functions, editing happens elsewhere.

use crate::{
    color::{self, RGBA},
    volumetric::IntensityRange,
};

/// Intensity with an assigned color, colors in between are interpolated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub value: i32,
    pub color: RGBA,
}

impl ControlPoint {
    pub fn new(value: i32, color: RGBA) -> ControlPoint {
        ControlPoint { value, color }
    }
}

/// 1D transfer function over an intensity range.
///
/// Piecewise linear between control points, evaluated into a lookup table
/// with one entry per integer intensity. The first and last control point
/// always sit at the ends of the range.
#[derive(Debug, Clone)]
pub struct TransferFunction {
    range: IntensityRange,
    control_points: Vec<ControlPoint>,
    lut: Vec<RGBA>,
}

impl TransferFunction {
    /// Ramp from transparent black at `range.min` to opaque white at `range.max`
    pub fn new(range: IntensityRange) -> TransferFunction {
        let mut tf = TransferFunction {
            range,
            control_points: vec![],
            lut: vec![],
        };
        tf.reset();
        tf
    }

    /// Drop all control points except the two at the ends of the range
    pub fn reset(&mut self) {
        let min = ControlPoint::new(self.range.min as i32, color::zero());
        let max = ControlPoint::new(self.range.max as i32, color::new(1.0, 1.0, 1.0, 1.0));
        self.control_points = if min.value == max.value {
            vec![max]
        } else {
            vec![min, max]
        };
        self.rebuild_lut();
    }

    pub fn range(&self) -> IntensityRange {
        self.range
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Add control point, `value` is clamped into the range.
    /// A point already present at that value gets its color replaced.
    ///
    /// Returns index of the point.
    pub fn add_control_point(&mut self, value: i32, color: RGBA) -> usize {
        let value = self.range.clamp(value);
        let index = match self
            .control_points
            .binary_search_by_key(&value, |point| point.value)
        {
            Ok(index) => {
                self.control_points[index].color = color;
                index
            }
            Err(index) => {
                self.control_points
                    .insert(index, ControlPoint::new(value, color));
                index
            }
        };
        self.rebuild_lut();
        index
    }

    /// Remove control point at `index`.
    /// Points at the ends of the range cannot be removed.
    pub fn remove_control_point(&mut self, index: usize) -> Option<ControlPoint> {
        if index == 0 || index + 1 >= self.control_points.len() {
            return None;
        }
        let point = self.control_points.remove(index);
        self.rebuild_lut();
        Some(point)
    }

    /// Color of `intensity`, intensities outside of the range are clamped
    pub fn color_at(&self, intensity: i32) -> RGBA {
        let index = self.range.clamp(intensity) - self.range.min as i32;
        self.lut[index as usize]
    }

    fn rebuild_lut(&mut self) {
        let mut lut = vec![color::zero(); self.range.len()];
        let base = self.range.min as i32;

        for pair in self.control_points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let span = (to.value - from.value) as f32;
            for value in from.value..=to.value {
                let t = (value - from.value) as f32 / span;
                lut[(value - base) as usize] = from.color.lerp(&to.color, t);
            }
        }

        if let [single] = self.control_points.as_slice() {
            lut[(single.value - base) as usize] = single.color;
        }

        self.lut = lut;
    }
}

/// Triangle widget in (intensity, gradient magnitude) space.
///
/// The triangle has its apex at `base_intensity` on zero gradient magnitude
/// and is `2 * radius` wide at the largest gradient magnitude of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferFunction2D {
    pub base_intensity: f32,
    pub radius: f32,
    pub color: RGBA,
}

impl TransferFunction2D {
    pub fn new(base_intensity: f32, radius: f32, color: RGBA) -> TransferFunction2D {
        TransferFunction2D {
            base_intensity,
            radius,
            color,
        }
    }

    /// Widget centered at half of the maximum intensity, `radius` is a fifth of the maximum
    pub fn for_range(range: IntensityRange, color: RGBA) -> TransferFunction2D {
        let max = range.max;
        TransferFunction2D {
            base_intensity: (max / 2) as f32,
            radius: 0.2 * max as f32,
            color,
        }
    }
}

#[cfg(test)]
mod test {

    use pretty_assertions::assert_eq;

    use super::*;

    fn range() -> IntensityRange {
        IntensityRange::new(0, 100)
    }

    #[test]
    fn default_ramp() {
        let tf = TransferFunction::new(range());

        assert_eq!(tf.color_at(0), color::zero());
        assert_eq!(tf.color_at(100), color::new(1.0, 1.0, 1.0, 1.0));
        assert!((tf.color_at(50) - color::mono(0.5, 0.5)).norm() < 1e-6);
    }

    #[test]
    fn lookup_clamps() {
        let tf = TransferFunction::new(range());

        assert_eq!(tf.color_at(-20), tf.color_at(0));
        assert_eq!(tf.color_at(1000), tf.color_at(100));
    }

    #[test]
    fn control_points_stay_sorted() {
        let mut tf = TransferFunction::new(range());
        let red = color::new(1.0, 0.0, 0.0, 1.0);

        assert_eq!(tf.add_control_point(60, red), 1);
        assert_eq!(tf.add_control_point(20, color::zero()), 1);
        // replaces color of existing point
        assert_eq!(tf.add_control_point(60, red * 0.5), 2);

        let values: Vec<i32> = tf.control_points().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0, 20, 60, 100]);
        assert_eq!(tf.color_at(60), red * 0.5);
        assert!((tf.color_at(40) - red * 0.25).norm() < 1e-6);
    }

    #[test]
    fn ends_cannot_be_removed() {
        let mut tf = TransferFunction::new(range());
        tf.add_control_point(50, color::zero());

        assert_eq!(tf.remove_control_point(0), None);
        assert_eq!(tf.remove_control_point(2), None);
        assert_eq!(
            tf.remove_control_point(1),
            Some(ControlPoint::new(50, color::zero()))
        );
        assert_eq!(tf.control_points().len(), 2);
    }

    #[test]
    fn single_value_range() {
        let tf = TransferFunction::new(IntensityRange::new(7, 7));

        assert_eq!(tf.control_points().len(), 1);
        assert_eq!(tf.color_at(7), color::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(tf.color_at(0), color::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn widget_for_range() {
        let widget = TransferFunction2D::for_range(IntensityRange::new(-5, 255), color::zero());

        assert_eq!(widget.base_intensity, 127.0);
        assert!((widget.radius - 51.0).abs() < 1e-4);
    }
}
