use nalgebra::{Point3, Vector3};

use super::SampleGenerator;

/// Ball in the middle of the volume.
/// Value is `sample` at the center and falls off linearly to 0 at `radius`.
pub struct SphereGenerator {
    center: Point3<f32>,
    radius: f32,
    sample: i16,
}

impl SphereGenerator {
    pub fn new(dims: Vector3<usize>, sample: i16, radius: f32) -> SphereGenerator {
        let center = dims.map(|d| (d as f32 - 1.0) / 2.0).into();
        SphereGenerator {
            center,
            radius,
            sample,
        }
    }
}

impl SampleGenerator for SphereGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> i16 {
        let pos: Point3<f32> = coords.map(|c| c as f32).into();
        let dist = (pos - self.center).norm();
        if dist >= self.radius {
            return 0;
        }
        let falloff = 1.0 - dist / self.radius;
        (self.sample as f32 * falloff).round() as i16
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    #[test]
    fn falls_off_from_center() {
        let gen = SphereGenerator::new(vector![9, 9, 9], 200, 4.0);

        assert_eq!(gen.sample_at(vector![4, 4, 4]), 200);
        assert_eq!(gen.sample_at(vector![6, 4, 4]), 100);
        assert_eq!(gen.sample_at(vector![8, 4, 4]), 0);
        assert_eq!(gen.sample_at(vector![0, 0, 0]), 0);
    }
}
