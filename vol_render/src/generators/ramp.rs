use nalgebra::Vector3;

use super::SampleGenerator;

/// Value grows linearly along the X axis, saturates at the `i16` limit
pub struct RampGenerator {
    slope: f32,
}

impl RampGenerator {
    pub fn new(slope: f32) -> RampGenerator {
        RampGenerator { slope }
    }
}

impl SampleGenerator for RampGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> i16 {
        (coords.x as f32 * self.slope) as i16
    }
}
