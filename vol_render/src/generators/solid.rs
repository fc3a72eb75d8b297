use nalgebra::Vector3;

use super::SampleGenerator;

/// Generate solid volume
/// All sample values are the same, except for the padding
pub struct SolidGenerator {
    /// The sample value
    sample: i16,
    pad: usize,
    dims: Vector3<usize>,
}

impl SolidGenerator {
    pub fn new(dims: Vector3<usize>, sample: i16, pad: usize) -> SolidGenerator {
        SolidGenerator {
            sample,
            pad,
            dims,
        }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> i16 {
        let inside = coords
            .iter()
            .zip(self.dims.iter())
            .all(|(&c, &dim)| c >= self.pad && c + self.pad < dim);
        if inside {
            self.sample
        } else {
            0
        }
    }
}
