use nalgebra::{Point3, Vector3};

use crate::common::BoundBox;

use super::{Field, FieldError};

/// Inclusive range of intensities present in a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityRange {
    pub min: i16,
    pub max: i16,
}

impl IntensityRange {
    pub fn new(min: i16, max: i16) -> IntensityRange {
        IntensityRange { min, max }
    }

    /// Number of integer values in range
    pub fn len(&self) -> usize {
        (self.max as i32 - self.min as i32 + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, value: i32) -> bool {
        self.min as i32 <= value && value <= self.max as i32
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min as i32, self.max as i32)
    }
}

/// 3D grid of signed 16bit intensities.
///
/// Samples are stored with X growing fastest: index of `(x,y,z)` is `x + dim_x * (y + dim_y * z)`.
/// Immutable once constructed.
pub struct ScalarField {
    size: Vector3<usize>,
    data: Vec<i16>,
    range: IntensityRange,
    histogram: Vec<u32>,
}

impl std::fmt::Debug for ScalarField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarField")
            .field("size", &self.size)
            .field("range", &self.range)
            .field("data len", &self.data.len())
            .finish()
    }
}

impl ScalarField {
    pub fn new(size: Vector3<usize>, data: Vec<i16>) -> Result<ScalarField, FieldError> {
        if size.iter().any(|&dim| dim == 0) {
            return Err(FieldError::ZeroDimension(size));
        }

        let expected = size.x * size.y * size.z;
        if data.len() != expected {
            return Err(FieldError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        let range = data.iter().fold(
            IntensityRange::new(data[0], data[0]),
            |range, &val| IntensityRange::new(range.min.min(val), range.max.max(val)),
        );
        let histogram = compute_histogram(&data, range.max);

        Ok(ScalarField {
            size,
            data,
            range,
            histogram,
        })
    }

    /// Build field by evaluating `f` at every lattice point
    pub fn from_fn<F>(size: Vector3<usize>, mut f: F) -> Result<ScalarField, FieldError>
    where
        F: FnMut(usize, usize, usize) -> i16,
    {
        let mut data = Vec::with_capacity(size.x * size.y * size.z);
        for z in 0..size.z {
            for y in 0..size.y {
                for x in 0..size.x {
                    data.push(f(x, y, z));
                }
            }
        }
        ScalarField::new(size, data)
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.size.x * (y + self.size.y * z)
    }

    /// Bounds checked lookup, 0 outside of `<0;dim)` on any axis.
    pub fn get_voxel(&self, x: isize, y: isize, z: isize) -> i16 {
        let inside = [x, y, z]
            .iter()
            .zip(self.size.iter())
            .all(|(&coord, &dim)| coord >= 0 && (coord as usize) < dim);
        if !inside {
            return 0;
        }
        self.data[self.get_3d_index(x as usize, y as usize, z as usize)]
    }

    /// Nearest neighbour sample (coordinates rounded down), 0 outside of the field.
    pub fn sample_nearest(&self, pos: Point3<f32>) -> f32 {
        if pos.iter().any(|v| v.is_nan()) {
            return 0.0;
        }
        let voxel = pos.map(|v| v.floor() as isize);
        self.get_voxel(voxel.x, voxel.y, voxel.z) as f32
    }

    pub fn minimum(&self) -> i16 {
        self.range.min
    }

    pub fn maximum(&self) -> i16 {
        self.range.max
    }

    pub fn range(&self) -> IntensityRange {
        self.range
    }

    /// Number of voxels of each value in `<0;maximum>`.
    /// Negative intensities are not counted.
    pub fn histogram(&self) -> &[u32] {
        &self.histogram
    }

    pub fn data(&self) -> &[i16] {
        &self.data
    }

    pub fn center(&self) -> Point3<f32> {
        Point3::from(self.size.map(|v| v as f32 / 2.0))
    }

    /// Length of the diagonal of the field
    pub fn diagonal(&self) -> f32 {
        self.size.map(|v| v as f32).norm()
    }

    pub fn get_bound_box(&self) -> BoundBox {
        BoundBox::from_dims(self.size)
    }
}

impl Field for ScalarField {
    type Sample = f32;

    fn get_size(&self) -> Vector3<usize> {
        self.size
    }

    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        if x >= self.size.x || y >= self.size.y || z >= self.size.z {
            return None;
        }
        Some(self.data[self.get_3d_index(x, y, z)] as f32)
    }
}

fn compute_histogram(data: &[i16], maximum: i16) -> Vec<u32> {
    if maximum < 0 {
        return vec![];
    }
    let mut histogram = vec![0; maximum as usize + 1];
    for &val in data {
        if val >= 0 {
            histogram[val as usize] += 1;
        }
    }
    histogram
}

#[cfg(test)]
mod test {

    use nalgebra::{point, vector};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn rejects_bad_input() {
        let err = ScalarField::new(vector![2, 0, 2], vec![]).unwrap_err();
        assert_eq!(err, FieldError::ZeroDimension(vector![2, 0, 2]));

        let err = ScalarField::new(vector![2, 2, 2], vec![0; 7]).unwrap_err();
        assert_eq!(
            err,
            FieldError::DataLengthMismatch {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn x_grows_fastest() {
        let field = white_field();

        assert_eq!(field.get_voxel(1, 0, 0), 32);
        assert_eq!(field.get_voxel(0, 1, 0), 64);
        assert_eq!(field.get_voxel(0, 0, 1), 128);
        assert_eq!(field.get_voxel(1, 1, 1), 255);
    }

    #[test]
    fn statistics() {
        let field =
            ScalarField::new(vector![2, 2, 1], vec![3, -2, 3, 1]).expect("valid field");

        assert_eq!(field.minimum(), -2);
        assert_eq!(field.maximum(), 3);
        assert_eq!(field.range().len(), 6);
        // negative sample is not counted
        assert_eq!(field.histogram(), &[0, 1, 0, 2]);
    }

    #[test]
    fn nearest_outside_is_zero() {
        let field = uniform_field(vector![4, 4, 4], 100);

        assert_eq!(field.get_voxel(-1, 0, 0), 0);
        assert_eq!(field.get_voxel(0, 4, 0), 0);
        assert_eq!(field.sample_nearest(point![3.9, 3.9, 3.9]), 100.0);
        assert_eq!(field.sample_nearest(point![4.0, 1.0, 1.0]), 0.0);
        assert_eq!(field.sample_nearest(point![-0.1, 1.0, 1.0]), 0.0);
        assert_eq!(field.sample_nearest(point![f32::NAN, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn trilinear_at_lattice_is_identity() {
        let field = pattern_field(vector![6, 5, 4]);
        let size = field.get_size();

        // interior of the interpolable region
        for z in 0..size.z - 1 {
            for y in 0..size.y - 1 {
                for x in 0..size.x - 1 {
                    let pos = point![x as f32, y as f32, z as f32];
                    let nearest = field.get_voxel(x as isize, y as isize, z as isize) as f32;
                    assert_eq!(field.sample_trilinear(pos), nearest);
                }
            }
        }
    }

    #[test]
    fn trilinear_outside_is_zero() {
        let field = uniform_field(vector![4, 4, 4], 100);

        assert_eq!(field.sample_trilinear(point![-0.01, 1.0, 1.0]), 0.0);
        // last cell is excluded
        assert_eq!(field.sample_trilinear(point![2.5, 1.0, 1.0]), 0.0);
        assert_eq!(field.sample_trilinear(point![1.0, 1.0, 2.01]), 0.0);
        assert_eq!(field.sample_trilinear(point![f32::NAN, 1.0, 1.0]), 0.0);

        assert_eq!(field.sample_trilinear(point![2.0, 2.0, 2.0]), 100.0);
    }

    #[test]
    fn trilinear_blends_neighbours() {
        let field = white_field();

        // 2x2x2 field can only be interpolated at origin
        assert_eq!(field.sample_trilinear(point![0.0, 0.0, 0.0]), 0.0);

        let field = ramp_field(vector![8, 3, 3], 10.0);
        let sample = field.sample_trilinear(point![2.25, 0.5, 0.75]);
        assert!((sample - 22.5).abs() < 1e-4);
    }

    #[test]
    fn center_and_diagonal() {
        let field = uniform_field(vector![2, 4, 4], 1);

        assert_eq!(field.center(), point![1.0, 2.0, 2.0]);
        assert_eq!(field.diagonal(), 6.0);
    }
}
