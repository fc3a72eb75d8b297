use std::sync::{
    atomic::{AtomicUsize, Ordering},
    OnceLock,
};

use nalgebra::{vector, Point3, Vector3};

use super::{Field, Lerp, ScalarField};

/// Gradient of one voxel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelGradient {
    pub vector: Vector3<f32>,
    /// Euclidean norm of `vector`
    pub mag: f32,
}

impl VoxelGradient {
    pub const ZERO: VoxelGradient = VoxelGradient {
        vector: vector![0.0, 0.0, 0.0],
        mag: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> VoxelGradient {
        let vector = vector![x, y, z];
        VoxelGradient {
            vector,
            mag: vector.norm(),
        }
    }
}

impl Default for VoxelGradient {
    fn default() -> Self {
        VoxelGradient::ZERO
    }
}

/// Components are blended, magnitude is recomputed from the blended vector.
impl Lerp for VoxelGradient {
    fn lerp(self, other: Self, t: f32) -> Self {
        let vector = self.vector * (1.0 - t) + other.vector * t;
        VoxelGradient {
            vector,
            mag: vector.norm(),
        }
    }
}

/// Per voxel gradients of a [`ScalarField`], computed by central differences.
///
/// Voxels on the boundary of the field have zero gradient.
pub struct GradientField {
    size: Vector3<usize>,
    data: Vec<VoxelGradient>,
    max_magnitude: OnceLock<f32>,
    scans: AtomicUsize,
}

impl std::fmt::Debug for GradientField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientField")
            .field("size", &self.size)
            .field("max_magnitude", &self.max_magnitude.get())
            .finish()
    }
}

impl GradientField {
    pub fn new(field: &ScalarField) -> GradientField {
        let size = field.get_size();
        let mut data = vec![VoxelGradient::ZERO; size.x * size.y * size.z];

        let voxel =
            |x: usize, y: usize, z: usize| field.get_voxel(x as isize, y as isize, z as isize) as f32;

        for z in 1..size.z.saturating_sub(1) {
            for y in 1..size.y.saturating_sub(1) {
                for x in 1..size.x.saturating_sub(1) {
                    let gx = (voxel(x + 1, y, z) - voxel(x - 1, y, z)) / 2.0;
                    let gy = (voxel(x, y + 1, z) - voxel(x, y - 1, z)) / 2.0;
                    let gz = (voxel(x, y, z + 1) - voxel(x, y, z - 1)) / 2.0;
                    data[x + size.x * (y + size.y * z)] = VoxelGradient::new(gx, gy, gz);
                }
            }
        }

        GradientField {
            size,
            data,
            max_magnitude: OnceLock::new(),
            scans: AtomicUsize::new(0),
        }
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.size.x * (y + self.size.y * z)
    }

    /// Nearest neighbour gradient.
    ///
    /// Coordinates are rounded to the closest integer. Zero gradient if the rounded
    /// position is outside of `<0;dim-2>` on any axis.
    pub fn sample_nearest(&self, pos: Point3<f32>) -> VoxelGradient {
        let rounded = pos.map(f32::round);
        if !self.is_interpolable(&rounded) {
            return VoxelGradient::ZERO;
        }
        self.data[self.get_3d_index(rounded.x as usize, rounded.y as usize, rounded.z as usize)]
    }

    /// Largest gradient magnitude in the field.
    ///
    /// The field is scanned on first call only, later calls return the cached value.
    pub fn max_magnitude(&self) -> f32 {
        *self.max_magnitude.get_or_init(|| {
            self.scans.fetch_add(1, Ordering::Relaxed);
            self.data.iter().fold(0.0, |max, grad| f32::max(max, grad.mag))
        })
    }
}

impl Field for GradientField {
    type Sample = VoxelGradient;

    fn get_size(&self) -> Vector3<usize> {
        self.size
    }

    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<VoxelGradient> {
        if x >= self.size.x || y >= self.size.y || z >= self.size.z {
            return None;
        }
        Some(self.data[self.get_3d_index(x, y, z)])
    }
}
