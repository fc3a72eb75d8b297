use nalgebra::{Point3, Vector3};

/// Linear interpolation between two samples.
pub trait Lerp: Copy {
    /// `(1 - t) * self + t * other`
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, other: Self, t: f32) -> Self {
        (1.0 - t) * self + t * other
    }
}

/// Axis aligned 3D grid of samples.
/// Neighbouring samples are assumed to be 1 unit apart on every axis.
pub trait Field {
    type Sample: Lerp + Default;

    /// Number of samples along each axis
    fn get_size(&self) -> Vector3<usize>;

    /// Sample at lattice point, `None` if outside of the grid
    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<Self::Sample>;

    /// Position can be interpolated, i.e. every axis is in `<0;dim-2>`.
    ///
    /// This also rejects the outermost interpolation cell, even though
    /// its samples exist. Rejects NaN.
    fn is_interpolable(&self, pos: &Point3<f32>) -> bool {
        let size = self.get_size();
        (0..3).all(|axis| {
            let limit = size[axis] as f32 - 2.0;
            pos[axis] >= 0.0 && pos[axis] <= limit
        })
    }

    /// Trilinear interpolation, default sample if position is not interpolable.
    ///
    /// Interpolates along X first (4 pairs), then Y (2 pairs), then Z.
    fn sample_trilinear(&self, pos: Point3<f32>) -> Self::Sample {
        if !self.is_interpolable(&pos) {
            return Self::Sample::default();
        }

        let x = pos.x.floor() as usize;
        let y = pos.y.floor() as usize;
        let z = pos.z.floor() as usize;

        let x_t = pos.x - x as f32;
        let y_t = pos.y - y as f32;
        let z_t = pos.z - z as f32;

        let data = |x, y, z| self.get_data(x, y, z).unwrap_or_default();

        // x lines
        let c00 = data(x, y, z).lerp(data(x + 1, y, z), x_t);
        let c10 = data(x, y + 1, z).lerp(data(x + 1, y + 1, z), x_t);
        let c01 = data(x, y, z + 1).lerp(data(x + 1, y, z + 1), x_t);
        let c11 = data(x, y + 1, z + 1).lerp(data(x + 1, y + 1, z + 1), x_t);

        // y plane
        let c0 = c00.lerp(c10, y_t);
        let c1 = c01.lerp(c11, y_t);

        c0.lerp(c1, z_t)
    }
}
