use log::debug;
use nalgebra::Vector3;

use super::SampleGenerator;

/// Value noise.
/// Random values on a coarse lattice, trilinearly interpolated in between.
pub struct NoiseGenerator {
    lattice: Vec<f32>,
    lattice_dims: Vector3<usize>,
    cell: usize,
    amplitude: f32,
}

impl NoiseGenerator {
    /// Without `seed` a random one is used
    pub fn new(
        dims: Vector3<usize>,
        amplitude: i16,
        cell: usize,
        seed: Option<u64>,
    ) -> NoiseGenerator {
        let cell = cell.max(1);
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        // one extra lattice point covers the far end
        let lattice_dims = dims.map(|d| d / cell + 2);
        let len = lattice_dims.x * lattice_dims.y * lattice_dims.z;
        let lattice = (0..len).map(|_| rng.f32()).collect();
        debug!("Noise lattice {:?}, seed {:?}", lattice_dims, seed);

        NoiseGenerator {
            lattice,
            lattice_dims,
            cell,
            amplitude: amplitude as f32,
        }
    }

    fn lattice_at(&self, x: usize, y: usize, z: usize) -> f32 {
        let d = self.lattice_dims;
        self.lattice[x + d.x * (y + d.y * z)]
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl SampleGenerator for NoiseGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> i16 {
        let base = coords.map(|c| c / self.cell);
        let t = coords.map(|c| (c % self.cell) as f32 / self.cell as f32);
        let (x, y, z) = (base.x, base.y, base.z);

        let c00 = lerp(self.lattice_at(x, y, z), self.lattice_at(x + 1, y, z), t.x);
        let c10 = lerp(self.lattice_at(x, y + 1, z), self.lattice_at(x + 1, y + 1, z), t.x);
        let c01 = lerp(self.lattice_at(x, y, z + 1), self.lattice_at(x + 1, y, z + 1), t.x);
        let c11 = lerp(
            self.lattice_at(x, y + 1, z + 1),
            self.lattice_at(x + 1, y + 1, z + 1),
            t.x,
        );

        let c0 = lerp(c00, c10, t.y);
        let c1 = lerp(c01, c11, t.y);
        let value = lerp(c0, c1, t.z);

        (value * self.amplitude) as i16
    }
}
