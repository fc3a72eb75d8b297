use log::info;
use nalgebra::{vector, Vector3};
use rayon::prelude::*;
use volvis_lib::volumetric::{FieldError, ScalarField};

use crate::config::{Config, GeneratorConfig};

mod noise;
mod ramp;
mod solid;
mod sphere;

pub use noise::NoiseGenerator;
pub use ramp::RampGenerator;
pub use solid::SolidGenerator;
pub use sphere::SphereGenerator;

// Generates one sample at a time, at any location
pub trait SampleGenerator: Sync {
    fn sample_at(&self, coords: Vector3<usize>) -> i16;
}

pub fn get_sample_generator(config: &Config) -> Box<dyn SampleGenerator> {
    match config.generator {
        GeneratorConfig::Solid { sample, padding } => {
            Box::new(SolidGenerator::new(config.dims, sample, padding))
        }
        GeneratorConfig::Sphere { sample, radius } => {
            Box::new(SphereGenerator::new(config.dims, sample, radius))
        }
        GeneratorConfig::Ramp { slope } => Box::new(RampGenerator::new(slope)),
        GeneratorConfig::Noise { amplitude, cell } => Box::new(NoiseGenerator::new(
            config.dims,
            amplitude,
            cell,
            config.seed,
        )),
    }
}

/// Evaluate `generator` at every voxel, in parallel
pub fn generate_field(
    generator: &dyn SampleGenerator,
    dims: Vector3<usize>,
) -> Result<ScalarField, FieldError> {
    let len = dims.x * dims.y * dims.z;
    let data: Vec<i16> = (0..len)
        .into_par_iter()
        .map(|index| {
            let x = index % dims.x;
            let y = (index / dims.x) % dims.y;
            let z = index / (dims.x * dims.y);
            generator.sample_at(vector![x, y, z])
        })
        .collect();

    let field = ScalarField::new(dims, data)?;
    info!("Generated field {:?}", field);
    Ok(field)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn field_uses_x_fastest_order() {
        let dims = vector![3, 2, 2];
        let field = generate_field(&RampGenerator::new(10.0), dims).unwrap();

        assert_eq!(field.data()[..3], [0, 10, 20]);
        assert_eq!(field.get_voxel(2, 1, 1), 20);
        assert_eq!(field.maximum(), 20);
    }

    #[test]
    fn zero_dims_fail() {
        let res = generate_field(&RampGenerator::new(1.0), vector![0, 2, 2]);
        assert!(res.is_err());
    }
}
