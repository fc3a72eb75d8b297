mod error;
mod field;
mod gradient_field;
mod scalar_field;
mod volume;

pub use error::FieldError;
pub use field::{Field, Lerp};
pub use gradient_field::{GradientField, VoxelGradient};
pub use scalar_field::{IntensityRange, ScalarField};
pub use volume::Volume;
