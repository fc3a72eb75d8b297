use log::info;
use nalgebra::{Point3, Vector3};

use crate::common::BoundBox;

use super::{Field, GradientField, ScalarField};

/// Scalar field together with its gradients.
///
/// Gradients are derived once, when the volume is created.
/// Replacing the field means building a new `Volume`.
#[derive(Debug)]
pub struct Volume {
    field: ScalarField,
    gradients: GradientField,
}

impl Volume {
    pub fn new(field: ScalarField) -> Volume {
        let gradients = GradientField::new(&field);
        info!(
            "Volume {:?} ready, intensities {}..={}",
            field.get_size(),
            field.minimum(),
            field.maximum()
        );
        Volume { field, gradients }
    }

    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    pub fn gradients(&self) -> &GradientField {
        &self.gradients
    }

    pub fn get_size(&self) -> Vector3<usize> {
        self.field.get_size()
    }

    pub fn get_bound_box(&self) -> BoundBox {
        self.field.get_bound_box()
    }

    pub fn center(&self) -> Point3<f32> {
        self.field.center()
    }

    pub fn diagonal(&self) -> f32 {
        self.field.diagonal()
    }
}

impl From<ScalarField> for Volume {
    fn from(field: ScalarField) -> Self {
        Volume::new(field)
    }
}
