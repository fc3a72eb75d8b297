use nalgebra::{Point3, Vector3};

/// Ray cast through a pixel.
/// Main usecase is getting entry and exit points on a field's bounding box
/// ([`super::BoundBox::entry_exit`]), then marching the segment between them in steps.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Construct new ray using `origin` and `direction`.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Ray {
        Ray { origin, direction }
    }

    /// Returns point `t` units far from ray origin in ray direction.
    /// Negative `t` goes behind the origin.
    pub fn point_from_t(&self, t: f32) -> Point3<f32> {
        self.origin + t * self.direction
    }
}
