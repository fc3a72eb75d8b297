use nalgebra::{Matrix4, Point3, Unit, Vector3};

use crate::camera::ViewBasis;

/// Plane splitting the field into a front and a back region.
///
/// Both regions can be rendered with different settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuttingPlane {
    pub point: Point3<f32>,
    pub normal: Unit<Vector3<f32>>,
}

impl CuttingPlane {
    pub fn new(point: Point3<f32>, normal: Vector3<f32>) -> CuttingPlane {
        CuttingPlane {
            point,
            normal: Unit::new_normalize(normal),
        }
    }

    /// Plane through `center`, facing the horizontal (first) basis vector of the view.
    /// The plane then appears as a vertical line through the center of the image.
    pub fn from_view(center: Point3<f32>, view_matrix: &Matrix4<f32>) -> CuttingPlane {
        let basis = ViewBasis::from_view_matrix(view_matrix);
        CuttingPlane::new(center, basis.u)
    }

    /// Distance of `pos` from the plane, positive on the side the normal points to.
    pub fn signed_distance(&self, pos: &Point3<f32>) -> f32 {
        (pos - self.point).dot(self.normal.as_ref())
    }

    /// Position lies strictly on the side the normal points to.
    pub fn is_front(&self, pos: &Point3<f32>) -> bool {
        self.signed_distance(pos) > 0.0
    }
}

#[cfg(test)]
mod test {

    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn front_and_back() {
        let plane = CuttingPlane::new(point![2.0, 2.0, 2.0], vector![0.0, 0.0, 3.0]);

        assert!(plane.is_front(&point![0.0, 0.0, 2.5]));
        assert!(!plane.is_front(&point![4.0, 4.0, 1.5]));
        // Points on the plane belong to the back
        assert!(!plane.is_front(&point![0.0, 4.0, 2.0]));

        assert!((plane.signed_distance(&point![1.0, 1.0, 5.0]) - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn plane_from_identity_view() {
        let plane = CuttingPlane::from_view(point![1.0, 1.0, 1.0], &Matrix4::identity());

        assert_eq!(plane.normal.into_inner(), vector![1.0, 0.0, 0.0]);
        assert!(plane.is_front(&point![1.5, 0.0, 0.0]));
    }
}
