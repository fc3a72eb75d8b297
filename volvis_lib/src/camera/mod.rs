use nalgebra::{vector, Matrix4, Vector3};

mod orbit_camera;

pub use orbit_camera::OrbitCamera;

/// Camera basis vectors in field coordinates, extracted from a view matrix.
///
/// The view matrix maps field coordinates into camera coordinates, so its rows
/// are the camera axes expressed in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    /// Points from the field towards the viewer
    pub view: Vector3<f32>,
    /// Horizontal image axis
    pub u: Vector3<f32>,
    /// Vertical image axis
    pub v: Vector3<f32>,
}

impl ViewBasis {
    pub fn from_view_matrix(m: &Matrix4<f32>) -> ViewBasis {
        ViewBasis {
            u: vector![m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            v: vector![m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            view: vector![m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        }
    }

    /// Direction of all rays, pointing from the viewer into the scene.
    pub fn ray_direction(&self) -> Vector3<f32> {
        -self.view
    }
}
