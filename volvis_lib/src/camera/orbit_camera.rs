use std::f32::consts::PI;

use nalgebra::{vector, Matrix4, Point3, Vector3};

/// Polar angle is kept this far from the poles, where the up vector degenerates.
const POLE_MARGIN: f32 = 0.01;

/// Camera circling around a target point, Y axis up.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    position: Point3<f32>,
    target: Point3<f32>,
}

impl OrbitCamera {
    pub fn new(position: Point3<f32>, target: Point3<f32>) -> OrbitCamera {
        OrbitCamera { position, target }
    }

    pub fn get_position(&self) -> Point3<f32> {
        self.position
    }

    pub fn get_target(&self) -> Point3<f32> {
        self.target
    }

    pub fn set_pos(&mut self, pos: Point3<f32>) {
        self.position = pos;
    }

    pub fn set_target(&mut self, target: Point3<f32>) {
        self.target = target;
    }

    /// Spherical coordinates relative to target.
    /// Returns (r, theta, phi), theta measured from the Y axis.
    fn get_spherical(&self) -> (f32, f32, f32) {
        let dif = self.position - self.target;
        let r = dif.magnitude();
        let theta = (dif.y / r).acos();
        let phi = dif.x.atan2(dif.z);

        (r, theta, phi)
    }

    fn set_spherical(&mut self, r: f32, theta: f32, phi: f32) {
        let theta = theta.clamp(POLE_MARGIN, PI - POLE_MARGIN);
        let sphere_offset = vector![
            r * theta.sin() * phi.sin(),
            r * theta.cos(),
            r * theta.sin() * phi.cos()
        ];

        self.position = self.target + sphere_offset;
    }

    /// Rotate around target.
    /// `d_phi` turns around the Y axis, `d_theta` tilts towards the poles.
    pub fn orbit(&mut self, d_phi: f32, d_theta: f32) {
        let (r, theta, phi) = self.get_spherical();
        self.set_spherical(r, theta + d_theta, phi + d_phi);
    }

    /// Change distance from target, never closer than `min_distance`.
    pub fn zoom(&mut self, delta: f32, min_distance: f32) {
        let (r, theta, phi) = self.get_spherical();
        self.set_spherical(f32::max(r + delta, min_distance), theta, phi);
    }

    /// Matrix mapping field coordinates into camera coordinates
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &Vector3::y())
    }
}

#[cfg(test)]
mod test {

    use nalgebra::point;

    use super::*;
    use crate::camera::ViewBasis;

    #[test]
    fn orbit_keeps_distance() {
        let mut cam = OrbitCamera::new(point![0.0, 0.0, 10.0], point![0.0, 0.0, 0.0]);

        cam.orbit(PI / 2.0, 0.0);

        let pos = cam.get_position();
        assert!((pos - point![10.0, 0.0, 0.0]).norm() < 1e-4);
        assert!(((pos - cam.get_target()).norm() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_clamps() {
        let mut cam = OrbitCamera::new(point![0.0, 0.0, 10.0], point![0.0, 0.0, 0.0]);

        cam.zoom(-100.0, 2.0);

        assert!(((cam.get_position() - cam.get_target()).norm() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn looks_at_target() {
        let cam = OrbitCamera::new(point![5.0, 5.0, 5.0], point![1.0, 1.0, 1.0]);

        let basis = ViewBasis::from_view_matrix(&cam.view_matrix());
        let expected = (cam.get_target() - cam.get_position()).normalize();

        assert!((basis.ray_direction() - expected).norm() < 1e-5);
    }
}
