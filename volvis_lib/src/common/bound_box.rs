use nalgebra::{point, vector, Point3, Vector3};

use super::Ray;

/// Intersections may lie this far outside of a face and still count.
/// Tolerates floating point error at voxel boundaries.
const FACE_SLACK: f32 = 0.5;

/// Faces closer to parallel with the ray than this are skipped.
const PARALLEL_EPSILON: f32 = 1.0e-8;

/// Axis aligned box, described by its lowest and highest corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundBox {
    pub lower: Point3<f32>,
    pub upper: Point3<f32>,
}

impl BoundBox {
    pub fn new(lower: Point3<f32>, upper: Point3<f32>) -> BoundBox {
        BoundBox { lower, upper }
    }

    /// Box spanning `<0;dims>` on every axis, the extent of a field with `dims` voxels.
    pub fn from_dims(dims: Vector3<usize>) -> BoundBox {
        BoundBox {
            lower: point![0.0, 0.0, 0.0],
            upper: Point3::from(dims.map(|v| v as f32)),
        }
    }

    pub fn dims(&self) -> Vector3<f32> {
        self.upper - self.lower
    }

    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.lower, &self.upper)
    }

    pub fn is_in(&self, pos: &Point3<f32>) -> bool {
        self.upper.x > pos.x
            && self.upper.y > pos.y
            && self.upper.z > pos.z
            && pos.x > self.lower.x
            && pos.y > self.lower.y
            && pos.z > self.lower.z
    }

    /// Like [`BoundBox::is_in`], but inclusive and grown by [`FACE_SLACK`] on every side.
    fn contains_with_slack(&self, pos: &Point3<f32>) -> bool {
        (0..3).all(|axis| {
            self.lower[axis] - FACE_SLACK <= pos[axis] && pos[axis] <= self.upper[axis] + FACE_SLACK
        })
    }

    /// The six bounding planes, each as a point on the plane and outward normal.
    fn faces(&self) -> [(Point3<f32>, Vector3<f32>); 6] {
        [
            (point![self.upper.x, 0.0, 0.0], vector![1.0, 0.0, 0.0]),
            (self.lower, vector![-1.0, 0.0, 0.0]),
            (point![0.0, self.upper.y, 0.0], vector![0.0, 1.0, 0.0]),
            (self.lower, vector![0.0, -1.0, 0.0]),
            (point![0.0, 0.0, self.upper.z], vector![0.0, 0.0, 1.0]),
            (self.lower, vector![0.0, 0.0, -1.0]),
        ]
    }

    /// Entry and exit point of a line through the box.
    ///
    /// The line is intersected with each of the six bounding planes. A hit counts when it lies
    /// on the face (with some slack). Hits on faces the ray moves against (`dot(direction, normal) < 0`)
    /// are entry points, the rest are exit points.
    ///
    /// Returns `None` unless both an entry and an exit point were found.
    pub fn entry_exit(&self, ray: &Ray) -> Option<(Point3<f32>, Point3<f32>)> {
        let mut entry = None;
        let mut exit = None;

        for (plane_pos, normal) in self.faces() {
            let denom = ray.direction.dot(&normal);
            if denom.abs() < PARALLEL_EPSILON {
                continue;
            }

            let t = (plane_pos - ray.origin).dot(&normal) / denom;
            let hit = ray.point_from_t(t);

            if !self.contains_with_slack(&hit) {
                continue;
            }

            if denom < 0.0 {
                entry = Some(hit);
            } else {
                exit = Some(hit);
            }
        }

        entry.zip(exit)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn cube_box() -> BoundBox {
        BoundBox::from_dims(vector![4, 4, 4])
    }

    #[test]
    fn from_dims() {
        let bbox = BoundBox::from_dims(vector![2, 3, 4]);

        assert_eq!(bbox.lower, point![0.0, 0.0, 0.0]);
        assert_eq!(bbox.upper, point![2.0, 3.0, 4.0]);
        assert_eq!(bbox.center(), point![1.0, 1.5, 2.0]);
    }

    #[test]
    fn axis_aligned_ray() {
        let ray = Ray::new(point![2.0, 2.0, 10.0], vector![0.0, 0.0, -1.0]);

        let (entry, exit) = cube_box().entry_exit(&ray).expect("ray hits box");

        assert_eq!(entry, point![2.0, 2.0, 4.0]);
        assert_eq!(exit, point![2.0, 2.0, 0.0]);
    }

    #[test]
    fn diagonal_ray() {
        let dir = vector![1.0, 1.0, 1.0].normalize();
        let ray = Ray::new(point![-2.0, -2.0, -2.0], dir);

        let (entry, exit) = cube_box().entry_exit(&ray).expect("ray hits box");

        assert!((entry - point![0.0, 0.0, 0.0]).norm() < 1e-5);
        assert!((exit - point![4.0, 4.0, 4.0]).norm() < 1e-5);
    }

    #[test]
    fn slack_around_faces() {
        // Just outside the box, but within slack
        let ray = Ray::new(point![-0.3, 2.0, 10.0], vector![0.0, 0.0, -1.0]);
        let inter = cube_box().entry_exit(&ray);
        assert!(inter.is_some());

        // Outside of slack
        let ray = Ray::new(point![-0.7, 2.0, 10.0], vector![0.0, 0.0, -1.0]);
        let inter = cube_box().entry_exit(&ray);
        assert!(inter.is_none());
    }

    #[test]
    fn not_intersecting() {
        let ray = Ray::new(point![200.0, 200.0, 200.0], vector![1.0, 0.0, 0.0]);

        assert!(cube_box().entry_exit(&ray).is_none());
    }

    #[test]
    fn point_inside() {
        let bbox = cube_box();

        assert!(bbox.is_in(&point![1.0, 2.0, 3.0]));
        assert!(!bbox.is_in(&point![4.0, 2.0, 3.0]));
        assert!(!bbox.is_in(&point![-0.1, 2.0, 3.0]));
    }
}
