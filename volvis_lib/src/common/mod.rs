//! Geometric building blocks shared by the renderer

mod bound_box;
mod cutting_plane;
mod ray;

pub use bound_box::BoundBox;
pub use cutting_plane::CuttingPlane;
pub use ray::Ray;
