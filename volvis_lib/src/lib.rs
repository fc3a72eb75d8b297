//! Volume raycaster
//!
//! Renders images of a 3D scalar field by casting a ray per pixel and
//! accumulating samples along it. Supported modes are a slice through the field,
//! maximum intensity projection, isosurfaces and compositing through a 1D or 2D
//! transfer function. A cutting plane can split the field into two regions
//! rendered with different settings.

pub mod camera;
pub mod color;
pub mod common;
pub mod premade;
pub mod render;
pub mod test_helpers;
pub mod transfer_function;
pub mod volumetric;

pub use camera::{OrbitCamera, ViewBasis};
pub use render::{render_frame, RaycastMode, RenderOptions, RenderRequest, Renderer};
pub use volumetric::{ScalarField, Volume};
