mod accumulators;
mod pixel_buffer;
mod ray_marcher;
mod render_front;
mod render_options;
mod renderer;
mod request;
mod shading;

pub use accumulators::{compute_opacity_2d_tf, refine_crossing};
pub use pixel_buffer::{side_for_dims, PixelBuffer, CLEARED};
pub use ray_marcher::{Accumulator, RayMarcher, RaySegment, SamplePositions};
pub use render_front::{FrameInfo, RendererFront, RendererMessage};
pub use render_options::{RenderOptions, RenderOptionsBuilder, INTERACTIVE_STEP, MIN_SAMPLE_STEP};
pub use renderer::{render_frame, FrameStats, Renderer};
pub use request::{RaycastMode, RegionSettings, RenderRequest, DEFAULT_ISO_VALUE};
pub use shading::{phong, Lighting};
