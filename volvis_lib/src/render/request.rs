use std::{fmt, str::FromStr, sync::Arc};

use nalgebra::Matrix4;

use crate::{
    color::{self, RGBA},
    common::CuttingPlane,
    premade::transfer_functions,
    transfer_function::{TransferFunction, TransferFunction2D},
    volumetric::Volume,
};

use super::ray_marcher::Accumulator;

/// Default isosurface threshold
pub const DEFAULT_ISO_VALUE: f32 = 95.0;

/// How rays of a region turn into colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaycastMode {
    /// Single plane through the field center, no rays
    Slicer,
    /// Maximum intensity projection
    Mip,
    IsoSurface,
    /// Compositing through the 1D transfer function
    Compositing,
    /// Compositing through the 2D transfer function widget
    Transfer2D,
}

impl RaycastMode {
    pub const ALL: [RaycastMode; 5] = [
        RaycastMode::Slicer,
        RaycastMode::Mip,
        RaycastMode::IsoSurface,
        RaycastMode::Compositing,
        RaycastMode::Transfer2D,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RaycastMode::Slicer => "slicer",
            RaycastMode::Mip => "mip",
            RaycastMode::IsoSurface => "iso",
            RaycastMode::Compositing => "composite",
            RaycastMode::Transfer2D => "tf2d",
        }
    }
}

impl fmt::Display for RaycastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RaycastMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RaycastMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or("Unknown raycast mode")
    }
}

/// Everything needed to render one region (front or back of the cutting plane)
#[derive(Debug, Clone)]
pub struct RegionSettings {
    pub mode: RaycastMode,
    pub iso_value: f32,
    pub iso_color: RGBA,
    pub tf: Arc<TransferFunction>,
    pub tf_2d: TransferFunction2D,
}

impl RegionSettings {
    /// Defaults for `volume`: test transfer function, widget centered at half of the maximum,
    /// yellow isosurface at 95.
    pub fn for_volume(volume: &Volume, mode: RaycastMode) -> RegionSettings {
        let range = volume.field().range();
        RegionSettings {
            mode,
            iso_value: DEFAULT_ISO_VALUE,
            iso_color: color::new(1.0, 1.0, 0.0, 1.0),
            tf: Arc::new(transfer_functions::test_function(range)),
            tf_2d: transfer_functions::default_2d(range),
        }
    }

    /// Accumulator for ray modes, `None` for the slicer
    pub(crate) fn accumulator(&self) -> Option<Accumulator<'_>> {
        let acc = match self.mode {
            RaycastMode::Slicer => return None,
            RaycastMode::Mip => Accumulator::Mip,
            RaycastMode::IsoSurface => Accumulator::IsoSurface {
                threshold: self.iso_value,
                color: self.iso_color,
            },
            RaycastMode::Compositing => Accumulator::Compositing { tf: &self.tf },
            RaycastMode::Transfer2D => Accumulator::Transfer2D { tf: &self.tf_2d },
        };
        Some(acc)
    }
}

/// Description of a single frame.
///
/// Passed to the renderer for every frame, renderer keeps no camera or mode state.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Maps field coordinates to camera coordinates
    pub view_matrix: Matrix4<f32>,
    pub front: RegionSettings,
    /// Used only with a cutting plane
    pub back: RegionSettings,
    pub cutting_plane: Option<CuttingPlane>,
    pub shading: bool,
}

impl RenderRequest {
    /// Both regions use `settings`, no cutting plane, no shading
    pub fn new(view_matrix: Matrix4<f32>, settings: RegionSettings) -> RenderRequest {
        RenderRequest {
            view_matrix,
            back: settings.clone(),
            front: settings,
            cutting_plane: None,
            shading: false,
        }
    }

    pub fn with_back(mut self, back: RegionSettings) -> Self {
        self.back = back;
        self
    }

    pub fn with_cutting_plane(mut self, plane: CuttingPlane) -> Self {
        self.cutting_plane = Some(plane);
        self
    }

    pub fn with_shading(mut self, shading: bool) -> Self {
        self.shading = shading;
        self
    }
}
