use nalgebra::Vector3;

use crate::{
    color::{self, RGBA},
    volumetric::VoxelGradient,
};

const AMBIENT: f32 = 0.1;
const DIFFUSE: f32 = 0.7;
const SPECULAR: f32 = 0.2;
const SHININESS: i32 = 50;

/// Headlight: light comes from the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub light_dir: Vector3<f32>,
    pub view_dir: Vector3<f32>,
}

impl Lighting {
    /// Lighting for rays travelling along `ray_dir`
    pub fn headlight(ray_dir: &Vector3<f32>) -> Lighting {
        let towards_viewer = -ray_dir.normalize();
        Lighting {
            light_dir: towards_viewer,
            view_dir: towards_viewer,
        }
    }

    pub fn shade(&self, color: RGBA, gradient: &VoxelGradient) -> RGBA {
        phong(color, gradient, &self.light_dir, &self.view_dir)
    }
}

/// Phong illumination of `color`, gradient serves as the surface normal.
///
/// `light_dir` points towards the light, `view_dir` towards the viewer, both normalized.
/// Alpha is kept. Flat regions (zero gradient) have no normal and are returned unshaded.
pub fn phong(
    color: RGBA,
    gradient: &VoxelGradient,
    light_dir: &Vector3<f32>,
    view_dir: &Vector3<f32>,
) -> RGBA {
    if gradient.mag == 0.0 {
        return color;
    }

    let material = color.xyz();
    let normal = -gradient.vector / gradient.mag;

    let lambertian = f32::max(light_dir.dot(&normal), 0.0);
    let ambient = AMBIENT * material;

    if lambertian <= 0.0 {
        return color::from_rgb(&ambient, color.w);
    }

    let diffuse = DIFFUSE * lambertian * material;

    let reflection = 2.0 * lambertian * normal - light_dir;
    let spec_angle = f32::max(reflection.dot(view_dir), 0.0);
    let specular = SPECULAR * spec_angle.powi(SHININESS) * material;

    color::from_rgb(&(ambient + diffuse + specular), color.w)
}
