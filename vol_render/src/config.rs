use std::{ffi::OsString, str::FromStr};

use clap::ArgMatches;
use nalgebra::{vector, Vector3};
use volvis_lib::{
    color::{self, RGBA},
    render::{RaycastMode, RenderOptions},
};

use crate::output::OutputFormat;

/// Parse a single value, argument is either required or has a default
fn parse_value<T>(args: &ArgMatches, key: &str) -> Result<T, String>
where
    T: FromStr,
{
    let val = args
        .value_of(key)
        .ok_or_else(|| format!("missing value of {key}"))?;
    val.parse::<T>()
        .map_err(|_| format!("cannot parse {key} value '{val}'"))
}

/// Transform `Values` into `Vector`
fn values_to_vector3<T>(args: &ArgMatches, key: &str) -> Result<Vector3<T>, String>
where
    T: FromStr + Copy,
{
    let vals = args
        .values_of(key)
        .ok_or_else(|| format!("missing value of {key}"))?
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| format!("cannot parse {key} value '{v}'"))
        })
        .collect::<Result<Vec<T>, String>>()?;

    match vals[..] {
        [x, y, z] => Ok(vector![x, y, z]),
        _ => Err(format!("{key} needs 3 values")),
    }
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Dimensions of volume
    pub dims: Vector3<usize>,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    /// Optional seed for RNG, to replicate results
    pub seed: Option<u64>,
    pub front_mode: RaycastMode,
    /// Mode behind the cutting plane, `None` means no cutting plane
    pub back_mode: Option<RaycastMode>,
    pub iso_value: f32,
    pub iso_color: RGBA,
    pub shading: bool,
    /// Frames of the turntable
    pub frames: usize,
    pub render_options: RenderOptions,
    /// Output file name stem
    pub file_name: OsString,
    pub format: OutputFormat,
    pub verbosity: u64,
}

impl Config {
    pub fn from_args(args: &ArgMatches) -> Result<Config, String> {
        // Dims
        let dims = values_to_vector3(args, "dims")?;
        let generator = GeneratorConfig::from_args(args, &dims)?;
        let seed = match args.value_of("seed") {
            Some(_) => Some(parse_value(args, "seed")?),
            None => None,
        };

        // Modes
        let front_mode = parse_value(args, "mode")?;
        let back_mode = match args.value_of("back-mode") {
            Some(_) => Some(parse_value(args, "back-mode")?),
            None => None,
        };
        let iso_value = parse_value(args, "iso")?;
        let rgb: Vector3<f32> = values_to_vector3(args, "iso-color")?;
        let iso_color = color::from_rgb(&rgb, 1.0);
        let shading = args.is_present("shading");

        let frames = parse_value(args, "frames")?;

        let threads: usize = parse_value(args, "threads")?;
        let builder = RenderOptions::builder()
            .multi_thread(threads != 1)
            .threads(threads);
        // interactive mode sets its own sample step
        let builder = if args.is_present("interactive") {
            builder.interactive(true)
        } else {
            builder.sample_step(parse_value(args, "step")?)
        };
        let render_options = builder.build()?;

        // File name, has default value
        let file_name = args
            .value_of_os("output")
            .ok_or("missing output file")?
            .into();
        let format = parse_value(args, "format")?;

        Ok(Config {
            dims,
            generator,
            seed,
            front_mode,
            back_mode,
            iso_value,
            iso_color,
            shading,
            frames,
            render_options,
            file_name,
            format,
            verbosity: args.occurrences_of("verbose"),
        })
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfig {
    /// Box of one value, `padding` empty voxels on every side
    Solid { sample: i16, padding: usize },
    /// Value falls off linearly from the center to `radius`
    Sphere { sample: i16, radius: f32 },
    /// Value grows along the X axis
    Ramp { slope: f32 },
    /// Smooth random values in `<0;amplitude>`
    Noise { amplitude: i16, cell: usize },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches, dims: &Vector3<usize>) -> Result<GeneratorConfig, String> {
        let sample = parse_value(args, "sample")?;

        let generator = match args.value_of("generator") {
            Some("solid") => GeneratorConfig::Solid {
                sample,
                padding: parse_value(args, "padding")?,
            },
            Some("sphere") => {
                let radius = match args.value_of("radius") {
                    Some(_) => parse_value(args, "radius")?,
                    None => dims.min() as f32 * 0.4,
                };
                GeneratorConfig::Sphere { sample, radius }
            }
            Some("ramp") => GeneratorConfig::Ramp {
                slope: parse_value(args, "slope")?,
            },
            Some("noise") => GeneratorConfig::Noise {
                amplitude: sample,
                cell: parse_value(args, "cell")?,
            },
            other => return Err(format!("unknown generator {other:?}")),
        };
        Ok(generator)
    }
}
