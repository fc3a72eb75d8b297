//! Argument parsing and validation
//! Uses library `clap`

use std::ffi::OsStr;

use clap::{Arg, Command, ValueHint};
use volvis_lib::render::RaycastMode;

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_number(num: &str) -> Result<(), String> {
    match num.parse::<u32>() {
        Ok(_) => Ok(()),
        Err(_) => Err("Number required".into()),
    }
}

pub fn can_fit_i16(num: &str) -> Result<(), String> {
    match num.parse::<i16>() {
        Ok(_) => Ok(()),
        Err(_) => Err("Number does not fit in range <-32768;32767>".into()),
    }
}

pub fn is_float_number(num: &str) -> Result<(), String> {
    let n = num.parse::<f32>();
    match n {
        Ok(n) => {
            if n > 0.0 {
                Ok(())
            } else {
                Err("Number must be greater than 0.0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_unit_float(num: &str) -> Result<(), String> {
    match num.parse::<f32>() {
        Ok(n) if (0.0..=1.0).contains(&n) => Ok(()),
        Ok(_) => Err("Number must be in range <0;1>".into()),
        Err(_) => Err("Number required".into()),
    }
}

pub const GENERATOR_NAMES: &[&str] = &["solid", "sphere", "ramp", "noise"];
pub const FORMAT_NAMES: &[&str] = &["pam", "raw"];

pub fn get_command<'a>() -> Command<'a> {
    let mode_names = RaycastMode::ALL.map(|mode| mode.name());

    Command::new("Vol-render")
        .version("0.1.0")
        .about("Renders synthetic volumetric data")
        .arg(
            Arg::new("dims")
                .help("Dimensions of volume")
                .long("dims")
                .short('d')
                .required(true)
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generator")
                .long("generator")
                .short('g')
                .default_value("sphere")
                .value_name("NAME")
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("sample")
                .help("Value of generated object, amplitude for noise")
                .long("sample")
                .value_name("VALUE")
                .default_value("200")
                .allow_hyphen_values(true)
                .validator(can_fit_i16),
        )
        .arg(
            Arg::new("padding")
                .help("Empty voxels around the solid box")
                .long("padding")
                .value_name("VOXELS")
                .default_value("2")
                .hide(true)
                .validator(is_number),
        )
        .arg(
            Arg::new("radius")
                .help("Sphere radius, defaults to 0.4 of the smallest dimension")
                .long("radius")
                .value_name("VOXELS")
                .hide(true)
                .validator(is_float_number),
        )
        .arg(
            Arg::new("slope")
                .help("Value increase per voxel of the ramp")
                .long("slope")
                .value_name("SLOPE")
                .default_value("1.0")
                .hide(true)
                .validator(is_float_number),
        )
        .arg(
            Arg::new("cell")
                .help("Lattice spacing of the noise")
                .long("cell")
                .value_name("VOXELS")
                .default_value("8")
                .hide(true)
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("mode")
                .help("Render mode")
                .long("mode")
                .short('m')
                .default_value("composite")
                .value_name("MODE")
                .possible_values(mode_names),
        )
        .arg(
            Arg::new("back-mode")
                .help("Render mode behind the cutting plane, enables the plane")
                .long("back-mode")
                .value_name("MODE")
                .possible_values(mode_names),
        )
        .arg(
            Arg::new("iso")
                .help("Isosurface threshold")
                .long("iso")
                .value_name("VALUE")
                .default_value("95")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("iso-color")
                .help("Isosurface color")
                .long("iso-color")
                .number_of_values(3)
                .value_names(&["R", "G", "B"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .default_values(&["1", "1", "0"])
                .validator(is_unit_float),
        )
        .arg(Arg::new("shading").help("Phong shading").long("shading"))
        .arg(
            Arg::new("frames")
                .help("Number of frames, camera turns around the volume")
                .long("frames")
                .short('f')
                .value_name("N")
                .default_value("1")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("step")
                .help("Distance between samples along the ray")
                .long("step")
                .value_name("STEP")
                .default_value("1.0")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("interactive")
                .help("Low quality, render every third pixel")
                .long("interactive"),
        )
        .arg(
            Arg::new("threads")
                .help("Number of render threads, 0 for all cores, 1 for single thread")
                .long("threads")
                .short('t')
                .value_name("N")
                .default_value("0")
                .validator(is_number),
        )
        .arg(
            Arg::new("output")
                .help("Output file name, frame number is appended")
                .long("output")
                .short('o')
                .value_name("FILE")
                .allow_invalid_utf8(true)
                .value_hint(ValueHint::FilePath)
                .default_value_os(OsStr::new("frame")),
        )
        .arg(
            Arg::new("format")
                .help("Format of output files")
                .long("format")
                .default_value("pam")
                .value_name("FORMAT")
                .possible_values(FORMAT_NAMES),
        )
        .arg(
            Arg::new("verbose")
                .help("More logging, repeat for more")
                .short('v')
                .multiple_occurrences(true),
        )
}
