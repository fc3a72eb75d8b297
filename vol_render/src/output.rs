//! Writing rendered frames to files

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use byteorder::{LittleEndian, WriteBytesExt};
use volvis_lib::render::PixelBuffer;

/// Magic bytes of the raw frame format
pub const RAW_MAGIC: &[u8; 4] = b"VVRF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Portable arbitrary map, `RGB_ALPHA` tuples
    Pam,
    /// Magic, width and height as little endian `u32`, then packed ARGB words
    Raw,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pam => "pam",
            OutputFormat::Raw => "raw",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pam" => Ok(OutputFormat::Pam),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err("Unknown output format"),
        }
    }
}

/// File name of frame `index`, e.g. `frame_003.pam`
pub fn frame_path(stem: &Path, index: usize, format: OutputFormat) -> PathBuf {
    let mut name = stem.as_os_str().to_owned();
    name.push(format!("_{index:03}.{}", format.extension()));
    PathBuf::from(name)
}

pub fn write_frame_file(
    path: &Path,
    buffer: &PixelBuffer,
    format: OutputFormat,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_frame(&mut writer, buffer, format)?;
    writer.flush()
}

pub fn write_frame<W: Write>(
    writer: &mut W,
    buffer: &PixelBuffer,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Pam => write_pam(writer, buffer),
        OutputFormat::Raw => write_raw(writer, buffer),
    }
}

fn write_raw<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    let side = buffer.side() as u32;
    writer.write_all(RAW_MAGIC)?;
    writer.write_u32::<LittleEndian>(side)?;
    writer.write_u32::<LittleEndian>(side)?;
    for &pixel in buffer.data() {
        writer.write_u32::<LittleEndian>(pixel)?;
    }
    Ok(())
}

fn write_pam<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    let side = buffer.side();
    write!(
        writer,
        "P7\nWIDTH {side}\nHEIGHT {side}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n"
    )?;
    for &pixel in buffer.data() {
        // ARGB -> RGBA
        writer.write_u32::<byteorder::BigEndian>(pixel.rotate_left(8))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_pixel_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(2);
        buffer.data_mut()[0] = 0xff11_2233;
        buffer.data_mut()[3] = 0x8000_00ff;
        buffer
    }

    #[test]
    fn raw_layout() {
        let mut out = Vec::new();
        write_frame(&mut out, &two_pixel_buffer(), OutputFormat::Raw).unwrap();

        assert_eq!(out.len(), 4 + 8 + 4 * 4);
        assert_eq!(&out[..4], RAW_MAGIC);
        assert_eq!(out[4..12], [2, 0, 0, 0, 2, 0, 0, 0]);
        assert_eq!(out[12..16], [0x33, 0x22, 0x11, 0xff]);
        assert_eq!(out[24..28], [0xff, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn pam_layout() {
        let mut out = Vec::new();
        write_frame(&mut out, &two_pixel_buffer(), OutputFormat::Pam).unwrap();

        let header = "P7\nWIDTH 2\nHEIGHT 2\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n";
        assert_eq!(&out[..header.len()], header.as_bytes());

        let pixels = &out[header.len()..];
        assert_eq!(pixels.len(), 16);
        assert_eq!(pixels[..4], [0x11, 0x22, 0x33, 0xff]);
        assert_eq!(pixels[4..8], [0, 0, 0, 0]);
        assert_eq!(pixels[12..], [0x00, 0x00, 0xff, 0x80]);
    }

    #[test]
    fn frame_names() {
        let path = frame_path(Path::new("out/turn"), 7, OutputFormat::Pam);
        assert_eq!(path, PathBuf::from("out/turn_007.pam"));
        assert_eq!("raw".parse::<OutputFormat>(), Ok(OutputFormat::Raw));
        assert!("png".parse::<OutputFormat>().is_err());
    }
}
