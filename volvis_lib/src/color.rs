use nalgebra::{vector, Vector3, Vector4};

/// Color with opacity.
///
/// Channels are nominally in <0;1>, but stay unclamped until the color gets packed
/// into a pixel with [`pack_argb`].
pub type RGBA = Vector4<f32>;

pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
    vector![r, g, b, a]
}

/// Fully transparent black
pub fn zero() -> RGBA {
    vector![0.0, 0.0, 0.0, 0.0]
}

pub fn mono(v: f32, opacity: f32) -> RGBA {
    vector![v, v, v, opacity]
}

pub fn from_rgb(rgb: &Vector3<f32>, opacity: f32) -> RGBA {
    vector![rgb.x, rgb.y, rgb.z, opacity]
}

fn pack_channel(value: f32) -> u32 {
    // NaN ends up as 0
    (value.clamp(0.0, 1.0) * 255.0).floor() as u32
}

/// Pack color into a 32bit ARGB word.
///
/// Alpha occupies bits 24-31, red 16-23, green 8-15 and blue 0-7.
/// Each channel is clamped to <0;1> and scaled to <0;255>, rounding down.
pub fn pack_argb(color: &RGBA) -> u32 {
    (pack_channel(color.w) << 24)
        | (pack_channel(color.x) << 16)
        | (pack_channel(color.y) << 8)
        | pack_channel(color.z)
}

/// Inverse of [`pack_argb`], up to quantization.
pub fn unpack_argb(argb: u32) -> RGBA {
    let channel = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
    vector![channel(16), channel(8), channel(0), channel(24)]
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn pack_layout() {
        assert_eq!(pack_argb(&new(1.0, 0.0, 0.0, 0.0)), 0x00ff_0000);
        assert_eq!(pack_argb(&new(0.0, 1.0, 0.0, 0.0)), 0x0000_ff00);
        assert_eq!(pack_argb(&new(0.0, 0.0, 1.0, 0.0)), 0x0000_00ff);
        assert_eq!(pack_argb(&new(0.0, 0.0, 0.0, 1.0)), 0xff00_0000);
    }

    #[test]
    fn pack_clamps_and_floors() {
        // 0.5 * 255 = 127.5 -> 127
        assert_eq!(pack_argb(&mono(0.5, 1.0)), 0xff7f_7f7f);
        assert_eq!(pack_argb(&new(2.0, -1.0, 1.5, 7.0)), 0xffff_00ff);
        assert_eq!(pack_argb(&new(f32::NAN, 0.0, 0.0, 1.0)), 0xff00_0000);
    }

    #[test]
    fn unpack_inverts_pack() {
        let packed = pack_argb(&new(1.0, 0.0, 1.0, 1.0));
        assert_eq!(unpack_argb(packed), new(1.0, 0.0, 1.0, 1.0));
        assert_eq!(unpack_argb(0), zero());
    }
}
