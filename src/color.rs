//! ARGB colors composed from 0-255 channels, matching the render
//! collaborator's color model.

/// An ARGB color. Channels are 0-255; alpha 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const WHITE: Argb = Argb::new(255, 255, 255, 255);
    pub const BLACK: Argb = Argb::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Compose a color from animated channel scalars, clamping each to 0-255.
    ///
    /// Animation state is eased `f32`s; this is the bridge back into the
    /// renderer's integer channels.
    pub fn of(r: f32, g: f32, b: f32, a: f32) -> Self {
        let ch = |v: f32| v.clamp(0.0, 255.0) as u8;
        Self::new(ch(r), ch(g), ch(b), ch(a))
    }

    /// Packed `0xAARRGGBB` form, the notation mod authors use for accents.
    pub const fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub const fn from_u32(v: u32) -> Self {
        Self {
            a: (v >> 24) as u8,
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_clamps_channels() {
        let c = Argb::of(-10.0, 300.0, 128.0, 255.4);
        assert_eq!(c, Argb::new(0, 255, 128, 255));
    }

    #[test]
    fn test_packed_roundtrip() {
        let accent = Argb::from_u32(0xff42a7f4);
        assert_eq!(accent, Argb::new(0x42, 0xa7, 0xf4, 0xff));
        assert_eq!(accent.to_u32(), 0xff42a7f4);
    }
}
