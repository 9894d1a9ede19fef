/// Linear RGBA stroke color.
///
/// The engine never shades anything; the color rides along with a `StrokeBatch`
/// so the host rasterizer knows how to fill the quads.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_is_opaque_and_normalized() {
        let c = ColorRgba::from_rgb8(255, 0, 51);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.2, 1.0]);
        assert_eq!(ColorRgba::black().to_array(), [0.0, 0.0, 0.0, 1.0]);
    }
}
