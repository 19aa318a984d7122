//! Packed 32-bit ARGB colors.

/// Color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Fully opaque color from `0xRRGGBB`.
    pub const fn opaque(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// Composites `self` over `dst` (source-over, non-premultiplied).
    pub fn over(self, dst: Self) -> Self {
        let sa = self.alpha() as u32;
        if sa == 0xFF {
            return self;
        }
        if sa == 0 {
            return dst;
        }

        let da = dst.alpha() as u32;
        // Alpha scaled by 255: out_a = sa + da * (1 - sa).
        let out_a = sa * 255 + da * (255 - sa);
        if out_a == 0 {
            return Self::TRANSPARENT;
        }

        let channel = |s: u8, d: u8| -> u8 {
            let num = s as u32 * sa * 255 + d as u32 * da * (255 - sa);
            ((num + out_a / 2) / out_a) as u8
        };

        Self::new(
            ((out_a + 127) / 255) as u8,
            channel(self.red(), dst.red()),
            channel(self.green(), dst.green()),
            channel(self.blue(), dst.blue()),
        )
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
