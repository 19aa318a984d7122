//! Procedural avatar pictures standing in for bundled image resources.

use circleview_core::{
    bitmap::{Bitmap, Drawable, ImageResolver, rasterize},
    color::Argb,
};
use log::debug;

/// Picture painted on demand at its intrinsic size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AvatarArt {
    /// Portrait vertical gradient.
    Sunset,
    /// Landscape horizontal stripes.
    Ocean,
    /// Square concentric rings.
    Forest,
    /// Tall diagonal bands.
    Berry,
    /// Square checkerboard.
    Stone,
}

impl AvatarArt {
    pub fn from_resource(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::Sunset),
            2 => Some(Self::Ocean),
            3 => Some(Self::Forest),
            4 => Some(Self::Berry),
            5 => Some(Self::Stone),
            _ => None,
        }
    }

    fn paint(self, x: u32, y: u32, width: u32, height: u32) -> Argb {
        match self {
            Self::Sunset => {
                let t = (y * 255 / height.max(1)) as u8;
                Argb::new(0xFF, 0xFF, 0x80u8.saturating_add(t / 2), 0x40 + t / 4)
            }
            Self::Ocean => {
                if (y / 8) % 2 == 0 {
                    Argb::opaque(0x0277BD)
                } else {
                    Argb::opaque(0x4FC3F7)
                }
            }
            Self::Forest => {
                let dx = x as i64 - width as i64 / 2;
                let dy = y as i64 - height as i64 / 2;
                let ring = ((dx * dx + dy * dy) / 64) % 2;
                if ring == 0 {
                    Argb::opaque(0x2E7D32)
                } else {
                    Argb::opaque(0xA5D6A7)
                }
            }
            Self::Berry => {
                if ((x + y) / 10) % 2 == 0 {
                    Argb::opaque(0x6A1B9A)
                } else {
                    Argb::opaque(0xF06292)
                }
            }
            Self::Stone => {
                if ((x / 9) + (y / 9)) % 2 == 0 {
                    Argb::opaque(0x616161)
                } else {
                    Argb::opaque(0xBDBDBD)
                }
            }
        }
    }
}

impl Drawable for AvatarArt {
    fn intrinsic_size(&self) -> Option<(u32, u32)> {
        Some(match self {
            Self::Sunset => (60, 80),
            Self::Ocean => (96, 64),
            Self::Forest => (64, 64),
            Self::Berry => (40, 90),
            Self::Stone => (72, 72),
        })
    }

    fn draw(&self, target: &mut Bitmap) {
        let (width, height) = (target.width(), target.height());
        for y in 0..height {
            for x in 0..width {
                target.set_pixel(x, y, self.paint(x, y, width, height));
            }
        }
    }
}

/// Resolves sample resource ids into rasterized pictures.
#[derive(Debug, Default)]
pub struct ArtResolver {
    resolved: usize,
}

impl ArtResolver {
    pub fn resolved(&self) -> usize {
        self.resolved
    }
}

impl ImageResolver for ArtResolver {
    fn resolve_resource(&mut self, id: u32) -> Option<Bitmap> {
        let art = AvatarArt::from_resource(id)?;
        self.resolved += 1;
        debug!("art: resource {id} -> {art:?}");
        Some(rasterize(&art))
    }

    fn resolve_uri(&mut self, uri: &str) -> Option<Bitmap> {
        let id = uri.strip_prefix("art://")?.parse().ok()?;
        self.resolve_resource(id)
    }
}
