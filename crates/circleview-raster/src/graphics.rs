//! `embedded-graphics` support: primitives and mono fonts composite into the
//! same ARGB framebuffer the `Surface` implementation paints.

use core::convert::Infallible;

use circleview_core::color::Argb;
use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{Rgb888, RgbColor},
    primitives::Rectangle,
};

use crate::FrameBuffer;

fn argb(color: Rgb888) -> Argb {
    Argb::new(0xFF, color.r(), color.g(), color.b())
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            self.blend_pixel(x, y, argb(color));
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let (Ok(x), Ok(y)) = (
            usize::try_from(area.top_left.x),
            usize::try_from(area.top_left.y),
        ) else {
            return Ok(());
        };

        self.fill_rect(
            x,
            y,
            area.size.width as usize,
            area.size.height as usize,
            argb(color),
        );
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}
