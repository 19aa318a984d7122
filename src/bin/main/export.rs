use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use circleview_raster::FrameBuffer;

/// Writes `frame` as an 8-bit RGBA PNG.
pub fn write_png(frame: &FrameBuffer, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        frame.width() as u32,
        frame.height() as u32,
    );
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().context("writing PNG header")?;
    writer
        .write_image_data(&frame.to_rgba8())
        .context("writing PNG pixel data")?;
    writer.finish().context("finishing PNG stream")?;
    Ok(())
}
