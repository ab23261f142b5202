use std::{io::Write, path::Path};

use anyhow::Context;
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::{foundation::error::ScorchResult, render::frame::FrameRGBA};

/// Encode one RGBA frame (e.g. a sprite sheet) as PNG.
pub fn write_png<W: Write>(w: W, frame: &FrameRGBA) -> ScorchResult<()> {
    PngEncoder::new(w)
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(())
}

/// Write each frame to `dir/frame_000.png`, `dir/frame_001.png`, ...
pub fn write_png_sequence(dir: &Path, frames: &[FrameRGBA]) -> ScorchResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    for (i, frame) in frames.iter().enumerate() {
        let path = dir.join(format!("frame_{i:03}.png"));
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create '{}'", path.display()))?;
        write_png(std::io::BufWriter::new(file), frame)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
