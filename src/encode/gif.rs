use std::{borrow::Cow, io::Write};

use anyhow::Context;

use crate::{
    animation::driver::Speed,
    color::palette::{Palette, TRANSPARENT_INDEX},
    foundation::error::{ScorchError, ScorchResult},
    render::frame::IndexedFrame,
};

/// Encode indexed frames as a looping GIF with one global palette.
///
/// Every frame uses the speed's delay, slot 0 as the transparent colour and
/// "restore to previous" disposal.
pub fn write_gif<W: Write>(
    w: W,
    frames: &[IndexedFrame],
    palette: &Palette,
    speed: Speed,
) -> ScorchResult<()> {
    let first = frames
        .first()
        .ok_or_else(|| ScorchError::encode("gif needs at least one frame"))?;
    let to_u16 = |v: u32, what: &str| {
        u16::try_from(v).map_err(|_| ScorchError::encode(format!("gif {what} {v} exceeds 65535")))
    };
    let width = to_u16(first.width, "width")?;
    let height = to_u16(first.height, "height")?;

    let mut encoder = gif::Encoder::new(w, width, height, &palette.to_rgb_bytes())
        .context("start gif stream")?;
    encoder
        .set_repeat(gif::Repeat::Infinite)
        .context("write gif loop extension")?;

    for (i, f) in frames.iter().enumerate() {
        if f.width != first.width || f.height != first.height {
            return Err(ScorchError::encode(format!(
                "frame {i} is {}x{}, expected {}x{}",
                f.width, f.height, first.width, first.height
            )));
        }
        let frame = gif::Frame {
            width,
            height,
            delay: speed.gif_delay_centis(),
            dispose: gif::DisposalMethod::Previous,
            transparent: Some(TRANSPARENT_INDEX),
            buffer: Cow::Borrowed(f.indices.as_slice()),
            ..gif::Frame::default()
        };
        encoder
            .write_frame(&frame)
            .with_context(|| format!("write gif frame {i}"))?;
    }

    encoder.into_inner().context("finish gif stream")?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
