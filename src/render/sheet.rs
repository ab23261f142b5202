use crate::{
    foundation::error::{ScorchError, ScorchResult},
    render::frame::FrameRGBA,
};

/// Stack frames top to bottom into one tall sprite sheet.
///
/// Frame `i` is copied verbatim into band `i`; all frames must share a width.
pub fn stack_frames(frames: &[FrameRGBA]) -> ScorchResult<FrameRGBA> {
    let first = frames
        .first()
        .ok_or_else(|| ScorchError::render("cannot stack an empty frame list"))?;
    let width = first.width;

    let mut height = 0u32;
    for (i, f) in frames.iter().enumerate() {
        if f.width != width {
            return Err(ScorchError::render(format!(
                "frame {i} is {} px wide, expected {width}",
                f.width
            )));
        }
        height = height
            .checked_add(f.height)
            .ok_or_else(|| ScorchError::render("sprite sheet height overflows u32"))?;
    }

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for f in frames {
        data.extend_from_slice(&f.data);
    }

    FrameRGBA::from_raw(width, height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sheet.rs"]
mod tests;
