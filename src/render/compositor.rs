use rayon::prelude::*;

use crate::{
    color::{
        palette::{Palette, TEXT_INDEX},
        ramp::ColorRamp,
    },
    fire::{field::FireField, mask::TextMask},
    foundation::{
        core::Rgba8,
        error::{ScorchError, ScorchResult},
    },
    render::frame::{FrameRGBA, IndexedFrame},
};

/// Turns a mask plus heat field into pixels.
///
/// Fuel pixels always take the text colour (forced opaque), hot pixels take
/// the ramp colour for `heat / 255`, everything else is transparent.
#[derive(Clone, Debug)]
pub struct Compositor {
    ramp: ColorRamp,
    text_color: Rgba8,
    // Ramp colour for every heat value, so drawing is a table lookup.
    heat_lut: Vec<Rgba8>,
}

impl Compositor {
    pub fn new(ramp: ColorRamp, text_color: Rgba8) -> Self {
        let heat_lut = (0..=255u16)
            .map(|h| ramp.query(f64::from(h) / 255.0))
            .collect();
        Self {
            ramp,
            text_color: Rgba8 { a: 255, ..text_color },
            heat_lut,
        }
    }

    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    pub fn text_color(&self) -> Rgba8 {
        self.text_color
    }

    /// Colour of one pixel given its fuel flag and heat.
    pub fn shade(&self, fuel: bool, heat: u8) -> Rgba8 {
        if fuel {
            self.text_color
        } else if heat > 0 {
            self.heat_lut[heat as usize]
        } else {
            Rgba8::TRANSPARENT
        }
    }

    pub fn draw(&self, mask: &TextMask, field: &FireField) -> ScorchResult<FrameRGBA> {
        check_sizes(mask, field)?;
        let size = mask.size();
        let width = size.width as usize;
        let mut frame = FrameRGBA::transparent(size);

        frame
            .data
            .par_chunks_mut(width * 4)
            .enumerate()
            .for_each(|(row, out)| {
                let offset = row * width;
                let coverage = &mask.coverage()[offset..offset + width];
                let heat = &field.heat()[offset..offset + width];
                for (x, px) in out.chunks_exact_mut(4).enumerate() {
                    px.copy_from_slice(&self.shade(coverage[x] > 0, heat[x]).to_array());
                }
            });

        Ok(frame)
    }

    /// Palette-index variant of [`Compositor::draw`] for a palette built
    /// from the same ramp and text colour.
    pub fn draw_indexed(mask: &TextMask, field: &FireField) -> ScorchResult<IndexedFrame> {
        check_sizes(mask, field)?;
        let size = mask.size();
        let indices = mask
            .coverage()
            .iter()
            .zip(field.heat())
            .map(|(&c, &h)| {
                if c > 0 {
                    TEXT_INDEX
                } else {
                    Palette::heat_index(h)
                }
            })
            .collect();
        Ok(IndexedFrame {
            width: size.width,
            height: size.height,
            indices,
        })
    }
}

fn check_sizes(mask: &TextMask, field: &FireField) -> ScorchResult<()> {
    if mask.size() != field.size() {
        return Err(ScorchError::render(format!(
            "mask is {}x{} but fire field is {}x{}",
            mask.size().width,
            mask.size().height,
            field.size().width,
            field.size().height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
