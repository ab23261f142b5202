//! Text → coverage mask.
//!
//! The fire engine only needs to know which pixels belong to the glyph
//! silhouette. Shaping and glyph rasterisation are delegated to Parley and
//! vello_cpu behind [`GlyphRasterizer`].

use crate::{
    fire::mask::TextMask,
    foundation::{
        core::GridSize,
        error::{ScorchError, ScorchResult},
    },
};

/// 70 pt at 72 dpi, expressed in pixels.
pub const DEFAULT_SIZE_PX: f32 = 70.0 / 0.75;

/// Empty border around the laid-out text, on every side.
pub const DEFAULT_PADDING_PX: u32 = 10;

/// Produces a coverage mask for a string in a given font.
pub trait GlyphRasterizer {
    fn rasterize(&mut self, text: &str, font_bytes: &[u8], size_px: f32)
    -> ScorchResult<TextMask>;
}

/// Brush type for Parley layouts; coverage is all we read back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaskBrush;

/// Parley shaping + vello_cpu glyph fill.
pub struct ParleyRasterizer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MaskBrush>,
    padding: u32,
    last_family_name: Option<String>,
}

impl Default for ParleyRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyRasterizer {
    pub fn new() -> Self {
        Self::with_padding(DEFAULT_PADDING_PX)
    }

    pub fn with_padding(padding: u32) -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            padding,
            last_family_name: None,
        }
    }

    /// Family name of the most recently registered font, if any.
    pub fn last_family_name(&self) -> Option<&str> {
        self.last_family_name.as_deref()
    }

    fn layout(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
    ) -> ScorchResult<parley::Layout<MaskBrush>> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ScorchError::font("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ScorchError::font("registered font family has no name"))?
            .to_string();
        self.last_family_name = Some(family_name.clone());

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(MaskBrush));

        let mut layout: parley::Layout<MaskBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl GlyphRasterizer for ParleyRasterizer {
    fn rasterize(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
    ) -> ScorchResult<TextMask> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ScorchError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let layout = self.layout(text, font_bytes, size_px)?;

        let pad = self.padding;
        let to_dim = |extent: f32| -> ScorchResult<u16> {
            let px = (extent.max(0.0).ceil() as u64) + 2 * u64::from(pad);
            u16::try_from(px.max(1)).map_err(|_| {
                ScorchError::validation(format!("rendered text is too large ({px} px)"))
            })
        };
        let width = to_dim(layout.width())?;
        let height = to_dim(layout.height())?;

        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes.to_vec()), 0);

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(pad),
            f64::from(pad),
        )));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);

        let coverage = pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .map(|px| px[3])
            .collect();

        let size = GridSize::new(u32::from(width), u32::from(height))?;
        let mask = TextMask::from_coverage(size, coverage)?;
        tracing::debug!(
            width,
            height,
            fuel = mask.fuel_count(),
            family = self.last_family_name.as_deref().unwrap_or(""),
            "rasterized text"
        );
        Ok(mask)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/raster.rs"]
mod tests;
