use std::{io::Write, path::PathBuf, sync::Arc, time::Duration};

use rand::Rng;

use crate::{
    animation::driver::{AnimationDriver, DriverOpts, Speed, WARMUP_TICKS},
    color::{palette::Palette, ramp::ColorRamp},
    encode::{gif::write_gif, png::write_png},
    fire::{
        mask::TextMask,
        simulator::{FireParams, FireSimulator},
    },
    foundation::error::{ScorchError, ScorchResult},
    noise::field::NoiseField,
    options::{BurnOptions, ColorScheme},
    render::{
        compositor::Compositor,
        frame::{FrameRGBA, IndexedFrame},
        sheet::stack_frames,
    },
    text::{
        fonts::FontChains,
        raster::{DEFAULT_SIZE_PX, GlyphRasterizer, ParleyRasterizer},
    },
};

/// Wall-clock budget for one render unless overridden.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

/// Shape of a render's result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Indexed frames plus the palette, ready for GIF encoding.
    #[default]
    Gif,
    /// Every RGBA frame stacked vertically into one image.
    Sheet,
    /// The individual RGBA frames.
    Frames,
}

impl std::str::FromStr for OutputFormat {
    type Err = ScorchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gif" => Ok(Self::Gif),
            "sheet" => Ok(Self::Sheet),
            "frames" => Ok(Self::Frames),
            other => Err(ScorchError::validation(format!(
                "unknown output format \"{other}\" (expected gif, sheet or frames)"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BurnOutput {
    Frames(Vec<FrameRGBA>),
    Sheet {
        image: FrameRGBA,
        /// Frames stacked top to bottom, each `image.height / frames` tall.
        frames: usize,
    },
    Gif {
        frames: Vec<IndexedFrame>,
        palette: Palette,
        speed: Speed,
    },
}

impl BurnOutput {
    /// Number of animation frames (a sheet counts the frames it stacks).
    pub fn frame_count(&self) -> usize {
        match self {
            Self::Frames(frames) => frames.len(),
            Self::Sheet { frames, .. } => *frames,
            Self::Gif { frames, .. } => frames.len(),
        }
    }

    /// Width and height of the encoded image.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Frames(frames) => frames.first().map_or((0, 0), |f| (f.width, f.height)),
            Self::Sheet { image, .. } => (image.width, image.height),
            Self::Gif { frames, .. } => frames.first().map_or((0, 0), |f| (f.width, f.height)),
        }
    }

    /// Encode a GIF or sheet into `w`.
    ///
    /// Frame sequences have no single-stream form; write them with
    /// [`crate::write_png_sequence`].
    pub fn encode<W: Write>(&self, w: W) -> ScorchResult<()> {
        match self {
            Self::Gif {
                frames,
                palette,
                speed,
            } => write_gif(w, frames, palette, *speed),
            Self::Sheet { image, .. } => write_png(w, image),
            Self::Frames(_) => Err(ScorchError::validation(
                "frame sequences must be written to a directory",
            )),
        }
    }
}

/// Composition root: owns the shared noise field and font table and turns
/// [`BurnOptions`] into finished frames.
#[derive(Clone)]
pub struct Renderer {
    noise: Arc<dyn NoiseField>,
    fonts: FontChains,
    params: FireParams,
    deadline: Option<Duration>,
    size_px: f32,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("fonts", &self.fonts)
            .field("params", &self.params)
            .field("deadline", &self.deadline)
            .field("size_px", &self.size_px)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    pub fn new(noise: Arc<dyn NoiseField>, fonts: FontChains) -> Self {
        Self {
            noise,
            fonts,
            params: FireParams::default(),
            deadline: Some(DEFAULT_DEADLINE),
            size_px: DEFAULT_SIZE_PX,
        }
    }

    pub fn with_params(mut self, params: FireParams) -> Self {
        self.params = params;
        self
    }

    /// `None` disables the time limit.
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_text_size(mut self, size_px: f32) -> Self {
        self.size_px = size_px;
        self
    }

    pub fn fonts(&self) -> &FontChains {
        &self.fonts
    }

    pub fn params(&self) -> &FireParams {
        &self.params
    }

    /// Render with Parley glyphs and thread-local randomness for random colours.
    pub fn render(&self, opts: &BurnOptions, format: OutputFormat) -> ScorchResult<BurnOutput> {
        self.render_with(
            opts,
            format,
            &mut ParleyRasterizer::new(),
            &mut rand::thread_rng(),
        )
    }

    #[tracing::instrument(
        skip_all,
        fields(text = %opts.text, speed = ?opts.speed, format = ?format)
    )]
    pub fn render_with<G: GlyphRasterizer, R: Rng>(
        &self,
        opts: &BurnOptions,
        format: OutputFormat,
        rasterizer: &mut G,
        rng: &mut R,
    ) -> ScorchResult<BurnOutput> {
        opts.validate()?;
        let chain = self.fonts.resolve(opts.font_chain.as_deref())?;
        let scheme = ColorScheme::resolve(opts, rng);
        let mask = rasterize_with_chain(rasterizer, chain, &opts.text, self.size_px)?;
        self.render_mask(mask, opts.speed, scheme, format)
    }

    /// Run the fire over an already rasterised mask.
    pub fn render_mask(
        &self,
        mask: TextMask,
        speed: Speed,
        scheme: ColorScheme,
        format: OutputFormat,
    ) -> ScorchResult<BurnOutput> {
        let size = mask.size();
        let ramp = ColorRamp::fire(scheme.flame);
        let sim = FireSimulator::new(Arc::new(mask), Arc::clone(&self.noise), self.params);
        let mut driver = AnimationDriver::new(
            sim,
            DriverOpts {
                warmup_ticks: WARMUP_TICKS,
                speed,
                deadline: self.deadline,
            },
        );

        let output = match format {
            OutputFormat::Gif => {
                let palette = Palette::build(&ramp, scheme.text);
                BurnOutput::Gif {
                    frames: driver.render_indexed()?,
                    palette,
                    speed,
                }
            }
            OutputFormat::Sheet => {
                let compositor = Compositor::new(ramp, scheme.text);
                let frames = driver.render_frames(&compositor)?;
                BurnOutput::Sheet {
                    image: stack_frames(&frames)?,
                    frames: frames.len(),
                }
            }
            OutputFormat::Frames => {
                let compositor = Compositor::new(ramp, scheme.text);
                BurnOutput::Frames(driver.render_frames(&compositor)?)
            }
        };

        let (width, height) = output.dimensions();
        tracing::info!(
            mask_width = size.width,
            mask_height = size.height,
            width,
            height,
            frames = output.frame_count(),
            "render finished"
        );
        Ok(output)
    }
}

/// Rasterise `text` with the first font of `chain` that works.
///
/// Unreadable files and fonts the rasteriser rejects are skipped with a
/// warning; a validation error (bad size, oversized text) ends the search.
pub fn rasterize_with_chain<G: GlyphRasterizer>(
    rasterizer: &mut G,
    chain: &[PathBuf],
    text: &str,
    size_px: f32,
) -> ScorchResult<TextMask> {
    let fonts = FontChains::read_chain(chain)?;
    let mut last_err = None;
    for font in &fonts {
        match rasterizer.rasterize(text, &font.bytes, size_px) {
            Ok(mask) => {
                tracing::debug!(path = %font.path.display(), "rasterised text");
                return Ok(mask);
            }
            Err(e) if e.is_validation() => return Err(e),
            Err(e) => {
                tracing::warn!(
                    path = %font.path.display(),
                    error = %e,
                    "font failed, trying next in chain"
                );
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| ScorchError::font("font chain is empty")))
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
