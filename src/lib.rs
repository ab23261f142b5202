//! Scorch renders short strings as animated burning text.
//!
//! # Pipeline overview
//!
//! 1. **Rasterise**: text + font chain -> `TextMask` (which pixels are fuel)
//! 2. **Simulate**: `FireSimulator` advances a double-buffered heat field one tick at a time
//! 3. **Composite**: `Compositor` maps fuel and heat to RGBA (or palette indices for GIF)
//! 4. **Assemble**: `AnimationDriver` warms up and captures frames; `stack_frames` builds a sprite sheet
//! 5. **Encode** (optional): GIF with a 256-entry palette, or PNG
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same mask, noise field and parameters always produce the same frames,
//!   whether a tick runs on one thread or many.
//! - **Validate at the boundary**: bad text, colours and font chains are rejected before any
//!   simulation state exists.
#![forbid(unsafe_code)]

mod animation;
mod color;
mod encode;
mod fire;
mod foundation;
mod noise;
mod options;
mod render;
mod session;
mod text;

pub use crate::animation::driver::{AnimationDriver, DriverOpts, Speed, WARMUP_TICKS};
pub use crate::animation::ease::{Ease, ease_in_circ};
pub use crate::color::palette::{
    PALETTE_LEN, Palette, RAMP_SAMPLES, TEXT_INDEX, TRANSPARENT_INDEX,
};
pub use crate::color::parse::{parse_hex, to_hex};
pub use crate::color::ramp::ColorRamp;
pub use crate::color::space::{Lab, Rgb, wrap_hue};
pub use crate::encode::gif::write_gif;
pub use crate::encode::png::{write_png, write_png_sequence};
pub use crate::fire::field::FireField;
pub use crate::fire::mask::TextMask;
pub use crate::fire::simulator::{FireParams, FireSimulator, Kernel};
pub use crate::foundation::core::{GridSize, Rgba8};
pub use crate::foundation::error::{ScorchError, ScorchResult};
pub use crate::noise::field::{DEFAULT_SCALE, DEFAULT_SEED, NoiseField, SimplexNoise};
pub use crate::options::{
    BurnOptions, ColorScheme, DEFAULT_FLAME_COLOR, DEFAULT_TEXT_COLOR, MAX_TEXT_CHARS,
};
pub use crate::render::compositor::Compositor;
pub use crate::render::frame::{FrameRGBA, IndexedFrame};
pub use crate::render::sheet::stack_frames;
pub use crate::session::{
    BurnOutput, DEFAULT_DEADLINE, OutputFormat, Renderer, rasterize_with_chain,
};
pub use crate::text::fonts::{FontChains, LoadedFont};
pub use crate::text::raster::{
    DEFAULT_PADDING_PX, DEFAULT_SIZE_PX, GlyphRasterizer, MaskBrush, ParleyRasterizer,
};
