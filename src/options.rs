use rand::Rng;

use crate::{
    animation::driver::Speed,
    color::space::Rgb,
    foundation::{
        core::Rgba8,
        error::{ScorchError, ScorchResult},
    },
};

/// Longest accepted text, counted in characters.
pub const MAX_TEXT_CHARS: usize = 50;

pub const DEFAULT_FLAME_COLOR: Rgba8 = Rgba8::opaque(0xFF, 0x95, 0x00);
pub const DEFAULT_TEXT_COLOR: Rgba8 = Rgba8::opaque(0xFF, 0x00, 0x00);

/// Hue offset of the text colour from the flame colour in random mode.
const RANDOM_TEXT_HUE_SHIFT: f64 = -30.0;

/// One render request, as it arrives from the CLI or a JSON document.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BurnOptions {
    pub text: String,
    pub speed: Speed,
    /// Named font chain; `None` selects the default chain.
    pub font_chain: Option<String>,
    pub flame_color: Option<Rgba8>,
    pub text_color: Option<Rgba8>,
    /// Ignore the explicit colours and pick a random hue.
    pub random_color: bool,
}

impl BurnOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> ScorchResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScorchError::validation(format!("invalid burn options: {e}")))
    }

    pub fn validate(&self) -> ScorchResult<()> {
        if self.text.is_empty() {
            return Err(ScorchError::validation("text must not be empty"));
        }
        let chars = self.text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(ScorchError::validation(format!(
                "text is {chars} characters long, the limit is {MAX_TEXT_CHARS}"
            )));
        }
        if self
            .font_chain
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(ScorchError::validation("font chain name must not be empty"));
        }
        Ok(())
    }
}

/// Flame base colour and text colour of one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColorScheme {
    pub flame: Rgba8,
    pub text: Rgba8,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            flame: DEFAULT_FLAME_COLOR,
            text: DEFAULT_TEXT_COLOR,
        }
    }
}

impl ColorScheme {
    /// Pick colours for `opts`; `rng` is only consulted in random mode.
    pub fn resolve<R: Rng>(opts: &BurnOptions, rng: &mut R) -> Self {
        if opts.random_color {
            return Self::from_hue(rng.gen_range(0.0..360.0));
        }
        let defaults = Self::default();
        Self {
            flame: opts.flame_color.unwrap_or(defaults.flame),
            // Glyphs are always drawn opaque; GIF palettes carry no alpha.
            text: Rgba8 {
                a: 255,
                ..opts.text_color.unwrap_or(defaults.text)
            },
        }
    }

    /// Fully saturated flame at hue `h`, text 30° below it.
    pub fn from_hue(h: f64) -> Self {
        Self {
            flame: Rgb::from_hsv(h, 1.0, 1.0).to_rgba8(),
            text: Rgb::from_hsv(h + RANDOM_TEXT_HUE_SHIFT, 1.0, 1.0).to_rgba8(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/options.rs"]
mod tests;
