use crate::{
    color::space::{Rgb, wrap_hue},
    foundation::{
        core::Rgba8,
        error::{ScorchError, ScorchResult},
    },
};

/// Ordered gradient stops, queried with perceptual (Lab) interpolation.
///
/// Heat is mapped to colour through [`ColorRamp::query`]; the fire ramp built
/// by [`ColorRamp::fire`] has four stops, darkest to brightest.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Rgba8>,
}

impl ColorRamp {
    /// At least two stops are required.
    pub fn from_stops(stops: Vec<Rgba8>) -> ScorchResult<Self> {
        if stops.len() < 2 {
            return Err(ScorchError::validation(format!(
                "colour ramp needs at least 2 stops (got {})",
                stops.len()
            )));
        }
        Ok(Self { stops })
    }

    /// Derive `[darkest, darker, base, brighter]` from one flame colour.
    ///
    /// - brighter: hue +30°, lightness +0.05 (capped at 1)
    /// - darker: hue −30°, then 50% toward black in Lab
    /// - darkest: hue −45°, then 75% toward black in Lab
    pub fn fire(base: Rgba8) -> Self {
        let base = Rgba8 { a: 255, ..base };
        let (h, s, l) = Rgb::from_rgba8(base).to_hsl();

        let brighter = Rgb::from_hsl(wrap_hue(h + 30.0), s, (l + 0.05).min(1.0));
        let darker = Rgb::from_hsl(wrap_hue(h - 30.0), s, l).blend_lab(Rgb::BLACK, 0.5);
        let darkest = Rgb::from_hsl(wrap_hue(h - 45.0), s, l).blend_lab(Rgb::BLACK, 0.75);

        Self {
            stops: vec![
                darkest.clamped().to_rgba8(),
                darker.clamped().to_rgba8(),
                base,
                brighter.clamped().to_rgba8(),
            ],
        }
    }

    pub fn stops(&self) -> &[Rgba8] {
        &self.stops
    }

    /// Colour at `t` in `[0, 1]` (clamped).
    ///
    /// `t` is scaled by `stops - 1`; the integer part picks the segment and
    /// the fraction blends its endpoints in Lab space. Endpoints return the
    /// first and last stop exactly.
    pub fn query(&self, t: f64) -> Rgba8 {
        let last = self.stops.len() - 1;
        if t.is_nan() || t <= 0.0 {
            return self.stops[0];
        }
        if t >= 1.0 {
            return self.stops[last];
        }

        let scaled = t * last as f64;
        let segment = (scaled.floor() as usize).min(last - 1);
        let local = scaled - segment as f64;

        let a = Rgb::from_rgba8(self.stops[segment]);
        let b = Rgb::from_rgba8(self.stops[segment + 1]);
        a.blend_lab(b, local).clamped().to_rgba8()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/ramp.rs"]
mod tests;
