/// Nonlinear remapping curves applied to noise output.
///
/// `InCirc` is the curve the fire uses for both fuel and cooling: it keeps
/// most noise samples near zero and only rises sharply as the input nears 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    InQuad,
    #[default]
    InCirc,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::InCirc => ease_in_circ(t),
        }
    }
}

/// `1 - sqrt(1 - x^2)` on `[0, 1]`.
pub fn ease_in_circ(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x * x).max(0.0).sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
