//! Double-buffered cellular fire.
//!
//! Every tick reads only the previous [`FireField`] and writes a complete
//! replacement, then the two buffers swap. Fuel pixels (the glyph
//! silhouette) are re-seeded from noise each tick; every other pixel takes a
//! weighted sum of its neighbours in the previous field and cools by a noisy
//! amount.

use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    animation::ease::Ease,
    fire::{field::FireField, mask::TextMask},
    foundation::error::{ScorchError, ScorchResult},
    noise::field::NoiseField,
};

/// Neighbour weights used by the propagation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kernel {
    /// `0.6·below + 0.3·left + 0.1·below`. The below pixel is read twice and
    /// no right neighbour is read, so heat drifts up and to the right.
    #[default]
    Reference,
    /// `0.6·below + 0.3·left + 0.1·right`.
    Balanced,
}

/// Tunable constants of the fire heuristic.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FireParams {
    /// Minimum heat of a fuel pixel.
    pub fuel_floor: f64,
    /// Heat added on top of the floor when the eased noise is 0.
    pub fuel_span: f64,
    /// Maximum noisy cooling per tick for propagated heat.
    pub cooling_span: f64,
    /// Influence at or below this dies out; above it, this much is lost.
    pub decay: f64,
    pub fuel_ease: Ease,
    pub cooling_ease: Ease,
    pub kernel: Kernel,
}

impl Default for FireParams {
    fn default() -> Self {
        Self {
            fuel_floor: 64.0,
            fuel_span: 192.0,
            cooling_span: 64.0,
            decay: 1.0,
            fuel_ease: Ease::InCirc,
            cooling_ease: Ease::InCirc,
            kernel: Kernel::Reference,
        }
    }
}

impl FireParams {
    /// Heat written to a fuel pixel for noise sample `n`.
    pub fn fuel_heat(&self, n: f64) -> u8 {
        let heat = ((1.0 - self.fuel_ease.apply(n)) * self.fuel_span).round() + self.fuel_floor;
        clamp_heat(heat)
    }

    /// Weighted neighbour sum read from the previous field.
    pub fn influence(&self, prev: &FireField, x: i64, y: i64) -> f64 {
        let below = f64::from(prev.get(x, y + 1));
        let left = f64::from(prev.get(x - 1, y));
        let third = match self.kernel {
            Kernel::Reference => below,
            Kernel::Balanced => f64::from(prev.get(x + 1, y)),
        };
        0.6 * below + 0.3 * left + 0.1 * third
    }

    /// Heat after cooling, or `None` when the influence is too weak to persist.
    pub fn cooled_heat(&self, influence: f64, n: f64) -> Option<u8> {
        if influence <= self.decay {
            return None;
        }
        let cooled = influence - self.decay - self.cooling_ease.apply(n) * self.cooling_span;
        Some(clamp_heat(cooled.round()))
    }
}

fn clamp_heat(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0) as u8
}

/// Owns the live heat field for one render and advances it one tick at a time.
pub struct FireSimulator {
    noise: Arc<dyn NoiseField>,
    mask: Arc<TextMask>,
    params: FireParams,
    current: FireField,
    next: FireField,
    tick: u64,
}

impl std::fmt::Debug for FireSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FireSimulator")
            .field("size", &self.mask.size())
            .field("params", &self.params)
            .field("tick", &self.tick)
            .finish()
    }
}

impl FireSimulator {
    /// Start from a cold field.
    pub fn new(mask: Arc<TextMask>, noise: Arc<dyn NoiseField>, params: FireParams) -> Self {
        let current = FireField::zeroed(mask.size());
        Self::from_parts(mask, noise, params, current)
    }

    /// Start from an existing field, which must match the mask size.
    pub fn with_field(
        mask: Arc<TextMask>,
        noise: Arc<dyn NoiseField>,
        params: FireParams,
        field: FireField,
    ) -> ScorchResult<Self> {
        if field.size() != mask.size() {
            return Err(ScorchError::render(format!(
                "fire field is {}x{} but mask is {}x{}",
                field.size().width,
                field.size().height,
                mask.size().width,
                mask.size().height
            )));
        }
        Ok(Self::from_parts(mask, noise, params, field))
    }

    fn from_parts(
        mask: Arc<TextMask>,
        noise: Arc<dyn NoiseField>,
        params: FireParams,
        current: FireField,
    ) -> Self {
        let next = FireField::zeroed(mask.size());
        Self {
            noise,
            mask,
            params,
            current,
            next,
            tick: 0,
        }
    }

    pub fn field(&self) -> &FireField {
        &self.current
    }

    pub fn mask(&self) -> &TextMask {
        &self.mask
    }

    pub fn params(&self) -> &FireParams {
        &self.params
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance one tick.
    ///
    /// Rows of the next buffer are filled in parallel; each cell reads only
    /// the previous buffer, so the result does not depend on scheduling.
    pub fn step(&mut self) {
        let width = self.mask.size().width as usize;
        let t = self.tick;
        let prev = &self.current;
        let mask = self.mask.as_ref();
        let noise = self.noise.as_ref();
        let params = &self.params;

        self.next
            .heat_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, cells)| {
                let y = row as i64;
                for (col, cell) in cells.iter_mut().enumerate() {
                    let x = col as i64;
                    *cell = if mask.is_fuel(x, y) {
                        params.fuel_heat(noise.sample(x, y, t))
                    } else {
                        params
                            .cooled_heat(params.influence(prev, x, y), noise.sample(x, y, t))
                            .unwrap_or(0)
                    };
                }
            });

        std::mem::swap(&mut self.current, &mut self.next);
        self.tick += 1;
    }

    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fire/simulator.rs"]
mod tests;
