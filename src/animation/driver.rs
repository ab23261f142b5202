use std::time::{Duration, Instant};

use crate::{
    fire::{field::FireField, mask::TextMask, simulator::FireSimulator},
    foundation::error::{ScorchError, ScorchResult},
    render::{
        compositor::Compositor,
        frame::{FrameRGBA, IndexedFrame},
    },
};

/// Uncaptured ticks run before the first frame so the flames have filled in.
pub const WARMUP_TICKS: usize = 50;

/// Animation pacing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    /// 5 frames, 3 ticks apart.
    #[default]
    Fast,
    /// 50 frames, 1 tick apart.
    Slow,
}

impl Speed {
    pub fn frame_count(self) -> usize {
        match self {
            Self::Fast => 5,
            Self::Slow => 50,
        }
    }

    pub fn ticks_per_frame(self) -> usize {
        match self {
            Self::Fast => 3,
            Self::Slow => 1,
        }
    }

    /// GIF frame delay in hundredths of a second.
    pub fn gif_delay_centis(self) -> u16 {
        match self {
            Self::Fast => 5,
            Self::Slow => 2,
        }
    }
}

impl std::str::FromStr for Speed {
    type Err = ScorchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "slow" => Ok(Self::Slow),
            other => Err(ScorchError::validation(format!(
                "unknown speed \"{other}\" (expected fast or slow)"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverOpts {
    pub warmup_ticks: usize,
    pub speed: Speed,
    /// Wall-clock budget for warm-up plus capture.
    pub deadline: Option<Duration>,
}

impl Default for DriverOpts {
    fn default() -> Self {
        Self {
            warmup_ticks: WARMUP_TICKS,
            speed: Speed::Fast,
            deadline: None,
        }
    }
}

/// Runs warm-up and capture ticks on a [`FireSimulator`].
#[derive(Debug)]
pub struct AnimationDriver {
    sim: FireSimulator,
    opts: DriverOpts,
    warmed_up: bool,
}

impl AnimationDriver {
    pub fn new(sim: FireSimulator, opts: DriverOpts) -> Self {
        Self {
            sim,
            opts,
            warmed_up: false,
        }
    }

    pub fn simulator(&self) -> &FireSimulator {
        &self.sim
    }

    pub fn opts(&self) -> &DriverOpts {
        &self.opts
    }

    /// Warm up (once per driver), then step and call `grab` once per frame.
    ///
    /// Returns exactly `speed.frame_count()` captures in tick order.
    #[tracing::instrument(skip_all, fields(speed = ?self.opts.speed))]
    pub fn capture<T>(
        &mut self,
        mut grab: impl FnMut(&TextMask, &FireField) -> ScorchResult<T>,
    ) -> ScorchResult<Vec<T>> {
        let started = Instant::now();

        if !self.warmed_up {
            for _ in 0..self.opts.warmup_ticks {
                self.check_deadline(started)?;
                self.sim.step();
            }
            self.warmed_up = true;
            tracing::debug!(tick = self.sim.tick(), "warm-up finished");
        }

        let speed = self.opts.speed;
        let mut out = Vec::with_capacity(speed.frame_count());
        for frame in 0..speed.frame_count() {
            for _ in 0..speed.ticks_per_frame() {
                self.check_deadline(started)?;
                self.sim.step();
            }
            out.push(grab(self.sim.mask(), self.sim.field())?);
            tracing::debug!(frame, tick = self.sim.tick(), "captured frame");
        }
        Ok(out)
    }

    pub fn render_frames(&mut self, compositor: &Compositor) -> ScorchResult<Vec<FrameRGBA>> {
        self.capture(|mask, field| compositor.draw(mask, field))
    }

    pub fn render_indexed(&mut self) -> ScorchResult<Vec<IndexedFrame>> {
        self.capture(Compositor::draw_indexed)
    }

    fn check_deadline(&self, started: Instant) -> ScorchResult<()> {
        match self.opts.deadline {
            Some(limit) if started.elapsed() > limit => Err(ScorchError::deadline(format!(
                "render stopped at tick {} after {:?} (limit {limit:?})",
                self.sim.tick(),
                started.elapsed()
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
