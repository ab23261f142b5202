use crate::foundation::{
    core::GridSize,
    error::{ScorchError, ScorchResult},
};

/// Glyph coverage grid. Any non-zero coverage marks a fuel pixel.
///
/// Built once per render from the rasteriser and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMask {
    size: GridSize,
    coverage: Vec<u8>,
}

impl TextMask {
    /// `coverage` is row-major, one byte per pixel.
    pub fn from_coverage(size: GridSize, coverage: Vec<u8>) -> ScorchResult<Self> {
        if coverage.len() != size.pixel_count() {
            return Err(ScorchError::render(format!(
                "mask coverage has {} bytes, expected {} for {}x{}",
                coverage.len(),
                size.pixel_count(),
                size.width,
                size.height
            )));
        }
        Ok(Self { size, coverage })
    }

    /// Build from a predicate over `(x, y)`; fuel pixels get full coverage.
    pub fn from_fn(size: GridSize, mut is_fuel: impl FnMut(u32, u32) -> bool) -> Self {
        let mut coverage = Vec::with_capacity(size.pixel_count());
        for y in 0..size.height {
            for x in 0..size.width {
                coverage.push(if is_fuel(x, y) { 255 } else { 0 });
            }
        }
        Self { size, coverage }
    }

    pub fn empty(size: GridSize) -> Self {
        Self {
            size,
            coverage: vec![0; size.pixel_count()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn coverage(&self) -> &[u8] {
        &self.coverage
    }

    /// Out-of-bounds coordinates are never fuel.
    pub fn is_fuel(&self, x: i64, y: i64) -> bool {
        self.size
            .index_of(x, y)
            .is_some_and(|i| self.coverage[i] > 0)
    }

    pub fn fuel_count(&self) -> usize {
        self.coverage.iter().filter(|&&c| c > 0).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fire/mask.rs"]
mod tests;
