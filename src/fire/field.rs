use crate::foundation::{
    core::GridSize,
    error::{ScorchError, ScorchResult},
};

/// Per-pixel 8-bit heat for one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FireField {
    size: GridSize,
    heat: Vec<u8>,
}

impl FireField {
    pub fn zeroed(size: GridSize) -> Self {
        Self {
            size,
            heat: vec![0; size.pixel_count()],
        }
    }

    pub fn from_heat(size: GridSize, heat: Vec<u8>) -> ScorchResult<Self> {
        if heat.len() != size.pixel_count() {
            return Err(ScorchError::render(format!(
                "heat buffer has {} bytes, expected {} for {}x{}",
                heat.len(),
                size.pixel_count(),
                size.width,
                size.height
            )));
        }
        Ok(Self { size, heat })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    /// Heat at `(x, y)`; anything outside the grid reads as 0.
    pub fn get(&self, x: i64, y: i64) -> u8 {
        self.size.index_of(x, y).map_or(0, |i| self.heat[i])
    }

    pub fn is_cold(&self) -> bool {
        self.heat.iter().all(|&h| h == 0)
    }

    pub(crate) fn heat_mut(&mut self) -> &mut [u8] {
        &mut self.heat
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fire/field.rs"]
mod tests;
