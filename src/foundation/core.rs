use crate::foundation::error::{ScorchError, ScorchResult};

/// Width and height of every grid in one render (mask, heat field, frames).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> ScorchResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScorchError::render(format!(
                "grid dimensions must be non-zero (got {width}x{height})"
            )));
        }
        if (width as u64) * (height as u64) > usize::MAX as u64 / 4 {
            return Err(ScorchError::render(format!(
                "grid {width}x{height} is too large"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Row-major index for an in-bounds coordinate, `None` otherwise.
    pub fn index_of(self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
