use crate::foundation::{
    core::{GridSize, Rgba8},
    error::{ScorchError, ScorchResult},
};

/// A rendered RGBA frame (straight alpha, row-major, tightly packed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Fully transparent frame.
    pub fn transparent(size: GridSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: vec![0; size.pixel_count() * 4],
        }
    }

    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ScorchResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(ScorchError::render(format!(
                "frame data has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = &self.data[i..i + 4];
        Some(Rgba8::new(px[0], px[1], px[2], px[3]))
    }

    /// Bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * 4;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }
}

/// A frame of palette indices, one byte per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedFrame {
    pub width: u32,
    pub height: u32,
    pub indices: Vec<u8>,
}

impl IndexedFrame {
    pub fn index(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.indices[(y as usize) * (self.width as usize) + x as usize])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
