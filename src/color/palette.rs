use crate::{color::ramp::ColorRamp, foundation::core::Rgba8};

/// Number of entries in an indexed-colour palette.
pub const PALETTE_LEN: usize = 256;
/// Fully transparent slot.
pub const TRANSPARENT_INDEX: u8 = 0;
/// Slot holding the text colour.
pub const TEXT_INDEX: u8 = 255;
/// Number of ramp samples between the two reserved slots.
pub const RAMP_SAMPLES: usize = 254;

/// Fixed 256-entry colour table for indexed output.
///
/// Slot 0 is transparent, slot 255 is the text colour and slots 1..=254
/// sample the ramp evenly, so an 8-bit heat value maps straight to a slot
/// without a nearest-colour search (see [`Palette::heat_index`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgba8; PALETTE_LEN],
}

impl Palette {
    pub fn build(ramp: &ColorRamp, text_color: Rgba8) -> Self {
        let mut entries = [Rgba8::TRANSPARENT; PALETTE_LEN];
        let denom = (RAMP_SAMPLES - 1) as f64;
        for i in 0..RAMP_SAMPLES {
            entries[i + 1] = ramp.query(i as f64 / denom);
        }
        entries[TEXT_INDEX as usize] = Rgba8 { a: 255, ..text_color };
        Self { entries }
    }

    pub fn entries(&self) -> &[Rgba8; PALETTE_LEN] {
        &self.entries
    }

    pub fn get(&self, index: u8) -> Rgba8 {
        self.entries[index as usize]
    }

    /// Slot for a heat value: 0 stays transparent, anything else lands on
    /// the ramp sample nearest `heat / 255`.
    pub fn heat_index(heat: u8) -> u8 {
        if heat == 0 {
            return TRANSPARENT_INDEX;
        }
        let sample = (f64::from(heat) * (RAMP_SAMPLES - 1) as f64 / 255.0).round() as u8;
        1 + sample
    }

    /// Packed RGB triples (768 bytes), the layout GIF colour tables use.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.entries
            .iter()
            .flat_map(|c| [c.r, c.g, c.b])
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
