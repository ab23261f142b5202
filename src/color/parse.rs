use std::str::FromStr;

use serde::Deserialize;

use crate::foundation::{
    core::Rgba8,
    error::{ScorchError, ScorchResult},
};

/// Parse `#RRGGBB` / `#RRGGBBAA` (the leading `#` is optional, case-insensitive).
pub fn parse_hex(s: &str) -> ScorchResult<Rgba8> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    if !digits.is_ascii() {
        return Err(ScorchError::validation(format!(
            "invalid colour \"{s}\": hex colour must be ASCII"
        )));
    }

    let hex_byte = |pair: &str| -> ScorchResult<u8> {
        u8::from_str_radix(pair, 16).map_err(|_| {
            ScorchError::validation(format!("invalid colour \"{s}\": bad hex byte \"{pair}\""))
        })
    };

    match digits.len() {
        6 => Ok(Rgba8::opaque(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
        )),
        8 => Ok(Rgba8::new(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
            hex_byte(&digits[6..8])?,
        )),
        _ => Err(ScorchError::validation(format!(
            "invalid colour \"{s}\": expected #RRGGBB or #RRGGBBAA"
        ))),
    }
}

/// Lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn to_hex(c: Rgba8) -> String {
    if c.a == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
    }
}

impl FromStr for Rgba8 {
    type Err = ScorchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Rgba8::opaque(*r, *g, *b)),
                [r, g, b, a] => Ok(Rgba8::new(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/parse.rs"]
mod tests;
