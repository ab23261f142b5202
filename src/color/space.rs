//! Pure colour-space conversions: sRGB, linear RGB, CIE XYZ (D65), CIE Lab,
//! HSL and HSV. All functions are stateless.
//!
//! [`Rgb`] channels are nominally in `0..=1` but intermediate results (for
//! example a Lab blend converted back to sRGB) may fall outside the gamut
//! until [`Rgb::clamped`] is applied.

use crate::foundation::core::Rgba8;

/// D65 reference white as the row sums of the sRGB → XYZ matrix, so that
/// sRGB white lands exactly on `a = b = 0`.
const WHITE_D65: [f64; 3] = [0.950_455_927_051_671_8, 1.0, 1.089_057_750_761_878_5];

const LAB_EPSILON: f64 = 6.0 / 29.0;

/// Gamma-encoded sRGB colour with `f64` channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE L*a*b* colour, `l` in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Alpha is dropped.
    pub fn from_rgba8(c: Rgba8) -> Self {
        Self::new(
            f64::from(c.r) / 255.0,
            f64::from(c.g) / 255.0,
            f64::from(c.b) / 255.0,
        )
    }

    /// Opaque 8-bit colour; out-of-gamut channels are clamped.
    pub fn to_rgba8(self) -> Rgba8 {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Rgba8::opaque(to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Returns `(hue_degrees, saturation, lightness)`, hue in `[0, 360)`.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l < 0.5 {
            d / (max + min)
        } else {
            d / (2.0 - max - min)
        };
        let h = if max == self.r {
            (self.g - self.b) / d
        } else if max == self.g {
            2.0 + (self.b - self.r) / d
        } else {
            4.0 + (self.r - self.g) / d
        };
        (wrap_hue(h * 60.0), s, l)
    }

    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = wrap_hue(h) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::new(l, l, l);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;
        Self::new(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }

    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = wrap_hue(h) / 60.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::new(r + m, g + m, b + m)
    }

    pub fn to_lab(self) -> Lab {
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);

        let x = 0.412_390_799_265_959_5 * r + 0.357_584_339_383_878 * g + 0.180_480_788_401_834_3 * b;
        let y = 0.212_639_005_871_510_36 * r + 0.715_168_678_767_756 * g + 0.072_192_315_360_733_71 * b;
        let z = 0.019_330_818_715_591_85 * r + 0.119_194_779_794_626 * g + 0.950_532_152_249_660_6 * b;

        let fx = lab_f(x / WHITE_D65[0]);
        let fy = lab_f(y / WHITE_D65[1]);
        let fz = lab_f(z / WHITE_D65[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    pub fn from_lab(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let x = WHITE_D65[0] * lab_f_inv(fx);
        let y = WHITE_D65[1] * lab_f_inv(fy);
        let z = WHITE_D65[2] * lab_f_inv(fz);

        let r = 3.240_969_941_904_521 * x - 1.537_383_177_570_093_5 * y - 0.498_610_760_293_003_3 * z;
        let g = -0.969_243_636_280_879_8 * x + 1.875_967_501_507_720_7 * y + 0.041_555_057_407_175_61 * z;
        let b = 0.055_630_079_696_993_61 * x - 0.203_976_958_888_976_57 * y + 1.056_971_514_242_878_6 * z;

        Self::new(delinearize(r), delinearize(g), delinearize(b))
    }

    /// Interpolate toward `other` in Lab space; `t = 0` is `self`.
    ///
    /// The result is not clamped.
    pub fn blend_lab(self, other: Self, t: f64) -> Self {
        let a = self.to_lab();
        let b = other.to_lab();
        Self::from_lab(Lab {
            l: a.l + (b.l - a.l) * t,
            a: a.a + (b.a - a.a) * t,
            b: a.b + (b.b - a.b) * t,
        })
    }
}

/// Wrap degrees into `[0, 360)`.
pub fn wrap_hue(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if w >= 360.0 { 0.0 } else { w }
}

fn linearize(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn delinearize(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON.powi(3) {
        t.cbrt()
    } else {
        t / (3.0 * LAB_EPSILON * LAB_EPSILON) + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t * t * t
    } else {
        3.0 * LAB_EPSILON * LAB_EPSILON * (t - 4.0 / 29.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/space.rs"]
mod tests;
