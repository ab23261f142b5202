use super::*;

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn wrap_hue_is_non_negative() {
    assert_eq!(wrap_hue(370.0), 10.0);
    assert_eq!(wrap_hue(-30.0), 330.0);
    assert_eq!(wrap_hue(-45.0 - 720.0), 315.0);
    assert_eq!(wrap_hue(360.0), 0.0);
    assert!(wrap_hue(-1e-18) < 360.0);
}

#[test]
fn hsl_roundtrip_for_primary_and_mixed_colours() {
    for c in [
        Rgb::new(1.0, 0.0, 0.0),
        Rgb::new(0.0, 1.0, 0.0),
        Rgb::new(0.0, 0.0, 1.0),
        Rgb::new(1.0, 149.0 / 255.0, 0.0),
        Rgb::new(0.2, 0.4, 0.6),
        Rgb::new(0.5, 0.5, 0.5),
    ] {
        let (h, s, l) = c.to_hsl();
        let back = Rgb::from_hsl(h, s, l);
        assert!(close(back.r, c.r, 1e-9), "{c:?} -> {back:?}");
        assert!(close(back.g, c.g, 1e-9), "{c:?} -> {back:?}");
        assert!(close(back.b, c.b, 1e-9), "{c:?} -> {back:?}");
    }
}

#[test]
fn orange_hsl_components() {
    let (h, s, l) = Rgb::from_rgba8(Rgba8::opaque(255, 149, 0)).to_hsl();
    assert!(close(h, 35.058_823_529, 1e-6));
    assert!(close(s, 1.0, 1e-12));
    assert!(close(l, 0.5, 1e-12));
}

#[test]
fn hsv_full_saturation_hues() {
    assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0).to_rgba8(), Rgba8::opaque(255, 0, 0));
    assert_eq!(Rgb::from_hsv(120.0, 1.0, 1.0).to_rgba8(), Rgba8::opaque(0, 255, 0));
    assert_eq!(Rgb::from_hsv(240.0, 1.0, 1.0).to_rgba8(), Rgba8::opaque(0, 0, 255));
    assert_eq!(Rgb::from_hsv(-30.0, 1.0, 1.0).to_rgba8(), Rgba8::opaque(255, 0, 128));
}

#[test]
fn lab_roundtrip_preserves_8bit_colours() {
    for c in [
        Rgba8::opaque(0, 0, 0),
        Rgba8::opaque(255, 255, 255),
        Rgba8::opaque(255, 149, 0),
        Rgba8::opaque(12, 200, 77),
        Rgba8::opaque(3, 2, 1),
    ] {
        let back = Rgb::from_lab(Rgb::from_rgba8(c).to_lab()).to_rgba8();
        assert_eq!(back, c);
    }
}

#[test]
fn lab_reference_values() {
    let white = Rgb::WHITE.to_lab();
    assert!(close(white.l, 100.0, 1e-3));
    assert!(close(white.a, 0.0, 1e-6));
    assert!(close(white.b, 0.0, 1e-6));

    let black = Rgb::BLACK.to_lab();
    assert!(close(black.l, 0.0, 1e-9));
}

#[test]
fn blend_lab_endpoints_and_midpoint() {
    let a = Rgb::new(1.0, 0.0, 0.0);
    let b = Rgb::new(0.0, 0.0, 1.0);
    assert_eq!(a.blend_lab(b, 0.0).to_rgba8(), a.to_rgba8());
    assert_eq!(a.blend_lab(b, 1.0).to_rgba8(), b.to_rgba8());

    let grey = Rgb::BLACK.blend_lab(Rgb::WHITE, 0.5).to_rgba8();
    for ch in [grey.r, grey.g, grey.b] {
        assert!((118..=120).contains(&ch), "lab midpoint channel {ch}");
    }
}

#[test]
fn clamped_limits_out_of_gamut_channels() {
    let c = Rgb::new(-0.2, 0.5, 1.7).clamped();
    assert_eq!(c, Rgb::new(0.0, 0.5, 1.0));
}
