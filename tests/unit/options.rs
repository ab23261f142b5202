use rand::{SeedableRng, rngs::StdRng};

use super::*;

#[test]
fn only_empty_text_is_rejected() {
    let err = BurnOptions::new("").validate().unwrap_err();
    assert!(err.is_validation(), "{err}");

    assert!(BurnOptions::new("   ").validate().is_ok());
}

#[test]
fn text_limit_counts_characters_not_bytes() {
    assert!(BurnOptions::new("x".repeat(MAX_TEXT_CHARS)).validate().is_ok());
    assert!(BurnOptions::new("é".repeat(MAX_TEXT_CHARS)).validate().is_ok());

    let err = BurnOptions::new("x".repeat(MAX_TEXT_CHARS + 1))
        .validate()
        .unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
    assert!(err.to_string().contains("51"));
}

#[test]
fn blank_font_chain_name_is_rejected() {
    let opts = BurnOptions {
        font_chain: Some(" ".into()),
        ..BurnOptions::new("hot")
    };
    assert!(opts.validate().unwrap_err().is_validation());
}

#[test]
fn json_options_fill_defaults_and_parse_colours() {
    let opts = BurnOptions::from_json_str(
        r##"{"text":"hi","speed":"slow","flame_color":"#00ff00","font_chain":"serif"}"##,
    )
    .unwrap();
    assert_eq!(opts.text, "hi");
    assert_eq!(opts.speed, Speed::Slow);
    assert_eq!(opts.flame_color, Some(Rgba8::opaque(0, 255, 0)));
    assert_eq!(opts.text_color, None);
    assert_eq!(opts.font_chain.as_deref(), Some("serif"));
    assert!(!opts.random_color);
}

#[test]
fn json_options_reject_bad_input() {
    for json in [
        r#"{"text":"hi","speed":"medium"}"#,
        r##"{"text":"hi","flame_color":"#12"}"##,
        r#"{"text":"hi","colour":"red"}"#,
    ] {
        let err = BurnOptions::from_json_str(json).unwrap_err();
        assert!(err.is_validation(), "{json}: {err}");
    }
}

#[test]
fn default_scheme_is_orange_flame_red_text() {
    let mut rng = StdRng::seed_from_u64(1);
    let scheme = ColorScheme::resolve(&BurnOptions::new("a"), &mut rng);
    assert_eq!(scheme.flame, Rgba8::opaque(0xFF, 0x95, 0x00));
    assert_eq!(scheme.text, Rgba8::opaque(0xFF, 0x00, 0x00));
}

#[test]
fn explicit_colours_override_individually() {
    let mut rng = StdRng::seed_from_u64(1);
    let opts = BurnOptions {
        text_color: Some(Rgba8::opaque(1, 2, 3)),
        ..BurnOptions::new("a")
    };
    let scheme = ColorScheme::resolve(&opts, &mut rng);
    assert_eq!(scheme.flame, DEFAULT_FLAME_COLOR);
    assert_eq!(scheme.text, Rgba8::opaque(1, 2, 3));
}

#[test]
fn hue_scheme_offsets_text_by_thirty_degrees() {
    let s = ColorScheme::from_hue(30.0);
    assert_eq!(s.flame, Rgba8::opaque(255, 128, 0));
    assert_eq!(s.text, Rgba8::opaque(255, 0, 0));

    let wrapped = ColorScheme::from_hue(0.0);
    assert_eq!(wrapped.flame, Rgba8::opaque(255, 0, 0));
    assert_eq!(wrapped.text, Rgba8::opaque(255, 0, 128));
}

#[test]
fn random_scheme_ignores_explicit_colours_and_is_saturated() {
    let opts = BurnOptions {
        random_color: true,
        flame_color: Some(Rgba8::opaque(10, 10, 10)),
        ..BurnOptions::new("a")
    };
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let s = ColorScheme::resolve(&opts, &mut rng);
        for c in [s.flame, s.text] {
            let max = c.r.max(c.g).max(c.b);
            let min = c.r.min(c.g).min(c.b);
            assert_eq!((max, min, c.a), (255, 0, 255), "{c:?}");
        }
    }

    let a = ColorScheme::resolve(&opts, &mut StdRng::seed_from_u64(7));
    let b = ColorScheme::resolve(&opts, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn translucent_text_colour_is_made_opaque() {
    let opts = BurnOptions::from_json_str(r##"{"text":"a","text_color":"#ff000000"}"##).unwrap();
    let scheme = ColorScheme::resolve(&opts, &mut StdRng::seed_from_u64(1));
    assert_eq!(scheme.text, Rgba8::opaque(255, 0, 0));
}
