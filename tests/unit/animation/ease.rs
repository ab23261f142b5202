use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::InQuad, Ease::InCirc];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
    assert_eq!(ease_in_circ(0.0), 0.0);
    assert_eq!(ease_in_circ(1.0), 1.0);
}

#[test]
fn in_circ_is_monotonic() {
    let mut prev = ease_in_circ(0.0);
    for i in 1..=1000 {
        let v = ease_in_circ(f64::from(i) / 1000.0);
        assert!(v >= prev, "not monotonic at step {i}");
        prev = v;
    }
}

#[test]
fn in_circ_biases_low() {
    assert!(ease_in_circ(0.5) < 0.15);
    assert!(ease_in_circ(0.99) > 0.8);
    let expected = 1.0 - (0.75f64).sqrt();
    assert!((ease_in_circ(0.5) - expected).abs() < 1e-12);
}

#[test]
fn inputs_outside_unit_range_are_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-2.0), 0.0);
        assert_eq!(ease.apply(3.0), 1.0);
    }
}

#[test]
fn default_is_in_circ() {
    assert_eq!(Ease::default(), Ease::InCirc);
}
