use super::*;
use crate::{
    animation::ease::ease_in_circ, foundation::core::GridSize, noise::field::SimplexNoise,
};

struct ConstNoise(f64);

impl NoiseField for ConstNoise {
    fn sample(&self, _x: i64, _y: i64, _t: u64) -> f64 {
        self.0
    }
}

fn single_fuel_sim(noise: f64) -> FireSimulator {
    let size = GridSize::new(10, 20).unwrap();
    let mask = TextMask::from_fn(size, |x, y| x == 5 && y == 5);
    FireSimulator::new(
        Arc::new(mask),
        Arc::new(ConstNoise(noise)),
        FireParams::default(),
    )
}

#[test]
fn single_fuel_pixel_first_step() {
    let mut sim = single_fuel_sim(0.5);
    sim.step();

    let expected = ((1.0 - ease_in_circ(0.5)) * 192.0).round() as u8 + 64;
    assert_eq!(expected, 230);
    let field = sim.field();
    assert_eq!(field.get(5, 5), expected);
    for y in 0..20 {
        for x in 0..10 {
            if (x, y) != (5, 5) {
                assert_eq!(field.get(x, y), 0, "({x},{y})");
            }
        }
    }
    assert_eq!(sim.tick(), 1);
}

#[test]
fn heat_rises_and_drifts_right_on_second_step() {
    let mut sim = single_fuel_sim(0.5);
    sim.step_n(2);
    let field = sim.field();

    // 0.7 * 230 - 1 - easeInCirc(0.5) * 64
    assert_eq!(field.get(5, 4), 151);
    // 0.3 * 230 - 1 - easeInCirc(0.5) * 64
    assert_eq!(field.get(6, 5), 59);
    // nothing flows downward or to the left
    assert_eq!(field.get(5, 6), 0);
    assert_eq!(field.get(4, 5), 0);
    assert_eq!(field.get(5, 5), 230);
}

#[test]
fn balanced_kernel_reads_right_neighbour() {
    let size = GridSize::new(10, 20).unwrap();
    let mask = TextMask::from_fn(size, |x, y| x == 5 && y == 5);
    let params = FireParams {
        kernel: Kernel::Balanced,
        ..FireParams::default()
    };
    let mut sim = FireSimulator::new(Arc::new(mask), Arc::new(ConstNoise(0.5)), params);
    sim.step_n(2);
    // 0.6 * 230 - 1 - 8.57...
    assert_eq!(sim.field().get(5, 4), 128);
    // 0.1 * 230 - 1 - 8.57...
    assert_eq!(sim.field().get(4, 5), 13);
}

#[test]
fn weak_influence_dies_out() {
    let params = FireParams::default();
    assert_eq!(params.cooled_heat(1.0, 0.0), None);
    assert_eq!(params.cooled_heat(0.5, 0.0), None);
    assert_eq!(params.cooled_heat(1.4, 0.0), Some(0));
    assert_eq!(params.cooled_heat(300.0, 0.0), Some(255));
    // cooling can push below zero; it clamps
    assert_eq!(params.cooled_heat(10.0, 0.999), Some(0));
}

#[test]
fn fuel_heat_stays_in_byte_range() {
    let params = FireParams::default();
    assert_eq!(params.fuel_heat(0.0), 255);
    assert_eq!(params.fuel_heat(1.0), 64);
    for i in 0..100 {
        let h = params.fuel_heat(f64::from(i) / 100.0);
        assert!(h >= 64);
    }
}

#[test]
fn fuel_pixels_ignore_previous_field() {
    let size = GridSize::new(4, 4).unwrap();
    let mask = Arc::new(TextMask::from_fn(size, |_, y| y == 3));
    let hot = FireField::from_heat(size, vec![255; 16]).unwrap();
    let cold = FireField::zeroed(size);

    let noise: Arc<dyn NoiseField> = Arc::new(ConstNoise(0.25));
    let mut a =
        FireSimulator::with_field(mask.clone(), noise.clone(), FireParams::default(), hot).unwrap();
    let mut b = FireSimulator::with_field(mask, noise, FireParams::default(), cold).unwrap();
    a.step();
    b.step();
    for x in 0..4 {
        assert_eq!(a.field().get(x, 3), b.field().get(x, 3));
        assert_eq!(a.field().get(x, 3), FireParams::default().fuel_heat(0.25));
    }
}

#[test]
fn with_field_rejects_size_mismatch() {
    let mask = Arc::new(TextMask::empty(GridSize::new(4, 4).unwrap()));
    let field = FireField::zeroed(GridSize::new(5, 4).unwrap());
    let err = FireSimulator::with_field(
        mask,
        Arc::new(ConstNoise(0.0)),
        FireParams::default(),
        field,
    )
    .unwrap_err();
    assert!(err.to_string().contains("render error:"));
}

#[test]
fn step_matches_sequential_reference() {
    let size = GridSize::new(23, 17).unwrap();
    let mask = Arc::new(TextMask::from_fn(size, |x, y| (x + y) % 5 == 0 && y > 8));
    let noise: Arc<dyn NoiseField> = Arc::new(SimplexNoise::new(11));
    let params = FireParams::default();
    let mut sim = FireSimulator::new(mask.clone(), noise.clone(), params);

    let mut reference = FireField::zeroed(size);
    for t in 0..12u64 {
        let mut next = vec![0u8; size.pixel_count()];
        for y in 0..size.height as i64 {
            for x in 0..size.width as i64 {
                let i = (y as usize) * (size.width as usize) + x as usize;
                if mask.is_fuel(x, y) {
                    next[i] = params.fuel_heat(noise.sample(x, y, t));
                } else {
                    let influence = params.influence(&reference, x, y);
                    next[i] = params
                        .cooled_heat(influence, noise.sample(x, y, t))
                        .unwrap_or(0);
                }
            }
        }
        reference = FireField::from_heat(size, next).unwrap();
        sim.step();
        assert_eq!(sim.field(), &reference, "tick {t}");
    }
}

#[test]
fn empty_mask_stays_cold() {
    let mask = Arc::new(TextMask::empty(GridSize::new(8, 8).unwrap()));
    let mut sim = FireSimulator::new(mask, Arc::new(SimplexNoise::default()), FireParams::default());
    sim.step_n(10);
    assert!(sim.field().is_cold());
    assert_eq!(sim.tick(), 10);
}
