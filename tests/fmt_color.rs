use rainbow::fmt::{Color, DEFAULT_FREQ, DEFAULT_SPREAD, Gradient, color_index, hue_phase};

#[test]
fn hue_phase_matches_known_samples() {
    let cases = [
        (0.0, Color::new(128, 237, 18)),
        (1.0, Color::new(140, 231, 12)),
        (5.0, Color::new(188, 194, 1)),
        (10.0, Color::new(234, 133, 15)),
        (50.0, Color::new(6, 220, 157)),
        (100.0, Color::new(58, 70, 254)),
        (360.0, Color::new(2, 176, 205)),
    ];
    for (x, want) in cases {
        assert_eq!(hue_phase(x), want, "hue_phase({x})");
    }
}

#[test]
fn hue_phase_is_deterministic() {
    for i in 0..500 {
        let x = f64::from(i) * 0.37;
        assert_eq!(hue_phase(x), hue_phase(x));
    }
}

#[test]
fn color_index_matches_cube_formula() {
    let reference = |r: u8, g: u8, b: u8| {
        let bucket = |v: u8| u32::from(v) * 6 / 256;
        16 + 36 * bucket(r) + 6 * bucket(g) + bucket(b)
    };
    for _ in 0..1000 {
        let (r, g, b) = (fastrand::u8(..), fastrand::u8(..), fastrand::u8(..));
        assert_eq!(
            u32::from(color_index(r, g, b)),
            reference(r, g, b),
            "color_index({r}, {g}, {b})"
        );
    }
}

#[test]
fn color_index_stays_in_cube() {
    for r in (0..=255).step_by(5) {
        for g in (0..=255).step_by(5) {
            for b in (0..=255).step_by(5) {
                let index = color_index(r, g, b);
                assert!((16..=231).contains(&index), "color_index({r}, {g}, {b}) = {index}");
            }
        }
    }
    assert_eq!(color_index(0, 0, 0), 16);
    assert_eq!(color_index(255, 255, 255), 231);
}

#[test]
fn palette_index_and_sequences() {
    let color = Color::new(140, 231, 12);
    assert_eq!(color.palette_index(), 154);
    assert_eq!(color.fg_ansi256(), "\x1b[38;5;154m");
    assert_eq!(color.fg_ansi(), "\x1b[38;2;140;231;12m");
    assert_eq!(color.to_string(), "#8ce70c");
    assert_eq!(Color::from((1, 2, 3)), Color::new(1, 2, 3));
}

#[test]
fn gradient_defaults() {
    let gradient = Gradient::default();
    assert!((gradient.freq() - DEFAULT_FREQ).abs() < f64::EPSILON);
    assert!((gradient.spread() - DEFAULT_SPREAD).abs() < f64::EPSILON);
    assert_eq!(gradient.color_at(1, 0), hue_phase(1.0));
    assert_eq!(gradient.color_at(1, 3), hue_phase(2.0));
}

#[test]
fn gradient_rejects_unusable_values() {
    assert!(Gradient::new(0.2, 5.0).is_ok());
    assert!(Gradient::new(-0.1, 3.0).is_ok());

    for (freq, spread) in [
        (f64::NAN, 3.0),
        (f64::INFINITY, 3.0),
        (0.1, 0.0),
        (0.1, -1.0),
        (0.1, f64::NAN),
    ] {
        let err = Gradient::new(freq, spread).unwrap_err();
        assert!(matches!(err, rainbow::Error::InvalidGradient(_)));
    }
}
