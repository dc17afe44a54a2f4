use crate::stellar_color::StellarColor;

fn channels(color: &StellarColor) -> [f64; 4] {
    [color.r, color.g, color.b, color.a]
}

#[test]
fn stellar_color_from_temperature() {
    // Hot O-type star (~30000K) - should be blue-white
    let hot = StellarColor::from_temperature(30000.0);
    assert!(hot.b > hot.r, "Hot stars should have more blue than red");

    // Sun-like G-type star (~5800K) - should be yellowish-white
    let solar = StellarColor::from_temperature(5800.0);
    assert!(solar.r > solar.b, "Solar-type should have more red than blue");
    assert!(solar.g > solar.b, "Solar-type should have more green than blue");

    // Cool M-type star (~3000K) - should be reddish
    let cool = StellarColor::from_temperature(3000.0);
    assert!(cool.r > cool.b, "Cool stars should have more red than blue");
    assert!(cool.r > cool.g, "Cool stars should have more red than green");

    assert!(
        hot.b / hot.r > solar.b / solar.r,
        "Blue/red ratio should increase with temperature"
    );
}

#[test]
fn channels_stay_in_unit_interval() {
    let mut t = 500.0;
    while t < 100_000.0 {
        let color = StellarColor::from_temperature(t);
        for c in channels(&color) {
            assert!((0.0..=1.0).contains(&c), "Channel {} out of range at {}K", c, t);
        }
        t *= 1.05;
    }
}

#[test]
fn blue_cutoff_and_saturation() {
    assert_eq!(StellarColor::from_temperature(1000.0).b, 0.0);
    assert_eq!(StellarColor::from_temperature(1999.0).b, 0.0);
    assert_eq!(StellarColor::from_temperature(6501.0).b, 1.0);
    assert_eq!(StellarColor::from_temperature(7000.0).b, 1.0);
}

#[test]
fn red_saturates_below_threshold() {
    assert_eq!(StellarColor::from_temperature(5500.0).r, 1.0);
    assert_eq!(StellarColor::from_temperature(2500.0).r, 1.0);
    assert!(StellarColor::from_temperature(12000.0).r < 1.0);
}

#[test]
fn blue_log_branch_is_between_bounds() {
    let b = StellarColor::from_temperature(4000.0).b;
    assert!(b > 0.0 && b < 1.0, "4000K blue channel {} should be partial", b);
}

#[test]
fn alpha_is_opaque() {
    for t in [1500.0, 4500.0, 6600.0, 25000.0] {
        assert_eq!(StellarColor::from_temperature(t).a, 1.0);
    }
}

#[test]
fn stellar_color_hex_roundtrip() {
    let color = StellarColor::from_hex("#FF8040").unwrap();
    assert_eq!(color.to_hex(), "#FF8040");

    assert_eq!(StellarColor::opaque(0.0, 0.0, 0.0).to_hex(), "#000000");
    assert_eq!(StellarColor::WHITE.to_hex(), "#FFFFFF");

    // Parses without the leading #
    assert_eq!(StellarColor::from_hex("FF8040").unwrap(), color);
}

#[test]
fn stellar_color_hex_rejects_garbage() {
    assert!(StellarColor::from_hex("#FF80").is_err());
    assert!(StellarColor::from_hex("#GG8040").is_err());
}

#[test]
fn gpu_channels_match() {
    let color = StellarColor::opaque(0.25, 0.5, 0.75);
    assert_eq!(color.to_rgba_f32(), [0.25, 0.5, 0.75, 1.0]);
}
