use rand::{rngs::StdRng, Rng, SeedableRng};
use swatchbook::{
    classify, estimate_mixture, generate_shades, nearest_name, shades_of, ColorError, Family, NamedColor, Pigment,
    Rgb, ShadeStep, Temperature, CATALOG,
};

const ROUNDS: usize = 2000;

fn random_colors(seed: u64) -> impl Iterator<Item = Rgb> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..ROUNDS).map(move |_| Rgb::new(rng.gen(), rng.gen(), rng.gen()))
}

fn brute_force_nearest(rgb: Rgb) -> NamedColor {
    let mut best = CATALOG[0];

    for entry in CATALOG.iter().skip(1) {
        if entry.rgb().distance(rgb) < best.rgb().distance(rgb) {
            best = *entry;
        }
    }

    best
}

fn brightness(rgb: Rgb) -> u32 {
    rgb.r as u32 + rgb.g as u32 + rgb.b as u32
}

#[test]
fn crimson_scenario() {
    let rgb = Rgb::new(230, 57, 70);
    assert_eq!(nearest_name(rgb), "Crimson");

    let details = classify("#E63946").unwrap();
    assert_eq!(details.family(), Family::Red);
    assert_eq!(details.temperature(), Temperature::Warm);

    let ramp = generate_shades("#E63946").unwrap();
    assert_eq!(ramp.len(), 9);
    assert!(brightness(ramp[0].rgb()) > brightness(ramp[8].rgb()));
    assert_eq!(ramp[4].hex(), "#E63946");
    assert_eq!(ramp[4].label(), "Base");
    assert_eq!(ramp[4].percentage(), 100);
}

#[test]
fn white_mixture_follows_the_formula() {
    let mixture = estimate_mixture(Rgb::WHITE);

    assert_eq!(mixture.percentage_of(Pigment::White), Some(23));
    assert_eq!(mixture.percentage_of(Pigment::Red), Some(26));
    assert_eq!(mixture.percentage_of(Pigment::Green), Some(26));
    assert_eq!(mixture.percentage_of(Pigment::Blue), Some(26));
    assert_eq!(mixture.percentage_of(Pigment::Yellow), None);
}

#[test]
fn nearest_name_matches_brute_force() {
    for rgb in random_colors(0x5eed) {
        let expected = brute_force_nearest(rgb);
        assert_eq!(nearest_name(rgb), expected.name(), "{}", rgb);
        assert!(CATALOG.iter().any(|entry| entry.name() == nearest_name(rgb)));
    }
}

#[test]
fn classify_is_deterministic() {
    for rgb in random_colors(7).take(200) {
        let hex = rgb.to_hex();
        let first = classify(&hex).unwrap();
        let second = classify(&hex.to_lowercase()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.temperature(), first.family().temperature());
    }
}

#[test]
fn mixture_percentages_sum_to_about_100() {
    for rgb in random_colors(42) {
        let mixture = estimate_mixture(rgb);

        // every color is bright, dark or has a channel above 50
        assert!(!mixture.is_empty(), "{}", rgb);
        assert!(mixture.percentages().all(|p| p <= 100));
        assert_eq!(mixture.colors().count(), mixture.percentages().count());

        // each entry rounds independently, which never loses more than one point
        let total = mixture.total();
        assert!((99..=102).contains(&total), "{} sums to {}", rgb, total);
    }
}

#[test]
fn pale_grays_can_sum_to_102() {
    // 33, 33, 33 and 21 over 120 give 27.5 three times and 17.5, all rounded up
    let mixture = estimate_mixture(Rgb::new(236, 239, 239));

    assert_eq!(mixture.percentages().collect::<Vec<_>>(), [28, 28, 28, 18]);
    assert_eq!(mixture.total(), 102);
}

#[test]
fn shade_ramps_go_from_light_to_dark() {
    for rgb in random_colors(1234) {
        let ramp = shades_of(rgb);

        assert_eq!(ramp[4].rgb(), rgb);
        assert_eq!(ramp[4].step(), ShadeStep::BASE);

        for pair in ramp.windows(2) {
            let (lighter, darker) = (pair[0].rgb(), pair[1].rgb());

            assert!(lighter.r >= darker.r, "{} -> {}", lighter, darker);
            assert!(lighter.g >= darker.g, "{} -> {}", lighter, darker);
            assert!(lighter.b >= darker.b, "{} -> {}", lighter, darker);
        }
    }
}

#[test]
fn round_trip_through_the_ramp() {
    for rgb in random_colors(99).take(200) {
        let hex = rgb.to_hex().to_lowercase();
        let ramp = generate_shades(&hex).unwrap();

        assert!(ramp[4].hex().eq_ignore_ascii_case(&hex));
        assert_eq!(ramp[4].hex(), rgb.to_hex());
    }
}

#[test]
fn malformed_hex_is_rejected_everywhere() {
    for bad in ["", "#", "FFF", "#GGGGGG", "#1234567", "12 456"] {
        assert!(matches!(Rgb::from_hex(bad), Err(ColorError::InvalidColorFormat { .. })), "{:?}", bad);
        assert!(classify(bad).is_err(), "{:?}", bad);
        assert!(generate_shades(bad).is_err(), "{:?}", bad);
    }
}
