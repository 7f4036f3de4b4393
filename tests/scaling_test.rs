use wing_lab_rs::models::{UnitSystem, VolumeUnit};
use wing_lab_rs::scaling::{lbs_to_display, scale_quantity, smart_round};

const ALL_UNITS: [VolumeUnit; 4] = [
    VolumeUnit::Tbsp,
    VolumeUnit::Tsp,
    VolumeUnit::Cup,
    VolumeUnit::Clove,
];

const BASE_AMOUNTS: [f64; 8] = [0.0, 0.25, 0.33, 0.5, 0.75, 1.0, 2.0, 3.0];

/// Parse the leading number out of a scaled quantity string.
fn leading_number(s: &str) -> f64 {
    s.split_whitespace()
        .next()
        .and_then(|tok| tok.parse().ok())
        .unwrap_or_else(|| panic!("no leading number in '{}'", s))
}

#[test]
fn test_us_output_parses_to_rounding_grid() {
    for base in BASE_AMOUNTS {
        for unit in ALL_UNITS {
            for lbs in 1..=6 {
                let out = scale_quantity(base, unit, f64::from(lbs), UnitSystem::Us).unwrap();
                let n = leading_number(&out);

                assert!(n >= 0.0, "negative quantity in '{}'", out);
                // Smart rounding only ever emits quarter multiples
                assert_eq!(
                    (n * 4.0).fract(),
                    0.0,
                    "'{}' is not on the quarter grid",
                    out
                );
                // Above the threshold the grid coarsens to halves
                if n > 2.0 {
                    assert_eq!((n * 2.0).fract(), 0.0, "'{}' is not on the half grid", out);
                }
            }
        }
    }
}

#[test]
fn test_metric_output_is_integer_ml() {
    for base in BASE_AMOUNTS {
        for unit in [VolumeUnit::Tbsp, VolumeUnit::Tsp, VolumeUnit::Cup] {
            for lbs in 1..=6 {
                let out = scale_quantity(base, unit, f64::from(lbs), UnitSystem::Metric).unwrap();
                assert!(out.ends_with(" mL"), "expected mL suffix in '{}'", out);
                let n = leading_number(&out);
                assert!(n >= 0.0);
                assert_eq!(n.fract(), 0.0, "'{}' is not whole milliliters", out);
            }
        }
    }
}

#[test]
fn test_conversion_exactness() {
    assert_eq!(lbs_to_display(2, UnitSystem::Metric), "907 g");
    assert_eq!(
        scale_quantity(1.0, VolumeUnit::Tbsp, 2.0, UnitSystem::Metric).unwrap(),
        "15 mL"
    );
    assert_eq!(
        scale_quantity(1.0, VolumeUnit::Tsp, 2.0, UnitSystem::Metric).unwrap(),
        "5 mL"
    );
    assert_eq!(
        scale_quantity(1.0, VolumeUnit::Cup, 2.0, UnitSystem::Metric).unwrap(),
        "240 mL"
    );
}

#[test]
fn test_half_batch_quarters() {
    // 1 lb is half the canonical batch: 0.5 cup -> 0.25 cup
    assert_eq!(
        scale_quantity(0.5, VolumeUnit::Cup, 1.0, UnitSystem::Us).unwrap(),
        "0.25 cup"
    );
    // 0.75 tsp halves to 0.375, which snaps to the quarter grid
    assert_eq!(
        scale_quantity(0.75, VolumeUnit::Tsp, 1.0, UnitSystem::Us).unwrap(),
        "0.5 tsp"
    );
}

#[test]
fn test_triple_batch_halves() {
    // 3x the canonical batch crosses the threshold into half increments:
    // 1.1 tbsp * 3 = 3.3 -> 3.5
    assert_eq!(
        scale_quantity(1.1, VolumeUnit::Tbsp, 6.0, UnitSystem::Us).unwrap(),
        "3.5 tbsp"
    );
}

#[test]
fn test_smart_round_threshold_is_exactly_two() {
    // At the threshold: quarter rounding still applies
    assert_eq!(smart_round(2.0), 2.0);
    // 1.875 is within quarter range: rounds to 2 (1.875 * 4 = 7.5, half-up)
    assert_eq!(smart_round(1.875), 2.0);
    // Just past the threshold: half rounding
    assert_eq!(smart_round(2.25), 2.5);
    assert_eq!(smart_round(2.2), 2.0);
}
