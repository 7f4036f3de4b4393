use crate::error::{Result, WingError};
use crate::models::{Amount, IngredientEntry, UnitSystem, VolumeUnit};

/// Grams per avoirdupois pound.
pub const GRAMS_PER_LB: f64 = 453.592;

/// Canonical batch weight that all base ingredient amounts are defined for.
pub const CANONICAL_BATCH_LBS: f64 = 2.0;

/// Round a scaled quantity to a kitchen-friendly increment.
///
/// Quarter increments at or below 2, half increments above. Small amounts
/// (teaspoons) get fine granularity, larger ones (cups) get coarser, which
/// matches what a measuring set can actually do. The threshold of exactly 2
/// is preserved as observed.
pub fn smart_round(n: f64) -> f64 {
    if n <= 2.0 {
        (n * 4.0).round() / 4.0
    } else {
        (n * 2.0).round() / 2.0
    }
}

/// Format a quantity without trailing zeros: `0.75`, `1.5`, `2`.
///
/// Quarter and half increments are exact in binary, so the shortest `f64`
/// display representation is already the right string.
pub fn format_qty(n: f64) -> String {
    format!("{}", n)
}

/// Scale a base amount (defined for a 2-lb batch) to the target batch weight
/// and render it for the target unit system.
///
/// The caller is expected to have clamped `lbs` to the valid batch range;
/// non-finite or non-positive weights are rejected rather than silently
/// producing nonsense.
pub fn scale_quantity(
    base: f64,
    unit: VolumeUnit,
    lbs: f64,
    units: UnitSystem,
) -> Result<String> {
    if !lbs.is_finite() || lbs < 0.0 {
        return Err(WingError::InvalidInput(format!(
            "batch weight must be a non-negative number, got {}",
            lbs
        )));
    }

    let factor = lbs / CANONICAL_BATCH_LBS;
    let rounded = smart_round(base * factor);

    if units == UnitSystem::Metric {
        if let Some(ml_per_unit) = unit.ml_per_unit() {
            let ml = (rounded * ml_per_unit).round();
            return Ok(format!("{} mL", ml));
        }
    }

    Ok(format!("{} {}", format_qty(rounded), unit.label()))
}

/// Render the whole-recipe batch weight: `"2 lb"` or `"907 g"`.
///
/// Exact conversion, distinct from per-ingredient smart rounding.
pub fn lbs_to_display(lbs: u32, units: UnitSystem) -> String {
    match units {
        UnitSystem::Us => format!("{} lb", lbs),
        UnitSystem::Metric => {
            let grams = (f64::from(lbs) * GRAMS_PER_LB).round();
            format!("{} g", grams)
        }
    }
}

/// An ingredient list entry with its amount resolved to a display string.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaledLine {
    Section(&'static str),
    Item {
        amount: String,
        name: &'static str,
        note: Option<&'static str>,
    },
}

/// Resolve a recipe's ingredient template to display lines for the selected
/// batch weight and unit system.
pub fn scaled_lines(
    entries: &[IngredientEntry],
    lbs: u32,
    units: UnitSystem,
) -> Result<Vec<ScaledLine>> {
    entries
        .iter()
        .map(|entry| match entry {
            IngredientEntry::Section(label) => Ok(ScaledLine::Section(label)),
            IngredientEntry::Item { name, amount, note } => {
                let amount = match amount {
                    Amount::Scalable { qty, unit } => {
                        scale_quantity(*qty, *unit, f64::from(lbs), units)?
                    }
                    Amount::BatchWeight => lbs_to_display(lbs, units),
                    Amount::Freeform(text) => (*text).to_string(),
                };
                Ok(ScaledLine::Item {
                    amount,
                    name,
                    note: *note,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_round_quarter_below_threshold() {
        assert_eq!(smart_round(0.33), 0.25);
        assert_eq!(smart_round(0.75), 0.75);
        assert_eq!(smart_round(1.9), 2.0);
        assert_eq!(smart_round(2.0), 2.0);
    }

    #[test]
    fn test_smart_round_half_above_threshold() {
        assert_eq!(smart_round(2.2), 2.0);
        assert_eq!(smart_round(2.3), 2.5);
        assert_eq!(smart_round(4.6), 4.5);
    }

    #[test]
    fn test_format_qty_trims_zeros() {
        assert_eq!(format_qty(2.0), "2");
        assert_eq!(format_qty(0.75), "0.75");
        assert_eq!(format_qty(1.5), "1.5");
        assert_eq!(format_qty(0.0), "0");
    }

    #[test]
    fn test_scale_us_identity_at_canonical_batch() {
        let s = scale_quantity(1.0, VolumeUnit::Tbsp, 2.0, UnitSystem::Us).unwrap();
        assert_eq!(s, "1 tbsp");
    }

    #[test]
    fn test_scale_metric_conversion() {
        let s = scale_quantity(1.0, VolumeUnit::Tbsp, 2.0, UnitSystem::Metric).unwrap();
        assert_eq!(s, "15 mL");

        let s = scale_quantity(0.5, VolumeUnit::Cup, 2.0, UnitSystem::Metric).unwrap();
        assert_eq!(s, "120 mL");

        let s = scale_quantity(1.0, VolumeUnit::Tsp, 6.0, UnitSystem::Metric).unwrap();
        // factor 3, quarter-round not needed: 3 > 2 so half-round, 3 * 5 mL
        assert_eq!(s, "15 mL");
    }

    #[test]
    fn test_cloves_scale_but_keep_label() {
        let s = scale_quantity(2.0, VolumeUnit::Clove, 3.0, UnitSystem::Metric).unwrap();
        assert_eq!(s, "3 cloves");
        let s = scale_quantity(2.0, VolumeUnit::Clove, 3.0, UnitSystem::Us).unwrap();
        assert_eq!(s, "3 cloves");
    }

    #[test]
    fn test_zero_base_amount_still_formats() {
        let s = scale_quantity(0.0, VolumeUnit::Tsp, 4.0, UnitSystem::Us).unwrap();
        assert_eq!(s, "0 tsp");
        let s = scale_quantity(0.0, VolumeUnit::Tsp, 4.0, UnitSystem::Metric).unwrap();
        assert_eq!(s, "0 mL");
    }

    #[test]
    fn test_invalid_batch_weight_rejected() {
        assert!(scale_quantity(1.0, VolumeUnit::Tbsp, f64::NAN, UnitSystem::Us).is_err());
        assert!(scale_quantity(1.0, VolumeUnit::Tbsp, -1.0, UnitSystem::Us).is_err());
        assert!(scale_quantity(1.0, VolumeUnit::Tbsp, f64::INFINITY, UnitSystem::Us).is_err());
    }

    #[test]
    fn test_lbs_to_display_exact() {
        assert_eq!(lbs_to_display(2, UnitSystem::Us), "2 lb");
        assert_eq!(lbs_to_display(2, UnitSystem::Metric), "907 g");
        assert_eq!(lbs_to_display(1, UnitSystem::Metric), "454 g");
    }

    #[test]
    fn test_scaled_lines_resolves_all_variants() {
        use crate::models::IngredientEntry as E;

        let entries = vec![
            E::section("Base wings"),
            E::item("Chicken wings", Amount::BatchWeight),
            E::item(
                "Kosher salt",
                Amount::Scalable {
                    qty: 1.0,
                    unit: VolumeUnit::Tsp,
                },
            ),
            E::item_note("Sesame seeds", Amount::Freeform("to taste"), "Worth it."),
        ];

        let lines = scaled_lines(&entries, 4, UnitSystem::Us).unwrap();
        assert_eq!(lines[0], ScaledLine::Section("Base wings"));
        assert_eq!(
            lines[1],
            ScaledLine::Item {
                amount: "4 lb".to_string(),
                name: "Chicken wings",
                note: None,
            }
        );
        assert_eq!(
            lines[2],
            ScaledLine::Item {
                amount: "2 tsp".to_string(),
                name: "Kosher salt",
                note: None,
            }
        );
        // Freeform amounts pass through untouched in both systems
        assert_eq!(
            lines[3],
            ScaledLine::Item {
                amount: "to taste".to_string(),
                name: "Sesame seeds",
                note: Some("Worth it."),
            }
        );
    }
}
