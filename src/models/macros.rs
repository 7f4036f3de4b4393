use std::ops::{Add, Div, Mul};

/// An estimated macro-nutrient breakdown.
///
/// Attached to a reference quantity (per 100 g of raw wing meat, or per one
/// tablespoon of a sauce ingredient) and composed by pointwise addition and
/// scalar multiplication. `Default` is the zero profile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacroProfile {
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl MacroProfile {
    pub const fn new(kcal: f64, protein_g: f64, fat_g: f64) -> Self {
        Self {
            kcal,
            protein_g,
            fat_g,
        }
    }

    /// The zero profile, used for missing or unknown ingredient data.
    pub const ZERO: MacroProfile = MacroProfile::new(0.0, 0.0, 0.0);
}

impl Add for MacroProfile {
    type Output = MacroProfile;

    fn add(self, rhs: MacroProfile) -> MacroProfile {
        MacroProfile {
            kcal: self.kcal + rhs.kcal,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl Mul<f64> for MacroProfile {
    type Output = MacroProfile;

    fn mul(self, factor: f64) -> MacroProfile {
        MacroProfile {
            kcal: self.kcal * factor,
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
        }
    }
}

impl Div<f64> for MacroProfile {
    type Output = MacroProfile;

    fn div(self, divisor: f64) -> MacroProfile {
        MacroProfile {
            kcal: self.kcal / divisor,
            protein_g: self.protein_g / divisor,
            fat_g: self.fat_g / divisor,
        }
    }
}
