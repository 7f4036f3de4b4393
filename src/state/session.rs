use crate::catalog;
use crate::error::{Result, WingError};
use crate::models::{Method, UnitSystem};
use crate::nutrition::servings_from_lbs;

/// Batch weight bounds in pounds.
pub const MIN_BATCH_LBS: u32 = 1;
pub const MAX_BATCH_LBS: u32 = 6;

/// Which detail view the session is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPanel {
    Ingredients,
    Steps,
    Timer,
    Nutrition,
}

/// The single mutable record behind the interactive session.
///
/// All mutation goes through setters that clamp or reject, so the batch
/// weight and sauce percentage are always in range.
#[derive(Debug, Clone)]
pub struct Session {
    flavor_key: String,
    method: Method,
    batch_lbs: u32,
    units: UnitSystem,
    sauce_pct: u32,
    panel: DetailPanel,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            flavor_key: catalog::DEFAULT_FLAVOR.to_string(),
            method: Method::Bake,
            batch_lbs: 2,
            units: UnitSystem::Us,
            sauce_pct: 100,
            panel: DetailPanel::Ingredients,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flavor_key(&self) -> &str {
        &self.flavor_key
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn batch_lbs(&self) -> u32 {
        self.batch_lbs
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn panel(&self) -> DetailPanel {
        self.panel
    }

    pub fn sauce_pct(&self) -> u32 {
        self.sauce_pct
    }

    /// Select a flavor, validated against the catalog. An unknown key leaves
    /// the session untouched.
    pub fn set_flavor(&mut self, key: &str) -> Result<()> {
        if catalog::get(key).is_none() {
            return Err(WingError::UnknownFlavor(key.to_string()));
        }
        self.flavor_key = key.to_string();
        Ok(())
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn set_panel(&mut self, panel: DetailPanel) {
        self.panel = panel;
    }

    /// Move the batch weight by one pound, clamped to 1..=6.
    pub fn adjust_lbs(&mut self, delta: i32) {
        let next = self.batch_lbs as i64 + i64::from(delta);
        self.batch_lbs = next.clamp(i64::from(MIN_BATCH_LBS), i64::from(MAX_BATCH_LBS)) as u32;
    }

    /// Set the batch weight directly, clamped to 1..=6.
    pub fn set_lbs(&mut self, lbs: u32) {
        self.batch_lbs = lbs.clamp(MIN_BATCH_LBS, MAX_BATCH_LBS);
    }

    /// Set the sauce-eaten percentage, clamped to 0..=100.
    pub fn set_sauce_pct(&mut self, pct: u32) {
        self.sauce_pct = pct.min(100);
    }

    pub fn toggle_units(&mut self) {
        self.units = self.units.toggled();
    }

    pub fn servings(&self) -> u32 {
        servings_from_lbs(self.batch_lbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Session::new();
        assert_eq!(s.flavor_key(), "mango");
        assert_eq!(s.method(), Method::Bake);
        assert_eq!(s.batch_lbs(), 2);
        assert_eq!(s.units(), UnitSystem::Us);
        assert_eq!(s.sauce_pct(), 100);
        assert_eq!(s.panel(), DetailPanel::Ingredients);
    }

    #[test]
    fn test_setters_drive_accessors() {
        let mut s = Session::new();
        s.set_method(Method::AirFry);
        s.set_panel(DetailPanel::Nutrition);
        s.toggle_units();
        assert_eq!(s.method(), Method::AirFry);
        assert_eq!(s.panel(), DetailPanel::Nutrition);
        assert_eq!(s.units(), UnitSystem::Metric);

        s.toggle_units();
        assert_eq!(s.units(), UnitSystem::Us);
    }

    #[test]
    fn test_lbs_clamped() {
        let mut s = Session::new();
        for _ in 0..10 {
            s.adjust_lbs(1);
        }
        assert_eq!(s.batch_lbs(), MAX_BATCH_LBS);

        for _ in 0..10 {
            s.adjust_lbs(-1);
        }
        assert_eq!(s.batch_lbs(), MIN_BATCH_LBS);

        s.set_lbs(99);
        assert_eq!(s.batch_lbs(), MAX_BATCH_LBS);
        s.set_lbs(0);
        assert_eq!(s.batch_lbs(), MIN_BATCH_LBS);
    }

    #[test]
    fn test_sauce_pct_clamped() {
        let mut s = Session::new();
        s.set_sauce_pct(250);
        assert_eq!(s.sauce_pct(), 100);
        s.set_sauce_pct(40);
        assert_eq!(s.sauce_pct(), 40);
    }

    #[test]
    fn test_unknown_flavor_rejected_without_mutation() {
        let mut s = Session::new();
        let err = s.set_flavor("ghost_pepper").unwrap_err();
        assert!(matches!(err, WingError::UnknownFlavor(_)));
        assert_eq!(s.flavor_key(), "mango");

        s.set_flavor("buffalo").unwrap();
        assert_eq!(s.flavor_key(), "buffalo");
    }

    #[test]
    fn test_servings_follow_batch() {
        let mut s = Session::new();
        assert_eq!(s.servings(), 4);
        s.set_lbs(1);
        assert_eq!(s.servings(), 2);
    }
}
