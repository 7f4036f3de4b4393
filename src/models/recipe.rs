use std::fmt;

/// Cooking method for a wing batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Bake,
    AirFry,
}

impl Method {
    /// Short key used in persistence keys and CLI args.
    pub fn key(self) -> &'static str {
        match self {
            Method::Bake => "bake",
            Method::AirFry => "airfry",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Method::Bake => "Oven",
            Method::AirFry => "Air Fryer",
        }
    }

    pub fn parse(s: &str) -> Option<Method> {
        match s.to_lowercase().as_str() {
            "bake" | "oven" => Some(Method::Bake),
            "airfry" | "air-fry" | "air" => Some(Method::AirFry),
            _ => None,
        }
    }
}

/// Measurement system for ingredient display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    Us,
    Metric,
}

impl UnitSystem {
    pub fn key(self) -> &'static str {
        match self {
            UnitSystem::Us => "US",
            UnitSystem::Metric => "Metric",
        }
    }

    pub fn toggled(self) -> UnitSystem {
        match self {
            UnitSystem::Us => UnitSystem::Metric,
            UnitSystem::Metric => UnitSystem::Us,
        }
    }
}

/// A volume unit recognized by the quantity scaler.
///
/// Tbsp, tsp, and cup convert to milliliters in metric display; clove has no
/// metric conversion and keeps its label in both systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    Tbsp,
    Tsp,
    Cup,
    Clove,
}

impl VolumeUnit {
    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::Tbsp => "tbsp",
            VolumeUnit::Tsp => "tsp",
            VolumeUnit::Cup => "cup",
            VolumeUnit::Clove => "cloves",
        }
    }

    /// Milliliters per one unit, when a metric conversion is defined.
    pub fn ml_per_unit(self) -> Option<f64> {
        match self {
            VolumeUnit::Tbsp => Some(15.0),
            VolumeUnit::Tsp => Some(5.0),
            VolumeUnit::Cup => Some(240.0),
            VolumeUnit::Clove => None,
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ingredient amount, defined for the canonical 2-lb batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// A numeric quantity with a unit; scaled to the batch weight.
    Scalable { qty: f64, unit: VolumeUnit },
    /// The raw wings themselves; rendered as the whole batch weight.
    BatchWeight,
    /// Opaque text such as "to taste"; never scaled, emitted verbatim.
    Freeform(&'static str),
}

/// One entry in an ingredient list: a section heading or an item.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientEntry {
    Section(&'static str),
    Item {
        name: &'static str,
        amount: Amount,
        note: Option<&'static str>,
    },
}

impl IngredientEntry {
    pub fn section(label: &'static str) -> Self {
        IngredientEntry::Section(label)
    }

    pub fn item(name: &'static str, amount: Amount) -> Self {
        IngredientEntry::Item {
            name,
            amount,
            note: None,
        }
    }

    pub fn item_note(name: &'static str, amount: Amount, note: &'static str) -> Self {
        IngredientEntry::Item {
            name,
            amount,
            note: Some(note),
        }
    }
}

/// One cooking step, with an optional hint.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub text: &'static str,
    pub note: Option<&'static str>,
}

impl Step {
    pub fn new(text: &'static str) -> Self {
        Self { text, note: None }
    }

    pub fn with_note(text: &'static str, note: &'static str) -> Self {
        Self {
            text,
            note: Some(note),
        }
    }
}

/// An immutable recipe: metadata plus generator functions for its
/// ingredient and step lists.
///
/// Generators return amount templates defined for the canonical 2-lb batch;
/// the scaler resolves them to display strings for the selected batch weight
/// and unit system.
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub time_bake: &'static str,
    pub time_airfry: &'static str,
    pub skill: &'static str,
    pub ingredients: fn() -> Vec<IngredientEntry>,
    pub steps: fn(Method) -> Vec<Step>,
}

impl Recipe {
    /// Estimated cook time for the given method.
    pub fn time_for(&self, method: Method) -> &'static str {
        match method {
            Method::Bake => self.time_bake,
            Method::AirFry => self.time_airfry,
        }
    }
}
