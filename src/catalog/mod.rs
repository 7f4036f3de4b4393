mod flavors;

pub use flavors::{DEFAULT_FLAVOR, FLAVOR_ORDER, all, get};
