mod checks;
mod session;

pub use checks::{CHECKS_PREFIX, CheckStore, StepChecks};
pub use session::{DetailPanel, MAX_BATCH_LBS, MIN_BATCH_LBS, Session};
