use std::time::{Duration, Instant};

use crate::error::{Result, WingError};

/// Valid countdown range in minutes.
pub const MIN_TIMER_MINUTES: u64 = 1;
pub const MAX_TIMER_MINUTES: u64 = 120;

/// What a poll of the timer observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// No timer is running.
    Idle,
    /// Counting down; remaining time until the deadline.
    Running(Duration),
    /// The deadline passed since the last poll. Reported exactly once.
    Finished,
}

/// A countdown timer driven by an absolute deadline.
///
/// Remaining time is recomputed from the stored deadline on every poll, not
/// decremented, so late or skipped polls stay correct. At most one deadline
/// is active: starting again replaces any running countdown.
#[derive(Debug, Default)]
pub struct CookTimer {
    deadline: Option<Instant>,
}

impl CookTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a countdown, cancelling any running one first.
    pub fn start(&mut self, minutes: u64) -> Result<()> {
        if !(MIN_TIMER_MINUTES..=MAX_TIMER_MINUTES).contains(&minutes) {
            return Err(WingError::InvalidInput(format!(
                "timer minutes must be {}-{}, got {}",
                MIN_TIMER_MINUTES, MAX_TIMER_MINUTES, minutes
            )));
        }
        self.stop();
        self.deadline = Some(Instant::now() + Duration::from_secs(minutes * 60));
        Ok(())
    }

    /// Cancel the countdown. A no-op when nothing is running.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Poll against the wall clock.
    pub fn poll(&mut self) -> TimerStatus {
        self.poll_at(Instant::now())
    }

    /// Poll against an explicit observation time. Once the deadline is
    /// reached, reports `Finished` and self-cancels; later polls are `Idle`.
    pub fn poll_at(&mut self, now: Instant) -> TimerStatus {
        match self.deadline {
            None => TimerStatus::Idle,
            Some(deadline) => {
                if now >= deadline {
                    self.deadline = None;
                    TimerStatus::Finished
                } else {
                    TimerStatus::Running(deadline - now)
                }
            }
        }
    }
}

/// Format remaining time as `m:ss`, rounding seconds up so the readout
/// never shows 0:00 while time remains.
pub fn format_remaining(remaining: Duration) -> String {
    let total_secs = remaining.as_secs_f64().ceil() as u64;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_validates_range() {
        let mut timer = CookTimer::new();
        assert!(timer.start(0).is_err());
        assert!(timer.start(121).is_err());
        assert!(timer.start(1).is_ok());
        assert!(timer.start(120).is_ok());
    }

    #[test]
    fn test_rejected_start_does_not_arm() {
        let mut timer = CookTimer::new();
        assert!(timer.start(500).is_err());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_running_then_finished_once() {
        let mut timer = CookTimer::new();
        timer.start(1).unwrap();
        let now = Instant::now();

        match timer.poll_at(now) {
            TimerStatus::Running(left) => assert!(left <= Duration::from_secs(60)),
            other => panic!("expected Running, got {:?}", other),
        }

        let after = now + Duration::from_secs(61);
        assert_eq!(timer.poll_at(after), TimerStatus::Finished);
        // Finished fires exactly once, then the timer is idle
        assert_eq!(timer.poll_at(after), TimerStatus::Idle);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_restart_replaces_deadline() {
        let mut timer = CookTimer::new();
        timer.start(1).unwrap();
        timer.start(60).unwrap();

        let later = Instant::now() + Duration::from_secs(120);
        // The 1-minute deadline was cancelled; only the 60-minute one counts
        match timer.poll_at(later) {
            TimerStatus::Running(left) => assert!(left > Duration::from_secs(3400)),
            other => panic!("expected Running, got {:?}", other),
        }
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = CookTimer::new();
        timer.start(5).unwrap();
        timer.stop();
        timer.stop();
        assert_eq!(timer.poll(), TimerStatus::Idle);
    }

    #[test]
    fn test_stop_cancels_pending_completion() {
        let mut timer = CookTimer::new();
        timer.start(1).unwrap();
        timer.stop();

        // A stopped timer never reports Finished, even past its deadline
        let later = Instant::now() + Duration::from_secs(3600);
        assert_eq!(timer.poll_at(later), TimerStatus::Idle);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_format_remaining_rounds_up() {
        assert_eq!(format_remaining(Duration::from_secs(90)), "1:30");
        assert_eq!(format_remaining(Duration::from_millis(500)), "0:01");
        assert_eq!(format_remaining(Duration::from_secs(0)), "0:00");
        assert_eq!(format_remaining(Duration::from_secs(3600)), "60:00");
    }
}
