//! Countdown timer
//!
//! Each question runs under a [`Countdown`] bound to its time limit. The
//! countdown itself knows nothing about wall-clock time: the game schedules
//! one-second alarms and calls [`Countdown::tick`] when they fire.

use serde::{Deserialize, Serialize};

use crate::constants::timer::{CRITICAL_FRACTION, LOW_FRACTION};

/// The phase of a countdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    /// Counting down
    #[default]
    Running,
    /// Suspended with the remaining time retained
    Paused,
    /// Reached zero; terminal until reset
    Expired,
}

/// Emitted exactly once when a countdown reaches zero
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expired;

/// Urgency band derived from the remaining fraction of time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerBand {
    /// At least 60% of the time remains
    Plenty,
    /// Less than 60% remains
    Low,
    /// Less than 30% remains
    Critical,
}

/// A per-question countdown in whole seconds
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Seconds the countdown started from
    time_limit: u32,
    /// Seconds remaining, never negative
    time_left: u32,
    /// Current phase
    state: TimerState,
}

impl Countdown {
    /// Creates a running countdown starting at `time_limit` seconds
    pub fn new(time_limit: u32) -> Self {
        Self {
            time_limit,
            time_left: time_limit,
            state: TimerState::Running,
        }
    }

    /// Rebinds the countdown to a new limit and starts it again
    pub fn reset(&mut self, time_limit: u32) {
        *self = Self::new(time_limit);
    }

    /// Advances the countdown by one second
    ///
    /// Does nothing unless running.
    ///
    /// # Returns
    ///
    /// `Some(Expired)` on the tick that reaches zero, `None` otherwise
    pub fn tick(&mut self) -> Option<Expired> {
        if self.state != TimerState::Running {
            return None;
        }

        self.time_left = self.time_left.saturating_sub(1);

        if self.time_left == 0 {
            self.state = TimerState::Expired;
            Some(Expired)
        } else {
            None
        }
    }

    /// Suspends a running countdown
    ///
    /// # Returns
    ///
    /// `true` if the countdown was running
    pub fn pause(&mut self) -> bool {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
            true
        } else {
            false
        }
    }

    /// Resumes a paused countdown from the retained time
    ///
    /// # Returns
    ///
    /// `true` if the countdown was paused
    pub fn resume(&mut self) -> bool {
        if self.state == TimerState::Paused {
            self.state = TimerState::Running;
            true
        } else {
            false
        }
    }

    /// Seconds remaining
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Seconds the countdown started from
    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    /// Current phase
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Checks whether the countdown is ticking
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Checks whether the countdown has reached zero
    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }

    /// Fraction of time remaining, clamped to `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.time_limit == 0 {
            return 0.;
        }
        (f64::from(self.time_left) / f64::from(self.time_limit)).clamp(0., 1.)
    }

    /// Urgency band for the remaining time
    pub fn band(&self) -> TimerBand {
        let left = f64::from(self.time_left);
        let limit = f64::from(self.time_limit);

        if left < limit * CRITICAL_FRACTION {
            TimerBand::Critical
        } else if left < limit * LOW_FRACTION {
            TimerBand::Low
        } else {
            TimerBand::Plenty
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_starts_running_at_limit() {
        let countdown = Countdown::new(30);
        assert_eq!(countdown.time_left(), 30);
        assert_eq!(countdown.state(), TimerState::Running);
        assert!((countdown.progress() - 1.).abs() < f64::EPSILON);
    }

    #[test]
    fn test_countdown_time_left_after_ticks() {
        for ticks in 0..15 {
            let mut countdown = Countdown::new(10);
            for _ in 0..ticks {
                countdown.tick();
            }
            assert_eq!(countdown.time_left(), 10u32.saturating_sub(ticks));
        }
    }

    #[test]
    fn test_countdown_expires_exactly_once() {
        let mut countdown = Countdown::new(3);
        let expirations = (0..10).filter_map(|_| countdown.tick()).count();

        assert_eq!(expirations, 1);
        assert!(countdown.is_expired());
        assert_eq!(countdown.time_left(), 0);
    }

    #[test]
    fn test_countdown_pause_retains_time() {
        let mut countdown = Countdown::new(10);
        countdown.tick();
        assert!(countdown.pause());

        for _ in 0..5 {
            assert_eq!(countdown.tick(), None);
        }
        assert_eq!(countdown.time_left(), 9);

        assert!(countdown.resume());
        countdown.tick();
        assert_eq!(countdown.time_left(), 8);
    }

    #[test]
    fn test_countdown_pause_resume_only_from_matching_state() {
        let mut countdown = Countdown::new(1);
        assert!(!countdown.resume());
        countdown.tick();
        assert!(!countdown.pause());
        assert!(!countdown.resume());
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_countdown_reset_restarts() {
        let mut countdown = Countdown::new(2);
        countdown.tick();
        countdown.tick();
        assert!(countdown.is_expired());

        countdown.reset(20);
        assert_eq!(countdown.time_left(), 20);
        assert_eq!(countdown.time_limit(), 20);
        assert!(countdown.is_running());
    }

    #[test]
    fn test_countdown_zero_limit() {
        let mut countdown = Countdown::new(0);
        assert!(countdown.progress().abs() < f64::EPSILON);
        assert_eq!(countdown.tick(), Some(Expired));
        assert_eq!(countdown.tick(), None);
    }

    #[test]
    fn test_countdown_bands() {
        let mut countdown = Countdown::new(10);
        assert_eq!(countdown.band(), TimerBand::Plenty);

        for _ in 0..4 {
            countdown.tick();
        }
        // 6 of 10 left is not below 60%
        assert_eq!(countdown.band(), TimerBand::Plenty);

        countdown.tick();
        assert_eq!(countdown.band(), TimerBand::Low);

        for _ in 0..3 {
            countdown.tick();
        }
        assert_eq!(countdown.band(), TimerBand::Critical);
    }
}
