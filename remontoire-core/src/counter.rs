//! The retained counters and their update rule
//!
//! The two counters are the only state the watch carries across deep-sleep
//! cycles. Every update goes through [`WatchState::advance`], a pure
//! function, so the arithmetic is testable without any hardware in the loop.

use crate::wake::Trigger;

/// Minutes in a 24-hour window; the minute counter wraps here.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Minute counter seeded on the very first power-up.
///
/// One minute short of 23:58, so the power-on cycle itself (which also
/// advances the counter) renders 23:58.
pub const COLD_START_MINUTES: i32 = ((23 * 60) + 58) - 1;

/// The counters retained in always-on memory between wake cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchState {
    /// Wake cycles since first power-up. Diagnostic only, never reset.
    pub boot_count: i32,
    /// Elapsed minutes within the current 24-hour window.
    pub minute_count: i32,
}

impl WatchState {
    /// State seeded on the very first power-up.
    pub const fn cold_start() -> Self {
        Self {
            boot_count: 0,
            minute_count: COLD_START_MINUTES,
        }
    }

    /// Apply one wake cycle and return the new state.
    ///
    /// A reset trigger forces the minute counter to zero. Every other wake
    /// (the advance line, power-on, timer, or an unrecognized trigger)
    /// moves it forward one minute, wrapping at 24 hours. The boot counter
    /// advances unconditionally and wraps at the integer width.
    #[must_use]
    pub fn advance(self, trigger: Option<Trigger>) -> Self {
        let minute_count = match trigger {
            Some(Trigger::Reset) => 0,
            _ => {
                let next = self.minute_count + 1;
                if next >= MINUTES_PER_DAY {
                    0
                } else {
                    next
                }
            }
        };

        Self {
            boot_count: self.boot_count.wrapping_add(1),
            minute_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advance_increments_minute() {
        let state = WatchState {
            boot_count: 4,
            minute_count: 89,
        };
        let next = state.advance(Some(Trigger::Advance));
        assert_eq!(next.minute_count, 90);
        assert_eq!(next.boot_count, 5);
    }

    #[test]
    fn test_advance_wraps_at_midnight() {
        let state = WatchState {
            boot_count: 0,
            minute_count: 1439,
        };
        let next = state.advance(Some(Trigger::Advance));
        assert_eq!(next.minute_count, 0);
    }

    #[test]
    fn test_reset_zeroes_minute_from_any_state() {
        for minute_count in [0, 1, 720, 1439] {
            let state = WatchState {
                boot_count: 10,
                minute_count,
            };
            let next = state.advance(Some(Trigger::Reset));
            assert_eq!(next.minute_count, 0);
            assert_eq!(next.boot_count, 11);
        }
    }

    #[test]
    fn test_unrecognized_wake_behaves_like_advance() {
        let state = WatchState {
            boot_count: 0,
            minute_count: 100,
        };
        let next = state.advance(None);
        assert_eq!(next.minute_count, 101);
    }

    #[test]
    fn test_boot_count_wraps_at_integer_width() {
        let state = WatchState {
            boot_count: i32::MAX,
            minute_count: 0,
        };
        let next = state.advance(Some(Trigger::Advance));
        assert_eq!(next.boot_count, i32::MIN);
    }

    #[test]
    fn test_cold_start_renders_2358_then_2359() {
        // Power-on counts as a cycle: the seed is one minute short of 23:58.
        let powered_on = WatchState::cold_start().advance(None);
        assert_eq!(powered_on.minute_count, (23 * 60) + 58);

        let first_wake = powered_on.advance(Some(Trigger::Advance));
        assert_eq!(first_wake.minute_count, (23 * 60) + 59);

        let second_wake = first_wake.advance(Some(Trigger::Advance));
        assert_eq!(second_wake.minute_count, 0);
    }

    #[test]
    fn test_full_day_returns_to_start() {
        let mut state = WatchState {
            boot_count: 0,
            minute_count: 0,
        };
        for _ in 0..MINUTES_PER_DAY {
            state = state.advance(Some(Trigger::Advance));
        }
        assert_eq!(state.minute_count, 0);
        assert_eq!(state.boot_count, 1440);
    }

    proptest! {
        #[test]
        fn prop_non_reset_wake_is_modular_increment(
            minute_count in 0..MINUTES_PER_DAY,
            boot_count in proptest::num::i32::ANY,
            advance in proptest::bool::ANY,
        ) {
            let trigger = if advance { Some(Trigger::Advance) } else { None };
            let next = WatchState { boot_count, minute_count }.advance(trigger);
            prop_assert_eq!(next.minute_count, (minute_count + 1) % MINUTES_PER_DAY);
            prop_assert_eq!(next.boot_count, boot_count.wrapping_add(1));
        }

        #[test]
        fn prop_reset_wake_always_yields_zero(
            minute_count in 0..MINUTES_PER_DAY,
        ) {
            let next = WatchState { boot_count: 0, minute_count }.advance(Some(Trigger::Reset));
            prop_assert_eq!(next.minute_count, 0);
        }
    }
}
