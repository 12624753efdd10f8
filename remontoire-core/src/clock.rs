//! Time-of-day derivation and formatting
//!
//! The display string is `HH:MI`, both fields zero-padded to two digits.
//! Formatting is a pure function of the minute counter.

use core::fmt;

use crate::counter::MINUTES_PER_DAY;

/// Wall-clock time derived from the minute counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// Hours, 0-23
    pub hours: u8,
    /// Minutes, 0-59
    pub minutes: u8,
}

impl TimeOfDay {
    /// Split a minute count in `0..1440` into hours and minutes.
    pub fn from_minute_count(minute_count: i32) -> Self {
        debug_assert!((0..MINUTES_PER_DAY).contains(&minute_count));
        Self {
            hours: (minute_count / 60) as u8,
            minutes: (minute_count % 60) as u8,
        }
    }

    /// The `HH:MI` display string.
    pub fn hhmm(&self) -> heapless::String<5> {
        use core::fmt::Write;

        let mut out = heapless::String::new();
        // "HH:MI" fills the capacity exactly; the write cannot fail.
        let _ = write!(out, "{}", self);
        out
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_midnight() {
        assert_eq!(TimeOfDay::from_minute_count(0).hhmm(), "00:00");
    }

    #[test]
    fn test_last_minute_of_day() {
        assert_eq!(TimeOfDay::from_minute_count(1439).hhmm(), "23:59");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(TimeOfDay::from_minute_count(90).hhmm(), "01:30");
        assert_eq!(TimeOfDay::from_minute_count(59).hhmm(), "00:59");
        assert_eq!(TimeOfDay::from_minute_count(600).hhmm(), "10:00");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let time = TimeOfDay::from_minute_count(754);
        assert_eq!(time.hhmm(), time.hhmm());
    }

    #[test]
    fn test_display_matches_hhmm() {
        use core::fmt::Write;

        let time = TimeOfDay::from_minute_count(1234);
        let mut via_display: heapless::String<5> = heapless::String::new();
        let _ = write!(via_display, "{}", time);
        assert_eq!(via_display, time.hhmm());
    }

    proptest! {
        #[test]
        fn prop_format_shape(minute_count in 0..MINUTES_PER_DAY) {
            let time = TimeOfDay::from_minute_count(minute_count);
            let text = time.hhmm();
            prop_assert_eq!(text.len(), 5);
            prop_assert_eq!(text.as_bytes()[2], b':');
            prop_assert!(time.hours < 24);
            prop_assert!(time.minutes < 60);
        }
    }
}
