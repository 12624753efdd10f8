//! Wake cause reporting and EXT1 trigger decoding
//!
//! Both wake lines are bundled into a single EXT1 alarm (wake on any line
//! high); the status register then says which line fired. The cause
//! enumeration is informational, the trigger decode drives the counters.

/// Why the chip left deep sleep, as reported by the wake logic.
///
/// Logged at the start of every cycle. Only an EXT1 wake carries a
/// meaningful status word for the trigger decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeCause {
    /// External signal through RTC_IO (single pin)
    Ext0,
    /// External signal through RTC_CNTL (pin group)
    Ext1,
    /// RTC timer expired
    Timer,
    /// Touch pad
    Touchpad,
    /// ULP co-processor
    Ulp,
    /// Not a deep-sleep wake: power-on, external reset, brown-out
    Undefined,
}

impl WakeCause {
    /// Human-readable description for the diagnostic console.
    pub fn description(&self) -> &'static str {
        match self {
            WakeCause::Ext0 => "external signal using RTC_IO",
            WakeCause::Ext1 => "external signal using RTC_CNTL",
            WakeCause::Timer => "timer",
            WakeCause::Touchpad => "touchpad",
            WakeCause::Ulp => "ULP program",
            WakeCause::Undefined => "not a deep sleep wake",
        }
    }
}

/// An EXT1 status word that does not name exactly one wake line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeStatusError {
    /// The status register was zero: EXT1 did not cause this wake, or the
    /// status was cleared before it could be read.
    NoBitSet,
    /// More than one wake line was high when the status latched.
    MultipleBitsSet(u64),
}

/// Index of the single set bit in an EXT1 wake status word.
///
/// The register latches one bit per RTC IO channel. A bit scan with
/// explicit validation replaces the floating-point base-2 logarithm such
/// sketches tend to use, which silently returns nonsense for zero-bit or
/// multi-bit words.
pub fn wakeup_bit(status: u64) -> Result<u8, WakeStatusError> {
    match status.count_ones() {
        0 => Err(WakeStatusError::NoBitSet),
        1 => Ok(status.trailing_zeros() as u8),
        _ => Err(WakeStatusError::MultipleBitsSet(status)),
    }
}

/// What a wake line means to the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Advance the minute counter by one
    Advance,
    /// Reset the minute counter to zero
    Reset,
}

/// Maps EXT1 status bits to triggers.
///
/// The bits are RTC IO channel indices, not GPIO numbers; the board module
/// supplies the mapping that matches its wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerMap {
    /// Status bit of the minute-increment line
    pub advance_bit: u8,
    /// Status bit of the reset-to-zero line
    pub reset_bit: u8,
}

impl TriggerMap {
    /// Decode a status word into a trigger.
    ///
    /// `Ok(None)` means the wake came from a valid but unconfigured line.
    /// Callers treat both that and `Err` as a plain non-reset wake: a
    /// glitched status register must never zero the watch.
    pub fn trigger_for(&self, status: u64) -> Result<Option<Trigger>, WakeStatusError> {
        let bit = wakeup_bit(status)?;
        if bit == self.advance_bit {
            Ok(Some(Trigger::Advance))
        } else if bit == self.reset_bit {
            Ok(Some(Trigger::Reset))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MAP: TriggerMap = TriggerMap {
        advance_bit: 9,
        reset_bit: 8,
    };

    #[test]
    fn test_wakeup_bit_single_bit() {
        assert_eq!(wakeup_bit(1 << 0), Ok(0));
        assert_eq!(wakeup_bit(1 << 8), Ok(8));
        assert_eq!(wakeup_bit(1 << 17), Ok(17));
    }

    #[test]
    fn test_wakeup_bit_zero_is_error() {
        assert_eq!(wakeup_bit(0), Err(WakeStatusError::NoBitSet));
    }

    #[test]
    fn test_wakeup_bit_multiple_bits_is_error() {
        let status = (1 << 8) | (1 << 9);
        assert_eq!(
            wakeup_bit(status),
            Err(WakeStatusError::MultipleBitsSet(status))
        );
    }

    #[test]
    fn test_trigger_for_configured_lines() {
        assert_eq!(MAP.trigger_for(1 << 9), Ok(Some(Trigger::Advance)));
        assert_eq!(MAP.trigger_for(1 << 8), Ok(Some(Trigger::Reset)));
    }

    #[test]
    fn test_trigger_for_unconfigured_line() {
        assert_eq!(MAP.trigger_for(1 << 5), Ok(None));
    }

    #[test]
    fn test_trigger_for_bad_status() {
        assert_eq!(MAP.trigger_for(0), Err(WakeStatusError::NoBitSet));
        assert!(MAP.trigger_for(0b11 << 8).is_err());
    }

    proptest! {
        #[test]
        fn prop_single_bit_round_trips(bit in 0u8..18) {
            // EXT1 has 18 RTC IO channels on the ESP32.
            prop_assert_eq!(wakeup_bit(1u64 << bit), Ok(bit));
        }

        #[test]
        fn prop_two_distinct_bits_never_decode(a in 0u8..18, b in 0u8..18) {
            prop_assume!(a != b);
            let status = (1u64 << a) | (1u64 << b);
            prop_assert_eq!(
                wakeup_bit(status),
                Err(WakeStatusError::MultipleBitsSet(status))
            );
        }
    }
}
