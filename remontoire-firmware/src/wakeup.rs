//! Wake plumbing between esp-hal and the core wake types

use esp_hal::peripherals::LPWR;
use esp_hal::reset::SleepSource;
use esp_hal::rtc_cntl::get_wakeup_cause;

use remontoire_core::WakeCause;

/// Wake cause as reported by the RTC controller.
pub fn cause() -> WakeCause {
    match get_wakeup_cause() {
        SleepSource::Ext0 => WakeCause::Ext0,
        SleepSource::Ext1 => WakeCause::Ext1,
        SleepSource::Timer => WakeCause::Timer,
        SleepSource::TouchPad => WakeCause::Touchpad,
        SleepSource::Ulp => WakeCause::Ulp,
        _ => WakeCause::Undefined,
    }
}

/// Raw EXT1 wake status, one bit per RTC IO channel.
///
/// esp-hal does not expose this register, so it is read from the RTC
/// controller block directly. The latch holds the lines that were high
/// when the wake fired, until the next sleep re-arms EXT1.
pub fn ext1_status(rtc_cntl: &LPWR) -> u64 {
    u64::from(rtc_cntl.ext_wakeup1_status().read().bits())
}
