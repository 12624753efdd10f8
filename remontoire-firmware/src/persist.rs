//! RTC-retained watch state
//!
//! The two counters live in RTC fast memory so they survive deep sleep;
//! the sleep configuration keeps that power domain up. Cold boots overwrite
//! them with the cold-start seed before the first read.

use esp_hal::macros::ram;

use remontoire_core::WatchState;

#[ram(rtc_fast)]
static mut BOOT_COUNT: i32 = 0;

#[ram(rtc_fast)]
static mut MINUTE_COUNT: i32 = remontoire_core::counter::COLD_START_MINUTES;

/// Read the persisted state.
pub fn load() -> WatchState {
    // Single-threaded and fully halted between cycles; nothing else
    // touches these statics.
    unsafe {
        WatchState {
            boot_count: BOOT_COUNT,
            minute_count: MINUTE_COUNT,
        }
    }
}

/// Write the persisted state.
pub fn store(state: WatchState) {
    unsafe {
        BOOT_COUNT = state.boot_count;
        MINUTE_COUNT = state.minute_count;
    }
}
