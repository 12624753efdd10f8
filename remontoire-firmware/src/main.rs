//! Remontoire - mechanically powered watch firmware
//!
//! One pass per activation: read the wake cause, decode which line pulled
//! the chip out of deep sleep, advance the RTC-retained counters, render
//! the time to the selected face, and go back to deep sleep. The idle loop
//! is never reached; the sleep call does not return.
//!
//! Named after the remontoire, the mechanism in a mechanical watch that
//! rewinds a small secondary spring at fixed intervals.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::{
    clock::ClockControl,
    delay::Delay,
    gpio::{Io, RtcPin},
    peripherals::Peripherals,
    prelude::*,
    rtc_cntl::{
        get_reset_reason,
        sleep::{Ext1WakeupSource, RtcSleepConfig, WakeupLevel},
        Rtc, SocResetReason,
    },
    system::SystemControl,
    Cpu,
};
use log::{info, warn};

use remontoire_core::{FaceFrame, TimeOfDay, WakeCause, WatchState};

mod board;
mod face;
mod persist;
mod wakeup;

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();

    let peripherals = Peripherals::take();
    let system = SystemControl::new(peripherals.SYSTEM);
    let clocks = ClockControl::boot_defaults(system.clock_control).freeze();
    let io = Io::new(peripherals.GPIO, peripherals.IO_MUX);
    let mut delay = Delay::new(&clocks);

    // The EXT1 status latch must be read before the RTC driver takes the
    // peripheral.
    let ext1_status = wakeup::ext1_status(&peripherals.LPWR);
    let mut rtc = Rtc::new(peripherals.LPWR, None);

    // Cold boots re-seed the retained counters; deep-sleep wakes keep them.
    let reset = get_reset_reason(Cpu::ProCpu).unwrap_or(SocResetReason::ChipPowerOn);
    if !matches!(reset, SocResetReason::CoreDeepSleep) {
        info!("Cold boot ({:?}), seeding counters", reset);
        persist::store(WatchState::cold_start());
    }

    let cause = wakeup::cause();
    info!("Wakeup caused by {}", cause.description());

    let trigger = match board::TRIGGER_MAP.trigger_for(ext1_status) {
        Ok(Some(trigger)) => {
            info!("Wakeup trigger: {:?}", trigger);
            Some(trigger)
        }
        Ok(None) => {
            warn!("Wakeup line not mapped, status {:#x}", ext1_status);
            None
        }
        Err(err) => {
            // A glitched status latch must never zero the watch; count the
            // cycle as a plain advance. Only worth a warning if EXT1
            // actually fired.
            if cause == WakeCause::Ext1 {
                warn!("Wake status undecodable: {:?}", err);
            }
            None
        }
    };

    let state = persist::load().advance(trigger);
    persist::store(state);
    info!("Boot number: {}", state.boot_count);

    let time = TimeOfDay::from_minute_count(state.minute_count);
    info!("Time: {}", time);

    let frame = FaceFrame {
        time,
        boot_count: state.boot_count,
    };

    let pins = io.pins;
    let mut advance_pin = pins.gpio32;
    let mut reset_pin = pins.gpio33;

    #[cfg(feature = "epaper")]
    let face_pins = face::FacePins {
        spi2: peripherals.SPI2,
        sck: pins.gpio18,
        mosi: pins.gpio23,
        cs: pins.gpio5,
        dc: pins.gpio17,
        rst: pins.gpio16,
        busy: pins.gpio4,
    };

    #[cfg(feature = "lcd")]
    let face_pins = face::FacePins {
        rs: pins.gpio19,
        en: pins.gpio23,
        d4: pins.gpio18,
        d5: pins.gpio17,
        d6: pins.gpio16,
        d7: pins.gpio15,
    };

    // The cycle must reach sleep even if the panel misbehaves.
    if let Err(err) = face::render(&frame, face_pins, &clocks) {
        warn!("Face render failed: {:?}", err);
    }

    // Re-arm both wake lines, wake on any high, and halt. The counters
    // live in RTC fast memory, so that domain stays powered.
    let mut wakeup_pins: [&mut dyn RtcPin; 2] = [&mut advance_pin, &mut reset_pin];
    let ext1 = Ext1WakeupSource::new(&mut wakeup_pins, WakeupLevel::High);

    let mut sleep_cfg = RtcSleepConfig::deep();
    sleep_cfg.set_rtc_fastmem_pd_en(false);

    info!("Going to sleep now");
    delay.delay_millis(100);
    rtc.sleep(&sleep_cfg, &[&ext1], &mut delay);
    unreachable!();
}
