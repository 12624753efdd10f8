//! Board wiring for the prototype (Wemos Lolin32 Lite)
//!
//! Wake lines, wake on any high:
//! - GPIO32 - minute increment impulse from the movement
//! - GPIO33 - reset to zero
//!
//! The e-paper module hangs off VSPI: SCK 18, MOSI 23, CS 5, DC 17,
//! RST 16, BUSY 4. The LCD variant reuses the same header in 4-bit mode:
//! RS 19, EN 23, D4-D7 on 18/17/16/15, R/W strapped to ground.

use remontoire_core::TriggerMap;

/// EXT1 status bits for the two wake lines.
///
/// The status register counts RTC IO channels, not GPIO numbers:
/// GPIO32 is RTC channel 9, GPIO33 is RTC channel 8.
pub const TRIGGER_MAP: TriggerMap = TriggerMap {
    advance_bit: 9,
    reset_bit: 8,
};
