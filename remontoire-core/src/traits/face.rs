//! Watch face trait
//!
//! Both render backends - the character LCD and the e-paper panel - sit
//! behind this trait, so the firmware selects one at build time without
//! the control flow knowing which panel is attached.

use crate::clock::TimeOfDay;

/// Everything a face may put on screen for one wake cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceFrame {
    /// Wall-clock time to display
    pub time: TimeOfDay,
    /// Wake cycles since first power-up
    pub boot_count: i32,
}

/// A display that can show one frame per wake cycle.
///
/// Implementations own their panel driver and any refresh or power-down
/// handling. `render` is called exactly once per cycle, right before deep
/// sleep; a bistable panel should hibernate itself at the end of it.
pub trait WatchFace {
    /// Backend-specific failure type
    type Error;

    /// Draw the frame.
    ///
    /// Implementations decide layout: the LCD face shows the boot count
    /// and the time on its two rows, the e-paper face shows only the
    /// centered time.
    fn render(&mut self, frame: &FaceFrame) -> Result<(), Self::Error>;
}
