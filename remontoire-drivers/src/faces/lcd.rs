//! 16x2 character LCD face
//!
//! Boot count on row 0, time on row 1 - the prototype's original layout.

use core::fmt::Write;

use remontoire_core::{FaceFrame, WatchFace};

use crate::hd44780::{Hd44780, LcdError, COLS};

/// Watch face on an HD44780 16x2 module.
pub struct LcdFace<RS, EN, D4, D5, D6, D7, DELAY> {
    lcd: Hd44780<RS, EN, D4, D5, D6, D7, DELAY>,
}

impl<RS, EN, D4, D5, D6, D7, DELAY> LcdFace<RS, EN, D4, D5, D6, D7, DELAY> {
    /// Wrap an initialized LCD driver.
    pub fn new(lcd: Hd44780<RS, EN, D4, D5, D6, D7, DELAY>) -> Self {
        Self { lcd }
    }
}

impl<RS, EN, D4, D5, D6, D7, DELAY> WatchFace for LcdFace<RS, EN, D4, D5, D6, D7, DELAY>
where
    RS: embedded_hal::digital::OutputPin,
    EN: embedded_hal::digital::OutputPin,
    D4: embedded_hal::digital::OutputPin,
    D5: embedded_hal::digital::OutputPin,
    D6: embedded_hal::digital::OutputPin,
    D7: embedded_hal::digital::OutputPin,
    DELAY: embedded_hal::delay::DelayNs,
{
    type Error = LcdError;

    fn render(&mut self, frame: &FaceFrame) -> Result<(), LcdError> {
        // Rows are capped at the panel width; an oversized boot count
        // truncates rather than wrapping onto the time row.
        let mut row0: heapless::String<{ COLS as usize }> = heapless::String::new();
        let _ = write!(row0, "Boot: {}", frame.boot_count);
        let mut row1: heapless::String<{ COLS as usize }> = heapless::String::new();
        let _ = write!(row1, "Time: {}", frame.time);

        self.lcd.clear()?;
        self.lcd.set_cursor(0, 0)?;
        self.lcd.write_str(&row0)?;
        self.lcd.set_cursor(1, 0)?;
        self.lcd.write_str(&row1)?;
        Ok(())
    }
}
