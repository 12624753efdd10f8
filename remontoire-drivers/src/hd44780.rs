//! HD44780 character LCD driver (4-bit parallel)
//!
//! Minimal write-only driver for the 16x2 module on the prototype board.
//! Only RS, EN and D4-D7 are wired; R/W is strapped low, so busy-flag
//! polling is replaced by worst-case instruction delays from the datasheet.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Columns on the panel
pub const COLS: u8 = 16;
/// Rows on the panel
pub const ROWS: u8 = 2;

/// HD44780 instruction set
#[allow(dead_code)]
mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    /// Cursor moves right after each write, no display shift
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// 4-bit bus, two lines, 5x8 font
    pub const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// DDRAM start address of each row
const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

/// Errors that can occur while driving the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// A GPIO write failed
    Pin,
    /// Cursor position outside the 16x2 grid
    OutOfBounds,
}

/// Write-only HD44780 driver over six GPIO lines.
pub struct Hd44780<RS, EN, D4, D5, D6, D7, DELAY> {
    rs: RS,
    en: EN,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: DELAY,
}

impl<RS, EN, D4, D5, D6, D7, DELAY> Hd44780<RS, EN, D4, D5, D6, D7, DELAY>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayNs,
{
    /// Take ownership of the bus pins and run the controller through the
    /// datasheet power-on sequence into 4-bit, 2-line mode.
    pub fn new(
        rs: RS,
        en: EN,
        d4: D4,
        d5: D5,
        d6: D6,
        d7: D7,
        delay: DELAY,
    ) -> Result<Self, LcdError> {
        let mut lcd = Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
        };
        lcd.init()?;
        Ok(lcd)
    }

    fn init(&mut self) -> Result<(), LcdError> {
        // The controller needs >40ms after Vcc rises before it accepts
        // instructions.
        self.delay.delay_ms(50);
        self.rs.set_low().map_err(|_| LcdError::Pin)?;
        self.en.set_low().map_err(|_| LcdError::Pin)?;

        // Three 8-bit "function set" knocks, then the switch to 4-bit.
        self.write_nibble(0x03)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;
        self.delay.delay_us(150);

        self.command(cmd::FUNCTION_SET_4BIT_2LINE)?;
        self.command(cmd::DISPLAY_ON)?;
        self.clear()?;
        self.command(cmd::ENTRY_MODE_INCREMENT)?;
        Ok(())
    }

    /// Blank the panel and return the cursor home.
    pub fn clear(&mut self) -> Result<(), LcdError> {
        self.command(cmd::CLEAR_DISPLAY)?;
        // Clear is the slow instruction: 1.52ms
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Move the cursor to a (row, column) position.
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), LcdError> {
        if row >= ROWS || col >= COLS {
            return Err(LcdError::OutOfBounds);
        }
        self.command(cmd::SET_DDRAM_ADDR | ddram_address(row, col))
    }

    /// Write ASCII text at the current cursor position.
    ///
    /// Bytes beyond the row end land in invisible DDRAM, as on the real
    /// controller; callers keep rows to 16 characters.
    pub fn write_str(&mut self, text: &str) -> Result<(), LcdError> {
        for byte in text.bytes() {
            self.write_data(byte)?;
        }
        Ok(())
    }

    fn command(&mut self, byte: u8) -> Result<(), LcdError> {
        self.rs.set_low().map_err(|_| LcdError::Pin)?;
        self.write_byte(byte)
    }

    fn write_data(&mut self, byte: u8) -> Result<(), LcdError> {
        self.rs.set_high().map_err(|_| LcdError::Pin)?;
        self.write_byte(byte)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), LcdError> {
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)?;
        // Every remaining instruction completes within 37us
        self.delay.delay_us(50);
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), LcdError> {
        set_level(&mut self.d4, nibble & 0x01 != 0)?;
        set_level(&mut self.d5, nibble & 0x02 != 0)?;
        set_level(&mut self.d6, nibble & 0x04 != 0)?;
        set_level(&mut self.d7, nibble & 0x08 != 0)?;

        // Latch on the falling edge of EN
        self.en.set_high().map_err(|_| LcdError::Pin)?;
        self.delay.delay_us(1);
        self.en.set_low().map_err(|_| LcdError::Pin)?;
        self.delay.delay_us(1);
        Ok(())
    }
}

fn set_level<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), LcdError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| LcdError::Pin)
}

/// DDRAM address of a (row, column) position.
fn ddram_address(row: u8, col: u8) -> u8 {
    ROW_OFFSETS[row as usize] + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddram_addressing() {
        assert_eq!(ddram_address(0, 0), 0x00);
        assert_eq!(ddram_address(0, 15), 0x0F);
        assert_eq!(ddram_address(1, 0), 0x40);
        assert_eq!(ddram_address(1, 15), 0x4F);
    }
}
