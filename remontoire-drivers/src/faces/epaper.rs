//! 1.54" e-paper face
//!
//! Single centered `HH:MI` string, one full-screen refresh per wake cycle,
//! then the panel hibernates. The panel is bistable, so the image stays up
//! while the rest of the board is in deep sleep.

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;
use epd_waveshare::color::Color;
use epd_waveshare::epd1in54::{Display1in54, Epd1in54, HEIGHT, WIDTH};
use epd_waveshare::graphics::DisplayRotation;
use epd_waveshare::prelude::WaveshareDisplay;

use remontoire_core::{FaceFrame, WatchFace};

/// Watch face on a 1.54" 200x200 e-paper module.
pub struct EpaperFace<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    epd: Epd1in54<SPI, BUSY, DC, RST, DELAY>,
    display: Display1in54,
    spi: SPI,
    delay: DELAY,
}

impl<SPI, BUSY, DC, RST, DELAY> EpaperFace<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Reset and initialize the panel.
    pub fn new(
        mut spi: SPI,
        busy: BUSY,
        dc: DC,
        rst: RST,
        mut delay: DELAY,
    ) -> Result<Self, SPI::Error> {
        let epd = Epd1in54::new(&mut spi, busy, dc, rst, &mut delay, None)?;
        let mut display = Display1in54::default();
        // The panel sits rotated in the case
        display.set_rotation(DisplayRotation::Rotate270);
        Ok(Self {
            epd,
            display,
            spi,
            delay,
        })
    }
}

impl<SPI, BUSY, DC, RST, DELAY> WatchFace for EpaperFace<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Error = SPI::Error;

    fn render(&mut self, frame: &FaceFrame) -> Result<(), Self::Error> {
        // Drawing into the frame buffer cannot fail
        self.display.clear(Color::White).ok();

        let text = frame.time.hhmm();
        let style = MonoTextStyle::new(&FONT_10X20, Color::Black);
        let probe = Text::new(&text, Point::zero(), style);
        let origin = centered_origin(&probe.bounding_box(), WIDTH, HEIGHT);
        Text::new(&text, origin, style).draw(&mut self.display).ok();

        self.epd
            .update_and_display_frame(&mut self.spi, self.display.buffer(), &mut self.delay)?;
        // Bistable panel keeps the image; stop driving it until next wake
        self.epd.sleep(&mut self.spi, &mut self.delay)?;
        Ok(())
    }
}

/// Text origin that centers `bounds` on a `width` x `height` panel.
///
/// The bounding box of a text primitive is offset from its anchor point,
/// so the offset is transposed out of the centered position.
fn centered_origin(bounds: &Rectangle, width: u32, height: u32) -> Point {
    let x = (width as i32 - bounds.size.width as i32) / 2 - bounds.top_left.x;
    let y = (height as i32 - bounds.size.height as i32) / 2 - bounds.top_left.y;
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_origin_plain_box() {
        // A 50x20 box anchored at its own origin centers at (75, 90)
        let bounds = Rectangle::new(Point::zero(), Size::new(50, 20));
        assert_eq!(centered_origin(&bounds, 200, 200), Point::new(75, 90));
    }

    #[test]
    fn test_centered_origin_compensates_anchor_offset() {
        // Text boxes start above their baseline anchor; the offset is
        // subtracted so the rendered box still lands centered
        let bounds = Rectangle::new(Point::new(0, -16), Size::new(50, 20));
        assert_eq!(centered_origin(&bounds, 200, 200), Point::new(75, 106));
    }

    #[test]
    fn test_centered_origin_box_larger_than_panel() {
        let bounds = Rectangle::new(Point::zero(), Size::new(300, 20));
        assert_eq!(centered_origin(&bounds, 200, 200).x, -50);
    }
}
