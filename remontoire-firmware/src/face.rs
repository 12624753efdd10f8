//! Build-time face selection
//!
//! Exactly one render backend is compiled in, selected by cargo feature -
//! the firmware equivalent of swapping the panel on the prototype board.
//! Each backend exposes the same `FacePins` + `render` surface.

#[cfg(all(feature = "epaper", feature = "lcd"))]
compile_error!("select exactly one face backend: `epaper` or `lcd`");

#[cfg(not(any(feature = "epaper", feature = "lcd")))]
compile_error!("select a face backend: `epaper` or `lcd`");

// ==================================================================
// E-paper backend - feature: epaper (default)
// ==================================================================
#[cfg(feature = "epaper")]
mod epaper_backend {
    use core::convert::Infallible;

    use embedded_hal_bus::spi::{DeviceError, ExclusiveDevice};
    use esp_hal::clock::Clocks;
    use esp_hal::delay::Delay;
    use esp_hal::gpio::{GpioPin, Input, Level, Output, Pull};
    use esp_hal::peripherals::SPI2;
    use esp_hal::prelude::*;
    use esp_hal::spi::{master::Spi, SpiMode};

    use remontoire_core::{FaceFrame, WatchFace};
    use remontoire_drivers::EpaperFace;

    /// Errors the SPI device can surface while driving the panel.
    pub type FaceError = DeviceError<esp_hal::spi::Error, Infallible>;

    /// E-paper wiring: VSPI plus the module's control lines.
    pub struct FacePins {
        pub spi2: SPI2,
        pub sck: GpioPin<18>,
        pub mosi: GpioPin<23>,
        pub cs: GpioPin<5>,
        pub dc: GpioPin<17>,
        pub rst: GpioPin<16>,
        pub busy: GpioPin<4>,
    }

    /// Bring the panel up, draw the frame, hibernate the panel.
    pub fn render(frame: &FaceFrame, pins: FacePins, clocks: &Clocks) -> Result<(), FaceError> {
        let spi = Spi::new(pins.spi2, 4.MHz(), SpiMode::Mode0, clocks)
            .with_sck(pins.sck)
            .with_mosi(pins.mosi);
        let cs = Output::new(pins.cs, Level::High);
        let dc = Output::new(pins.dc, Level::Low);
        let rst = Output::new(pins.rst, Level::High);
        let busy = Input::new(pins.busy, Pull::None);

        // CS is infallible on this chip
        let spi_dev = ExclusiveDevice::new(spi, cs, Delay::new(clocks)).unwrap();

        let mut face = EpaperFace::new(spi_dev, busy, dc, rst, Delay::new(clocks))?;
        face.render(frame)
    }
}

// ==================================================================
// Character LCD backend - feature: lcd
// ==================================================================
#[cfg(feature = "lcd")]
mod lcd_backend {
    use esp_hal::clock::Clocks;
    use esp_hal::delay::Delay;
    use esp_hal::gpio::{GpioPin, Level, Output};

    use remontoire_core::{FaceFrame, WatchFace};
    use remontoire_drivers::{hd44780::Hd44780, LcdFace};

    pub use remontoire_drivers::hd44780::LcdError as FaceError;

    /// LCD wiring: RS, EN, D4-D7; R/W is strapped to ground.
    pub struct FacePins {
        pub rs: GpioPin<19>,
        pub en: GpioPin<23>,
        pub d4: GpioPin<18>,
        pub d5: GpioPin<17>,
        pub d6: GpioPin<16>,
        pub d7: GpioPin<15>,
    }

    /// Initialize the module and draw both rows.
    pub fn render(frame: &FaceFrame, pins: FacePins, clocks: &Clocks) -> Result<(), FaceError> {
        let lcd = Hd44780::new(
            Output::new(pins.rs, Level::Low),
            Output::new(pins.en, Level::Low),
            Output::new(pins.d4, Level::Low),
            Output::new(pins.d5, Level::Low),
            Output::new(pins.d6, Level::Low),
            Output::new(pins.d7, Level::Low),
            Delay::new(clocks),
        )?;
        LcdFace::new(lcd).render(frame)
    }
}

#[cfg(feature = "epaper")]
pub use epaper_backend::{render, FaceError, FacePins};

#[cfg(feature = "lcd")]
pub use lcd_backend::{render, FaceError, FacePins};
