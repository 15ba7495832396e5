//! SSD1306 OLED display wrapper.
//!
//! One job: show the current count as large centered digits. Draw calls
//! return `Error::Display` on I²C failure so the render task can log and
//! carry on; a failed frame is retried on the next redraw request.

use crate::error::Error;
use crate::ui::text::format_count;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Display center, where the count is anchored.
const CENTER: Point = Point::new(64, 32);

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::DisplayInit)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::DisplayInit)?;
    Ok(display)
}

fn digit_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(BinaryColor::On)
        .build()
}

/// Render the count full-screen: decimal digits, centered both ways.
pub fn draw_count<I2C>(display: &mut Display<I2C>, value: u16) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let digits = format_count(value);
    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    // Drawing into the buffer is infallible; only the flush can fail.
    let _ = Text::with_text_style(digits.as_str(), CENTER, digit_style(), centered).draw(display);

    display.flush().map_err(|_| Error::Display)
}

/// Blank the panel and cut its power on shutdown.
pub fn power_off<I2C>(display: &mut Display<I2C>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    display.set_display_on(false).map_err(|_| Error::Display)
}
