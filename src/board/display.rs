//! SSD1306 OLED rendered as a 2×16 character display.
//!
//! Widgets draw into a [`TextGrid`]; [`Oled::flush`] renders the grid with
//! an 8×13 font (16 columns fill the 128 px width) and an underline cursor.

use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config::DISPLAY_LINES;
use crate::error::Error;
use crate::ui::{CharDisplay, Cursor, TextGrid};

/// Concrete display driver, generic over the HAL's I²C peripheral.
pub type Driver<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

const CELL_WIDTH: i32 = 8;
const CELL_HEIGHT: i32 = 13;
/// Vertical distance between text lines (px).
const LINE_PITCH: i32 = 28;
/// Top of the first text line (px).
const TOP_MARGIN: i32 = 8;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_8X13)
        .text_color(BinaryColor::On)
        .build()
}

pub struct Oled<I2C> {
    driver: Driver<I2C>,
    grid: TextGrid,
}

impl<I2C> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the panel and clear it. A panel that fails to initialise
    /// is logged and left blank; the controller keeps running without it.
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if driver.init().is_err() {
            warn!("Display: init failed");
        }
        driver.clear_buffer();
        let _ = driver.flush();
        Self {
            driver,
            grid: TextGrid::new(),
        }
    }

    pub fn grid(&self) -> &TextGrid {
        &self.grid
    }

    pub fn is_dirty(&self) -> bool {
        self.grid.is_dirty()
    }

    /// Push the grid to the panel if it changed since the last flush.
    pub fn flush(&mut self) -> Result<(), Error> {
        if !self.grid.take_dirty() {
            return Ok(());
        }
        self.draw().map_err(|_| Error::Display)?;
        self.driver.flush().map_err(|_| Error::Display)
    }

    fn draw(&mut self) -> Result<(), <Driver<I2C> as DrawTarget>::Error> {
        self.driver.clear_buffer();

        for line in 0..DISPLAY_LINES {
            let top = TOP_MARGIN + i32::from(line) * LINE_PITCH;
            Text::with_baseline(
                self.grid.line(line),
                Point::new(0, top),
                text_style(),
                Baseline::Top,
            )
            .draw(&mut self.driver)?;
        }

        if self.grid.cursor_visible() {
            let cursor = self.grid.cursor();
            let x = i32::from(cursor.column()) * CELL_WIDTH;
            let y = TOP_MARGIN + i32::from(cursor.line()) * LINE_PITCH + CELL_HEIGHT;
            Rectangle::new(Point::new(x, y), Size::new(CELL_WIDTH as u32, 2))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut self.driver)?;
        }
        Ok(())
    }
}

impl<I2C> CharDisplay for Oled<I2C> {
    fn set_cursor(&mut self, cursor: Cursor) {
        self.grid.set_cursor(cursor);
    }

    fn print(&mut self, text: &str) {
        self.grid.print(text);
    }

    fn show_cursor(&mut self) {
        self.grid.show_cursor();
    }

    fn hide_cursor(&mut self) {
        self.grid.hide_cursor();
    }

    fn clear_line(&mut self, line: u8) {
        self.grid.clear_line(line);
    }
}
