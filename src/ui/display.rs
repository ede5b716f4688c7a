//! Character-cell adapter over `embedded-graphics` draw targets.
//!
//! Cell geometry comes from the monospace font: a 128×64 panel with
//! `FONT_6X10` is 21 columns by 6 rows.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::ui::DisplaySurface;

/// Any pixel [`DrawTarget`] seen as a grid of font-sized cells.
///
/// Draw errors are dropped, like the rest of the firmware does for the
/// display bus; a failed write leaves stale pixels until the next paint.
pub struct CellDisplay<'f, D> {
    target: D,
    font: &'f MonoFont<'f>,
    cursor: (usize, usize),
}

impl<'f, D> CellDisplay<'f, D>
where
    D: DrawTarget + OriginDimensions,
{
    pub fn new(target: D, font: &'f MonoFont<'f>) -> Self {
        Self {
            target,
            font,
            cursor: (0, 0),
        }
    }

    /// Pixel size of one cell.
    pub fn cell_size(&self) -> Size {
        Size::new(
            self.font.character_size.width + self.font.character_spacing,
            self.font.character_size.height,
        )
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    fn origin(&self, column: usize, row: usize) -> Point {
        let cell = self.cell_size();
        Point::new(
            (column as u32 * cell.width) as i32,
            (row as u32 * cell.height) as i32,
        )
    }
}

impl<'f, D> DisplaySurface for CellDisplay<'f, D>
where
    D: DrawTarget + OriginDimensions,
{
    type Color = D::Color;

    fn columns(&self) -> usize {
        let cell = self.cell_size();
        if cell.width == 0 {
            return 0;
        }
        (self.target.size().width / cell.width) as usize
    }

    fn rows(&self) -> usize {
        let cell = self.cell_size();
        if cell.height == 0 {
            return 0;
        }
        (self.target.size().height / cell.height) as usize
    }

    fn clear(&mut self, background: Self::Color) {
        let _ = self.target.clear(background);
        self.cursor = (0, 0);
    }

    fn set_cursor(&mut self, column: usize, row: usize) {
        self.cursor = (column, row);
    }

    fn write_text(&mut self, text: &str, foreground: Self::Color, background: Self::Color) {
        let style = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(foreground)
            .background_color(background)
            .build();
        let origin = self.origin(self.cursor.0, self.cursor.1);
        let _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(&mut self.target);
        self.cursor.0 += text.chars().count();
    }

    fn fill_rect(
        &mut self,
        column: usize,
        row: usize,
        width: usize,
        height: usize,
        color: Self::Color,
    ) {
        let cell = self.cell_size();
        let size = Size::new(width as u32 * cell.width, height as u32 * cell.height);
        let _ = Rectangle::new(self.origin(column, row), size)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target);
    }
}

#[cfg(feature = "embedded")]
pub use oled::{init, Display, OledSurface};

/// SSD1306 OLED bring-up for the firmware.
#[cfg(feature = "embedded")]
mod oled {
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::BinaryColor;
    use ssd1306::mode::BufferedGraphicsMode;
    use ssd1306::prelude::*;
    use ssd1306::I2CDisplayInterface;
    use ssd1306::Ssd1306;

    use super::CellDisplay;
    use crate::ui::DisplaySurface;

    /// Type alias for the concrete display driver.
    ///
    /// Generic over the I²C implementation so callers pass in their HAL's
    /// I²C peripheral.
    pub type Display<I2C> =
        Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

    /// Initialise the SSD1306 display and clear the screen.
    pub fn init<I2C>(i2c: I2C) -> Display<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        let _ = display.init();
        display.clear_buffer();
        let _ = display.flush();
        display
    }

    /// The OLED as a 21×6 cell surface. Drawing goes to the frame buffer;
    /// `present` pushes it over I²C.
    pub struct OledSurface<I2C> {
        cells: CellDisplay<'static, Display<I2C>>,
    }

    impl<I2C> OledSurface<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        pub fn new(display: Display<I2C>) -> Self {
            Self {
                cells: CellDisplay::new(display, &FONT_6X10),
            }
        }
    }

    impl<I2C> DisplaySurface for OledSurface<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        type Color = BinaryColor;

        fn columns(&self) -> usize {
            self.cells.columns()
        }

        fn rows(&self) -> usize {
            self.cells.rows()
        }

        fn clear(&mut self, background: BinaryColor) {
            self.cells.clear(background)
        }

        fn set_cursor(&mut self, column: usize, row: usize) {
            self.cells.set_cursor(column, row)
        }

        fn write_text(&mut self, text: &str, foreground: BinaryColor, background: BinaryColor) {
            self.cells.write_text(text, foreground, background)
        }

        fn fill_rect(
            &mut self,
            column: usize,
            row: usize,
            width: usize,
            height: usize,
            color: BinaryColor,
        ) {
            self.cells.fill_rect(column, row, width, height, color)
        }

        fn present(&mut self) {
            let _ = self.cells.target_mut().flush();
        }
    }
}
