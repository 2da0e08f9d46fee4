//! Monochrome frame painter for `embedded-graphics` targets.
//!
//! Takes a finished [`TextRender`](super::TextRender) frame and draws it
//! one text row per line with `FONT_6X10`. Focus spans are drawn
//! inverted. Typical wiring: the render-completion callback calls
//! [`draw_frame`] on an SSD1306 in buffered graphics mode, then flushes.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use super::text::{FOCUS_BEGIN, FOCUS_END};

/// Vertical distance between text rows (pixels).
pub const ROW_HEIGHT: i32 = 12;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn focused_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::Off)
        .background_color(BinaryColor::On)
        .build()
}

/// Clear `display` and paint `frame` from the top-left corner.
pub fn draw_frame<D>(display: &mut D, frame: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off)?;

    // Focus may span a line break only if a widget wrote one itself.
    let mut focused = false;

    for (row, line) in frame.split('\n').enumerate() {
        let mut position = Point::new(0, row as i32 * ROW_HEIGHT);

        for (index, segment) in line.split([FOCUS_BEGIN, FOCUS_END]).enumerate() {
            if index > 0 {
                // Every separator toggles between the two styles.
                focused = !focused;
            }
            if segment.is_empty() {
                continue;
            }
            let style = if focused { focused_style() } else { text_style() };
            position = Text::with_baseline(segment, position, style, Baseline::Top).draw(display)?;
        }
    }

    Ok(())
}
