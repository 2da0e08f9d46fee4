//! Character renderer for LCDs and serial terminals.
//!
//! Output accumulates in a fixed-capacity `heapless::String`. Anything
//! past the buffer capacity, the configured row count or the row width is
//! dropped for the current frame. Focused widgets are wrapped in the
//! zero-width markers [`FOCUS_BEGIN`] / [`FOCUS_END`], which the display
//! driver turns into inverted text.
//!
//! Frame layout for the default 16x4 configuration:
//! ```text
//! Settings
//! Speed: <12>
//! \x0EBeep: ==[ 1 ]\x0F
//! -> Main
//! ```

use core::fmt::{self, Write};

use heapless::String;

use super::{Configured, Render};
use crate::config::{
    DEFAULT_DOUBLE_PLACES, DEFAULT_FLOAT_PLACES, DEFAULT_ROWS_TOTAL, DEFAULT_ROW_MAX_LENGTH,
};

/// Starts inverted (focused) text. ASCII shift-out.
pub const FOCUS_BEGIN: char = '\x0E';

/// Ends inverted (focused) text. ASCII shift-in.
pub const FOCUS_END: char = '\x0F';

/// Text renderer settings, filled in by the host at setup.
pub struct TextRenderConfig<'h> {
    /// Maximum visible characters per row.
    pub row_max_length: u8,
    /// Total rows on the display, title row included.
    pub rows_total: u8,
    /// Decimal places for `f32` values.
    pub float_places: u8,
    /// Decimal places for `f64` values.
    pub double_places: u8,
    /// Called once per frame with the finished text.
    pub on_render_finish: Option<&'h mut dyn FnMut(&str)>,
}

impl Default for TextRenderConfig<'_> {
    fn default() -> Self {
        Self {
            row_max_length: DEFAULT_ROW_MAX_LENGTH,
            rows_total: DEFAULT_ROWS_TOTAL,
            float_places: DEFAULT_FLOAT_PLACES,
            double_places: DEFAULT_DOUBLE_PLACES,
            on_render_finish: None,
        }
    }
}

/// Text renderer with an `N`-byte frame buffer.
pub struct TextRender<'h, const N: usize> {
    config: TextRenderConfig<'h>,
    buffer: String<N>,
    cursor_row: u8,
    cursor_col: u8,
    focused: bool,
}

impl<const N: usize> Default for TextRender<'_, N> {
    fn default() -> Self {
        Self::new(TextRenderConfig::default())
    }
}

impl<'h, const N: usize> TextRender<'h, N> {
    pub fn new(config: TextRenderConfig<'h>) -> Self {
        Self {
            config,
            buffer: String::new(),
            cursor_row: 0,
            cursor_col: 0,
            focused: false,
        }
    }

    /// Text of the last (or current) frame, without its final newline.
    pub fn frame(&self) -> &str {
        let text = self.buffer.as_str();
        text.strip_suffix('\n').unwrap_or(text)
    }

    fn free(&self) -> usize {
        self.buffer.capacity() - self.buffer.len()
    }

    fn put(&mut self, c: char) {
        if self.cursor_row >= self.config.rows_total {
            return;
        }

        // A focused span always keeps room for its closing marker.
        let reserved = usize::from(self.focused);

        if c == '\n' {
            if self.free() < 1 + reserved {
                return;
            }
            if self.buffer.push(c).is_ok() {
                self.cursor_row += 1;
                self.cursor_col = 0;
            }
            return;
        }

        if self.cursor_col >= self.config.row_max_length {
            self.close_focus();
            return;
        }

        if self.free() < c.len_utf8() + reserved {
            return;
        }

        if self.buffer.push(c).is_ok() {
            self.cursor_col += 1;
        }
    }

    fn put_str(&mut self, s: &str) {
        for c in s.chars() {
            self.put(c);
        }
    }

    fn close_focus(&mut self) {
        if self.focused && self.buffer.push(FOCUS_END).is_ok() {
            self.focused = false;
        }
    }

    fn put_real<T: fmt::Display>(&mut self, value: T, nan: bool, infinite: bool, negative: bool, places: u8) {
        if nan {
            self.put_str("nan");
        } else if infinite {
            self.put_str(if negative { "-inf" } else { "inf" });
        } else {
            let _ = write!(self, "{:.*}", usize::from(places), value);
        }
    }
}

impl<const N: usize> Write for TextRender<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_str(s);
        Ok(())
    }
}

impl<'h, const N: usize> Configured for TextRender<'h, N> {
    type Config = TextRenderConfig<'h>;

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn config_mut(&mut self) -> &mut Self::Config {
        &mut self.config
    }
}

impl<const N: usize> Render for TextRender<'_, N> {
    fn prepare(&mut self) {
        self.buffer.clear();
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.focused = false;
    }

    fn finish(&mut self) {
        let text = self.buffer.as_str();
        let frame = text.strip_suffix('\n').unwrap_or(text);
        trace!("frame finished: {} bytes", frame.len());

        if let Some(handler) = self.config.on_render_finish.as_mut() {
            handler(frame);
        }

        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    fn begin_widget(&mut self, _index: usize) {}

    fn end_widget(&mut self) {
        self.put('\n');
    }

    fn widgets_available(&self) -> usize {
        usize::from(self.config.rows_total.saturating_sub(self.cursor_row))
    }

    fn title(&mut self, title: &str) {
        self.put_str(title);
        self.put('\n');
    }

    fn text(&mut self, text: &str) {
        self.put_str(text);
    }

    fn boolean(&mut self, value: bool) {
        self.put_str(if value { "true" } else { "false" });
    }

    fn integer(&mut self, value: i32) {
        let _ = write!(self, "{}", value);
    }

    fn float(&mut self, value: f32) {
        let places = self.config.float_places;
        self.put_real(value, value.is_nan(), value.is_infinite(), value < 0.0, places);
    }

    fn double(&mut self, value: f64) {
        let places = self.config.double_places;
        self.put_real(value, value.is_nan(), value.is_infinite(), value < 0.0, places);
    }

    fn checkbox(&mut self, checked: bool) {
        self.put_str(if checked { "==[ 1 ]" } else { "[ 0 ]--" });
    }

    fn arrow(&mut self) {
        self.put_str("-> ");
    }

    fn colon(&mut self) {
        self.put_str(": ");
    }

    fn begin_block(&mut self) {
        self.put('[');
    }

    fn end_block(&mut self) {
        self.put(']');
    }

    fn begin_alt_block(&mut self) {
        self.put('<');
    }

    fn end_alt_block(&mut self) {
        self.put('>');
    }

    fn begin_focused(&mut self) {
        if self.focused || self.cursor_row >= self.config.rows_total {
            return;
        }
        // Room for both markers, or the span is not opened at all.
        if self.free() >= 2 && self.buffer.push(FOCUS_BEGIN).is_ok() {
            self.focused = true;
        }
    }

    fn end_focused(&mut self) {
        self.close_focus();
    }
}
