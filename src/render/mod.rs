//! Render abstraction - decouples widget logic from the output device.
//!
//! Widgets describe themselves as a one-dimensional stream of primitives
//! (values, arrows, block markers, focus brackets). A concrete renderer
//! decides what those look like on its device.
//!
//! ## Renderers
//!
//! - [`TextRender`]: character buffer for LCDs and serial terminals
//! - [`graphics`]: paints a finished text frame onto an `embedded-graphics`
//!   target (feature `graphics`)

#[cfg(feature = "graphics")]
pub mod graphics;
pub mod text;

pub use text::{TextRender, TextRenderConfig, FOCUS_BEGIN, FOCUS_END};

/// Output capability set a device must provide.
///
/// All operations are infallible: output that does not fit is dropped by
/// the implementation.
pub trait Render {
    /// Start a new frame.
    fn prepare(&mut self);

    /// Complete the frame and hand it to the device.
    fn finish(&mut self);

    /// Start the widget at `index` in the page's widget list.
    fn begin_widget(&mut self, index: usize);

    fn end_widget(&mut self);

    /// Number of widgets that still fit in the remaining display area.
    fn widgets_available(&self) -> usize;

    /// Page title.
    fn title(&mut self, title: &str);

    // Values

    fn text(&mut self, text: &str);

    fn boolean(&mut self, value: bool);

    fn integer(&mut self, value: i32);

    /// Single precision, printed with the configured decimal places.
    fn float(&mut self, value: f32);

    /// Double precision, printed with the configured decimal places.
    fn double(&mut self, value: f64);

    /// Checkbox state indicator.
    fn checkbox(&mut self, checked: bool);

    // Styling

    /// Arrow from the edge towards the widget.
    fn arrow(&mut self);

    /// Label/value separator.
    fn colon(&mut self);

    fn begin_block(&mut self);

    fn end_block(&mut self);

    fn begin_alt_block(&mut self);

    fn end_alt_block(&mut self);

    /// Bracket the output of the focused widget.
    fn begin_focused(&mut self);

    fn end_focused(&mut self);
}

impl dyn Render + '_ {
    /// Render any supported scalar.
    pub fn value<V: Value>(&mut self, value: V) {
        value.render_value(self);
    }
}

/// Renderers with device-specific settings the host fills in at setup.
pub trait Configured {
    type Config;

    fn config(&self) -> &Self::Config;

    fn config_mut(&mut self) -> &mut Self::Config;
}

/// A scalar that knows which [`Render`] primitive displays it.
pub trait Value {
    fn render_value(&self, render: &mut dyn Render);
}

impl Value for &str {
    fn render_value(&self, render: &mut dyn Render) {
        render.text(self);
    }
}

impl Value for bool {
    fn render_value(&self, render: &mut dyn Render) {
        render.boolean(*self);
    }
}

impl Value for f32 {
    fn render_value(&self, render: &mut dyn Render) {
        render.float(*self);
    }
}

impl Value for f64 {
    fn render_value(&self, render: &mut dyn Render) {
        render.double(*self);
    }
}

macro_rules! impl_integer_value {
    ($($ty:ty),*) => {
        $(
            impl Value for $ty {
                fn render_value(&self, render: &mut dyn Render) {
                    render.integer(i32::from(*self));
                }
            }
        )*
    };
}

impl_integer_value!(i8, i16, i32, u8, u16);
