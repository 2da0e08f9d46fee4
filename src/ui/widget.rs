//! Widget contract shared by every built-in and user-defined widget.

use crate::event::EventValue;
use crate::render::Render;

/// An interactive or display-only unit attached to a page.
///
/// Widgets mutate through `&self` (state lives in `Cell`s), so the same
/// widget can sit in a page's widget list and still be read by the host.
pub trait Widget {
    /// Widget's own output, without focus styling.
    fn draw(&self, render: &mut dyn Render);

    /// Handle a click.
    ///
    /// Returns `true` if a redraw is required.
    fn on_click(&self) -> bool {
        false
    }

    /// Handle a directional value change.
    ///
    /// Returns `true` if a redraw is required.
    fn on_value(&self, _value: EventValue) -> bool {
        false
    }

    /// Draw the widget, wrapped in focus styling when `focused`.
    fn render(&self, render: &mut dyn Render, focused: bool) {
        if focused {
            render.begin_focused();
            self.draw(render);
            render.end_focused();
        } else {
            self.draw(render);
        }
    }
}

/// Optional callback fired when a widget's value changes.
pub(crate) struct ChangeHandler<'w, T>(Option<&'w dyn Fn(T)>);

impl<'w, T> ChangeHandler<'w, T> {
    pub(crate) const fn none() -> Self {
        Self(None)
    }

    pub(crate) fn set(&mut self, handler: &'w dyn Fn(T)) {
        self.0 = Some(handler);
    }

    pub(crate) fn invoke(&self, value: T) {
        if let Some(handler) = self.0 {
            handler(value);
        }
    }
}
