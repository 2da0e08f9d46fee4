//! Push button that triggers an action.

use crate::render::Render;
use crate::ui::Widget;

/// Button widget for triggering actions on click.
pub struct Button<'w> {
    label: &'w str,
    handler: Option<&'w dyn Fn()>,
}

impl<'w> Button<'w> {
    pub const fn new(label: &'w str) -> Self {
        Self {
            label,
            handler: None,
        }
    }

    /// Attach the click action.
    pub fn with_handler(mut self, handler: &'w dyn Fn()) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn label(&self) -> &'w str {
        self.label
    }
}

impl Widget for Button<'_> {
    fn draw(&self, render: &mut dyn Render) {
        render.begin_block();
        render.text(self.label);
        render.end_block();
    }

    /// Runs the action. A click has no widget-local visual state, so no
    /// redraw is requested.
    fn on_click(&self) -> bool {
        if let Some(handler) = self.handler {
            handler();
        }
        false
    }
}
