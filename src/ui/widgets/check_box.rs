use core::cell::Cell;

use crate::event::EventValue;
use crate::render::Render;
use crate::ui::widget::ChangeHandler;
use crate::ui::Widget;

/// Boolean toggle.
pub struct CheckBox<'w> {
    state: Cell<bool>,
    handler: ChangeHandler<'w, bool>,
}

impl<'w> CheckBox<'w> {
    pub const fn new(state: bool) -> Self {
        Self {
            state: Cell::new(state),
            handler: ChangeHandler::none(),
        }
    }

    /// Called with the new state after every change.
    pub fn with_handler(mut self, handler: &'w dyn Fn(bool)) -> Self {
        self.handler.set(handler);
        self
    }

    pub fn state(&self) -> bool {
        self.state.get()
    }

    pub fn set_state(&self, state: bool) {
        self.state.set(state);
        self.handler.invoke(state);
    }
}

impl Default for CheckBox<'_> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Widget for CheckBox<'_> {
    fn draw(&self, render: &mut dyn Render) {
        render.checkbox(self.state.get());
    }

    fn on_click(&self) -> bool {
        self.set_state(!self.state.get());
        true
    }

    fn on_value(&self, value: EventValue) -> bool {
        self.set_state(value > 0);
        true
    }
}
