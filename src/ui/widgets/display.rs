use core::cell::Cell;

use crate::render::{Render, Value};
use crate::ui::Widget;

/// Read-only view of an external value.
///
/// The host keeps the `Cell` and updates it; the page shows the current
/// content on its next render pass.
pub struct Display<'w, T> {
    value: &'w Cell<T>,
}

impl<'w, T: Value + Copy> Display<'w, T> {
    pub const fn new(value: &'w Cell<T>) -> Self {
        Self { value }
    }
}

impl<T: Value + Copy> Widget for Display<'_, T> {
    fn draw(&self, render: &mut dyn Render) {
        render.value(self.value.get());
    }
}
