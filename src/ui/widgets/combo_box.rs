//! Selection from a fixed set of labelled options.

use core::cell::Cell;

use crate::event::EventValue;
use crate::render::Render;
use crate::ui::widget::ChangeHandler;
use crate::ui::Widget;

/// One option: the text shown and the value handed to the change handler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComboItem<'w, T> {
    key: &'w str,
    value: T,
}

impl<'w, T: Copy> ComboItem<'w, T> {
    pub const fn new(key: &'w str, value: T) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &'w str {
        self.key
    }

    pub fn value(&self) -> T {
        self.value
    }
}

impl<'w> ComboItem<'w, &'w str> {
    /// Option whose value is its own text.
    pub const fn label(key: &'w str) -> Self {
        Self { key, value: key }
    }
}

/// Combo box over `N` immutable options (`N >= 1`).
pub struct ComboBox<'w, T, const N: usize> {
    items: [ComboItem<'w, T>; N],
    cursor: Cell<usize>,
    handler: ChangeHandler<'w, T>,
}

impl<'w, T: Copy, const N: usize> ComboBox<'w, T, N> {
    const NON_EMPTY: () = assert!(N >= 1, "ComboBox needs at least one option");

    pub fn new(items: [ComboItem<'w, T>; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self {
            items,
            cursor: Cell::new(0),
            handler: ChangeHandler::none(),
        }
    }

    /// Called with the newly selected value after every move.
    pub fn with_handler(mut self, handler: &'w dyn Fn(T)) -> Self {
        self.handler.set(handler);
        self
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.get()
    }

    pub fn selected(&self) -> &ComboItem<'w, T> {
        &self.items[self.cursor.get()]
    }

    pub fn items(&self) -> &[ComboItem<'w, T>; N] {
        &self.items
    }
}

impl<T: Copy, const N: usize> Widget for ComboBox<'_, T, N> {
    fn draw(&self, render: &mut dyn Render) {
        render.begin_alt_block();
        render.text(self.selected().key());
        render.end_alt_block();
    }

    /// Moves the selection by `value` options, wrapping in both directions.
    fn on_value(&self, value: EventValue) -> bool {
        let cursor = (self.cursor.get() as isize + isize::from(value)).rem_euclid(N as isize);
        self.cursor.set(cursor as usize);
        self.handler.invoke(self.selected().value());
        true
    }
}
