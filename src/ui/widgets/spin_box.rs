//! Numeric editor with a two-level (value / step) adjustment.
//!
//! A click toggles step-adjust mode. In step-adjust mode directional
//! input scales the step by `STEP_MULTIPLIER` instead of touching the
//! value; the step never shrinks below `T::MIN_STEP`.

use core::cell::Cell;
use core::marker::PhantomData;

use crate::event::EventValue;
use crate::render::Render;
use crate::ui::step::{adjust_step, Number, StepMode};
use crate::ui::widget::ChangeHandler;
use crate::ui::Widget;

/// Spin box editing a `T` according to step mode `M`.
pub struct SpinBox<'w, T, M> {
    value: Cell<T>,
    step: Cell<T>,
    adjusting_step: Cell<bool>,
    handler: ChangeHandler<'w, T>,
    _mode: PhantomData<M>,
}

impl<'w, T: Number, M: StepMode> SpinBox<'w, T, M> {
    /// Spin box starting at `value` with the type's default step.
    pub const fn new(value: T) -> Self {
        Self {
            value: Cell::new(value),
            step: Cell::new(T::DEFAULT_STEP),
            adjusting_step: Cell::new(false),
            handler: ChangeHandler::none(),
            _mode: PhantomData,
        }
    }

    pub fn with_step(self, step: T) -> Self {
        self.step.set(step);
        self
    }

    /// Called with the new value after every value change.
    pub fn with_handler(mut self, handler: &'w dyn Fn(T)) -> Self {
        self.handler.set(handler);
        self
    }

    pub fn value(&self) -> T {
        self.value.get()
    }

    pub fn set_value(&self, value: T) {
        self.value.set(value);
        self.handler.invoke(value);
    }

    pub fn step(&self) -> T {
        self.step.get()
    }

    /// `true` while directional input changes the step, not the value.
    pub fn is_adjusting_step(&self) -> bool {
        self.adjusting_step.get()
    }
}

impl<T: Number, M: StepMode> Widget for SpinBox<'_, T, M> {
    fn draw(&self, render: &mut dyn Render) {
        render.begin_alt_block();
        if self.adjusting_step.get() {
            render.arrow();
            render.value(self.step.get());
        } else {
            render.value(self.value.get());
        }
        render.end_alt_block();
    }

    fn on_click(&self) -> bool {
        self.adjusting_step.set(!self.adjusting_step.get());
        true
    }

    fn on_value(&self, direction: EventValue) -> bool {
        if self.adjusting_step.get() {
            self.step.set(adjust_step(self.step.get(), direction));
        } else {
            self.set_value(M::apply(self.value.get(), self.step.get(), direction));
        }
        true
    }
}
