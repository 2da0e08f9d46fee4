//! Spin box arithmetic: per-type step limits and value adjustment modes.

use crate::config::STEP_MULTIPLIER;
use crate::event::EventValue;
use crate::render::Value;

/// Numeric types a [`SpinBox`](super::SpinBox) can edit.
pub trait Number: Copy + PartialOrd + Value {
    const ZERO: Self;
    /// Floor for the step in step-adjust mode.
    const MIN_STEP: Self;
    const DEFAULT_STEP: Self;
    /// Factor applied to the step in step-adjust mode.
    const MULTIPLIER: Self;

    /// `self + direction * step`
    fn offset(self, step: Self, direction: EventValue) -> Self;

    fn scale_up(self, factor: Self) -> Self;

    fn scale_down(self, factor: Self) -> Self;
}

impl Number for i32 {
    const ZERO: Self = 0;
    const MIN_STEP: Self = 1;
    const DEFAULT_STEP: Self = 1;
    const MULTIPLIER: Self = STEP_MULTIPLIER;

    fn offset(self, step: Self, direction: EventValue) -> Self {
        self.saturating_add(step.saturating_mul(i32::from(direction)))
    }

    fn scale_up(self, factor: Self) -> Self {
        self.saturating_mul(factor)
    }

    fn scale_down(self, factor: Self) -> Self {
        self.checked_div(factor).unwrap_or(self)
    }
}

macro_rules! impl_float_number {
    ($ty:ty, min_step = $min:expr, default_step = $default:expr) => {
        impl Number for $ty {
            const ZERO: Self = 0.0;
            const MIN_STEP: Self = $min;
            const DEFAULT_STEP: Self = $default;
            const MULTIPLIER: Self = STEP_MULTIPLIER as $ty;

            fn offset(self, step: Self, direction: EventValue) -> Self {
                self + <$ty>::from(direction) * step
            }

            fn scale_up(self, factor: Self) -> Self {
                self * factor
            }

            fn scale_down(self, factor: Self) -> Self {
                self / factor
            }
        }
    };
}

impl_float_number!(f32, min_step = 1e-3, default_step = 0.1);
impl_float_number!(f64, min_step = 1e-6, default_step = 0.01);

/// Grow the step for a positive direction, shrink it (never below
/// `T::MIN_STEP`) for a negative one.
pub(crate) fn adjust_step<T: Number>(step: T, direction: EventValue) -> T {
    if direction > 0 {
        step.scale_up(T::MULTIPLIER)
    } else if direction < 0 {
        let step = step.scale_down(T::MULTIPLIER);
        if step < T::MIN_STEP {
            T::MIN_STEP
        } else {
            step
        }
    } else {
        step
    }
}

/// How a spin box applies its step to the value.
pub trait StepMode {
    fn apply<T: Number>(value: T, step: T, direction: EventValue) -> T;
}

/// `value += direction * step`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arithmetic;

/// `value += direction * step`, then clamp at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArithmeticPositiveOnly;

/// `value *= step` for a positive direction, `value /= step` for a negative one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geometric;

impl StepMode for Arithmetic {
    fn apply<T: Number>(value: T, step: T, direction: EventValue) -> T {
        value.offset(step, direction)
    }
}

impl StepMode for ArithmeticPositiveOnly {
    fn apply<T: Number>(value: T, step: T, direction: EventValue) -> T {
        let value = value.offset(step, direction);
        if value < T::ZERO {
            T::ZERO
        } else {
            value
        }
    }
}

impl StepMode for Geometric {
    fn apply<T: Number>(value: T, step: T, direction: EventValue) -> T {
        if direction > 0 {
            value.scale_up(step)
        } else if direction < 0 {
            value.scale_down(step)
        } else {
            value
        }
    }
}
