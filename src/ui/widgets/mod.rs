//! Built-in widget implementations.

mod button;
mod check_box;
mod combo_box;
mod display;
mod labeled;
mod spin_box;

pub use button::Button;
pub use check_box::CheckBox;
pub use combo_box::{ComboBox, ComboItem};
pub use display::Display;
pub use labeled::Labeled;
pub use spin_box::SpinBox;
