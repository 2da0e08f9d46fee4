//! tickmenu - allocation-free menu/widget engine for microcontroller displays.
//!
//! A small, event-driven presentation layer for character LCDs, serial
//! terminals and OLEDs:
//!
//! - [`event`]: one-byte packed input events
//! - [`input`]: key/encoder to event mapping
//! - [`render`]: output device abstraction + text renderer
//! - [`ui`]: widgets, pages and the polling engine
//!
//! Everything lives in fixed-capacity `heapless` containers; nothing
//! allocates. Unit tests run on the host: `cargo test`.
//!
//! ```
//! use core::cell::Cell;
//! use tickmenu::event::Event;
//! use tickmenu::render::TextRender;
//! use tickmenu::ui::{CheckBox, Display, Labeled, Page, Ui};
//!
//! let temperature = Cell::new(21);
//! let heater = Labeled::new("Heat", CheckBox::new(false));
//! let reading = Labeled::new("Temp", Display::new(&temperature));
//!
//! let mut main = Page::new("Main");
//! main.add_widget(&heater).unwrap();
//! main.add_widget(&reading).unwrap();
//!
//! let mut ui: Ui<'_, TextRender<'_, 128>> = Ui::new(TextRender::default());
//! let main = ui.add_page(main).unwrap();
//! ui.bind_page(main).unwrap();
//!
//! ui.add_event(Event::widget_click()).unwrap();
//! assert!(ui.poll(0));
//! assert!(heater.inner().state());
//! assert_eq!(ui.renderer().frame(), "Main\n\x0EHeat: ==[ 1 ]\x0F\nTemp: 21");
//! ```

#![cfg_attr(not(test), no_std)]

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

// Log macros are textually scoped, so this stays the first module.
#[macro_use]
mod logging;

pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod render;
pub mod ui;

pub use error::Error;
pub use event::{Event, EventKind, EventValue};
pub use render::{Render, TextRender, TextRenderConfig};
pub use ui::{Page, PageId, Ui, Widget};
