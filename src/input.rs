//! Mapping from physical inputs to UI events.
//!
//! Drivers (debouncing, encoder counting) live outside this crate; they
//! only need to report which key was pressed or how far an encoder
//! turned. Typical setups:
//!   - 5 keys: UP/DOWN move the focus, LEFT/RIGHT change the value,
//!     SELECT clicks
//!   - rotary encoder + push button: see [`EncoderRouter`]

use crate::event::{Event, EventKind, EventValue, EVENT_VALUE_MAX, EVENT_VALUE_MIN};

/// Physical key presses (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Select,
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        match key {
            Key::Up => Event::page_cursor_move(-1),
            Key::Down => Event::page_cursor_move(1),
            Key::Left => Event::widget_value(-1),
            Key::Right => Event::widget_value(1),
            Key::Select => Event::widget_click(),
        }
    }
}

/// Split `delta` into in-range events of `kind` whose values sum to `delta`.
///
/// A fast encoder turn can exceed what one event carries; splitting keeps
/// every detent instead of clamping them away.
pub fn split_delta(kind: EventKind, delta: i32) -> SplitDelta {
    SplitDelta {
        kind,
        remaining: delta,
    }
}

/// Iterator returned by [`split_delta`].
#[derive(Clone, Debug)]
pub struct SplitDelta {
    kind: EventKind,
    remaining: i32,
}

impl Iterator for SplitDelta {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.remaining == 0 {
            return None;
        }

        let chunk = self
            .remaining
            .clamp(i32::from(EVENT_VALUE_MIN), i32::from(EVENT_VALUE_MAX));
        self.remaining -= chunk;
        Some(Event::new(self.kind, chunk as EventValue))
    }
}

/// What encoder rotation currently does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputMode {
    /// Rotation moves the page focus.
    #[default]
    Navigate,
    /// Rotation changes the focused widget's value.
    Edit,
}

/// Routes a single rotary encoder to cursor moves or value changes.
///
/// The push button always clicks; switching modes is a separate gesture
/// (e.g. long press) so widgets that use clicks themselves keep working.
#[derive(Clone, Debug, Default)]
pub struct EncoderRouter {
    mode: InputMode,
}

impl EncoderRouter {
    pub const fn new() -> Self {
        Self {
            mode: InputMode::Navigate,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Flip between navigate and edit mode, returning the new mode.
    pub fn toggle_mode(&mut self) -> InputMode {
        self.mode = match self.mode {
            InputMode::Navigate => InputMode::Edit,
            InputMode::Edit => InputMode::Navigate,
        };
        self.mode
    }

    /// Events for `delta` encoder detents in the current mode.
    pub fn rotate(&self, delta: i32) -> SplitDelta {
        let kind = match self.mode {
            InputMode::Navigate => EventKind::PageCursorMove,
            InputMode::Edit => EventKind::WidgetValueChange,
        };
        split_delta(kind, delta)
    }

    pub fn press(&self) -> Event {
        Event::widget_click()
    }
}
