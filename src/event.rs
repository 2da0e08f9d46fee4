//! Packed single-byte UI events.
//!
//! Layout (1 byte):
//! ```text
//! Bit 7-5: Event type (EventKind code)
//! Bit 4-0: Signed value, two's complement, range -16..=15
//! ```
//!
//! Values outside the representable range are clamped when the event is
//! built, so a large value can never spill into the type bits.

use crate::config::EVENT_VALUE_BITS;

/// Signed event payload.
pub type EventValue = i8;

const VALUE_MASK: u8 = (1 << EVENT_VALUE_BITS) - 1;
const TYPE_MASK: u8 = !VALUE_MASK;
const SIGN_BIT: u8 = 1 << (EVENT_VALUE_BITS - 1);

/// Largest value an event can carry.
pub const EVENT_VALUE_MAX: EventValue = (SIGN_BIT - 1) as EventValue;

/// Smallest value an event can carry.
pub const EVENT_VALUE_MIN: EventValue = -(SIGN_BIT as EventValue);

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EventKind {
    /// Forced redraw request.
    Update = 1,
    /// Move the page focus cursor by `value`.
    PageCursorMove = 2,
    /// Click/tap on the focused widget.
    WidgetClick = 3,
    /// Directional value change on the focused widget.
    WidgetValueChange = 4,
}

impl EventKind {
    const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(EventKind::Update),
            2 => Some(EventKind::PageCursorMove),
            3 => Some(EventKind::WidgetClick),
            4 => Some(EventKind::WidgetValueChange),
            _ => None,
        }
    }
}

/// One input occurrence with an optional small signed magnitude.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event(u8);

impl Event {
    /// Build an event, clamping `value` into `EVENT_VALUE_MIN..=EVENT_VALUE_MAX`.
    pub const fn new(kind: EventKind, value: EventValue) -> Self {
        let value = if value > EVENT_VALUE_MAX {
            EVENT_VALUE_MAX
        } else if value < EVENT_VALUE_MIN {
            EVENT_VALUE_MIN
        } else {
            value
        };
        let kind_bits = (kind as u8) << EVENT_VALUE_BITS;
        Self((kind_bits & TYPE_MASK) | (value as u8 & VALUE_MASK))
    }

    /// Decode a raw packed byte, e.g. one received over a command link.
    ///
    /// Returns `None` for unknown type codes.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match EventKind::from_code(bits >> EVENT_VALUE_BITS) {
            Some(_) => Some(Self(bits)),
            None => None,
        }
    }

    /// Raw packed byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn kind(self) -> EventKind {
        match EventKind::from_code(self.0 >> EVENT_VALUE_BITS) {
            Some(kind) => kind,
            // Every constructor validates the type bits.
            None => unreachable!(),
        }
    }

    /// Signed value, sign-extended from the low bits.
    pub const fn value(self) -> EventValue {
        let raw = self.0 & VALUE_MASK;
        if raw & SIGN_BIT != 0 {
            (raw | TYPE_MASK) as EventValue
        } else {
            raw as EventValue
        }
    }

    /// Forced redraw.
    pub const fn update() -> Self {
        Self::new(EventKind::Update, 0)
    }

    /// Move the page cursor by `offset`.
    pub const fn page_cursor_move(offset: EventValue) -> Self {
        Self::new(EventKind::PageCursorMove, offset)
    }

    /// Click the focused widget.
    pub const fn widget_click() -> Self {
        Self::new(EventKind::WidgetClick, 0)
    }

    /// Change the focused widget's value by `delta`.
    pub const fn widget_value(delta: EventValue) -> Self {
        Self::new(EventKind::WidgetValueChange, delta)
    }
}

impl core::fmt::Debug for Event {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind())
            .field("value", &self.value())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [EventKind; 4] = [
        EventKind::Update,
        EventKind::PageCursorMove,
        EventKind::WidgetClick,
        EventKind::WidgetValueChange,
    ];

    #[test]
    fn value_range_is_five_bit_signed() {
        assert_eq!(EVENT_VALUE_MAX, 15);
        assert_eq!(EVENT_VALUE_MIN, -16);
    }

    #[test]
    fn every_in_range_pair_decodes_exactly() {
        for kind in KINDS {
            for value in EVENT_VALUE_MIN..=EVENT_VALUE_MAX {
                let event = Event::new(kind, value);
                assert_eq!(event.kind(), kind);
                assert_eq!(event.value(), value);
            }
        }
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let high = Event::new(EventKind::WidgetValueChange, 100);
        assert_eq!(high.kind(), EventKind::WidgetValueChange);
        assert_eq!(high.value(), EVENT_VALUE_MAX);

        let low = Event::new(EventKind::PageCursorMove, i8::MIN);
        assert_eq!(low.kind(), EventKind::PageCursorMove);
        assert_eq!(low.value(), EVENT_VALUE_MIN);

        let edge = Event::new(EventKind::Update, 16);
        assert_eq!(edge.kind(), EventKind::Update);
        assert_eq!(edge.value(), 15);
    }

    #[test]
    fn packed_layout() {
        assert_eq!(Event::update().bits(), 0b001_00000);
        assert_eq!(Event::widget_click().bits(), 0b011_00000);
        assert_eq!(Event::page_cursor_move(1).bits(), 0b010_00001);
        assert_eq!(Event::widget_value(-1).bits(), 0b100_11111);
    }

    #[test]
    fn from_bits_rejects_unknown_types() {
        assert_eq!(Event::from_bits(0x00), None);
        assert_eq!(Event::from_bits(0b101_00000), None);
        assert_eq!(Event::from_bits(0xFF), None);

        let decoded = Event::from_bits(0b010_11110).unwrap();
        assert_eq!(decoded.kind(), EventKind::PageCursorMove);
        assert_eq!(decoded.value(), -2);
    }

    #[test]
    fn named_constructors_default_to_zero() {
        assert_eq!(Event::update().value(), 0);
        assert_eq!(Event::widget_click().value(), 0);
        assert_eq!(Event::widget_click(), Event::new(EventKind::WidgetClick, 0));
    }
}
