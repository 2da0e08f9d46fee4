//! Engine-wide constants and compile-time configuration.
//!
//! Container capacities, batching limits and renderer defaults live here
//! so they can be tuned in one place.

// Engine

/// Maximum number of pages one engine can hold.
pub const MAX_PAGES: usize = 8;

/// Widget slots per page (page navigation links count as widgets).
pub const MAX_WIDGETS_PER_PAGE: usize = 16;

/// Capacity of the pending event FIFO.
pub const EVENT_QUEUE_CAPACITY: usize = 32;

/// Upper bound on events dispatched by a single `poll` call.
///
/// Bounds the worst-case latency of one poll on single-core targets.
pub const MAX_EVENTS_PER_POLL: usize = 20;

// Event encoding
//
//   bit  7 6 5 | 4 3 2 1 0
//        type  | value (two's complement)

/// High bits of the packed event byte reserved for the event type.
pub const EVENT_TYPE_BITS: u32 = 3;

/// Low bits of the packed event byte carrying the signed value.
pub const EVENT_VALUE_BITS: u32 = 8 - EVENT_TYPE_BITS;

// Text renderer defaults (16x4 character LCD)

/// Characters per row.
pub const DEFAULT_ROW_MAX_LENGTH: u8 = 16;

/// Rows on the display, title row included.
pub const DEFAULT_ROWS_TOTAL: u8 = 4;

/// Decimal places printed for `f32` values.
pub const DEFAULT_FLOAT_PLACES: u8 = 2;

/// Decimal places printed for `f64` values.
pub const DEFAULT_DOUBLE_PLACES: u8 = 4;

// Spin boxes

/// Factor applied to a spin box step in step-adjust mode.
pub const STEP_MULTIPLIER: i32 = 10;
