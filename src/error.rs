//! Unified error type for tickmenu.
//!
//! Event handling and rendering never fail; errors only surface where a
//! fixed-capacity container rejects an item or a page id is unknown.
//! All variants carry fixed-size data, no `alloc`.

use core::fmt;

use crate::ui::PageId;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Assembly
    /// The page has no free widget slot left.
    PageFull,

    /// The engine already holds `MAX_PAGES` pages.
    PageTableFull,

    /// The id was not handed out by this engine.
    UnknownPage(PageId),

    // Ingestion
    /// The event queue is full; the event was not enqueued.
    QueueFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PageFull => f.write_str("page has no free widget slot"),
            Error::PageTableFull => f.write_str("page table is full"),
            Error::UnknownPage(id) => write!(f, "unknown page #{}", id.index()),
            Error::QueueFull => f.write_str("event queue is full"),
        }
    }
}
