//! Pages: ordered widget lists with a focus cursor and lifecycle hooks.

use heapless::Vec;

use super::{Milliseconds, Widget};
use crate::config::MAX_WIDGETS_PER_PAGE;
use crate::error::Error;
use crate::event::{Event, EventKind, EventValue};
use crate::render::Render;

/// Handle to a page held by a [`Ui`](super::Ui).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PageId(u8);

impl PageId {
    pub(crate) const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Position in the engine's page table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Outcome of routing one event to a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Nothing visible changed.
    Ignored,
    /// The page must be redrawn.
    Redraw,
    /// A navigation entry was clicked; bind the target page and redraw.
    Navigate(PageId),
}

impl Response {
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Response::Ignored)
    }
}

impl From<bool> for Response {
    fn from(redraw: bool) -> Self {
        if redraw {
            Response::Redraw
        } else {
            Response::Ignored
        }
    }
}

/// Page lifecycle hooks. Every method defaults to doing nothing.
pub trait PageHooks {
    /// The page became active.
    fn on_entry(&self) {}

    /// Another page is about to become active.
    fn on_exit(&self) {}

    /// Called on every poll while the page is active.
    fn on_update(&self, _now: Milliseconds) {}
}

/// Navigation entry created by [`Ui::link`](super::Ui::link).
///
/// Holds the target's id, never the page itself.
#[derive(Clone, Copy)]
struct PageLink<'w> {
    target: PageId,
    title: &'w str,
}

impl Widget for PageLink<'_> {
    fn draw(&self, render: &mut dyn Render) {
        render.arrow();
        render.text(self.title);
    }

    fn on_click(&self) -> bool {
        true
    }
}

#[derive(Clone, Copy)]
enum Slot<'w> {
    Widget(&'w dyn Widget),
    Link(PageLink<'w>),
}

impl<'w> Slot<'w> {
    fn widget(&self) -> &dyn Widget {
        match self {
            Slot::Widget(widget) => *widget,
            Slot::Link(link) => link as &dyn Widget,
        }
    }
}

/// An ordered, navigable collection of widgets.
pub struct Page<'w> {
    title: &'w str,
    widgets: Vec<Slot<'w>, MAX_WIDGETS_PER_PAGE>,
    cursor: usize,
    hooks: Option<&'w dyn PageHooks>,
}

impl<'w> Page<'w> {
    pub const fn new(title: &'w str) -> Self {
        Self {
            title,
            widgets: Vec::new(),
            cursor: 0,
            hooks: None,
        }
    }

    pub const fn with_hooks(title: &'w str, hooks: &'w dyn PageHooks) -> Self {
        Self {
            title,
            widgets: Vec::new(),
            cursor: 0,
            hooks: Some(hooks),
        }
    }

    pub fn title(&self) -> &'w str {
        self.title
    }

    /// Append a widget; insertion order is display and focus order.
    ///
    /// Adding the same widget twice is not detected.
    pub fn add_widget(&mut self, widget: &'w dyn Widget) -> Result<(), Error> {
        self.push(Slot::Widget(widget))
    }

    /// Append a navigation entry to page `target` titled `title`.
    pub fn add_link(&mut self, target: PageId, title: &'w str) -> Result<(), Error> {
        self.push(Slot::Link(PageLink { target, title }))
    }

    fn push(&mut self, slot: Slot<'w>) -> Result<(), Error> {
        self.widgets.push(slot).map_err(|_| {
            warn!("page '{}' is full", self.title);
            Error::PageFull
        })
    }

    pub fn widgets_total(&self) -> usize {
        self.widgets.len()
    }

    pub(crate) fn free_slots(&self) -> usize {
        self.widgets.capacity() - self.widgets.len()
    }

    /// Index of the focused widget.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Target of the navigation entry at `index`, if that slot is one.
    pub fn link_target(&self, index: usize) -> Option<PageId> {
        match self.widgets.get(index) {
            Some(Slot::Link(link)) => Some(link.target),
            _ => None,
        }
    }

    /// First widget index shown by [`render`](Self::render) when
    /// `available` widget rows fit on the display.
    ///
    /// The focused widget is always inside `[start, start + available)`.
    pub fn scroll_start(&self, available: usize) -> usize {
        let total = self.widgets_total();
        if total > available {
            self.cursor.min(total - available)
        } else {
            0
        }
    }

    /// Write the title and the visible window of widgets.
    pub fn render(&self, render: &mut dyn Render) {
        render.title(self.title);

        let available = render.widgets_available();
        let start = self.scroll_start(available);
        let end = (start + available).min(self.widgets_total());

        for index in start..end {
            render.begin_widget(index);
            self.widgets[index].widget().render(render, index == self.cursor);
            render.end_widget();
        }
    }

    /// Route one event.
    pub fn on_event(&mut self, event: Event) -> Response {
        match event.kind() {
            EventKind::Update => Response::Redraw,
            EventKind::PageCursorMove => self.move_cursor(event.value()).into(),
            EventKind::WidgetClick => match self.widgets.get(self.cursor) {
                Some(Slot::Link(link)) => Response::Navigate(link.target),
                Some(Slot::Widget(widget)) => widget.on_click().into(),
                None => Response::Ignored,
            },
            EventKind::WidgetValueChange => match self.widgets.get(self.cursor) {
                Some(slot) => slot.widget().on_value(event.value()).into(),
                None => Response::Ignored,
            },
        }
    }

    /// Move the cursor by `delta`, wrapping around.
    ///
    /// Returns `true` if the cursor actually moved.
    fn move_cursor(&mut self, delta: EventValue) -> bool {
        let total = self.widgets_total();
        if total < 2 {
            return false;
        }

        let previous = self.cursor;
        self.cursor = (previous as isize + isize::from(delta)).rem_euclid(total as isize) as usize;
        self.cursor != previous
    }

    pub(crate) fn enter(&self) {
        if let Some(hooks) = self.hooks {
            hooks.on_entry();
        }
    }

    pub(crate) fn exit(&self) {
        if let Some(hooks) = self.hooks {
            hooks.on_exit();
        }
    }

    pub(crate) fn update(&self, now: Milliseconds) {
        if let Some(hooks) = self.hooks {
            hooks.on_update(now);
        }
    }
}
