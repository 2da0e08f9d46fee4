//! Menu engine - pages of widgets driven by a bounded event loop.
//!
//! Input collaborators (buttons, encoders, remote commands) enqueue
//! [`Event`]s. Each [`Ui::poll`] drains at most `MAX_EVENTS_PER_POLL` of
//! them into the active [`Page`], which forwards interaction events to its
//! focused [`Widget`]. If any of them asked for a redraw, the page is
//! rendered exactly once.
//!
//! ## Components
//!
//! - **Widget**: render contract plus optional click/value handlers
//! - **Page**: widget list, focus cursor, scroll window, lifecycle hooks
//! - **Ui**: page table, event FIFO, renderer, poll loop
//!
//! The engine is a plain value: construct it, hand it to whatever drives
//! the main loop, and any number of engines can coexist.
//!
//! ## Interrupt producers
//!
//! `add_event` needs `&mut Ui`. Events raised in interrupt context go
//! through an [`EventQueue`] instead: the ISR keeps the
//! [`EventProducer`] half and the engine, via [`Ui::attach_source`], the
//! [`EventConsumer`] half. Each poll moves queued events into the engine
//! FIFO as long as it has room, so nothing is dropped.

mod page;
mod step;
mod widget;
pub mod widgets;


use heapless::spsc::{Consumer, Producer, Queue};
use heapless::{Deque, Vec};

pub use page::{Page, PageHooks, PageId, Response};
pub use step::{Arithmetic, ArithmeticPositiveOnly, Geometric, Number, StepMode};
pub use widget::Widget;
pub use widgets::{Button, CheckBox, ComboBox, ComboItem, Display, Labeled, SpinBox};

use crate::config::{EVENT_QUEUE_CAPACITY, MAX_EVENTS_PER_POLL, MAX_PAGES};
use crate::error::Error;
use crate::event::Event;
use crate::render::{Configured, Render};

/// Monotonic timestamp handed to [`Ui::poll`].
pub type Milliseconds = u64;

/// Single-producer/single-consumer event queue for interrupt producers.
///
/// Holds `EVENT_QUEUE_CAPACITY - 1` events.
pub type EventQueue = Queue<Event, EVENT_QUEUE_CAPACITY>;

/// Producer half of an [`EventQueue`], kept by the interrupt handler.
pub type EventProducer<'q> = Producer<'q, Event, EVENT_QUEUE_CAPACITY>;

/// Consumer half of an [`EventQueue`], handed to [`Ui::attach_source`].
pub type EventConsumer<'q> = Consumer<'q, Event, EVENT_QUEUE_CAPACITY>;

/// The UI engine: active page, pending events and one renderer.
pub struct Ui<'w, R> {
    pages: Vec<Page<'w>, MAX_PAGES>,
    events: Deque<Event, EVENT_QUEUE_CAPACITY>,
    source: Option<EventConsumer<'w>>,
    active: Option<PageId>,
    render: R,
}

impl<'w, R: Render> Ui<'w, R> {
    pub fn new(render: R) -> Self {
        Self {
            pages: Vec::new(),
            events: Deque::new(),
            source: None,
            active: None,
            render,
        }
    }

    /// Move a fully assembled page into the page table.
    pub fn add_page(&mut self, page: Page<'w>) -> Result<PageId, Error> {
        let id = PageId::new(self.pages.len() as u8);
        self.pages.push(page).map_err(|_| {
            warn!("page table is full");
            Error::PageTableFull
        })?;
        Ok(id)
    }

    pub fn page(&self, id: PageId) -> Result<&Page<'w>, Error> {
        self.pages.get(id.index()).ok_or(Error::UnknownPage(id))
    }

    pub fn page_mut(&mut self, id: PageId) -> Result<&mut Page<'w>, Error> {
        self.pages.get_mut(id.index()).ok_or(Error::UnknownPage(id))
    }

    /// Link two pages both ways: `a` gets an entry leading to `b` and `b`
    /// one leading back to `a`.
    ///
    /// Either both entries are added or neither is.
    pub fn link(&mut self, a: PageId, b: PageId) -> Result<(), Error> {
        let title_a = self.page(a)?.title();
        let title_b = self.page(b)?.title();

        let fits = if a == b {
            self.page(a)?.free_slots() >= 2
        } else {
            self.page(a)?.free_slots() >= 1 && self.page(b)?.free_slots() >= 1
        };
        if !fits {
            warn!("cannot link pages #{} and #{}: no free slot", a.index(), b.index());
            return Err(Error::PageFull);
        }

        self.page_mut(a)?.add_link(b, title_b)?;
        self.page_mut(b)?.add_link(a, title_a)
    }

    /// Make `id` the active page.
    ///
    /// The previous page (if any) gets its exit hook, then the new page its
    /// entry hook. Rebinding the active page runs both.
    pub fn bind_page(&mut self, id: PageId) -> Result<(), Error> {
        self.page(id)?;

        if let Some(previous) = self.active {
            self.page(previous)?.exit();
        }

        self.active = Some(id);
        self.page(id)?.enter();
        info!("bound page #{}", id.index());
        Ok(())
    }

    pub fn active_page(&self) -> Option<PageId> {
        self.active
    }

    /// Queue one event for the next poll.
    pub fn add_event(&mut self, event: Event) -> Result<(), Error> {
        self.events.push_back(event).map_err(|_rejected| {
            warn!("event queue full, dropping {}", _rejected);
            Error::QueueFull
        })
    }

    /// Queue several events in order, stopping at the first that does not fit.
    pub fn add_events<I>(&mut self, events: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.add_event(event)?;
        }
        Ok(())
    }

    /// Events waiting in the engine FIFO. Events still sitting in an
    /// attached source are not counted.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Take events from an interrupt-fed queue on every poll.
    ///
    /// Replaces a previously attached source.
    pub fn attach_source(&mut self, source: EventConsumer<'w>) {
        if self.source.replace(source).is_some() {
            warn!("replacing attached event source");
        }
    }

    /// Move events from the attached source into the FIFO while it has room.
    fn collect_source(&mut self) {
        let Some(source) = self.source.as_mut() else {
            return;
        };

        while !self.events.is_full() {
            let Some(event) = source.dequeue() else {
                break;
            };
            // Room was checked above.
            let _ = self.events.push_back(event);
        }
    }

    /// Run one bounded step of the event loop.
    ///
    /// Calls the active page's update hook, pulls events from the attached
    /// source, dispatches up to `MAX_EVENTS_PER_POLL` queued events and
    /// renders once if any of them requested it. Returns whether a render
    /// pass happened.
    pub fn poll(&mut self, now: Milliseconds) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if let Ok(page) = self.page(active) {
            page.update(now);
        }

        self.collect_source();
        if self.events.is_empty() {
            return false;
        }

        let mut processed = 0;
        let mut render_required = false;

        while processed < MAX_EVENTS_PER_POLL {
            let Some(event) = self.events.pop_front() else {
                break;
            };
            processed += 1;
            render_required |= self.dispatch(event);
        }

        debug!(
            "poll: {} events, {} pending, render={}",
            processed,
            self.events.len(),
            render_required
        );

        if render_required {
            self.render_active();
        }
        render_required
    }

    fn dispatch(&mut self, event: Event) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let Ok(page) = self.page_mut(active) else {
            return false;
        };

        match page.on_event(event) {
            Response::Ignored => false,
            Response::Redraw => true,
            Response::Navigate(target) => {
                if self.bind_page(target).is_err() {
                    warn!("navigation to unknown page #{}", target.index());
                }
                true
            }
        }
    }

    fn render_active(&mut self) {
        let Some(page) = self.active.and_then(|id| self.pages.get(id.index())) else {
            return;
        };

        trace!("render pass: '{}'", page.title());
        self.render.prepare();
        page.render(&mut self.render);
        self.render.finish();
    }

    pub fn renderer(&self) -> &R {
        &self.render
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.render
    }
}

impl<'w, R: Render + Configured> Ui<'w, R> {
    /// Device-specific renderer settings, for the host to fill in at setup.
    pub fn render_config(&mut self) -> &mut R::Config {
        self.render.config_mut()
    }
}
