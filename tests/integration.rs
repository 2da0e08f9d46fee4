//! Integration tests for the menu engine, driven through the public API
//! with the text renderer.

use core::cell::{Cell, RefCell};

use tickmenu::config::{MAX_EVENTS_PER_POLL, MAX_PAGES};
use tickmenu::event::{Event, EventKind};
use tickmenu::input::{split_delta, EncoderRouter, Key};
use tickmenu::render::{TextRender, TextRenderConfig};
use tickmenu::ui::{
    Arithmetic, Button, CheckBox, ComboBox, ComboItem, Display, EventQueue, Labeled, Page,
    PageHooks, SpinBox, Ui,
};
use tickmenu::Error;

type Frames = RefCell<Vec<String>>;

/// Records lifecycle calls as `"<page>:<hook>"`.
struct Tracer<'a> {
    name: &'static str,
    log: &'a RefCell<Vec<String>>,
}

impl PageHooks for Tracer<'_> {
    fn on_entry(&self) {
        self.log.borrow_mut().push(format!("{}:entry", self.name));
    }

    fn on_exit(&self) {
        self.log.borrow_mut().push(format!("{}:exit", self.name));
    }

    fn on_update(&self, now: u64) {
        self.log.borrow_mut().push(format!("{}:update@{}", self.name, now));
    }
}

#[test]
fn one_frame_per_poll_regardless_of_event_count() {
    let frames: Frames = RefCell::new(Vec::new());
    let mut sink = |frame: &str| frames.borrow_mut().push(frame.to_string());

    let first = CheckBox::new(false);
    let second = CheckBox::new(false);
    let mut page = Page::new("Opts");
    page.add_widget(&first).unwrap();
    page.add_widget(&second).unwrap();

    let mut ui: Ui<'_, TextRender<'_, 128>> = Ui::new(TextRender::new(TextRenderConfig {
        on_render_finish: Some(&mut sink),
        ..TextRenderConfig::default()
    }));
    let page = ui.add_page(page).unwrap();
    ui.bind_page(page).unwrap();

    ui.add_events([
        Event::widget_click(),
        Event::page_cursor_move(1),
        Event::widget_click(),
        Event::update(),
    ])
    .unwrap();

    assert!(ui.poll(0));
    assert!(first.state());
    assert!(second.state());
    assert_eq!(*frames.borrow(), ["Opts\n==[ 1 ]\n\x0E==[ 1 ]\x0F"]);

    assert!(!ui.poll(1));
    assert_eq!(frames.borrow().len(), 1);
}

#[test]
fn poll_drains_at_most_one_batch() {
    let renders = Cell::new(0);
    let mut sink = |_: &str| renders.set(renders.get() + 1);

    let mut ui: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::new(TextRenderConfig {
        on_render_finish: Some(&mut sink),
        ..TextRenderConfig::default()
    }));
    let page = ui.add_page(Page::new("Idle")).unwrap();
    ui.bind_page(page).unwrap();

    let total = MAX_EVENTS_PER_POLL + 5;
    ui.add_events(core::iter::repeat(Event::update()).take(total))
        .unwrap();

    assert!(ui.poll(0));
    assert_eq!(ui.pending_events(), 5);
    assert_eq!(renders.get(), 1);

    assert!(ui.poll(1));
    assert_eq!(ui.pending_events(), 0);
    assert_eq!(renders.get(), 2);
}

#[test]
fn update_hook_runs_even_without_events() {
    let log = RefCell::new(Vec::new());
    let hooks = Tracer {
        name: "home",
        log: &log,
    };

    let mut ui: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::default());
    let home = ui.add_page(Page::with_hooks("Home", &hooks)).unwrap();

    // Nothing is bound yet, so nothing runs.
    assert!(!ui.poll(5));
    assert!(log.borrow().is_empty());

    ui.bind_page(home).unwrap();
    assert!(!ui.poll(10));
    assert!(!ui.poll(20));
    assert_eq!(
        *log.borrow(),
        ["home:entry", "home:update@10", "home:update@20"]
    );
}

#[test]
fn bind_page_runs_exit_before_entry() {
    let log = RefCell::new(Vec::new());
    let a_hooks = Tracer { name: "a", log: &log };
    let b_hooks = Tracer { name: "b", log: &log };

    let mut ui: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::default());
    let a = ui.add_page(Page::with_hooks("A", &a_hooks)).unwrap();
    let b = ui.add_page(Page::with_hooks("B", &b_hooks)).unwrap();

    ui.bind_page(a).unwrap();
    ui.bind_page(b).unwrap();
    ui.bind_page(b).unwrap();

    assert_eq!(
        *log.borrow(),
        ["a:entry", "a:exit", "b:entry", "b:exit", "b:entry"]
    );
    assert_eq!(ui.active_page(), Some(b));
}

#[test]
fn linked_pages_navigate_both_ways() {
    let log = RefCell::new(Vec::new());
    let main_hooks = Tracer {
        name: "main",
        log: &log,
    };
    let frames: Frames = RefCell::new(Vec::new());
    let mut sink = |frame: &str| frames.borrow_mut().push(frame.to_string());

    let mut ui: Ui<'_, TextRender<'_, 128>> = Ui::new(TextRender::new(TextRenderConfig {
        on_render_finish: Some(&mut sink),
        ..TextRenderConfig::default()
    }));
    let main = ui.add_page(Page::with_hooks("Main", &main_hooks)).unwrap();
    let settings = ui.add_page(Page::new("Settings")).unwrap();
    ui.link(main, settings).unwrap();
    ui.bind_page(main).unwrap();

    ui.add_event(Key::Select.into()).unwrap();
    assert!(ui.poll(0));
    assert_eq!(ui.active_page(), Some(settings));

    ui.add_event(Key::Select.into()).unwrap();
    assert!(ui.poll(1));
    assert_eq!(ui.active_page(), Some(main));

    assert_eq!(
        *frames.borrow(),
        ["Settings\n\x0E-> Main\x0F", "Main\n\x0E-> Settings\x0F"]
    );
    assert_eq!(*log.borrow(), ["main:entry", "main:update@0", "main:exit", "main:entry"]);
}

#[test]
fn link_to_self_needs_two_slots() {
    let filler = CheckBox::new(false);
    let mut almost_full = Page::new("Loop");
    for _ in 0..tickmenu::config::MAX_WIDGETS_PER_PAGE - 1 {
        almost_full.add_widget(&filler).unwrap();
    }

    let mut ui: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::default());
    let looped = ui.add_page(almost_full).unwrap();
    assert_eq!(ui.link(looped, looped), Err(Error::PageFull));

    let fresh = ui.add_page(Page::new("Fresh")).unwrap();
    ui.link(fresh, fresh).unwrap();
    let page = ui.page(fresh).unwrap();
    assert_eq!(page.widgets_total(), 2);
    assert_eq!(page.link_target(0), Some(fresh));
    assert_eq!(page.link_target(1), Some(fresh));
}

#[test]
fn page_table_is_bounded() {
    let mut ui: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::default());
    for _ in 0..MAX_PAGES {
        ui.add_page(Page::new("P")).unwrap();
    }
    assert_eq!(ui.add_page(Page::new("Extra")), Err(Error::PageTableFull));
}

#[test]
fn engines_are_independent() {
    let left_box = CheckBox::new(false);
    let right_box = CheckBox::new(false);

    let mut left_page = Page::new("Left");
    left_page.add_widget(&left_box).unwrap();
    let mut right_page = Page::new("Right");
    right_page.add_widget(&right_box).unwrap();

    let mut left: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::default());
    let mut right: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::default());
    let id = left.add_page(left_page).unwrap();
    left.bind_page(id).unwrap();
    let id = right.add_page(right_page).unwrap();
    right.bind_page(id).unwrap();

    left.add_event(Event::widget_click()).unwrap();
    assert!(left.poll(0));
    assert!(!right.poll(0));

    assert!(left_box.state());
    assert!(!right_box.state());
    assert_eq!(left.renderer().frame(), "Left\n\x0E==[ 1 ]\x0F");
    assert_eq!(right.pending_events(), 0);
}

#[test]
fn encoder_edits_spin_box_in_edit_mode() {
    let last = Cell::new(0);
    let on_change = |v: i32| last.set(v);
    let speed = Labeled::new(
        "Speed",
        SpinBox::<i32, Arithmetic>::new(10).with_handler(&on_change),
    );
    let mode = Labeled::new(
        "Mode",
        ComboBox::new([ComboItem::label("eco"), ComboItem::label("turbo")]),
    );

    let mut page = Page::new("Motor");
    page.add_widget(&speed).unwrap();
    page.add_widget(&mode).unwrap();

    let mut ui: Ui<'_, TextRender<'_, 128>> = Ui::new(TextRender::default());
    let page = ui.add_page(page).unwrap();
    ui.bind_page(page).unwrap();

    let mut encoder = EncoderRouter::new();
    encoder.toggle_mode();
    ui.add_events(encoder.rotate(25)).unwrap();
    assert!(ui.poll(0));
    assert_eq!(speed.inner().value(), 35);
    assert_eq!(last.get(), 35);
    assert_eq!(ui.renderer().frame(), "Motor\n\x0ESpeed: <35>\x0F\nMode: <eco>");

    encoder.toggle_mode();
    ui.add_events(encoder.rotate(1)).unwrap();
    ui.add_event(Key::Right.into()).unwrap();
    assert!(ui.poll(1));
    assert_eq!(mode.inner().selected().key(), "turbo");
    assert_eq!(ui.renderer().frame(), "Motor\nSpeed: <35>\n\x0EMode: <turbo>\x0F");
}

#[test]
fn long_page_scrolls_to_keep_focus_visible() {
    let labels = ["one", "two", "three", "four", "five"];
    let buttons = labels.map(Button::new);
    let mut page = Page::new("List");
    for button in &buttons {
        page.add_widget(button).unwrap();
    }

    let mut ui: Ui<'_, TextRender<'_, 128>> = Ui::new(TextRender::default());
    let page = ui.add_page(page).unwrap();
    ui.bind_page(page).unwrap();

    ui.add_events(split_delta(EventKind::PageCursorMove, 4))
        .unwrap();
    assert!(ui.poll(0));
    assert_eq!(ui.renderer().frame(), "List\n[three]\n[four]\n\x0E[five]\x0F");

    ui.add_event(Key::Down.into()).unwrap();
    assert!(ui.poll(1));
    assert_eq!(ui.renderer().frame(), "List\n\x0E[one]\x0F\n[two]\n[three]");
}

#[test]
fn display_tracks_host_value() {
    let temperature = Cell::new(21.25f32);
    let reading = Labeled::new("Temp", Display::new(&temperature));
    let mut page = Page::new("Sensors");
    page.add_widget(&reading).unwrap();

    let mut ui: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::default());
    let page = ui.add_page(page).unwrap();
    ui.bind_page(page).unwrap();

    ui.add_event(Event::update()).unwrap();
    assert!(ui.poll(0));
    assert_eq!(ui.renderer().frame(), "Sensors\n\x0ETemp: 21.25\x0F");

    temperature.set(-3.5);
    ui.add_event(Event::update()).unwrap();
    assert!(ui.poll(100));
    assert_eq!(ui.renderer().frame(), "Sensors\n\x0ETemp: -3.50\x0F");
}

#[test]
fn full_queue_reports_error() {
    let mut ui: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::default());
    let result = ui.add_events(core::iter::repeat(Event::update()).take(100));
    assert_eq!(result, Err(Error::QueueFull));
    assert_eq!(
        ui.pending_events(),
        tickmenu::config::EVENT_QUEUE_CAPACITY
    );
}

#[test]
fn interrupt_queue_feeds_the_engine() {
    let mut queue = EventQueue::new();
    let (mut producer, consumer) = queue.split();

    let alarm = CheckBox::new(false);
    let mut page = Page::new("Alarm");
    page.add_widget(&alarm).unwrap();

    let mut ui: Ui<'_, TextRender<'_, 64>> = Ui::new(TextRender::default());
    let page = ui.add_page(page).unwrap();
    ui.bind_page(page).unwrap();
    ui.attach_source(consumer);

    // Interrupt-side pushes interleave with engine-side ones.
    ui.add_event(Event::widget_click()).unwrap();
    producer.enqueue(Key::Select.into()).unwrap();
    producer.enqueue(Key::Select.into()).unwrap();

    assert!(ui.poll(0));
    assert!(alarm.state());
    assert_eq!(ui.renderer().frame(), "Alarm\n\x0E==[ 1 ]\x0F");
    assert_eq!(ui.pending_events(), 0);
}
