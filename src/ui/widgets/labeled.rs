use crate::event::EventValue;
use crate::render::Render;
use crate::ui::Widget;

/// Decorator printing `label: ` in front of the wrapped widget.
///
/// Events are forwarded verbatim and the wrapped widget's answer is
/// returned unchanged.
pub struct Labeled<'w, W> {
    label: &'w str,
    inner: W,
}

impl<'w, W: Widget> Labeled<'w, W> {
    pub const fn new(label: &'w str, inner: W) -> Self {
        Self { label, inner }
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }
}

impl<W: Widget> Widget for Labeled<'_, W> {
    fn draw(&self, render: &mut dyn Render) {
        render.text(self.label);
        render.colon();
        self.inner.draw(render);
    }

    fn on_click(&self) -> bool {
        self.inner.on_click()
    }

    fn on_value(&self, value: EventValue) -> bool {
        self.inner.on_value(value)
    }
}
