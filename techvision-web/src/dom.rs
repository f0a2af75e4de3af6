//! Browser adapters for the scroll tracker and click-to-scroll navigation.

use gloo::events::EventListener;
use techvision_common::{
    ScrollSource, ScrollSubscription, ScrollTracker, SectionBounds, SectionKey, SectionLayout,
};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Reads section geometry from the rendered page.
pub struct DomLayout {
    document: Option<Document>,
}

impl DomLayout {
    pub fn new(window: &Window) -> Self {
        Self {
            document: window.document(),
        }
    }
}

impl SectionLayout for DomLayout {
    fn bounds(&self, key: SectionKey) -> Option<SectionBounds> {
        let element = self
            .document
            .as_ref()?
            .get_element_by_id(key.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

#[derive(Clone)]
pub struct WindowScrollSource {
    window: Window,
}

impl WindowScrollSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ScrollSource for WindowScrollSource {
    type Handle = EventListener;

    fn subscribe(&self, mut on_scroll: Box<dyn FnMut()>) -> EventListener {
        EventListener::new(&self.window, "scroll", move |_| on_scroll())
    }

    fn unsubscribe(&self, handle: EventListener) {
        // gloo removes the listener from the window when it is dropped
        drop(handle);
    }
}

/// Evaluates the active section once now and then on every window scroll.
/// `on_change` only fires when the active section differs from the last one.
pub fn track_active_section<F>(
    focus_offset: f64,
    on_change: F,
) -> Option<ScrollSubscription<WindowScrollSource>>
where
    F: Fn(SectionKey) + 'static,
{
    let window = web_sys::window()?;
    let source = WindowScrollSource::new(window.clone());
    let mut tracker = ScrollTracker::new(focus_offset);

    let mut evaluate = move || {
        let Ok(scroll_y) = window.scroll_y() else {
            return;
        };
        let layout = DomLayout::new(&window);
        if let Some(key) = tracker.on_scroll(scroll_y, &layout) {
            on_change(key);
        }
    };
    evaluate();

    Some(ScrollSubscription::attach(source, Box::new(evaluate)))
}

/// Scrolls the section into view. Returns false when the section is not on
/// the page.
pub fn scroll_to_section(key: SectionKey, smooth: bool) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(key.id()))
    else {
        debug!(section = %key, "navigation target not found");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
