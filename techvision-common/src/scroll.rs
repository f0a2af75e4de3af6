//! Scroll-driven navigation highlighting.
//!
//! The active section is the first section, in navigation order, whose
//! vertical bounds contain the probe position `scroll_y + focus_offset`.
//! When no section contains the probe the previous value is kept; there is
//! no "none" state.

use crate::nav::SectionKey;
use tracing::{debug, trace};

/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `top <= probe < top + height`.
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.bottom()
    }
}

/// Source of section geometry. Returns `None` for sections that are not
/// rendered (yet); those are skipped.
pub trait SectionLayout {
    fn bounds(&self, key: SectionKey) -> Option<SectionBounds>;
}

impl SectionLayout for [(SectionKey, SectionBounds)] {
    fn bounds(&self, key: SectionKey) -> Option<SectionBounds> {
        self.iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, bounds)| *bounds)
    }
}

impl<const N: usize> SectionLayout for [(SectionKey, SectionBounds); N] {
    fn bounds(&self, key: SectionKey) -> Option<SectionBounds> {
        self.as_slice().bounds(key)
    }
}

pub fn probe_position(scroll_y: f64, focus_offset: f64) -> f64 {
    scroll_y + focus_offset
}

/// Returns the section containing the probe, or `None` to mean "unchanged".
pub fn resolve_active_section<L>(scroll_y: f64, focus_offset: f64, layout: &L) -> Option<SectionKey>
where
    L: SectionLayout + ?Sized,
{
    let probe = probe_position(scroll_y, focus_offset);
    SectionKey::ALL.into_iter().find(|key| match layout.bounds(*key) {
        Some(bounds) => bounds.contains(probe),
        None => {
            trace!("section {} not rendered, skipping", key);
            false
        }
    })
}

/// Holds the active section across scroll events.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    active: SectionKey,
    focus_offset: f64,
}

impl ScrollTracker {
    pub fn new(focus_offset: f64) -> Self {
        Self {
            active: SectionKey::default(),
            focus_offset,
        }
    }

    pub fn active(&self) -> SectionKey {
        self.active
    }

    pub fn focus_offset(&self) -> f64 {
        self.focus_offset
    }

    /// Re-evaluates the active section. Returns the new key only when it
    /// differs from the previous one.
    pub fn on_scroll<L>(&mut self, scroll_y: f64, layout: &L) -> Option<SectionKey>
    where
        L: SectionLayout + ?Sized,
    {
        let found = resolve_active_section(scroll_y, self.focus_offset, layout)?;
        if found == self.active {
            return None;
        }
        debug!(from = %self.active, to = %found, scroll_y, "active section changed");
        self.active = found;
        Some(found)
    }
}

/// Something that emits scroll notifications, e.g. the browser window.
pub trait ScrollSource {
    type Handle;

    fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Self::Handle;
    fn unsubscribe(&self, handle: Self::Handle);
}

/// Owns a scroll listener for the lifetime of a component.
///
/// The listener is removed exactly once, either by [`release`] or when the
/// guard is dropped. Releasing a guard that never subscribed, or releasing
/// twice, does nothing.
///
/// [`release`]: ScrollSubscription::release
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    /// A guard holding no listener.
    pub fn detached(source: S) -> Self {
        Self {
            source,
            handle: None,
        }
    }

    pub fn attach(source: S, on_scroll: Box<dyn FnMut()>) -> Self {
        let handle = source.subscribe(on_scroll);
        debug!("scroll listener attached");
        Self {
            source,
            handle: Some(handle),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns true if a listener was removed by this call.
    pub fn release(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                self.source.unsubscribe(handle);
                debug!("scroll listener released");
                true
            }
            None => false,
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}
