use proptest::prelude::*;
use techvision_common::scroll::resolve_active_section;
use techvision_common::{ScrollTracker, SectionBounds, SectionKey};

const FOCUS_OFFSET: f64 = 100.0;

/// Contiguous, non-overlapping sections stacked in navigation order.
fn stacked(heights: &[f64]) -> Vec<(SectionKey, SectionBounds)> {
    let mut top = 0.0;
    SectionKey::ALL
        .iter()
        .zip(heights)
        .map(|(key, height)| {
            let bounds = SectionBounds::new(top, *height);
            top += height;
            (*key, bounds)
        })
        .collect()
}

proptest! {
    #[test]
    fn probe_inside_section_selects_it(
        heights in prop::collection::vec(1.0f64..2000.0, 7),
        index in 0usize..7,
        fraction in 0.0f64..1.0,
    ) {
        let layout = stacked(&heights);
        let (key, bounds) = layout[index];
        let scroll_y = bounds.top + fraction * bounds.height - FOCUS_OFFSET;
        prop_assume!(bounds.contains(scroll_y + FOCUS_OFFSET));

        let mut tracker = ScrollTracker::new(FOCUS_OFFSET);
        tracker.on_scroll(scroll_y, layout.as_slice());
        prop_assert_eq!(tracker.active(), key);
    }

    #[test]
    fn probe_past_the_page_keeps_previous(
        heights in prop::collection::vec(1.0f64..2000.0, 7),
        index in 0usize..7,
        overshoot in 0.0f64..10_000.0,
    ) {
        let layout = stacked(&heights);
        let (key, bounds) = layout[index];
        let page_end = layout[6].1.bottom();

        let mut tracker = ScrollTracker::new(FOCUS_OFFSET);
        let midpoint = bounds.top + bounds.height / 2.0;
        tracker.on_scroll(midpoint - FOCUS_OFFSET, layout.as_slice());
        prop_assert_eq!(tracker.active(), key);

        let changed = tracker.on_scroll(page_end + overshoot, layout.as_slice());
        prop_assert_eq!(changed, None);
        prop_assert_eq!(tracker.active(), key);
        prop_assert_eq!(
            resolve_active_section(page_end + overshoot, FOCUS_OFFSET, layout.as_slice()),
            None
        );
    }
}
