//! State for the testimonial carousel.
//!
//! The carousel shows a window of `items_visible` cards out of a fixed list
//! and navigates by whole items with wraparound at both ends. All transitions
//! are pure functions over a small copyable record, so the hosting component
//! stays a thin adapter and the behavior is testable without a browser.

/// Carousel position plus the viewport-derived window size.
///
/// Invariant: after construction and after every transition,
/// `current_index <= max_index()` and `1 <= items_visible <= total_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    /// Index of the first visible item.
    current_index: usize,
    /// Number of items shown at once.
    items_visible: usize,
    /// Total number of items in the list.
    total_items: usize,
}

/// Navigation requests produced by the carousel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    Previous,
    Next,
    GoTo(usize),
    SetItemsVisible(usize),
}

impl CarouselState {
    /// Creates a carousel over `total_items` items showing `items_visible`
    /// at once. An out-of-range window size is clamped into
    /// `[1, total_items]` rather than rejected.
    pub fn new(total_items: usize, items_visible: usize) -> Self {
        Self {
            current_index: 0,
            items_visible: items_visible.clamp(1, total_items.max(1)),
            total_items,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn items_visible(&self) -> usize {
        self.items_visible
    }

    /// Highest valid `current_index`: the list length minus the window.
    pub fn max_index(&self) -> usize {
        self.total_items.saturating_sub(self.items_visible)
    }

    /// Number of navigable positions, one dot per position.
    pub fn dot_count(&self) -> usize {
        self.max_index() + 1
    }

    pub fn is_active_dot(&self, dot: usize) -> bool {
        dot == self.current_index
    }

    /// Whether the item at `index` falls inside the visible window.
    pub fn window_contains(&self, index: usize) -> bool {
        index >= self.current_index && index < self.current_index + self.items_visible
    }

    /// The contiguous run of visible items.
    pub fn visible_window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = (self.current_index + self.items_visible).min(items.len());
        let start = self.current_index.min(end);
        &items[start..end]
    }

    /// Track translation for the renderer: the full list is laid out on one
    /// row and shifted left by this percentage, which is equivalent to
    /// windowing at `current_index`.
    pub fn offset_percent(&self) -> f32 {
        self.current_index as f32 * 100.0 / self.items_visible as f32
    }

    /// Advances by one item, wrapping from the end back to the start.
    #[must_use]
    pub fn next(self) -> Self {
        let current_index = if self.current_index >= self.max_index() {
            0
        } else {
            self.current_index + 1
        };
        Self {
            current_index,
            ..self
        }
    }

    /// Steps back by one item, wrapping from the start to the end.
    #[must_use]
    pub fn previous(self) -> Self {
        let current_index = if self.current_index == 0 {
            self.max_index()
        } else {
            self.current_index - 1
        };
        Self {
            current_index,
            ..self
        }
    }

    /// Jumps to a dot position. Out-of-range requests are clamped to the
    /// last valid position instead of trusting the caller.
    #[must_use]
    pub fn go_to(self, index: usize) -> Self {
        Self {
            current_index: index.min(self.max_index()),
            ..self
        }
    }

    /// Applies a new window size, clamped into `[1, total_items]`, and
    /// re-clamps `current_index` so the window never runs past the end.
    /// Without the re-clamp a desktop-to-mobile resize could leave the track
    /// translated onto empty space until the next navigation.
    #[must_use]
    pub fn set_items_visible(self, count: usize) -> Self {
        let items_visible = count.clamp(1, self.total_items.max(1));
        let next = Self {
            items_visible,
            ..self
        };
        Self {
            current_index: self.current_index.min(next.max_index()),
            ..next
        }
    }

    #[must_use]
    pub fn apply(self, message: CarouselMessage) -> Self {
        match message {
            CarouselMessage::Previous => self.previous(),
            CarouselMessage::Next => self.next(),
            CarouselMessage::GoTo(index) => self.go_to(index),
            CarouselMessage::SetItemsVisible(count) => self.set_items_visible(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTAL: usize = 6;

    #[test]
    fn full_cycle_returns_to_start() {
        // items_visible = 3 leaves 4 positions; four next() calls close the loop.
        let mut state = CarouselState::new(TOTAL, 3);
        assert_eq!(state.max_index(), 3);
        for _ in 0..state.dot_count() {
            state = state.next();
        }
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn previous_undoes_next_across_the_range() {
        let base = CarouselState::new(TOTAL, 3);
        for start in 0..=base.max_index() {
            let state = base.go_to(start);
            assert_eq!(state.next().previous().current_index(), start);
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let state = CarouselState::new(TOTAL, 3);
        assert_eq!(state.go_to(3).next().current_index(), 0);
        assert_eq!(state.previous().current_index(), 3);
    }

    #[test]
    fn dot_count_tracks_window_size() {
        assert_eq!(CarouselState::new(TOTAL, 3).dot_count(), 4);
        assert_eq!(CarouselState::new(TOTAL, 1).dot_count(), 6);
    }

    #[test]
    fn widening_the_window_reclamps_the_index() {
        // Mobile -> desktop with the carousel parked on the last card.
        let state = CarouselState::new(TOTAL, 1).go_to(5);
        let resized = state.set_items_visible(3);
        assert_eq!(resized.current_index(), 3);
        assert_eq!(resized.current_index(), resized.max_index());
    }

    #[test]
    fn narrowing_the_window_keeps_a_valid_index() {
        let state = CarouselState::new(TOTAL, 3).go_to(3);
        let resized = state.set_items_visible(1);
        assert_eq!(resized.current_index(), 3);
        assert!(resized.current_index() <= resized.max_index());
    }

    #[test]
    fn go_to_is_exact_in_range_and_clamped_outside() {
        let state = CarouselState::new(TOTAL, 3);
        for dot in 0..state.dot_count() {
            let moved = state.go_to(dot);
            assert_eq!(moved.current_index(), dot);
            assert!(moved.is_active_dot(dot));
        }
        assert_eq!(state.go_to(99).current_index(), state.max_index());
    }

    #[test]
    fn constructor_clamps_window_size() {
        assert_eq!(CarouselState::new(TOTAL, 0).items_visible(), 1);
        assert_eq!(CarouselState::new(TOTAL, 99).items_visible(), TOTAL);
        assert_eq!(CarouselState::new(TOTAL, 99).dot_count(), 1);
    }

    #[test]
    fn visible_window_is_the_contiguous_run() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let state = CarouselState::new(items.len(), 3).go_to(2);
        assert_eq!(state.visible_window(&items), &["c", "d", "e"]);
        assert!(state.window_contains(2));
        assert!(state.window_contains(4));
        assert!(!state.window_contains(5));
    }

    #[test]
    fn offset_is_proportional_to_index_and_window() {
        let state = CarouselState::new(TOTAL, 3).go_to(2);
        assert_eq!(state.offset_percent(), 2.0 * 100.0 / 3.0);
        assert_eq!(CarouselState::new(TOTAL, 1).go_to(4).offset_percent(), 400.0);
    }

    #[test]
    fn messages_map_to_transitions() {
        let state = CarouselState::new(TOTAL, 3);
        assert_eq!(state.apply(CarouselMessage::Next), state.next());
        assert_eq!(state.apply(CarouselMessage::Previous), state.previous());
        assert_eq!(state.apply(CarouselMessage::GoTo(2)), state.go_to(2));
        assert_eq!(
            state.apply(CarouselMessage::SetItemsVisible(1)),
            state.set_items_visible(1)
        );
    }
}
