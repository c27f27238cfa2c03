//! Viewport-derived state: the responsive breakpoint and the scroll-direction
//! machine behind the sticky nav. Both are plain records with pure transitions;
//! the event listeners live in the components that host them.

/// Width below which the layout switches to the single-column mobile view.
pub const COMPACT_MAX_WIDTH: f64 = 768.0;

/// Show-at-top buffer for the nav, in pixels.
const TOP_BUFFER: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Compact,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < COMPACT_MAX_WIDTH {
            Breakpoint::Compact
        } else {
            Breakpoint::Wide
        }
    }

    /// How many testimonial cards fit at this breakpoint.
    pub fn items_visible(self) -> usize {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Wide => 3,
        }
    }
}

/// Scroll-direction state for the fixed top nav: always shown inside the top
/// buffer, shown while the page scrolls down, hidden while it scrolls up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavVisibility {
    visible: bool,
    last_y: f64,
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            last_y: 0.0,
        }
    }
}

impl NavVisibility {
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Folds one scroll observation into the next state. Idempotent for a
    /// repeated `y`, so the raw listener needs no throttling.
    #[must_use]
    pub fn on_scroll(self, y: f64) -> Self {
        let visible = if y < TOP_BUFFER {
            true
        } else if y > self.last_y {
            true
        } else if y < self.last_y {
            false
        } else {
            self.visible
        };
        Self { visible, last_y: y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_splits_at_768() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(1440.0), Breakpoint::Wide);
    }

    #[test]
    fn breakpoint_window_sizes() {
        assert_eq!(Breakpoint::Compact.items_visible(), 1);
        assert_eq!(Breakpoint::Wide.items_visible(), 3);
    }

    #[test]
    fn nav_starts_visible() {
        assert!(NavVisibility::default().visible());
    }

    #[test]
    fn nav_shows_while_scrolling_down_and_hides_on_the_way_up() {
        let nav = NavVisibility::default().on_scroll(200.0);
        assert!(nav.visible());
        let nav = nav.on_scroll(150.0);
        assert!(!nav.visible());
        let nav = nav.on_scroll(300.0);
        assert!(nav.visible());
    }

    #[test]
    fn nav_always_visible_inside_the_top_buffer() {
        // Scrolling up into the buffer would otherwise hide it.
        let nav = NavVisibility::default().on_scroll(200.0).on_scroll(5.0);
        assert!(nav.visible());
    }

    #[test]
    fn repeated_position_keeps_the_current_state() {
        let nav = NavVisibility::default().on_scroll(200.0).on_scroll(100.0);
        assert!(!nav.visible());
        assert_eq!(nav.on_scroll(100.0), nav);
    }
}
