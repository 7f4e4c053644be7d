//! Navigation highlighting.

/// Offset added to the scroll position before matching sections, so a
/// section counts as current slightly before it reaches the top.
pub const SECTION_DETECT_OFFSET: f64 = 100.0;

/// Vertical extent of a page section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section whose nav link should be highlighted at `scroll_y`.
///
/// When sections overlap the last match wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + SECTION_DETECT_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// Whether the nav link pointing at `href` is the active one
pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

/// Highlighted section, updated from asynchronous scroll samples.
///
/// Each sample takes a ticket before measuring; only the newest ticket may
/// update the highlight, so measurements that finish out of order are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionTracker {
    generation: u64,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a sample and return its ticket
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply a finished sample. Returns true when the highlight changed.
    pub fn finish(&mut self, ticket: u64, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        if ticket != self.generation {
            tracing::trace!(ticket, current = self.generation, "stale scroll sample");
            return false;
        }
        let next = active_section(scroll_y, sections).map(str::to_string);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("projects", 1400.0, 1200.0),
        ]
    }

    #[test]
    fn test_top_of_page() {
        assert_eq!(active_section(0.0, &page()), Some("home"));
    }

    #[test]
    fn test_offset_applied() {
        assert_eq!(active_section(699.0, &page()), Some("home"));
        assert_eq!(active_section(700.0, &page()), Some("about"));
    }

    #[test]
    fn test_past_last_section() {
        assert_eq!(active_section(5000.0, &page()), None);
    }

    #[test]
    fn test_link_matching() {
        assert!(is_active_link("#about", Some("about")));
        assert!(!is_active_link("#home", Some("about")));
        assert!(!is_active_link("about", Some("about")));
        assert!(!is_active_link("#about", None));
    }

    #[test]
    fn test_tracker_applies_latest_sample() {
        let mut tracker = SectionTracker::new();
        let ticket = tracker.begin();
        assert!(tracker.finish(ticket, 700.0, &page()));
        assert_eq!(tracker.active(), Some("about"));
        // Same section again is not a change
        let ticket = tracker.begin();
        assert!(!tracker.finish(ticket, 750.0, &page()));
    }

    #[test]
    fn test_tracker_drops_out_of_order_sample() {
        let mut tracker = SectionTracker::new();
        let older = tracker.begin();
        let newer = tracker.begin();

        assert!(tracker.finish(newer, 1400.0, &page()));
        assert!(!tracker.finish(older, 0.0, &page()));
        assert_eq!(tracker.active(), Some("projects"));
    }
}
