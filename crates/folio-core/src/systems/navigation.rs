use std::cmp::Ordering;

use crate::api::config::NavConfig;
use crate::api::types::ScrollFrame;

/// A labelled page section, measured once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }
}

/// Sections ordered top to bottom.
///
/// Offsets are a startup snapshot: resizing the window does not re-measure
/// them, only the scroll offset and viewport height are re-read.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn new(mut sections: Vec<Section>) -> Self {
        sections.sort_by(|a, b| a.top.partial_cmp(&b.top).unwrap_or(Ordering::Equal));
        Self { sections }
    }

    /// Id of the lowest section whose top, minus `viewport_height * ratio`,
    /// has been scrolled past. Sections are scanned bottom to top so the lower
    /// one wins when thresholds tie.
    pub fn active_id(&self, frame: ScrollFrame, ratio: f64) -> Option<&str> {
        let lead = frame.viewport_height * ratio;
        self.sections
            .iter()
            .rev()
            .find(|s| frame.scroll_y >= s.top - lead)
            .map(|s| s.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Navbar state derived from one scroll frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub active: String,
}

impl NavState {
    /// Whether a link pointing at `target` should carry the `active` class.
    pub fn is_active(&self, target: Option<&str>) -> bool {
        target == Some(self.active.as_str())
    }
}

/// Section id a navigation link points at: its `href` fragment, with a bare
/// `#` meaning the empty id. Links without a fragment never match.
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Resolves navbar state for every scroll and resize event.
#[derive(Debug, Clone)]
pub struct Navigation {
    sections: SectionMap,
    config: NavConfig,
}

impl Navigation {
    pub fn new(sections: SectionMap, config: NavConfig) -> Self {
        Self { sections, config }
    }

    pub fn update(&self, frame: ScrollFrame) -> NavState {
        let active = self
            .sections
            .active_id(frame, self.config.activation_ratio)
            .unwrap_or(self.config.default_section.as_str());
        NavState {
            scrolled: is_scrolled(frame.scroll_y, self.config.scrolled_offset),
            active: active.to_string(),
        }
    }

    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Navigation {
        let sections = SectionMap::new(vec![
            Section::new("projects", 1600.0, 800.0),
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 800.0),
        ]);
        Navigation::new(sections, NavConfig::default())
    }

    #[test]
    fn sections_sorted_by_top() {
        let nav = site();
        let ids: Vec<_> = nav.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["home", "about", "projects"]);
    }

    #[test]
    fn lowest_crossed_section_wins() {
        let nav = site();
        assert_eq!(nav.update(ScrollFrame::new(1300.0, 1000.0)).active, "projects");
        assert_eq!(nav.update(ScrollFrame::new(1099.0, 1000.0)).active, "about");
        assert_eq!(nav.update(ScrollFrame::new(200.0, 1000.0)).active, "home");
    }

    #[test]
    fn threshold_is_inclusive() {
        let nav = site();
        assert_eq!(nav.update(ScrollFrame::new(300.0, 1000.0)).active, "about");
        assert_eq!(nav.update(ScrollFrame::new(299.5, 1000.0)).active, "home");
    }

    #[test]
    fn falls_back_to_default_section() {
        let sections = SectionMap::new(vec![Section::new("about", 2000.0, 500.0)]);
        let nav = Navigation::new(sections, NavConfig::default());
        assert_eq!(nav.update(ScrollFrame::new(0.0, 800.0)).active, "home");

        let empty = Navigation::new(SectionMap::default(), NavConfig::default());
        assert_eq!(empty.update(ScrollFrame::new(5000.0, 800.0)).active, "home");
    }

    #[test]
    fn ties_resolve_to_lower_section() {
        let sections = SectionMap::new(vec![
            Section::new("first", 500.0, 0.0),
            Section::new("second", 500.0, 0.0),
        ]);
        let nav = Navigation::new(sections, NavConfig::default());
        let state = nav.update(ScrollFrame::new(500.0, 0.0));
        assert_eq!(state.active, "second");
    }

    #[test]
    fn scrolled_flag_is_strict() {
        let nav = site();
        assert!(!nav.update(ScrollFrame::new(60.0, 1000.0)).scrolled);
        assert!(nav.update(ScrollFrame::new(60.5, 1000.0)).scrolled);
    }

    #[test]
    fn link_targets() {
        assert_eq!(link_target("#about"), Some("about"));
        assert_eq!(link_target("#"), Some(""));
        assert_eq!(link_target("/blog"), None);

        let state = NavState { scrolled: false, active: "about".into() };
        assert!(state.is_active(link_target("#about")));
        assert!(!state.is_active(link_target("#")));
        assert!(!state.is_active(None));
    }
}
