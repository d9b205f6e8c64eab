use crate::api::types::ElementId;
use crate::core::once::OnceSet;

/// Inline styles the fallback path writes to a revealed element.
pub const RESTING_OPACITY: &str = "1";
pub const RESTING_TRANSFORM: &str = "translateY(0)";

/// How entrance animations are driven, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStrategy {
    /// GSAP with the ScrollTrigger plugin drives hero, parallax and section reveals.
    Rich,
    /// An intersection observer snaps `.reveal` elements to their resting style.
    Fallback,
}

impl RevealStrategy {
    /// The rich path needs both the tween engine and its scroll plugin.
    pub fn select(has_gsap: bool, has_scroll_trigger: bool) -> Self {
        if has_gsap && has_scroll_trigger {
            RevealStrategy::Rich
        } else {
            RevealStrategy::Fallback
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevealStrategy::Rich => "rich",
            RevealStrategy::Fallback => "fallback",
        }
    }
}

/// Reveal-marked elements watched by the fallback observer.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: OnceSet,
}

impl RevealSet {
    pub fn new(elements: usize) -> Self {
        Self { revealed: OnceSet::new(elements) }
    }

    /// Visibility trigger fired. Returns `true` only on the first trigger.
    pub fn reveal(&mut self, element: ElementId) -> bool {
        self.revealed.mark(element)
    }

    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.revealed.is_marked(element)
    }

    pub fn revealed(&self) -> usize {
        self.revealed.marked()
    }

    /// Every element has transitioned; the observer has nothing left to do.
    pub fn is_done(&self) -> bool {
        self.revealed.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rich_needs_both_capabilities() {
        assert_eq!(RevealStrategy::select(true, true), RevealStrategy::Rich);
        assert_eq!(RevealStrategy::select(true, false), RevealStrategy::Fallback);
        assert_eq!(RevealStrategy::select(false, true), RevealStrategy::Fallback);
        assert_eq!(RevealStrategy::Rich.as_str(), "rich");
    }

    #[test]
    fn repeated_triggers_reveal_once() {
        let mut set = RevealSet::new(3);
        let el = ElementId(2);
        assert!(set.reveal(el));
        for _ in 0..5 {
            assert!(!set.reveal(el));
        }
        assert_eq!(set.revealed(), 1);
        assert!(!set.is_done());

        set.reveal(ElementId(0));
        set.reveal(ElementId(1));
        assert!(set.is_done());
    }
}
