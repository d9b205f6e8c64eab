use folio_core::systems::back_to_top;
use folio_core::systems::navigation::is_scrolled;
use folio_core::{
    BackToTop, BackToTopConfig, ElementId, NavConfig, Navigation, RevealSet, ScrollFrame,
    Section, SectionMap,
};
use proptest::prelude::*;

fn site() -> Navigation {
    Navigation::new(
        SectionMap::new(vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 800.0),
            Section::new("projects", 1600.0, 800.0),
        ]),
        NavConfig::default(),
    )
}

proptest! {
    #[test]
    fn navbar_not_scrolled_up_to_sixty(offset in 0.0f64..=60.0) {
        prop_assert!(!is_scrolled(offset, 60.0));
        prop_assert!(!site().update(ScrollFrame::new(offset, 900.0)).scrolled);
    }

    #[test]
    fn navbar_scrolled_above_sixty(offset in 60.0001f64..1.0e7) {
        prop_assert!(site().update(ScrollFrame::new(offset, 900.0)).scrolled);
    }

    #[test]
    fn back_to_top_hidden_up_to_four_hundred(offset in -1.0e3f64..=400.0) {
        let control = BackToTop::new(BackToTopConfig::default());
        prop_assert!(!control.visible(ScrollFrame::new(offset, 900.0)));
        prop_assert!(!back_to_top::is_visible(offset, 400.0));
    }

    #[test]
    fn back_to_top_visible_above_four_hundred(offset in 400.0001f64..1.0e7) {
        let control = BackToTop::new(BackToTopConfig::default());
        prop_assert!(control.visible(ScrollFrame::new(offset, 900.0)));
    }

    #[test]
    fn active_section_is_lowest_crossed(scroll in 0.0f64..5000.0, viewport in 1.0f64..3000.0) {
        let state = site().update(ScrollFrame::new(scroll, viewport));
        let half = viewport * 0.5;
        let expected = if scroll >= 1600.0 - half {
            "projects"
        } else if scroll >= 800.0 - half {
            "about"
        } else {
            "home"
        };
        prop_assert_eq!(state.active.as_str(), expected);
    }

    #[test]
    fn reveal_transitions_at_most_once(triggers in proptest::collection::vec(0u32..8, 0..64)) {
        let mut set = RevealSet::new(8);
        let mut first_times = 0;
        for id in &triggers {
            if set.reveal(ElementId(*id)) {
                first_times += 1;
            }
        }
        let mut distinct = triggers.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(first_times, distinct.len());
        prop_assert_eq!(set.revealed(), distinct.len());
    }
}
