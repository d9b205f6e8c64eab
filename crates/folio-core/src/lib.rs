pub mod api;
pub mod core;
pub mod systems;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{
    FolioConfig, LogLevel, NavConfig, BackToTopConfig, ToastConfig, FormConfig,
    RevealConfig, ParallaxConfig, SkillsConfig,
};
pub use api::types::{ElementId, Severity, ScrollFrame};
pub use core::once::OnceSet;
pub use core::pending::PendingSlot;
pub use systems::navigation::{Navigation, NavState, Section, SectionMap, link_target};
pub use systems::menu::{MobileMenu, MenuState, AnchorAction, anchor_action};
pub use systems::back_to_top::BackToTop;
pub use systems::toast::{Toast, ToastShown, ToastTicket};
pub use systems::contact_form::{
    ContactForm, Delivered, FormError, FormFields, SubmitOutcome,
};
pub use systems::glow::GlowTracker;
pub use systems::reveal::{RevealSet, RevealStrategy};
pub use systems::skills::{SkillBoard, skill_width};
pub use systems::images::{ImageLoad, ImageLoader};

// Extensions: descriptors for the optional animation library
pub use extensions::{Ease, RevealPlan, ParallaxTween, ScrollTriggerVars, TweenVars};
