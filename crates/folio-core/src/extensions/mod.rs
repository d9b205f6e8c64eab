// extensions/mod.rs
//
// Descriptors for the optional animation library.
// Nothing here touches the DOM: the web bridge serializes these and hands
// them to GSAP when it is present on the page.

pub mod easing;
pub mod gsap;

pub use easing::Ease;
pub use gsap::{RevealPlan, ParallaxTween, ScrollTriggerVars, TweenVars};
