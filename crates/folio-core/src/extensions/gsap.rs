// extensions/gsap.rs
//
// Tween descriptors for the rich reveal path, serialized to the plain
// objects `gsap.to` / `gsap.fromTo` expect.

use serde::Serialize;

use crate::api::config::RevealConfig;
use super::easing::Ease;

pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_REVEAL_SELECTOR: &str = ".hero .reveal";
pub const SECTION_REVEAL_SELECTOR: &str = ".section .reveal";

/// Play on enter, never reverse or replay.
pub const PLAY_ONCE: &str = "play none none none";

/// Vars object for a single tween. Unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollTriggerVars>,
}

/// ScrollTrigger options. A missing `trigger` is filled in by the host with
/// the animated element itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_actions: Option<String>,
}

impl TweenVars {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Scroll-scrubbed offset for one decorative hero background.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxTween {
    pub selector: String,
    pub vars: TweenVars,
}

/// Every tween the rich path registers at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealPlan {
    /// Staggered hero entrance, independent of scrolling.
    pub hero: TweenVars,
    pub parallax: Vec<ParallaxTween>,
    /// Start and end state for each section reveal, played once per element.
    pub section_from: TweenVars,
    pub section_to: TweenVars,
}

impl RevealPlan {
    pub fn new(config: &RevealConfig) -> Self {
        let hero = TweenVars {
            opacity: Some(1.0),
            y: Some(0.0),
            duration: Some(config.hero_duration),
            stagger: Some(config.hero_stagger),
            delay: Some(config.hero_delay),
            ease: Some(config.ease),
            ..Default::default()
        };

        let parallax = config
            .parallax
            .iter()
            .map(|p| ParallaxTween {
                selector: p.selector.clone(),
                vars: TweenVars {
                    x: Some(f64::from(p.offset.x)),
                    y: Some(f64::from(p.offset.y)),
                    scroll_trigger: Some(ScrollTriggerVars {
                        trigger: Some(HERO_SELECTOR.to_string()),
                        start: "top top".to_string(),
                        end: "bottom top".to_string(),
                        scrub: Some(config.parallax_scrub),
                        toggle_actions: None,
                    }),
                    ..Default::default()
                },
            })
            .collect();

        let section_from = TweenVars {
            opacity: Some(0.0),
            y: Some(config.section_offset_y),
            ..Default::default()
        };
        let section_to = TweenVars {
            opacity: Some(1.0),
            y: Some(0.0),
            duration: Some(config.section_duration),
            ease: Some(config.ease),
            scroll_trigger: Some(ScrollTriggerVars {
                trigger: None,
                start: config.section_start.clone(),
                end: config.section_end.clone(),
                scrub: None,
                toggle_actions: Some(PLAY_ONCE.to_string()),
            }),
            ..Default::default()
        };

        Self { hero, parallax, section_from, section_to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn as_value(vars: &TweenVars) -> Value {
        serde_json::from_str(&vars.to_json().unwrap()).unwrap()
    }

    #[test]
    fn hero_tween() {
        let plan = RevealPlan::new(&RevealConfig::default());
        assert_eq!(
            as_value(&plan.hero),
            json!({
                "opacity": 1.0,
                "y": 0.0,
                "duration": 0.8,
                "stagger": 0.12,
                "delay": 0.2,
                "ease": "power2.out"
            })
        );
    }

    #[test]
    fn parallax_is_scrubbed_to_hero() {
        let plan = RevealPlan::new(&RevealConfig::default());
        assert_eq!(plan.parallax.len(), 2);
        assert_eq!(plan.parallax[0].selector, ".hero-glow-1");
        assert_eq!(
            as_value(&plan.parallax[0].vars),
            json!({
                "x": 20.0,
                "y": -30.0,
                "scrollTrigger": {
                    "trigger": ".hero",
                    "start": "top top",
                    "end": "bottom top",
                    "scrub": 0.5
                }
            })
        );
        let second = as_value(&plan.parallax[1].vars);
        assert_eq!(second["x"], json!(-20.0));
        assert_eq!(second["y"], json!(20.0));
    }

    #[test]
    fn section_reveal_plays_once() {
        let plan = RevealPlan::new(&RevealConfig::default());
        assert_eq!(as_value(&plan.section_from), json!({ "opacity": 0.0, "y": 40.0 }));

        let to = as_value(&plan.section_to);
        assert_eq!(to["duration"], json!(0.6));
        assert_eq!(to["scrollTrigger"]["start"], json!("top 85%"));
        assert_eq!(to["scrollTrigger"]["end"], json!("bottom 15%"));
        assert_eq!(to["scrollTrigger"]["toggleActions"], json!("play none none none"));
        assert!(to["scrollTrigger"].get("trigger").is_none());
    }
}
