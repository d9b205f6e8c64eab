use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::extensions::easing::Ease;

/// Page behaviour configuration.
///
/// Every field has a default matching the shipped site, so a JSON override
/// only needs to name the values it changes:
///
/// ```
/// use folio_core::FolioConfig;
///
/// let config = FolioConfig::from_json(r#"{ "toast": { "hide_after_ms": 2500 } }"#).unwrap();
/// assert_eq!(config.toast.hide_after_ms, 2500);
/// assert_eq!(config.back_to_top.visible_offset, 400.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: LogLevel,
    pub nav: NavConfig,
    pub back_to_top: BackToTopConfig,
    pub toast: ToastConfig,
    pub form: FormConfig,
    pub reveal: RevealConfig,
    pub skills: SkillsConfig,
}

impl FolioConfig {
    /// Parse a configuration from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Log level wrapper so the config stays plain JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl LogLevel {
    /// Resolve to a `log::Level`, falling back to `Info` for unknown names.
    pub fn level(&self) -> log::Level {
        self.0.parse().unwrap_or(log::Level::Info)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Navbar gets the `scrolled` class strictly above this offset.
    pub scrolled_offset: f64,
    /// Fraction of the viewport height subtracted from each section top.
    pub activation_ratio: f64,
    /// Section id highlighted when no section threshold has been crossed.
    pub default_section: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_offset: 60.0,
            activation_ratio: 0.5,
            default_section: "home".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {
    /// The control is visible strictly above this offset.
    pub visible_offset: f64,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self { visible_offset: 400.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub hide_after_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { hide_after_ms: 4000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated delivery latency.
    pub latency_ms: u32,
    pub sending_label: String,
    pub missing_fields_message: String,
    pub success_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            latency_ms: 800,
            sending_label: "Sending...".to_string(),
            missing_fields_message: "Please fill in all fields.".to_string(),
            success_message: "Message sent successfully! I'll get back to you soon.".to_string(),
        }
    }
}

/// Entrance animation parameters for both reveal strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub ease: Ease,
    /// Hero entrance: plays once shortly after load.
    pub hero_duration: f64,
    pub hero_stagger: f64,
    pub hero_delay: f64,
    /// Section entrance: element starts this far below its resting place.
    pub section_offset_y: f64,
    pub section_duration: f64,
    pub section_start: String,
    pub section_end: String,
    /// Decorative hero backgrounds and their full-scroll offsets.
    pub parallax: Vec<ParallaxConfig>,
    pub parallax_scrub: f64,
    /// Fallback observer options.
    pub fallback_threshold: f64,
    pub fallback_root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            ease: Ease::Power2Out,
            hero_duration: 0.8,
            hero_stagger: 0.12,
            hero_delay: 0.2,
            section_offset_y: 40.0,
            section_duration: 0.6,
            section_start: "top 85%".to_string(),
            section_end: "bottom 15%".to_string(),
            parallax: vec![
                ParallaxConfig {
                    selector: ".hero-glow-1".to_string(),
                    offset: Vec2::new(20.0, -30.0),
                },
                ParallaxConfig {
                    selector: ".hero-glow-2".to_string(),
                    offset: Vec2::new(-20.0, 20.0),
                },
            ],
            parallax_scrub: 0.5,
            fallback_threshold: 0.1,
            fallback_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxConfig {
    pub selector: String,
    /// Offset reached when the hero has scrolled fully out of view.
    pub offset: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Fraction of a skill category that must be visible before its bars fill.
    pub threshold: f64,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self { threshold: 0.3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site() {
        let config = FolioConfig::default();
        assert_eq!(config.nav.scrolled_offset, 60.0);
        assert_eq!(config.nav.default_section, "home");
        assert_eq!(config.back_to_top.visible_offset, 400.0);
        assert_eq!(config.toast.hide_after_ms, 4000);
        assert_eq!(config.form.latency_ms, 800);
        assert_eq!(config.reveal.parallax.len(), 2);
        assert_eq!(config.skills.threshold, 0.3);
        assert_eq!(config.log_level.level(), log::Level::Info);
    }

    #[test]
    fn empty_json_is_default() {
        let config = FolioConfig::from_json("{}").unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn partial_override_keeps_siblings() {
        let json = r#"{
            "nav": { "default_section": "intro" },
            "reveal": { "parallax": [ { "selector": ".blob", "offset": [5.0, -5.0] } ] },
            "log_level": "debug"
        }"#;
        let config = FolioConfig::from_json(json).unwrap();
        assert_eq!(config.nav.default_section, "intro");
        assert_eq!(config.nav.scrolled_offset, 60.0);
        assert_eq!(config.reveal.parallax.len(), 1);
        assert_eq!(config.reveal.parallax[0].offset, Vec2::new(5.0, -5.0));
        assert_eq!(config.reveal.hero_duration, 0.8);
        assert_eq!(config.log_level.level(), log::Level::Debug);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = FolioConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap();
        assert_eq!(config.log_level.level(), log::Level::Info);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(FolioConfig::from_json("{ nav: 1 ").is_err());
    }
}
