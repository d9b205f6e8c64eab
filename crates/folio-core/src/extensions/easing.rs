// extensions/easing.rs
//
// Easing curves by their GSAP names.

use serde::{Deserialize, Serialize};

/// Easing curve understood by the animation library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ease {
    /// Constant velocity.
    #[serde(rename = "none")]
    Linear,
    #[serde(rename = "power1.out")]
    Power1Out,
    /// Slow end; the site default.
    #[default]
    #[serde(rename = "power2.out")]
    Power2Out,
    #[serde(rename = "power2.inOut")]
    Power2InOut,
    #[serde(rename = "power3.out")]
    Power3Out,
    #[serde(rename = "sine.inOut")]
    SineInOut,
    /// Overshoot then settle.
    #[serde(rename = "back.out")]
    BackOut,
    #[serde(rename = "expo.out")]
    ExpoOut,
}

impl Ease {
    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power1Out => "power1.out",
            Ease::Power2Out => "power2.out",
            Ease::Power2InOut => "power2.inOut",
            Ease::Power3Out => "power3.out",
            Ease::SineInOut => "sine.inOut",
            Ease::BackOut => "back.out",
            Ease::ExpoOut => "expo.out",
        }
    }
}
