use std::fmt;
use serde::{Deserialize, Serialize};

/// Position of an element in a startup query result.
/// Element sets are looked up once per page view, so the index is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for ElementId {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

/// Toast severity. Its lowercase name doubles as the CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Parse a severity name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "success" => Some(Severity::Success),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scroll position and viewport size sampled when a scroll or resize event fires.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl ScrollFrame {
    pub fn new(scroll_y: f64, viewport_height: f64) -> Self {
        Self { scroll_y, viewport_height }
    }
}
