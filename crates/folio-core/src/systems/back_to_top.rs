use crate::api::config::BackToTopConfig;
use crate::api::types::ScrollFrame;

pub fn is_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Floating "back to top" control: visibility is a pure function of scroll offset.
#[derive(Debug, Clone)]
pub struct BackToTop {
    config: BackToTopConfig,
}

impl BackToTop {
    pub fn new(config: BackToTopConfig) -> Self {
        Self { config }
    }

    pub fn visible(&self, frame: ScrollFrame) -> bool {
        is_visible(frame.scroll_y, self.config.visible_offset)
    }
}
