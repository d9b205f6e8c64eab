use glam::Vec2;

/// Body class enabling the glow effect.
pub const ACTIVE_CLASS: &str = "cursor-glow-active";

/// Coalesces pointer moves into at most one position write per animation frame.
///
/// The host requests a frame on every move, cancelling the previous request;
/// whichever frame finally runs applies only the latest position.
#[derive(Debug, Clone, Default)]
pub struct GlowTracker {
    latest: Option<Vec2>,
    active: bool,
}

impl GlowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position. Returns `true` on the first move, when the
    /// body class still needs adding.
    pub fn pointer_moved(&mut self, pos: Vec2) -> bool {
        self.latest = Some(pos);
        !std::mem::replace(&mut self.active, true)
    }

    /// Animation frame fired: the position to apply, if any is pending.
    pub fn frame(&mut self) -> Option<Vec2> {
        self.latest.take()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// CSS `left`/`top` values for a pointer position.
pub fn style_position(pos: Vec2) -> (String, String) {
    (format!("{}px", pos.x), format!("{}px", pos.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_activates() {
        let mut glow = GlowTracker::new();
        assert!(glow.pointer_moved(Vec2::new(1.0, 2.0)));
        assert!(!glow.pointer_moved(Vec2::new(3.0, 4.0)));
        assert!(glow.is_active());
    }

    #[test]
    fn frame_applies_latest_only() {
        let mut glow = GlowTracker::new();
        glow.pointer_moved(Vec2::new(10.0, 10.0));
        glow.pointer_moved(Vec2::new(20.0, 15.0));
        glow.pointer_moved(Vec2::new(30.0, 40.0));
        assert_eq!(glow.frame(), Some(Vec2::new(30.0, 40.0)));
        assert_eq!(glow.frame(), None);
    }

    #[test]
    fn formats_pixels() {
        let (left, top) = style_position(Vec2::new(120.0, 48.5));
        assert_eq!(left, "120px");
        assert_eq!(top, "48.5px");
    }
}
