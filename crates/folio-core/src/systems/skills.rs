use crate::api::types::ElementId;
use crate::core::once::OnceSet;

/// Custom property consumed by the skill bar styling.
pub const WIDTH_PROPERTY: &str = "--skill-width";
pub const VISIBLE_CLASS: &str = "visible";

/// `--skill-width` value for a `data-width` attribute. Absent or blank means 0.
pub fn skill_width(data_width: Option<&str>) -> String {
    match data_width.map(str::trim) {
        Some(w) if !w.is_empty() => format!("{w}%"),
        _ => "0%".to_string(),
    }
}

/// Skill categories that have scrolled into view.
#[derive(Debug, Clone, Default)]
pub struct SkillBoard {
    filled: OnceSet,
}

impl SkillBoard {
    pub fn new(categories: usize) -> Self {
        Self { filled: OnceSet::new(categories) }
    }

    /// Category became visible. Returns `true` if its bars still need filling.
    pub fn reveal(&mut self, category: ElementId) -> bool {
        self.filled.mark(category)
    }

    pub fn is_filled(&self, category: ElementId) -> bool {
        self.filled.is_marked(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_defaults_to_zero() {
        assert_eq!(skill_width(Some("85")), "85%");
        assert_eq!(skill_width(Some(" 70 ")), "70%");
        assert_eq!(skill_width(Some("")), "0%");
        assert_eq!(skill_width(None), "0%");
    }

    #[test]
    fn category_fills_once() {
        let mut board = SkillBoard::new(2);
        assert!(board.reveal(ElementId(0)));
        assert!(!board.reveal(ElementId(0)));
        assert!(board.is_filled(ElementId(0)));
        assert!(!board.is_filled(ElementId(1)));
    }
}
