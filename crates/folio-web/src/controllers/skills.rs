use folio_core::systems::skills::{VISIBLE_CLASS, WIDTH_PROPERTY};
use folio_core::{skill_width, ElementId, SkillBoard};
use wasm_bindgen::JsValue;

use crate::dom::{add_class, position_of, query_within, set_style, Dom};
use crate::observer::Observer;
use crate::page::Page;

pub fn install(dom: &Dom, page: &mut Page) -> Result<(), JsValue> {
    let categories = dom.query_all(".skill-category");
    if categories.is_empty() {
        return Ok(());
    }
    let mut board = SkillBoard::new(categories.len());
    let observed = categories.clone();

    let observer = Observer::new(page.config().skills.threshold, None, move |category| {
        let Some(index) = position_of(&observed, category) else {
            return;
        };
        if !board.reveal(ElementId::from(index)) {
            return;
        }
        add_class(category, VISIBLE_CLASS);
        for fill in query_within(category, ".skill-fill") {
            let width = skill_width(fill.get_attribute("data-width").as_deref());
            if let Err(err) = set_style(&fill, WIDTH_PROPERTY, &width) {
                log::warn!("skills: {err:?}");
            }
        }
    })?;
    for category in &categories {
        observer.observe(category);
    }
    page.keep_observer(observer);
    Ok(())
}
