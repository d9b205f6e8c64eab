use folio_core::extensions::gsap::{HERO_REVEAL_SELECTOR, SECTION_REVEAL_SELECTOR};
use folio_core::systems::reveal::{RESTING_OPACITY, RESTING_TRANSFORM};
use folio_core::{ElementId, RevealConfig, RevealPlan, RevealSet, RevealStrategy};
use wasm_bindgen::JsValue;

use crate::dom::{position_of, set_style, Dom};
use crate::gsap::{Gsap, GsapGlobals};
use crate::observer::Observer;
use crate::page::Page;

const REVEAL_SELECTOR: &str = ".reveal";

pub fn install(dom: &Dom, page: &mut Page) -> Result<(), JsValue> {
    let globals = GsapGlobals::detect();
    let strategy = RevealStrategy::select(globals.has_gsap(), globals.has_scroll_trigger());
    page.set_strategy(strategy);
    log::info!("reveal: {} strategy", strategy.as_str());

    match globals.into_bridge() {
        Some(gsap) => install_rich(dom, &gsap, &page.config().reveal),
        None => install_fallback(dom, page),
    }
}

fn install_rich(dom: &Dom, gsap: &Gsap, config: &RevealConfig) -> Result<(), JsValue> {
    gsap.register_scroll_trigger()?;
    let plan = RevealPlan::new(config);

    gsap.to(&JsValue::from_str(HERO_REVEAL_SELECTOR), &plan.hero)?;
    for parallax in &plan.parallax {
        gsap.to(&JsValue::from_str(&parallax.selector), &parallax.vars)?;
    }

    let sections = dom.query_all(SECTION_REVEAL_SELECTOR);
    for el in &sections {
        gsap.from_to_on_scroll(el, &plan.section_from, &plan.section_to)?;
    }
    log::debug!("reveal: {} section tweens", sections.len());
    Ok(())
}

/// Snap every `.reveal` element to its resting style the first time it is
/// mostly in view. Hero and parallax tweens are not reproduced here.
fn install_fallback(dom: &Dom, page: &mut Page) -> Result<(), JsValue> {
    let elements = dom.query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        return Ok(());
    }
    let config = page.config().reveal.clone();
    let mut revealed = RevealSet::new(elements.len());
    let observed = elements.clone();

    let observer = Observer::new(
        config.fallback_threshold,
        Some(config.fallback_root_margin.as_str()),
        move |target| {
            let Some(index) = position_of(&observed, target) else {
                return;
            };
            if !revealed.reveal(ElementId::from(index)) {
                return;
            }
            let result = set_style(target, "opacity", RESTING_OPACITY)
                .and_then(|_| set_style(target, "transform", RESTING_TRANSFORM));
            if let Err(err) = result {
                log::warn!("reveal: {err:?}");
            }
        },
    )?;
    for el in &elements {
        observer.observe(el);
    }
    page.keep_observer(observer);
    Ok(())
}
