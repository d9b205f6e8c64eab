use std::rc::Rc;

use folio_core::BackToTop;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::dom::{set_class, Dom};
use crate::page::Page;

const VISIBLE_CLASS: &str = "visible";

struct BackToTopController {
    button: Element,
    control: BackToTop,
    dom: Dom,
}

impl BackToTopController {
    fn refresh(&self) {
        let visible = self.control.visible(self.dom.scroll_frame());
        set_class(&self.button, VISIBLE_CLASS, visible);
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.dom.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn install(dom: &Dom, page: &mut Page) -> Result<(), JsValue> {
    let Some(button) = dom.by_id("backToTop") else {
        log::debug!("back-to-top: no #backToTop element");
        return Ok(());
    };

    let controller = Rc::new(BackToTopController {
        button: button.clone(),
        control: BackToTop::new(page.config().back_to_top.clone()),
        dom: dom.clone(),
    });
    controller.refresh();

    let on_scroll = Rc::clone(&controller);
    page.keep(EventListener::new(&dom.window, "scroll", move |_| on_scroll.refresh()));
    page.keep(EventListener::new(&button, "click", move |_| controller.scroll_to_top()));
    Ok(())
}
