use folio_core::systems::ready::{ready_now, LOADED_CLASS};
use gloo::events::EventListener;
use wasm_bindgen::JsValue;

use crate::dom::{add_class, Dom};
use crate::page::Page;

pub fn install(dom: &Dom, page: &mut Page) -> Result<(), JsValue> {
    if ready_now(&dom.document.ready_state()) {
        add_class(&dom.body, LOADED_CLASS);
        return Ok(());
    }
    let body = dom.body.clone();
    page.keep(EventListener::once(&dom.document, "DOMContentLoaded", move |_| {
        add_class(&body, LOADED_CLASS);
    }));
    Ok(())
}
