use std::cell::RefCell;
use std::rc::Rc;

use folio_core::systems::images::LOADED_CLASS;
use folio_core::{ElementId, ImageLoad, ImageLoader};
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

use crate::dom::{add_class, Dom};
use crate::page::Page;

const IMAGE_SELECTOR: &str = ".about-image img, .project-image img";

pub fn install(dom: &Dom, page: &mut Page) -> Result<(), JsValue> {
    let images: Vec<HtmlImageElement> = dom
        .query_all(IMAGE_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();
    let loader = Rc::new(RefCell::new(ImageLoader::new(images.len())));

    for (index, image) in images.iter().enumerate() {
        let id = ElementId::from(index);
        let action = loader.borrow_mut().discover(id, image.complete());
        match action {
            ImageLoad::MarkNow => add_class(image, LOADED_CLASS),
            ImageLoad::AwaitLoad => {
                let loader = Rc::clone(&loader);
                let target = image.clone();
                page.keep(EventListener::once(image, "load", move |_| {
                    if loader.borrow_mut().loaded(id) {
                        add_class(&target, LOADED_CLASS);
                    }
                }));
            }
        }
    }
    log::debug!("images: {} awaiting load", loader.borrow().pending());
    Ok(())
}
