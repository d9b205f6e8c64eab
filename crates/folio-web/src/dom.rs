use folio_core::ScrollFrame;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// Global handles looked up once at startup.
#[derive(Clone)]
pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
}

impl Dom {
    pub fn acquire() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        Ok(Self { window, document, body })
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// First match for `selector`. Invalid selectors count as no match.
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        self.document
            .query_selector_all(selector)
            .map(elements)
            .unwrap_or_default()
    }

    /// Current scroll offset and viewport height.
    pub fn scroll_frame(&self) -> ScrollFrame {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        ScrollFrame::new(scroll_y, viewport_height)
    }
}

/// Descendants of `root` matching `selector`.
pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::warn!("add class {class}: {err:?}");
    }
}

pub fn remove_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().remove_1(class) {
        log::warn!("remove class {class}: {err:?}");
    }
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::warn!("toggle class {class}: {err:?}");
    }
}

/// Write an inline style property. Non-HTML elements are skipped.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.style().set_property(property, value),
        None => Ok(()),
    }
}

/// Index of `el` within a startup snapshot.
pub fn position_of(elements: &[Element], el: &Element) -> Option<usize> {
    elements.iter().position(|candidate| candidate == el)
}
