use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    anchor_action, link_target, AnchorAction, MenuState, MobileMenu, Navigation, Section,
    SectionMap,
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{set_class, Dom};
use crate::page::Page;

const SCROLLED_CLASS: &str = "scrolled";
const ACTIVE_CLASS: &str = "active";
const OPEN_CLASS: &str = "open";

/// Navbar `scrolled` flag and the active section link.
struct NavController {
    navbar: Option<Element>,
    /// Each link with the section id its `href` points at.
    links: Vec<(Element, Option<String>)>,
    nav: Navigation,
    dom: Dom,
}

impl NavController {
    fn refresh(&self) {
        let state = self.nav.update(self.dom.scroll_frame());
        if let Some(navbar) = &self.navbar {
            set_class(navbar, SCROLLED_CLASS, state.scrolled);
        }
        for (link, target) in &self.links {
            set_class(link, ACTIVE_CLASS, state.is_active(target.as_deref()));
        }
    }
}

struct MenuController {
    toggle: Option<Element>,
    menu: Option<Element>,
    body: HtmlElement,
    state: RefCell<MobileMenu>,
}

impl MenuController {
    fn toggle(&self) {
        let state = self.state.borrow_mut().toggle();
        self.apply(state);
    }

    fn close(&self) {
        let state = self.state.borrow_mut().close();
        self.apply(state);
    }

    fn apply(&self, state: MenuState) {
        if let Some(menu) = &self.menu {
            set_class(menu, OPEN_CLASS, state.open);
        }
        if let Some(toggle) = &self.toggle {
            set_class(toggle, ACTIVE_CLASS, state.open);
        }
        if let Err(err) = self.body.style().set_property("overflow", state.body_overflow()) {
            log::warn!("menu: body overflow: {err:?}");
        }
    }
}

pub fn install(dom: &Dom, page: &mut Page) -> Result<(), JsValue> {
    // Measured once; resizing does not re-measure sections.
    let sections = dom
        .query_all("section[id]")
        .iter()
        .filter_map(|el| {
            let html = el.dyn_ref::<HtmlElement>()?;
            Some(Section::new(
                el.id(),
                f64::from(html.offset_top()),
                f64::from(html.offset_height()),
            ))
        })
        .collect();

    let links = dom
        .query_all(".nav-link")
        .into_iter()
        .map(|link| {
            let target = link
                .get_attribute("href")
                .as_deref()
                .and_then(link_target)
                .map(str::to_string);
            (link, target)
        })
        .collect();

    let controller = Rc::new(NavController {
        navbar: dom.by_id("navbar"),
        links,
        nav: Navigation::new(SectionMap::new(sections), page.config().nav.clone()),
        dom: dom.clone(),
    });
    log::debug!("navigation: {} sections", controller.nav.sections().len());
    controller.refresh();

    for event in ["scroll", "resize"] {
        let controller = Rc::clone(&controller);
        page.keep(EventListener::new(&dom.window, event, move |_| controller.refresh()));
    }

    install_menu(dom, page);
    Ok(())
}

fn install_menu(dom: &Dom, page: &mut Page) {
    let menu = Rc::new(MenuController {
        toggle: dom.query(".nav-toggle"),
        menu: dom.query(".nav-menu"),
        body: dom.body.clone(),
        state: RefCell::new(MobileMenu::new()),
    });

    if let Some(toggle) = &menu.toggle {
        let on_click = Rc::clone(&menu);
        page.keep(EventListener::new(toggle, "click", move |_| on_click.toggle()));
    }

    for anchor in dom.query_all("a[href^=\"#\"]") {
        let menu = Rc::clone(&menu);
        let dom = dom.clone();
        let link = anchor.clone();
        let listener = EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let AnchorAction::ScrollTo { selector } = anchor_action(&href) else {
                    return;
                };
                event.prevent_default();
                if let Some(target) = dom.query(selector) {
                    menu.close();
                    scroll_into_view(&target);
                }
            },
        );
        page.keep(listener);
    }
}

fn scroll_into_view(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
