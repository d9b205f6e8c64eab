use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::systems::glow::{style_position, ACTIVE_CLASS};
use folio_core::{GlowTracker, PendingSlot};
use glam::Vec2;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::dom::{add_class, set_style, Dom};
use crate::page::Page;

struct GlowController {
    glow: Element,
    body: HtmlElement,
    tracker: RefCell<GlowTracker>,
    frame: RefCell<PendingSlot<AnimationFrame>>,
}

impl GlowController {
    fn pointer_moved(self: &Rc<Self>, event: &MouseEvent) {
        let pos = Vec2::new(event.client_x() as f32, event.client_y() as f32);
        if self.tracker.borrow_mut().pointer_moved(pos) {
            add_class(&self.body, ACTIVE_CLASS);
        }

        let this: Weak<Self> = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            if let Some(this) = this.upgrade() {
                this.apply_frame();
            }
        });
        // Replacing cancels the frame requested by the previous move.
        drop(self.frame.borrow_mut().replace(handle));
    }

    fn apply_frame(&self) {
        let Some(pos) = self.tracker.borrow_mut().frame() else {
            return;
        };
        let (left, top) = style_position(pos);
        let result = set_style(&self.glow, "left", &left)
            .and_then(|_| set_style(&self.glow, "top", &top));
        if let Err(err) = result {
            log::warn!("cursor glow: {err:?}");
        }
    }
}

pub fn install(dom: &Dom, page: &mut Page) -> Result<(), JsValue> {
    let Some(glow) = dom.query(".cursor-glow") else {
        return Ok(());
    };
    let controller = Rc::new(GlowController {
        glow,
        body: dom.body.clone(),
        tracker: RefCell::new(GlowTracker::new()),
        frame: RefCell::new(PendingSlot::new()),
    });

    page.keep(EventListener::new(&dom.document, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            controller.pointer_moved(event);
        }
    }));
    Ok(())
}
