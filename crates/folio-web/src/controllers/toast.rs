use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::systems::toast::SHOW_CLASS;
use folio_core::{PendingSlot, Severity, Toast, ToastConfig, ToastTicket};
use gloo::timers::callback::Timeout;
use web_sys::Element;

use crate::dom::{remove_class, Dom};

/// Drives the `#toast` element. Only the latest message is ever shown.
pub struct ToastController {
    element: Option<Element>,
    state: RefCell<Toast>,
    hide: RefCell<PendingSlot<Timeout>>,
}

impl ToastController {
    pub fn new(dom: &Dom, config: &ToastConfig) -> Rc<Self> {
        let element = dom.by_id("toast");
        if element.is_none() {
            log::debug!("toast: no #toast element, notifications are dropped");
        }
        Rc::new(Self {
            element,
            state: RefCell::new(Toast::new(config.clone())),
            hide: RefCell::new(PendingSlot::new()),
        })
    }

    pub fn notify(self: &Rc<Self>, message: &str, severity: Severity) {
        let Some(element) = &self.element else {
            return;
        };
        let shown = self.state.borrow_mut().notify(message, severity);
        element.set_text_content(Some(&shown.message));
        element.set_class_name(&shown.class_name);

        let this: Weak<Self> = Rc::downgrade(self);
        let ticket = shown.ticket;
        let timer = Timeout::new(shown.hide_after_ms, move || {
            if let Some(this) = this.upgrade() {
                this.expire(ticket);
            }
        });
        // Dropping the superseded timer cancels it.
        drop(self.hide.borrow_mut().replace(timer));
        log::debug!("toast ({severity}): {message}");
    }

    fn expire(&self, ticket: ToastTicket) {
        if !self.state.borrow_mut().expire(ticket) {
            return;
        }
        if let Some(element) = &self.element {
            remove_class(element, SHOW_CLASS);
        }
    }
}
