use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::{ContactForm, FormFields, PendingSlot, SubmitOutcome};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::controllers::toast::ToastController;
use crate::dom::Dom;
use crate::page::Page;

/// `#contactForm`: validates, then simulates delivery after a fixed latency.
struct FormController {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    dom: Dom,
    state: RefCell<ContactForm>,
    toast: Rc<ToastController>,
    latency: RefCell<PendingSlot<Timeout>>,
}

impl FormController {
    fn submit(self: &Rc<Self>) {
        let fields = self.read_fields();
        let label = self.button.as_ref().and_then(|b| b.text_content());
        let outcome = self.state.borrow_mut().submit(&fields, label);

        match outcome {
            SubmitOutcome::Rejected { error, message, severity } => {
                log::debug!("contact form: {error}");
                self.toast.notify(&message, severity);
            }
            SubmitOutcome::Busy => {
                log::debug!("contact form: send already in flight");
            }
            SubmitOutcome::Sending { label, delay_ms } => {
                if let Some(button) = &self.button {
                    button.set_disabled(true);
                    button.set_text_content(Some(&label));
                }
                let this: Weak<Self> = Rc::downgrade(self);
                let timer = Timeout::new(delay_ms, move || {
                    if let Some(this) = this.upgrade() {
                        this.deliver();
                    }
                });
                drop(self.latency.borrow_mut().replace(timer));
            }
        }
    }

    fn deliver(&self) {
        let Some(delivered) = self.state.borrow_mut().complete() else {
            return;
        };
        self.toast.notify(&delivered.message, delivered.severity);
        self.form.reset();
        if let Some(button) = &self.button {
            button.set_disabled(false);
            button.set_text_content(delivered.restore_label.as_deref());
        }
        log::info!("contact form: simulated delivery complete");
    }

    fn read_fields(&self) -> FormFields {
        FormFields::new(
            self.field_value("name"),
            self.field_value("email"),
            self.field_value("message"),
        )
    }

    /// Value of an input or textarea by id. A missing field reads as empty.
    fn field_value(&self, id: &str) -> String {
        let Some(el) = self.dom.by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }
}

pub fn install(dom: &Dom, page: &mut Page) -> Result<(), JsValue> {
    let Some(form) = dom.by_id("contactForm") else {
        log::debug!("contact form: no #contactForm element");
        return Ok(());
    };
    let form: HtmlFormElement = form.dyn_into()?;
    let button = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

    let controller = Rc::new(FormController {
        form: form.clone(),
        button,
        dom: dom.clone(),
        state: RefCell::new(ContactForm::new(page.config().form.clone())),
        toast: Rc::clone(page.toast()),
        latency: RefCell::new(PendingSlot::new()),
    });

    page.keep(EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            controller.submit();
        },
    ));
    Ok(())
}
