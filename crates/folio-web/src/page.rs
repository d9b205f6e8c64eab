use std::rc::Rc;

use folio_core::{FolioConfig, RevealStrategy, Severity};
use gloo::events::EventListener;
use wasm_bindgen::JsValue;

use crate::controllers::{
    back_to_top, contact_form, glow, images, navigation, ready, reveal, skills,
    toast::ToastController,
};
use crate::dom::Dom;
use crate::observer::Observer;

/// Everything installed on the page for its lifetime.
///
/// The bridge keeps one `Page` in a `thread_local!` and never drops it, so
/// listeners and observers stay registered until the page unloads.
pub struct Page {
    config: Rc<FolioConfig>,
    strategy: RevealStrategy,
    toast: Rc<ToastController>,
    listeners: Vec<EventListener>,
    observers: Vec<Observer>,
}

impl Page {
    /// Look up the page once and install every controller.
    /// A controller that fails is logged and skipped; the rest still install.
    pub fn install(config: FolioConfig) -> Result<Self, JsValue> {
        let dom = Dom::acquire()?;
        let config = Rc::new(config);
        let toast = ToastController::new(&dom, &config.toast);

        let mut page = Self {
            config,
            strategy: RevealStrategy::Fallback,
            toast,
            listeners: Vec::new(),
            observers: Vec::new(),
        };

        page.run("ready", |p| ready::install(&dom, p));
        page.run("navigation", |p| navigation::install(&dom, p));
        page.run("back-to-top", |p| back_to_top::install(&dom, p));
        page.run("contact-form", |p| contact_form::install(&dom, p));
        page.run("cursor-glow", |p| glow::install(&dom, p));
        page.run("reveal", |p| reveal::install(&dom, p));
        page.run("skills", |p| skills::install(&dom, p));
        page.run("images", |p| images::install(&dom, p));

        log::debug!(
            "page: {} listeners, {} observers",
            page.listeners.len(),
            page.observers.len()
        );
        Ok(page)
    }

    fn run(&mut self, name: &str, install: impl FnOnce(&mut Self) -> Result<(), JsValue>) {
        if let Err(err) = install(self) {
            log::error!("{name}: install failed: {err:?}");
        }
    }

    pub fn keep(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub fn keep_observer(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn config(&self) -> &Rc<FolioConfig> {
        &self.config
    }

    pub fn toast(&self) -> &Rc<ToastController> {
        &self.toast
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        self.toast.notify(message, severity);
    }

    pub fn strategy(&self) -> RevealStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: RevealStrategy) {
        self.strategy = strategy;
    }
}
