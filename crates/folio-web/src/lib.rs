pub mod controllers;
pub mod dom;
pub mod gsap;
pub mod observer;
pub mod page;

pub use page::Page;

use std::cell::RefCell;
use folio_core::{FolioConfig, Severity};
use wasm_bindgen::prelude::*;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn with_page<R>(f: impl FnOnce(&Page) -> R) -> Option<R> {
    PAGE.with(|cell| cell.borrow().as_ref().map(f))
}

fn init_console() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn init(config: FolioConfig) -> Result<(), JsValue> {
    log::set_max_level(config.log_level.level().to_level_filter());
    if with_page(|_| ()).is_some() {
        log::warn!("folio: already initialized");
        return Ok(());
    }

    let page = Page::install(config)?;
    log::info!("folio: initialized ({} reveal)", page.strategy().as_str());

    PAGE.with(|cell| {
        *cell.borrow_mut() = Some(page);
    });
    Ok(())
}

/// Install every page behaviour with the default configuration.
/// Call once after the module has loaded.
#[wasm_bindgen]
pub fn folio_init() -> Result<(), JsValue> {
    init_console();
    init(FolioConfig::default())
}

/// Like `folio_init`, overriding defaults with a JSON configuration.
/// Invalid JSON is logged and the defaults are used.
#[wasm_bindgen]
pub fn folio_init_with_config(json: &str) -> Result<(), JsValue> {
    init_console();
    let config = match FolioConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("folio: invalid config, using defaults: {err}");
            FolioConfig::default()
        }
    };
    init(config)
}

/// Show a toast from page script. Unknown severities fall back to `success`.
#[wasm_bindgen]
pub fn folio_notify(message: &str, severity: &str) {
    let severity = Severity::parse(severity).unwrap_or_default();
    if with_page(|page| page.notify(message, severity)).is_none() {
        log::warn!("folio: notify before init: {message}");
    }
}

/// Reveal strategy in use (`rich` or `fallback`), empty before init.
#[wasm_bindgen]
pub fn folio_strategy() -> String {
    with_page(|page| page.strategy().as_str().to_string()).unwrap_or_default()
}
