//! Bridge to the GSAP globals (`gsap`, `ScrollTrigger`) when the page loads them.

use folio_core::TweenVars;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// Which animation globals the page provides.
#[derive(Debug, Clone)]
pub struct GsapGlobals {
    gsap: Option<JsValue>,
    scroll_trigger: Option<JsValue>,
}

impl GsapGlobals {
    pub fn detect() -> Self {
        Self {
            gsap: global("gsap"),
            scroll_trigger: global("ScrollTrigger"),
        }
    }

    pub fn has_gsap(&self) -> bool {
        self.gsap.is_some()
    }

    pub fn has_scroll_trigger(&self) -> bool {
        self.scroll_trigger.is_some()
    }

    /// A usable bridge, only when both globals exist.
    pub fn into_bridge(self) -> Option<Gsap> {
        Some(Gsap {
            gsap: self.gsap?,
            scroll_trigger: self.scroll_trigger?,
        })
    }
}

fn global(name: &str) -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

pub struct Gsap {
    gsap: JsValue,
    scroll_trigger: JsValue,
}

impl Gsap {
    pub fn register_scroll_trigger(&self) -> Result<(), JsValue> {
        self.method("registerPlugin")?
            .call1(&self.gsap, &self.scroll_trigger)?;
        Ok(())
    }

    /// `gsap.to(targets, vars)`.
    pub fn to(&self, targets: &JsValue, vars: &TweenVars) -> Result<JsValue, JsValue> {
        let vars = vars_object(vars, None)?;
        self.method("to")?.call2(&self.gsap, targets, &vars)
    }

    /// `gsap.fromTo(target, from, to)` with `target` as its own scroll trigger.
    pub fn from_to_on_scroll(
        &self,
        target: &Element,
        from: &TweenVars,
        to: &TweenVars,
    ) -> Result<JsValue, JsValue> {
        let from = vars_object(from, None)?;
        let to = vars_object(to, Some(target))?;
        self.method("fromTo")?.call3(&self.gsap, target, &from, &to)
    }

    fn method(&self, name: &str) -> Result<Function, JsValue> {
        Reflect::get(&self.gsap, &JsValue::from_str(name))?.dyn_into::<Function>()
    }
}

/// Serialize `vars` into a plain JS object, pointing its scroll trigger at
/// `trigger` when given.
fn vars_object(vars: &TweenVars, trigger: Option<&Element>) -> Result<JsValue, JsValue> {
    let json = vars
        .to_json()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let object = js_sys::JSON::parse(&json)?;
    if let Some(trigger) = trigger {
        let scroll_trigger = Reflect::get(&object, &JsValue::from_str("scrollTrigger"))?;
        if scroll_trigger.is_object() {
            Reflect::set(&scroll_trigger, &JsValue::from_str("trigger"), trigger)?;
        }
    }
    Ok(object)
}
