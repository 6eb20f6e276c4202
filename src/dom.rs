//! Document helpers shared by the components.

use fundpage_core::config::CONFIG_ELEMENT_ID;
use fundpage_core::{FundraiserConfig, PageError};
use gloo::utils::document;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement};

/// Element with the given id, if present.
pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// HTML element with the given id, if present.
pub fn html_by_id(id: &str) -> Option<HtmlElement> {
    by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Every element matching `selector`. An unparsable selector matches nothing.
pub fn query_all(selector: &str) -> Vec<Element> {
    let list = match document().query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(selector, "Bad selector: {}", js_error_text(&e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach an event listener that lives for the rest of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        tracing::warn!(event, "Failed to attach listener: {}", js_error_text(&e));
    }
    closure.forget();
}

/// Run `f` once the document is parsed.
pub fn on_ready(f: impl FnOnce() + 'static) {
    let doc = document();
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    listen(&doc, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

/// Read the embedded JSON config.
///
/// No config element means defaults. A broken config also falls back to
/// defaults; the error is returned so it can be logged once logging is up.
pub fn read_config() -> (FundraiserConfig, Option<PageError>) {
    let json = by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    match json {
        Some(json) if !json.trim().is_empty() => match FundraiserConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(e) => (FundraiserConfig::default(), Some(e)),
        },
        _ => (FundraiserConfig::default(), None),
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return error.message().into();
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
