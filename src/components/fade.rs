//! Scroll fade-in wiring.

use std::cell::RefCell;
use std::rc::Rc;

use fundpage_core::reveal::{needs_watcher, IntersectionSample, RevealOutcome, RevealTracker};
use fundpage_core::{PageError, PageRegions, PageResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, js_error_text};

const VISIBLE_CLASS: &str = "visible";
const INDEX_ATTRIBUTE: &str = "data-fade-index";

pub fn init(regions: &PageRegions) -> PageResult<()> {
    let elements = dom::query_all(&regions.fade_in);
    if !needs_watcher(elements.len()) {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
    let options = tracker.borrow().options().clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTRIBUTE)
                    .and_then(|value| value.parse::<usize>().ok())
                else {
                    continue;
                };
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if tracker.borrow_mut().observe(index, sample) == RevealOutcome::Revealed {
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| PageError::Unsupported(format!("IntersectionObserver: {}", js_error_text(&e))))?;
    callback.forget();

    for (index, element) in elements.iter().enumerate() {
        let _ = element.set_attribute(INDEX_ATTRIBUTE, &index.to_string());
        let _ = element.class_list().remove_1(VISIBLE_CLASS);
        observer.observe(element);
    }
    tracing::debug!(count = elements.len(), "Fade-in watcher ready");
    Ok(())
}
