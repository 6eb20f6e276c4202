//! Smooth scrolling for in-page anchor links.

use fundpage_core::scroll::{activate_anchor, ScrollViewport};
use fundpage_core::{PageRegions, PageResult};
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Selector for links whose href starts with `#`
const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Window viewport with a fixed navigation bar
pub struct DocumentViewport {
    navbar_selector: String,
}

impl ScrollViewport for DocumentViewport {
    fn target_top(&self, selector: &str) -> Option<f64> {
        // querySelector throws on ids such as "#1-intro"; treat as no target
        let target = document().query_selector(selector).ok().flatten()?;
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        Some(target.get_bounding_client_rect().top() + scroll_y)
    }

    fn nav_height(&self) -> f64 {
        document()
            .query_selector(&self.navbar_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|nav| f64::from(nav.offset_height()))
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

pub fn init(regions: &PageRegions) -> PageResult<()> {
    let links = dom::query_all(ANCHOR_SELECTOR);
    tracing::debug!(count = links.len(), "Wiring anchor links");

    for link in links {
        let viewport = DocumentViewport {
            navbar_selector: regions.navbar.clone(),
        };
        let href_source = link.clone();
        dom::listen(&link, "click", move |event| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            if activate_anchor(&href, &viewport).suppresses_default() {
                event.prevent_default();
            }
        });
    }
    Ok(())
}
