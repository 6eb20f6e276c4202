//! Fundraising Page - browser binding
//!
//! Loads as a WebAssembly module on the fundraising page and wires the
//! fundpage-core components to the document: progress display, wallet copy
//! button, smooth anchor scrolling, FAQ accordion and scroll fade-in.
//!
//! ## Page setup
//!
//! ```html
//! <script type="application/json" id="fundraiser-config">
//!   { "goal": 20000, "raised": 0 }
//! </script>
//! <script type="module">
//!   import init from "./pkg/fundpage.js";
//!   init();
//! </script>
//! ```
//!
//! After mounting, `window.fundraiser` is the [`FundraiserPage`] handle and
//! `window.updateRaisedAmount(n)` updates the progress display.

mod components;
mod dom;
mod logging;
mod timers;

pub use components::FundraiserPage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let (config, config_error) = dom::read_config();
    logging::init(config.level());
    if let Some(e) = config_error {
        tracing::error!("Ignoring page config, using defaults: {}", e);
    }

    dom::on_ready(move || {
        let (page, report) = FundraiserPage::mount(config);
        if report.ready_count() == 0 {
            tracing::warn!("No page components started; check the page markup");
        }
        if let Err(e) = page.expose() {
            tracing::error!("Failed to expose page controller: {}", dom::js_error_text(&e));
        }
    });
    Ok(())
}
