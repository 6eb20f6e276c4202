//! Page controller exported to JavaScript.
//!
//! ## Usage from the console
//!
//! ```js
//! fundraiser.updateRaisedAmount(500);
//! // or, the global shorthand
//! updateRaisedAmount(500);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use fundpage_core::page::{init_isolated, step};
use fundpage_core::{
    CurrencyFormatter, DonationProgress, FundraiserConfig, InitReport, Notifier, PageError,
    Severity,
};
use gloo::utils::window;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use super::progress::ProgressRegions;
use super::toast::{ToastRegion, WindowAlert};
use super::{clipboard, faq, fade, scroll};
use crate::timers::BrowserScheduler;

struct PageState {
    config: FundraiserConfig,
    progress: RefCell<DonationProgress>,
    scheduler: BrowserScheduler,
    notifier: Rc<Notifier>,
}

impl PageState {
    fn update_raised(&self, amount: f64) -> Result<(), PageError> {
        let surface = ProgressRegions::lookup(&self.config.regions);
        match self
            .progress
            .borrow_mut()
            .update_raised(amount, surface, &self.scheduler)
        {
            Ok(_) => Ok(()),
            Err(PageError::MissingRegion(region)) => {
                tracing::warn!("Progress elements not found ({}); amount stored", region);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Handle on a mounted fundraising page
#[wasm_bindgen]
pub struct FundraiserPage {
    state: Rc<PageState>,
}

impl FundraiserPage {
    /// Initialize every component, each isolated from the others' failures.
    pub fn mount(config: FundraiserConfig) -> (Self, InitReport) {
        let scheduler = BrowserScheduler;
        let notifier = Rc::new(Notifier::new(
            ToastRegion::lookup(&config.regions),
            Rc::new(WindowAlert),
            Rc::new(scheduler),
            config.toast_duration_ms,
        ));
        let progress = DonationProgress::new(
            config.goal,
            config.raised,
            config.fill_delay_ms,
            CurrencyFormatter::new(&config.currency_symbol),
        );
        let state = Rc::new(PageState {
            config,
            progress: RefCell::new(progress),
            scheduler,
            notifier,
        });

        let regions = &state.config.regions;
        let report = init_isolated(vec![
            step("progress", || {
                let surface = ProgressRegions::lookup(regions);
                state.progress.borrow().render(surface, &state.scheduler).map(|_| ())
            }),
            step("copy-wallet", || {
                clipboard::init(
                    regions,
                    state.config.wallet_address.as_deref(),
                    state.notifier.clone(),
                )
            }),
            step("smooth-scroll", || scroll::init(regions)),
            step("faq", || faq::init(regions)),
            step("fade-in", || fade::init(regions)),
        ]);

        (Self { state }, report)
    }

    /// Publish this page as `window.fundraiser` and `window.updateRaisedAmount`.
    pub fn expose(self) -> Result<(), JsValue> {
        let window = window();

        let state = self.state.clone();
        let update = Closure::wrap(Box::new(move |amount: f64| {
            if let Err(e) = state.update_raised(amount) {
                tracing::error!("{}", e);
            }
        }) as Box<dyn Fn(f64)>);
        Reflect::set(
            &window,
            &JsValue::from_str("updateRaisedAmount"),
            update.as_ref(),
        )?;
        update.forget();

        Reflect::set(&window, &JsValue::from_str("fundraiser"), &JsValue::from(self))?;
        Ok(())
    }
}

#[wasm_bindgen]
impl FundraiserPage {
    /// Store a new raised amount and re-render the progress display.
    #[wasm_bindgen(js_name = updateRaisedAmount)]
    pub fn update_raised_amount(&self, amount: f64) -> Result<(), JsValue> {
        self.state
            .update_raised(amount)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Raised amount as stored (not clamped to the goal).
    #[wasm_bindgen(getter)]
    pub fn raised(&self) -> f64 {
        self.state.progress.borrow().raised()
    }

    #[wasm_bindgen(getter)]
    pub fn goal(&self) -> f64 {
        self.state.progress.borrow().goal()
    }

    /// Displayed (clamped) percentage.
    #[wasm_bindgen(getter)]
    pub fn percentage(&self) -> f64 {
        self.state.progress.borrow().progress().percentage()
    }

    /// Show a toast; `error` selects the red style.
    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(&self, message: &str, error: bool) {
        let severity = if error { Severity::Error } else { Severity::Success };
        self.state.notifier.notify(message, severity);
    }
}
