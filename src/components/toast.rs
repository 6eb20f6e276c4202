//! Toast region and alert fallback.

use std::rc::Rc;

use fundpage_core::{AlertFallback, PageRegions, Severity, ToastSurface};
use gloo::utils::window;
use web_sys::{Element, HtmlElement};

use crate::dom;

/// The `#toast` container and its `#toast-message` child
pub struct ToastRegion {
    toast: HtmlElement,
    message: Element,
}

impl ToastRegion {
    pub fn lookup(regions: &PageRegions) -> Option<Rc<dyn ToastSurface>> {
        let toast = dom::html_by_id(&regions.toast)?;
        let message = dom::by_id(&regions.toast_message)?;
        Some(Rc::new(Self { toast, message }))
    }
}

impl ToastSurface for ToastRegion {
    fn show(&self, message: &str, severity: Severity) {
        self.message.set_text_content(Some(message));
        let _ = self
            .toast
            .style()
            .set_property("background", severity.background());
        let _ = self.toast.class_list().add_1("show");
    }

    fn hide(&self) {
        let _ = self.toast.class_list().remove_1("show");
    }
}

/// `window.alert`
pub struct WindowAlert;

impl AlertFallback for WindowAlert {
    fn alert(&self, message: &str) {
        let _ = window().alert_with_message(message);
    }
}
