//! Progress display regions.

use std::rc::Rc;

use fundpage_core::{PageRegions, ProgressSurface};
use web_sys::{Element, HtmlElement};

use crate::dom;

/// Fill bar, "Raised: ..." line and percentage label
pub struct ProgressRegions {
    fill: HtmlElement,
    raised: Element,
    percentage: Element,
}

impl ProgressRegions {
    /// Look the three regions up; `None` unless all are present.
    pub fn lookup(regions: &PageRegions) -> Option<Rc<dyn ProgressSurface>> {
        let fill = dom::html_by_id(&regions.progress_fill)?;
        let raised = dom::by_id(&regions.raised_text)?;
        let percentage = dom::by_id(&regions.percentage_text)?;
        Some(Rc::new(Self {
            fill,
            raised,
            percentage,
        }))
    }
}

impl ProgressSurface for ProgressRegions {
    fn set_raised_text(&self, text: &str) {
        self.raised.set_text_content(Some(text));
    }

    fn set_percentage_text(&self, text: &str) {
        self.percentage.set_text_content(Some(text));
    }

    fn set_fill_width(&self, width: &str) {
        let _ = self.fill.style().set_property("width", width);
    }
}
