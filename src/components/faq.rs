//! FAQ accordion wiring.
//!
//! The accordion state lives in an [`Accordion`]; the `active` class on
//! each item is rewritten from it after every click.

use std::cell::RefCell;
use std::rc::Rc;

use fundpage_core::{Accordion, PageRegions, PageResult, PanelState};
use web_sys::Element;

use crate::dom;

const ACTIVE_CLASS: &str = "active";

fn project(items: &[Element], states: &[PanelState]) {
    for (item, state) in items.iter().zip(states) {
        let _ = item
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, state.is_open());
    }
}

pub fn init(regions: &PageRegions) -> PageResult<()> {
    let items = Rc::new(dom::query_all(&regions.faq_item));
    let initially_open = items
        .iter()
        .position(|item| item.class_list().contains(ACTIVE_CLASS));
    let accordion = Rc::new(RefCell::new(Accordion::with_open(items.len(), initially_open)));
    project(&items, accordion.borrow().states());

    for (index, item) in items.iter().enumerate() {
        let question = match item.query_selector(&regions.faq_question) {
            Ok(Some(question)) => question,
            _ => continue,
        };
        let items = items.clone();
        let accordion = accordion.clone();
        dom::listen(&question, "click", move |_| {
            let mut accordion = accordion.borrow_mut();
            let states = accordion.toggle(index);
            project(&items, states);
        });
    }
    tracing::debug!(count = items.len(), "FAQ ready");
    Ok(())
}
