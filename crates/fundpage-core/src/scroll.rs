//! Smooth in-page navigation.
//!
//! Links whose `href` starts with `#` (but is not just `#`) scroll smoothly
//! to their target, leaving room for the fixed navigation bar. A link whose
//! target does not exist keeps its default navigation.

/// Viewport queries and scrolling.
pub trait ScrollViewport {
    /// Document-relative top of the element `selector` points at, or `None`
    /// when nothing matches (or the selector does not parse).
    fn target_top(&self, selector: &str) -> Option<f64>;

    /// Height of the fixed navigation bar, 0 when there is none.
    fn nav_height(&self) -> f64;

    fn smooth_scroll_to(&self, top: f64);
}

/// What an anchor activation should do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAction {
    /// Leave the browser's default navigation alone
    Default,
    /// Suppress default navigation and scroll to `top`
    ScrollTo { top: f64 },
}

impl AnchorAction {
    pub fn suppresses_default(&self) -> bool {
        matches!(self, AnchorAction::ScrollTo { .. })
    }
}

/// Whether `href` is an in-page anchor this module handles.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href != "#"
}

pub fn plan_anchor_scroll(href: &str, viewport: &dyn ScrollViewport) -> AnchorAction {
    if !is_in_page_anchor(href) {
        return AnchorAction::Default;
    }
    match viewport.target_top(href) {
        Some(top) => AnchorAction::ScrollTo {
            top: top - viewport.nav_height(),
        },
        None => {
            tracing::debug!(href, "Anchor target not found");
            AnchorAction::Default
        }
    }
}

/// Plan and, when a target exists, perform the scroll.
pub fn activate_anchor(href: &str, viewport: &dyn ScrollViewport) -> AnchorAction {
    let action = plan_anchor_scroll(href, viewport);
    if let AnchorAction::ScrollTo { top } = action {
        viewport.smooth_scroll_to(top);
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeViewport {
        targets: Vec<(&'static str, f64)>,
        nav: f64,
        scrolled: RefCell<Vec<f64>>,
    }

    impl ScrollViewport for FakeViewport {
        fn target_top(&self, selector: &str) -> Option<f64> {
            self.targets
                .iter()
                .find(|(s, _)| *s == selector)
                .map(|(_, top)| *top)
        }
        fn nav_height(&self) -> f64 {
            self.nav
        }
        fn smooth_scroll_to(&self, top: f64) {
            self.scrolled.borrow_mut().push(top);
        }
    }

    fn viewport(nav: f64) -> FakeViewport {
        FakeViewport {
            targets: vec![("#faq", 1200.0)],
            nav,
            scrolled: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_anchor_filter() {
        assert!(is_in_page_anchor("#faq"));
        assert!(!is_in_page_anchor("#"));
        assert!(!is_in_page_anchor("/donate"));
        assert!(!is_in_page_anchor(""));
    }

    #[test]
    fn test_scroll_offsets_by_navbar() {
        let vp = viewport(80.0);
        let action = activate_anchor("#faq", &vp);
        assert_eq!(action, AnchorAction::ScrollTo { top: 1120.0 });
        assert!(action.suppresses_default());
        assert_eq!(*vp.scrolled.borrow(), vec![1120.0]);
    }

    #[test]
    fn test_no_navbar_means_no_offset() {
        let vp = viewport(0.0);
        assert_eq!(
            plan_anchor_scroll("#faq", &vp),
            AnchorAction::ScrollTo { top: 1200.0 }
        );
    }

    #[test]
    fn test_missing_target_keeps_default() {
        let vp = viewport(80.0);
        let action = activate_anchor("#nowhere", &vp);
        assert_eq!(action, AnchorAction::Default);
        assert!(!action.suppresses_default());
        assert!(vp.scrolled.borrow().is_empty());
    }
}
