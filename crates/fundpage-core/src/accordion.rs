//! FAQ accordion with single selection.
//!
//! At most one item is open. Activating the open item closes it; activating
//! any other item closes everything and opens that one.

/// Per-item state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    Open,
    #[default]
    Closed,
}

impl PanelState {
    /// Whether the item carries the `active` class
    pub fn is_open(&self) -> bool {
        matches!(self, PanelState::Open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    panels: Vec<PanelState>,
}

impl Accordion {
    /// All items start closed.
    pub fn new(len: usize) -> Self {
        Self {
            panels: vec![PanelState::Closed; len],
        }
    }

    /// Start with item `open` open, when it is in range.
    pub fn with_open(len: usize, open: Option<usize>) -> Self {
        let mut accordion = Self::new(len);
        if let Some(index) = open.filter(|i| *i < len) {
            accordion.panels[index] = PanelState::Open;
        }
        accordion
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<PanelState> {
        self.panels.get(index).copied()
    }

    pub fn states(&self) -> &[PanelState] {
        &self.panels
    }

    pub fn open_index(&self) -> Option<usize> {
        self.panels.iter().position(PanelState::is_open)
    }

    /// Activate the question of item `index`.
    ///
    /// Indices outside the list are ignored.
    pub fn toggle(&mut self, index: usize) -> &[PanelState] {
        let Some(current) = self.state(index) else {
            tracing::warn!(index, len = self.len(), "FAQ item out of range");
            return &self.panels;
        };

        self.panels.fill(PanelState::Closed);
        if !current.is_open() {
            self.panels[index] = PanelState::Open;
        }
        &self.panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_second_closes_first() {
        let mut faq = Accordion::new(3);
        faq.toggle(0);
        faq.toggle(1);
        assert_eq!(faq.state(0), Some(PanelState::Closed));
        assert_eq!(faq.state(1), Some(PanelState::Open));
        assert_eq!(faq.open_index(), Some(1));
    }

    #[test]
    fn test_toggle_same_closes_all() {
        let mut faq = Accordion::new(3);
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq.open_index(), None);
        assert!(faq.states().iter().all(|s| !s.is_open()));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut faq = Accordion::new(2);
        faq.toggle(0);
        faq.toggle(5);
        assert_eq!(faq.open_index(), Some(0));
    }

    #[test]
    fn test_with_open_seeds_state() {
        let mut faq = Accordion::with_open(3, Some(2));
        assert_eq!(faq.open_index(), Some(2));
        faq.toggle(2);
        assert_eq!(faq.open_index(), None);
        assert_eq!(Accordion::with_open(3, Some(7)).open_index(), None);
    }

    #[test]
    fn test_empty_accordion() {
        let mut faq = Accordion::new(0);
        assert!(faq.is_empty());
        assert!(faq.toggle(0).is_empty());
    }
}
