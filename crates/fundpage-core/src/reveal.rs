//! One-shot fade-in on scroll.
//!
//! Each tracked element starts hidden and is revealed the first time it is
//! reported as intersecting the viewport. The threshold only decides when the
//! browser reports; the ratio itself is not checked, since an element much
//! taller than the viewport can never reach it. A revealed element is never
//! hidden again and should stop being watched.

/// Root margin shrinking the viewport bottom by 50px
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Options for the viewport-intersection watcher
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionOptions {
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self {
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
            threshold: REVEAL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

/// One intersection observation for an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Element just became visible; mark it and stop watching it
    Revealed,
    Unchanged,
}

/// Whether a watcher is needed for `len` fade-tagged elements.
pub fn needs_watcher(len: usize) -> bool {
    len > 0
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    options: IntersectionOptions,
    elements: Vec<Visibility>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self::with_options(len, IntersectionOptions::default())
    }

    pub fn with_options(len: usize, options: IntersectionOptions) -> Self {
        Self {
            options,
            elements: vec![Visibility::Hidden; len],
        }
    }

    pub fn options(&self) -> &IntersectionOptions {
        &self.options
    }

    pub fn visibility(&self, index: usize) -> Option<Visibility> {
        self.elements.get(index).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|v| **v == Visibility::Revealed)
            .count()
    }

    /// Record an intersection sample for element `index`.
    pub fn observe(&mut self, index: usize, sample: IntersectionSample) -> RevealOutcome {
        let Some(state) = self.elements.get_mut(index) else {
            return RevealOutcome::Unchanged;
        };
        if *state == Visibility::Revealed {
            return RevealOutcome::Unchanged;
        }
        if sample.is_intersecting {
            *state = Visibility::Revealed;
            RevealOutcome::Revealed
        } else {
            RevealOutcome::Unchanged
        }
    }
}
