//! Property-based tests for the page rules
//!
//! Uses proptest to check the percentage law, the display clamp, and the
//! accordion and reveal invariants over arbitrary inputs.

use fundpage_core::accordion::Accordion;
use fundpage_core::format::CurrencyFormatter;
use fundpage_core::progress::Progress;
use fundpage_core::reveal::{IntersectionSample, RevealTracker, Visibility};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn goal_strategy() -> impl Strategy<Value = f64> {
    (1u32..10_000_000).prop_map(f64::from)
}

/// Whole-unit goal and a raised amount within it
fn within_goal_strategy() -> impl Strategy<Value = (u64, u64)> {
    (1u64..10_000_000).prop_flat_map(|goal| (Just(goal), 0..=goal))
}

/// Label for `raised / goal` computed in integer tenths, ties rounded up
fn expected_label(goal: u64, raised: u64) -> String {
    let tenths = (raised * 2000 + goal) / (goal * 2);
    format!("{}.{}%", tenths / 10, tenths % 10)
}

/// Exact ratio is a multiple of 0.05 that ends in 5 (e.g. 12.25)
fn is_tie(goal: u64, raised: u64) -> bool {
    (raised * 2000) % (goal * 2) == goal
}

fn sample_strategy() -> impl Strategy<Value = IntersectionSample> {
    (any::<bool>(), 0.0f64..=1.0).prop_map(|(is_intersecting, ratio)| IntersectionSample {
        is_intersecting,
        ratio,
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Within the goal, the label is the exact ratio to one decimal
    #[test]
    fn percentage_matches_ratio((goal, raised) in within_goal_strategy()) {
        prop_assume!(!is_tie(goal, raised));
        let snapshot = Progress::new(goal as f64, raised as f64)
            .snapshot(&CurrencyFormatter::default());
        prop_assert_eq!(snapshot.percentage_text, expected_label(goal, raised));
    }

    /// Exact quarter-percent ties round up, as the page always showed them
    #[test]
    fn percentage_ties_round_up(scale in 1u64..25_000, quarters in 0u64..400) {
        let goal = 400 * scale;
        let raised = quarters * scale;
        let snapshot = Progress::new(goal as f64, raised as f64)
            .snapshot(&CurrencyFormatter::default());
        prop_assert_eq!(snapshot.percentage_text, expected_label(goal, raised));
    }

    /// Past the goal, the label is clamped and the amount is untouched
    #[test]
    fn percentage_clamps_above_goal(goal in goal_strategy(), extra in 1u32..1_000_000) {
        let raised = goal + f64::from(extra);
        let progress = Progress::new(goal, raised);
        let snapshot = progress.snapshot(&CurrencyFormatter::default());
        prop_assert_eq!(snapshot.percentage_text, "100.0%");
        prop_assert_eq!(snapshot.fill_width, "100%");
        prop_assert_eq!(progress.raised, raised);
    }

    /// Percentage always stays within [0, 100]
    #[test]
    fn percentage_is_bounded(goal in 0.0f64..1e9, raised in 0.0f64..1e12) {
        let pct = Progress::new(goal, raised).percentage();
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    /// After any click sequence at most one FAQ item is open
    #[test]
    fn accordion_single_selection(len in 1usize..8, clicks in prop::collection::vec(0usize..10, 0..40)) {
        let mut faq = Accordion::new(len);
        for index in clicks {
            let before = faq.open_index();
            faq.toggle(index);
            let open = faq.states().iter().filter(|s| s.is_open()).count();
            prop_assert!(open <= 1);
            if index < len {
                if before == Some(index) {
                    prop_assert_eq!(faq.open_index(), None);
                } else {
                    prop_assert_eq!(faq.open_index(), Some(index));
                }
            } else {
                prop_assert_eq!(faq.open_index(), before);
            }
        }
    }

    /// A revealed element never goes back to hidden
    #[test]
    fn reveal_is_monotonic(samples in prop::collection::vec(sample_strategy(), 1..50)) {
        let mut tracker = RevealTracker::new(1);
        let mut revealed_events = 0;
        let mut seen_revealed = false;
        for sample in samples {
            if tracker.observe(0, sample) == fundpage_core::RevealOutcome::Revealed {
                revealed_events += 1;
            }
            let now = tracker.visibility(0) == Some(Visibility::Revealed);
            prop_assert!(!(seen_revealed && !now));
            seen_revealed = now;
        }
        prop_assert!(revealed_events <= 1);
    }
}
