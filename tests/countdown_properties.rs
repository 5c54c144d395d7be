// Property-based tests for the countdown state machine
use std::time::Instant;

use exam_display::services::countdown::{progress_fraction, CountdownEngine, CountdownPhase};
use proptest::prelude::*;

proptest! {
    /// Ticking a started engine `total` times always lands exactly on
    /// Expired with zero remaining, and stays there.
    #[test]
    fn ticking_total_times_expires(minutes in 1u32..=180) {
        let mut engine = CountdownEngine::new(minutes);
        let total = engine.total_seconds();
        engine.start(Instant::now());

        let epoch = engine.epoch();
        for _ in 0..total {
            engine.tick(epoch);
        }

        prop_assert_eq!(engine.remaining_seconds(), 0);
        prop_assert_eq!(engine.phase(), CountdownPhase::Expired);
        prop_assert!(!engine.is_running());

        engine.tick(epoch);
        prop_assert_eq!(engine.remaining_seconds(), 0);
    }

    /// The progress fraction stays within [0, 1] and never increases
    /// while the engine is running.
    #[test]
    fn progress_is_monotone_and_bounded(minutes in 1u32..=180, ticks in 0u32..=12_000) {
        let mut engine = CountdownEngine::new(minutes);
        engine.start(Instant::now());

        let epoch = engine.epoch();
        let mut last = progress_fraction(engine.remaining_seconds(), engine.total_seconds());
        prop_assert_eq!(last, 1.0);

        for _ in 0..ticks {
            engine.tick(epoch);
            let fraction = progress_fraction(engine.remaining_seconds(), engine.total_seconds());
            prop_assert!((0.0..=1.0).contains(&fraction));
            prop_assert!(fraction <= last);
            last = fraction;
        }
    }

    /// Reset yields the full duration and a stopped engine regardless of
    /// how far the countdown progressed.
    #[test]
    fn reset_always_restores_total(minutes in 0u32..=180, ticks in 0u32..=12_000) {
        let mut engine = CountdownEngine::new(minutes);
        engine.start(Instant::now());

        let epoch = engine.epoch();
        for _ in 0..ticks {
            engine.tick(epoch);
        }

        engine.reset();
        prop_assert_eq!(engine.remaining_seconds(), engine.total_seconds());
        prop_assert!(!engine.is_running());
    }

    /// The remaining/total invariant holds under any interleaving of
    /// start, pause, tick, and reset.
    #[test]
    fn invariants_hold_under_random_operations(ops in proptest::collection::vec(0u8..4, 0..200)) {
        let mut engine = CountdownEngine::new(3);
        for op in ops {
            match op {
                0 => engine.start(Instant::now()),
                1 => engine.pause(),
                2 => engine.tick(engine.epoch()),
                _ => engine.reset(),
            }
            prop_assert!(engine.remaining_seconds() <= engine.total_seconds());
            if engine.remaining_seconds() == 0 {
                prop_assert!(!engine.is_running());
            }
        }
    }
}
