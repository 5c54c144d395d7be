use std::time::{Duration, Instant};

/// Period between applied ticks, measured from the last applied tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Observable phase of the countdown, derived from the engine fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    /// Full duration remaining, not running.
    Idle,
    Running,
    /// Stopped partway through.
    Paused,
    /// Remaining time reached zero; only a reset or duration change exits.
    Expired,
}

/// Tracks remaining time for a single exam session.
///
/// Invariants: `remaining <= total`, and `remaining == 0` forces the
/// running flag off. The total is a snapshot of the configured duration
/// taken at construction or [`set_duration_minutes`](Self::set_duration_minutes);
/// live configuration edits never reach a running countdown.
///
/// Every reset or duration change bumps an epoch counter. A tick carries
/// the epoch it was armed under and is discarded on mismatch, so a stale
/// wakeup scheduled before a reset can never corrupt the fresh state.
#[derive(Debug)]
pub struct CountdownEngine {
    total_seconds: u32,
    remaining_seconds: u32,
    running: bool,
    epoch: u64,
    /// Anchor of the 1-second cadence; `None` whenever not running.
    last_tick: Option<Instant>,
}

impl CountdownEngine {
    /// Create an engine holding the full configured duration.
    ///
    /// A zero duration (the coerced form of malformed input) yields an
    /// engine that is already expired, so the display fails safe at
    /// "00:00" instead of running into negative time.
    pub fn new(duration_minutes: u32) -> Self {
        let total = duration_minutes.saturating_mul(60);
        Self {
            total_seconds: total,
            remaining_seconds: total,
            running: false,
            epoch: 0,
            last_tick: None,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Generation counter; ticks armed under an older epoch are ignored.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn phase(&self) -> CountdownPhase {
        if self.remaining_seconds == 0 {
            CountdownPhase::Expired
        } else if self.running {
            CountdownPhase::Running
        } else if self.remaining_seconds == self.total_seconds {
            CountdownPhase::Idle
        } else {
            CountdownPhase::Paused
        }
    }

    /// Begin or resume counting. No-op once expired.
    ///
    /// The tick cadence is re-anchored at `now`, so a pause/resume pair
    /// neither skips nor double-counts a second.
    pub fn start(&mut self, now: Instant) {
        if self.remaining_seconds == 0 || self.running {
            return;
        }
        self.running = true;
        self.last_tick = Some(now);
    }

    /// Stop counting and cancel the pending tick.
    pub fn pause(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.running {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Restore the full duration and stop, from any phase.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.running = false;
        self.last_tick = None;
        self.epoch += 1;
    }

    /// Unconditionally reinitialize with a new duration snapshot.
    ///
    /// Discards any in-progress countdown; this is the only path through
    /// which a configuration change reaches the engine.
    pub fn set_duration_minutes(&mut self, duration_minutes: u32) {
        let total = duration_minutes.saturating_mul(60);
        self.total_seconds = total;
        self.remaining_seconds = total;
        self.running = false;
        self.last_tick = None;
        self.epoch += 1;
    }

    /// Apply a single one-second decrement armed under `epoch`.
    ///
    /// Stale epochs and ticks arriving while not running are suppressed
    /// rather than treated as errors. Reaching zero forces the running
    /// flag off.
    pub fn tick(&mut self, epoch: u64) {
        if epoch != self.epoch || !self.running {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
            self.last_tick = None;
        }
    }

    /// Drain every whole second elapsed since the last applied tick.
    ///
    /// Called by the UI once per frame with a monotonic `now`. The cadence
    /// is measured from the previous tick, not from session start, so
    /// scheduling jitter may accumulate but is never corrected. Returns
    /// the delay until the next tick is due, or `None` when no wakeup is
    /// needed.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }

        let epoch = self.epoch;
        let mut anchor = match self.last_tick {
            Some(anchor) => anchor,
            None => {
                self.last_tick = Some(now);
                return Some(TICK_PERIOD);
            }
        };

        while self.running && now.duration_since(anchor) >= TICK_PERIOD {
            anchor += TICK_PERIOD;
            self.tick(epoch);
        }

        if !self.running {
            return None;
        }

        self.last_tick = Some(anchor);
        Some(TICK_PERIOD.saturating_sub(now.duration_since(anchor)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(engine: &mut CountdownEngine, count: u32) {
        let epoch = engine.epoch();
        for _ in 0..count {
            engine.tick(epoch);
        }
    }

    #[test]
    fn test_initial_phase_is_idle() {
        let engine = CountdownEngine::new(90);
        assert_eq!(engine.phase(), CountdownPhase::Idle);
        assert_eq!(engine.total_seconds(), 5400);
        assert_eq!(engine.remaining_seconds(), 5400);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_zero_duration_initializes_expired() {
        let engine = CountdownEngine::new(0);
        assert_eq!(engine.phase(), CountdownPhase::Expired);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_start_is_noop_when_expired() {
        let mut engine = CountdownEngine::new(0);
        engine.start(Instant::now());
        assert!(!engine.is_running());
        assert_eq!(engine.phase(), CountdownPhase::Expired);
    }

    #[test]
    fn test_tick_decrements_and_expires() {
        let mut engine = CountdownEngine::new(1);
        engine.start(Instant::now());
        run_ticks(&mut engine, 59);
        assert_eq!(engine.remaining_seconds(), 1);
        assert_eq!(engine.phase(), CountdownPhase::Running);

        run_ticks(&mut engine, 1);
        assert_eq!(engine.remaining_seconds(), 0);
        assert_eq!(engine.phase(), CountdownPhase::Expired);
        assert!(!engine.is_running());

        // No further decrement past zero, even if a tick slips through.
        run_ticks(&mut engine, 3);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_pause_enters_paused_phase() {
        let mut engine = CountdownEngine::new(2);
        engine.start(Instant::now());
        run_ticks(&mut engine, 30);
        engine.pause();
        assert_eq!(engine.phase(), CountdownPhase::Paused);
        assert_eq!(engine.remaining_seconds(), 90);
    }

    #[test]
    fn test_stale_epoch_tick_is_suppressed() {
        let mut engine = CountdownEngine::new(2);
        engine.start(Instant::now());
        let stale = engine.epoch();
        engine.reset();

        engine.start(Instant::now());
        engine.tick(stale);
        assert_eq!(engine.remaining_seconds(), 120);

        engine.tick(engine.epoch());
        assert_eq!(engine.remaining_seconds(), 119);
    }

    #[test]
    fn test_duration_change_reinitializes_unconditionally() {
        let mut engine = CountdownEngine::new(90);
        engine.start(Instant::now());
        run_ticks(&mut engine, 100);
        let stale = engine.epoch();

        engine.set_duration_minutes(45);
        assert_eq!(engine.phase(), CountdownPhase::Idle);
        assert_eq!(engine.remaining_seconds(), 2700);
        assert!(!engine.is_running());

        // A tick armed before the change must not fire into the new state.
        engine.tick(stale);
        assert_eq!(engine.remaining_seconds(), 2700);
    }

    #[test]
    fn test_poll_applies_one_tick_per_elapsed_second() {
        let mut engine = CountdownEngine::new(1);
        let t0 = Instant::now();
        engine.start(t0);

        engine.poll(t0 + Duration::from_millis(500));
        assert_eq!(engine.remaining_seconds(), 60);

        engine.poll(t0 + Duration::from_millis(3200));
        assert_eq!(engine.remaining_seconds(), 57);

        // Cadence re-arms from the last tick, so the next second is due
        // at t0 + 4s, not t0 + 4.2s.
        engine.poll(t0 + Duration::from_millis(4100));
        assert_eq!(engine.remaining_seconds(), 56);
    }

    #[test]
    fn test_poll_runs_to_expiry() {
        let mut engine = CountdownEngine::new(1);
        let t0 = Instant::now();
        engine.start(t0);
        let next = engine.poll(t0 + Duration::from_secs(120));
        assert_eq!(engine.remaining_seconds(), 0);
        assert_eq!(engine.phase(), CountdownPhase::Expired);
        assert_eq!(next, None);
    }

    #[test]
    fn test_resume_reanchors_cadence() {
        let mut engine = CountdownEngine::new(1);
        let t0 = Instant::now();
        engine.start(t0);
        engine.poll(t0 + Duration::from_millis(2900));
        assert_eq!(engine.remaining_seconds(), 58);

        engine.pause();
        let before = engine.remaining_seconds();

        // Resume much later; no seconds may be skipped or double-counted.
        let t1 = t0 + Duration::from_secs(600);
        engine.start(t1);
        assert_eq!(engine.remaining_seconds(), before);
        engine.poll(t1 + Duration::from_millis(400));
        assert_eq!(engine.remaining_seconds(), before);
        engine.poll(t1 + Duration::from_millis(1000));
        assert_eq!(engine.remaining_seconds(), before - 1);
    }
}
