use std::time::{Duration, Instant};

/// Shortest cadence a schedule will run at; shorter intervals are raised to it.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Fixed-cadence refresh schedule.
///
/// Ticks are due at `origin + n * interval`, regardless of how long the
/// previous tick took. Ticks missed while a refresh overran are coalesced:
/// the next one is scheduled on the grid, never in the past.
pub struct PollSchedule {
    interval: Duration,
    next_due: Instant,
    ticks: u64,
    skipped: u64,
}

impl PollSchedule {
    /// The first tick is due immediately (initial load).
    pub fn new(interval: Duration, origin: Instant) -> Self {
        if interval < MIN_POLL_INTERVAL {
            tracing::warn!(?interval, min = ?MIN_POLL_INTERVAL, "poll interval raised to minimum");
        }
        Self {
            interval: interval.max(MIN_POLL_INTERVAL),
            next_due: origin,
            ticks: 0,
            skipped: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Grid slots that passed without a tick.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Marks a tick as taken at `now` and moves `next_due` to the first
    /// grid slot strictly after `now`.
    pub fn advance(&mut self, now: Instant) {
        self.ticks += 1;

        let step = self.interval.as_nanos();
        let first = self.next_due + self.interval;
        let missed = if now < first {
            0
        } else {
            u64::try_from((now - first).as_nanos() / step + 1).unwrap_or(u64::MAX)
        };

        if missed > 0 {
            tracing::debug!(missed, "poll ticks coalesced");
            self.skipped += missed;
        }
        let slots = u128::from(missed.saturating_add(1));
        let offset = u64::try_from(step * slots).unwrap_or(u64::MAX);
        self.next_due += Duration::from_nanos(offset);
    }

    /// Blocking poll loop: waits for each due slot and calls `on_tick`.
    /// Stops after `max_ticks` when given.
    pub fn run<F>(&mut self, max_ticks: Option<u64>, mut on_tick: F)
    where
        F: FnMut(u64),
    {
        loop {
            if max_ticks.is_some_and(|max| self.ticks >= max) {
                return;
            }

            let now = Instant::now();
            if !self.is_due(now) {
                std::thread::sleep(self.next_due - now);
                continue;
            }

            on_tick(self.ticks);
            self.advance(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECS_30: Duration = Duration::from_secs(30);

    #[test]
    fn first_tick_is_due_at_origin() {
        let origin = Instant::now();
        let schedule = PollSchedule::new(SECS_30, origin);
        assert!(schedule.is_due(origin));
    }

    #[test]
    fn cadence_ignores_tick_duration() {
        let origin = Instant::now();
        let mut schedule = PollSchedule::new(SECS_30, origin);

        // Tick finished 4s late; next slot still lands on the 30s grid
        schedule.advance(origin + Duration::from_secs(4));
        assert_eq!(schedule.next_due(), origin + SECS_30);
        assert!(!schedule.is_due(origin + Duration::from_secs(29)));
        assert!(schedule.is_due(origin + SECS_30));
    }

    #[test]
    fn overrun_ticks_are_coalesced() {
        let origin = Instant::now();
        let mut schedule = PollSchedule::new(SECS_30, origin);

        // A refresh that hung for 95s covers the 30s, 60s and 90s slots
        schedule.advance(origin + Duration::from_secs(95));
        assert_eq!(schedule.next_due(), origin + Duration::from_secs(120));
        assert_eq!(schedule.ticks(), 1);
        assert_eq!(schedule.skipped(), 3);
    }

    #[test]
    fn overrun_landing_on_a_slot_moves_past_it() {
        let origin = Instant::now();
        let mut schedule = PollSchedule::new(SECS_30, origin);

        // The 30s and 60s slots are both gone by the time the tick ends
        schedule.advance(origin + Duration::from_secs(60));
        assert_eq!(schedule.next_due(), origin + Duration::from_secs(90));
        assert_eq!(schedule.skipped(), 2);
    }

    #[test]
    fn zero_interval_is_raised_to_the_minimum() {
        let origin = Instant::now();
        let mut schedule = PollSchedule::new(Duration::ZERO, origin);
        assert_eq!(schedule.interval(), MIN_POLL_INTERVAL);

        // A full second behind on a 1ms grid must not spin
        schedule.advance(origin + Duration::from_secs(1));
        assert_eq!(schedule.next_due(), origin + Duration::from_millis(1001));
        assert_eq!(schedule.skipped(), 1000);
    }

    #[test]
    fn run_stops_after_max_ticks() {
        let mut schedule = PollSchedule::new(Duration::from_millis(1), Instant::now());
        let mut seen = Vec::new();

        schedule.run(Some(3), |tick| seen.push(tick));

        assert_eq!(seen, vec![0, 1, 2]);
    }
}
