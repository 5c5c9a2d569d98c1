use std::time::{Duration, Instant};

/// Fixed-rate tick schedule.
#[derive(Debug)]
pub struct TickClock {
    period: Duration,
    next: Instant,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    fn starting_at(period: Duration, now: Instant) -> Self {
        TickClock {
            period,
            next: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick is due.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn advance(&mut self) {
        self.advance_from(Instant::now());
    }

    // Falling a whole period behind re-anchors the schedule instead of
    // firing a burst of catch-up ticks.
    fn advance_from(&mut self, now: Instant) {
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
    }
}
