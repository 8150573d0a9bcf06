use std::time::{Duration, Instant};

use tracing::info;

/// Periodic progress/ETA reporting for a long seeding run.
#[derive(Debug)]
pub(crate) struct Progress {
    start: Instant,
    last_report: Instant,
    interval: Option<Duration>,
    total: usize,
}

impl Progress {
    pub(crate) fn new(total: usize, interval: Option<Duration>) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_report: now,
            interval,
            total,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Called before selecting codevector `selected` (so `selected` are done).
    /// Returns `true` if an event was emitted.
    pub(crate) fn tick(&mut self, selected: usize) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        if selected == 0 || self.last_report.elapsed() <= interval {
            return false;
        }

        let elapsed = self.elapsed();
        info!(
            selected,
            total = self.total,
            elapsed_s = format_args!("{:.2}", elapsed.as_secs_f64()),
            eta_s = format_args!("{:.2}", eta(elapsed, selected, self.total).as_secs_f64()),
            "selecting codevectors"
        );
        self.last_report = Instant::now();
        true
    }

    pub(crate) fn finish(&self) {
        if self.interval.is_some() {
            info!(
                total = self.total,
                elapsed_s = format_args!("{:.2}", self.elapsed().as_secs_f64()),
                "codebook seeded"
            );
        }
    }
}

/// Remaining time, extrapolated from the mean time per codevector so far.
fn eta(elapsed: Duration, selected: usize, total: usize) -> Duration {
    if selected == 0 {
        return Duration::ZERO;
    }
    let per = elapsed.as_secs_f64() / selected as f64;
    Duration::from_secs_f64(per * total.saturating_sub(selected) as f64)
}
