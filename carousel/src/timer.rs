/// Default autoplay interval.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Schedule {
    Idle,
    /// Started, but no clock reading has been seen yet.
    Armed,
    Due(u64),
}

/// A recurring, host-clocked tick source.
///
/// The timer never reads a clock itself: the host passes its current time to [`poll`]
/// (typically once per frame or from a coarse platform timer). `start` arms the timer and the
/// first poll afterwards schedules the first tick one interval later.
///
/// Cancellation is synchronous: after [`stop`] returns, `poll` reports no tick until the timer
/// is started again.
///
/// [`poll`]: AutoplayTimer::poll
/// [`stop`]: AutoplayTimer::stop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayTimer {
    interval_ms: u64,
    schedule: Schedule,
}

impl AutoplayTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            schedule: Schedule::Idle,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the interval. A pending tick keeps its deadline.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.schedule, Schedule::Idle)
    }

    /// Starts the timer. No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.schedule = Schedule::Armed;
    }

    /// Cancels the timer. No-op when not running.
    pub fn stop(&mut self) {
        self.schedule = Schedule::Idle;
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        match self.schedule {
            Schedule::Due(due) => Some(due),
            _ => None,
        }
    }

    /// Returns `true` when a tick is due at `now_ms`.
    ///
    /// Missed ticks are coalesced: a host that stalls for several intervals sees a single tick,
    /// and the next one is scheduled a full interval after `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.schedule {
            Schedule::Idle => false,
            Schedule::Armed => {
                self.schedule = Schedule::Due(now_ms.saturating_add(self.interval_ms));
                false
            }
            Schedule::Due(due) => {
                if now_ms < due {
                    return false;
                }
                let mut next = due.saturating_add(self.interval_ms);
                if next <= now_ms {
                    next = now_ms.saturating_add(self.interval_ms);
                }
                self.schedule = Schedule::Due(next);
                true
            }
        }
    }
}

impl Default for AutoplayTimer {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}
