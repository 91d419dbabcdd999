//! Single-threaded timer queue.
//!
//! The page has exactly two kinds of deferred work: the carousel's repeating interval
//! and the contact form's one-shot completion. Both are kept here on a virtual
//! millisecond clock that the host advances explicitly, so tests can step time
//! deterministically and the egui shell can feed it real frame deltas.

use std::time::Duration;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Work to perform when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Move the carousel to its next slide.
    CarouselAdvance,
    /// Finish a pending contact form submission.
    SubmissionComplete,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    task: TimerTask,
    due_ms: u64,
    period_ms: Option<u64>,
}

/// Virtual-time scheduler for intervals and timeouts.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the scheduler was created.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedules `task` to fire every `period`, starting one period from now.
    ///
    /// A zero period is clamped to one millisecond.
    pub fn set_interval(&mut self, period: Duration, task: TimerTask) -> TimerId {
        let period_ms = duration_ms(period).max(1);
        self.push(task, period_ms, Some(period_ms))
    }

    /// Schedules `task` to fire once after `delay`.
    pub fn set_timeout(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.push(task, duration_ms(delay), None)
    }

    /// Cancels a timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Time until the earliest pending timer fires, `None` when idle.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.due_ms.saturating_sub(self.now_ms))
            .min()
            .map(Duration::from_millis)
    }

    /// Moves the clock forward by `elapsed` and returns every firing in due order.
    ///
    /// Timers due at the same instant fire in creation order. An interval overrun by a
    /// long step fires once for every period that elapsed.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(TimerId, TimerTask)> {
        let target = self.now_ms.saturating_add(duration_ms(elapsed));
        let mut fired = Vec::new();

        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= target)
                .min_by_key(|(_, t)| (t.due_ms, t.id))
                .map(|(i, _)| i);

            let Some(index) = next else {
                break;
            };

            let (id, task, due_ms, period_ms) = {
                let t = &self.timers[index];
                (t.id, t.task, t.due_ms, t.period_ms)
            };
            self.now_ms = due_ms;
            fired.push((id, task));

            match period_ms {
                Some(period) => self.timers[index].due_ms = due_ms + period,
                None => {
                    self.timers.remove(index);
                }
            }
        }

        self.now_ms = target;
        fired
    }

    fn push(&mut self, task: TimerTask, delay_ms: u64, period_ms: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            task,
            due_ms: self.now_ms.saturating_add(delay_ms),
            period_ms,
        });
        id
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_fires_once() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_timeout(Duration::from_millis(800), TimerTask::SubmissionComplete);

        assert!(scheduler.advance(Duration::from_millis(799)).is_empty());
        assert!(scheduler.is_pending(id));

        let fired = scheduler.advance(Duration::from_millis(1));
        assert_eq!(fired, vec![(id, TimerTask::SubmissionComplete)]);
        assert!(!scheduler.is_pending(id));
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_interval_catches_up_on_long_step() {
        let mut scheduler = Scheduler::new();
        scheduler.set_interval(Duration::from_millis(4500), TimerTask::CarouselAdvance);

        let fired = scheduler.advance(Duration::from_millis(9000));
        assert_eq!(fired.len(), 2);
        assert_eq!(scheduler.time_until_next(), Some(Duration::from_millis(4500)));
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        let interval = scheduler.set_interval(Duration::from_millis(500), TimerTask::CarouselAdvance);
        let timeout = scheduler.set_timeout(Duration::from_millis(800), TimerTask::SubmissionComplete);

        let fired = scheduler.advance(Duration::from_millis(1000));
        assert_eq!(
            fired,
            vec![
                (interval, TimerTask::CarouselAdvance),
                (timeout, TimerTask::SubmissionComplete),
                (interval, TimerTask::CarouselAdvance),
            ]
        );
        assert_eq!(scheduler.now_ms(), 1000);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_timeout(Duration::from_millis(800), TimerTask::SubmissionComplete);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
        assert_eq!(scheduler.time_until_next(), None);
    }
}
