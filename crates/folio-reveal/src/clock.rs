//! Deferred work on a virtual clock
//!
//! Every delayed effect is a [`ScheduledTask`] record with an absolute fire
//! time. Nothing advances on its own: the owner calls [`Scheduler::pop_due`]
//! until it returns `None`, then [`Scheduler::settle`] to move the clock.
//! Tasks popped this way set the clock to their own fire time first, so work
//! they schedule is measured from when they were due, not from when the host
//! got around to advancing.

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::Duration;

/// Identifier of a scheduled task, unique per scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Shared cancellation flag for a scheduled task
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A unit of deferred work
#[derive(Debug, Clone)]
pub struct ScheduledTask<A> {
    pub id: TaskId,
    pub fire_at: Duration,
    pub token: CancellationToken,
    pub action: A,
}

// Heap ordering: earliest fire time first, then scheduling order
impl<A> PartialEq for ScheduledTask<A> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.id == other.id
    }
}

impl<A> Eq for ScheduledTask<A> {}

impl<A> PartialOrd for ScheduledTask<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for ScheduledTask<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the earliest task
        (other.fire_at, other.id).cmp(&(self.fire_at, self.id))
    }
}

/// Handle returned when scheduling
#[derive(Debug, Clone)]
pub struct TaskHandle {
    pub id: TaskId,
    pub fire_at: Duration,
    pub token: CancellationToken,
}

/// Queue of deferred actions over a virtual clock
#[derive(Debug)]
pub struct Scheduler<A> {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<ScheduledTask<A>>,
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting, including cancelled ones not yet discarded
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Fire time of the earliest waiting task
    pub fn next_fire_time(&self) -> Option<Duration> {
        self.queue.peek().map(|task| task.fire_at)
    }

    /// Schedule `action` at absolute time `fire_at`
    ///
    /// Times in the past are fired on the next `pop_due`.
    pub fn schedule_at(&mut self, fire_at: Duration, action: A) -> TaskHandle {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        let token = CancellationToken::new();
        self.queue.push(ScheduledTask {
            id,
            fire_at,
            token: token.clone(),
            action,
        });

        TaskHandle { id, fire_at, token }
    }

    /// Schedule `action` after `delay` from now
    pub fn schedule_in(&mut self, delay: Duration, action: A) -> TaskHandle {
        self.schedule_at(self.now + delay, action)
    }

    /// Take the next task due at or before `until`
    ///
    /// Moves the clock to the task's fire time. Cancelled tasks are dropped.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTask<A>> {
        while let Some(next) = self.queue.peek() {
            if next.fire_at > until {
                return None;
            }

            let task = self.queue.pop()?;
            self.now = self.now.max(task.fire_at);
            if task.token.is_cancelled() {
                continue;
            }
            return Some(task);
        }
        None
    }

    /// Move the clock to `until` once no more tasks are due
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn drain(scheduler: &mut Scheduler<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(task) = scheduler.pop_due(until) {
            fired.push(task.action);
        }
        scheduler.settle(until);
        fired
    }

    #[test]
    fn test_fires_in_time_order() {
        let mut s = Scheduler::new();
        s.schedule_in(ms(300), "counter");
        s.schedule_in(ms(200), "bar");
        s.schedule_in(ms(400), "gauge");

        assert_eq!(drain(&mut s, ms(250)), vec!["bar"]);
        assert_eq!(s.now(), ms(250));
        assert_eq!(drain(&mut s, ms(1000)), vec!["counter", "gauge"]);
        assert!(s.is_idle());
    }

    #[test]
    fn test_same_time_keeps_schedule_order() {
        let mut s = Scheduler::new();
        s.schedule_in(ms(100), "a");
        s.schedule_in(ms(100), "b");
        s.schedule_in(ms(100), "c");
        assert_eq!(drain(&mut s, ms(100)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut s = Scheduler::new();
        let handle = s.schedule_in(ms(100), "cancelled");
        s.schedule_in(ms(200), "kept");
        handle.token.cancel();
        assert_eq!(drain(&mut s, ms(500)), vec!["kept"]);
    }

    #[test]
    fn test_pop_sets_clock_to_fire_time() {
        let mut s = Scheduler::new();
        s.schedule_in(ms(100), "first");
        let task = s.pop_due(ms(1000)).unwrap();
        assert_eq!(task.fire_at, ms(100));
        assert_eq!(s.now(), ms(100));

        // follow-up measured from the task's own fire time
        let follow = s.schedule_in(ms(50), "follow");
        assert_eq!(follow.fire_at, ms(150));
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let mut s: Scheduler<&'static str> = Scheduler::new();
        s.settle(ms(500));
        s.settle(ms(100));
        assert_eq!(s.now(), ms(500));
    }
}
