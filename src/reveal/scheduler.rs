//! Deadline queue for the scripted sequence.
//!
//! All timed work of the reveal runs through one `Scheduler`, driven by the
//! UI tick. `cancel_all` drops every pending task and bumps the generation in
//! one step, so a reset can never be followed by a stale tick.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

struct Entry<T> {
    due: Instant,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed: BinaryHeap is a max-heap and the earliest deadline must pop first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Scheduler<T> {
    queue: BinaryHeap<Entry<T>>,
    next_seq: u64,
    generation: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
            generation: 0,
        }
    }

    /// Queues `task` to run at `due`. Equal deadlines run in insertion order.
    pub fn schedule_at(&mut self, due: Instant, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry { due, seq, task });
    }

    /// Pops the earliest task whose deadline is not after `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        if self.queue.peek().is_some_and(|entry| entry.due <= now) {
            self.queue.pop().map(|entry| (entry.due, entry.task))
        } else {
            None
        }
    }

    /// Drops every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        self.generation += 1;
        dropped
    }

    /// Number of `cancel_all` calls so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn pops_in_deadline_order() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(t0 + ms(30), "c");
        scheduler.schedule_at(t0 + ms(10), "a");
        scheduler.schedule_at(t0 + ms(20), "b");

        let now = t0 + ms(100);
        let order: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(now))
            .map(|(_, task)| task)
            .collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_deadlines_keep_insertion_order() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(t0, 1);
        scheduler.schedule_at(t0, 2);
        scheduler.schedule_at(t0, 3);
        let order: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(t0))
            .map(|(_, task)| task)
            .collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn future_tasks_wait() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(t0 + ms(50), ());
        assert!(scheduler.pop_due(t0 + ms(49)).is_none());
        assert!(scheduler.pop_due(t0 + ms(50)).is_some());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn cancel_all_clears_and_bumps_generation() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(t0, 'x');
        scheduler.schedule_at(t0 + ms(5), 'y');
        assert_eq!(scheduler.cancel_all(), 2);
        assert_eq!(scheduler.generation(), 1);
        assert!(scheduler.pop_due(t0 + ms(100)).is_none());
        assert_eq!(scheduler.len(), 0);
    }
}
