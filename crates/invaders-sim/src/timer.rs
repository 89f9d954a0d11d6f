//! Deferred one-shot callbacks ("run this after D ticks").
//!
//! Entries live in a min-heap keyed by fire tick and insertion order and are
//! drained at the start of each tick. Every entry records the scheduler
//! generation it was created in; `invalidate` bumps the generation so entries
//! scheduled before a session reset are dropped instead of fired.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Work that can be deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Deferred {
    /// Populate the enemy grid for `level` once its banner has expired.
    SpawnWave { level: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Scheduled {
    fire_at_tick: u64,
    sequence: u64,
    generation: u64,
    task: Deferred,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Scheduled>>,
    generation: u64,
    next_sequence: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run on the first tick at or after `now + delay_ticks`.
    pub fn run_once_after(&mut self, now: u64, delay_ticks: u64, task: Deferred) {
        let entry = Scheduled {
            fire_at_tick: now + delay_ticks,
            sequence: self.next_sequence,
            generation: self.generation,
            task,
        };
        self.next_sequence += 1;
        self.queue.push(Reverse(entry));
    }

    /// Pop every task due at `now`, in fire order. Tasks from an older
    /// generation are discarded.
    pub fn drain_due(&mut self, now: u64) -> Vec<Deferred> {
        let mut due = Vec::new();
        while let Some(Reverse(next)) = self.queue.peek() {
            if next.fire_at_tick > now {
                break;
            }
            if let Some(Reverse(entry)) = self.queue.pop() {
                if entry.generation == self.generation {
                    due.push(entry.task);
                } else {
                    tracing::debug!(task = ?entry.task, "dropping stale deferred task");
                }
            }
        }
        due
    }

    /// Cancel everything scheduled so far. Stale entries stay queued until
    /// their fire tick and are dropped there.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of tasks still waiting (including stale ones not yet drained).
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
