//! Ready-queue primitives shared by all policies.
//!
//! A queue holds indices into the process vector owned by the current
//! policy run, so processes are never duplicated between queues.

use std::collections::VecDeque;

use crate::dispatching::QueueOrder;
use crate::models::Process;

/// Indices of processes that arrive exactly at `tick`, in process-set order.
pub fn arrivals(processes: &[Process], tick: u32) -> impl Iterator<Item = usize> + '_ {
    processes
        .iter()
        .enumerate()
        .filter(move |(_, p)| p.arrival_time == tick)
        .map(|(i, _)| i)
}

/// A FIFO of process indices with sort and execute helpers.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    entries: VecDeque<usize>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every process arriving at `tick`.
    pub fn admit(&mut self, processes: &[Process], tick: u32) {
        self.entries.extend(arrivals(processes, tick));
    }

    /// Appends one process.
    pub fn push(&mut self, index: usize) {
        self.entries.push_back(index);
    }

    /// Removes and returns the head.
    pub fn pop(&mut self) -> Option<usize> {
        self.entries.pop_front()
    }

    /// Current head without removing it.
    pub fn head(&self) -> Option<usize> {
        self.entries.front().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indices in queue order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }

    /// Stable-sorts the queue under `order`.
    pub fn sort(&mut self, order: &QueueOrder, processes: &[Process]) {
        order.sort(&mut self.entries, processes);
    }

    /// Moves every entry of `other` to the tail of this queue.
    pub fn append(&mut self, other: &mut ReadyQueue) {
        self.entries.append(&mut other.entries);
    }

    /// Runs the head for one tick, evicting it if that exhausted it.
    ///
    /// Returns the index that ran, or `None` on an empty queue.
    pub fn execute_head(&mut self, processes: &mut [Process]) -> Option<usize> {
        let head = self.head()?;
        processes[head].execute();
        if processes[head].is_finished() {
            self.entries.pop_front();
        }
        Some(head)
    }
}
