//! Shortest-Remaining-Time-Next with priority tie-break.
//!
//! Same tick structure as [`PriorityFcfs`](super::PriorityFcfs), keyed on
//! `(remaining_time, priority)`. The queue is re-sorted every tick, not
//! only on arrivals, so the choice always reflects current remaining times.

use super::queue::ReadyQueue;
use super::{Policy, Step};
use crate::dispatching::QueueOrder;
use crate::models::Process;

/// Preemptive shortest-remaining-time policy.
#[derive(Debug, Clone)]
pub struct Srtn {
    ready: ReadyQueue,
    order: QueueOrder,
}

impl Srtn {
    pub fn new() -> Self {
        Self {
            ready: ReadyQueue::new(),
            order: QueueOrder::remaining_then_priority(),
        }
    }
}

impl Default for Srtn {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for Srtn {
    fn name(&self) -> &'static str {
        "SRTN"
    }

    fn admit(&mut self, processes: &[Process], tick: u32) {
        self.ready.admit(processes, tick);
    }

    fn step(&mut self, processes: &mut [Process]) -> Step {
        self.ready.sort(&self.order, processes);
        match self.ready.execute_head(processes) {
            Some(process) => Step::Ran { lane: 0, process },
            None => Step::Idle,
        }
    }
}
