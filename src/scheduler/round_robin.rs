//! Round Robin over a priority-ordered ready queue.
//!
//! # Algorithm (per tick)
//!
//! 1. Sort the ready queue by `(priority, arrival_time)`.
//! 2. A process preempted on the previous tick rejoins the ready queue now,
//!    one tick late, and the queue is re-sorted. The delay models the
//!    context switch: a preempted process is never re-picked in the tick
//!    it was preempted.
//! 3. Nothing running and nothing ready → idle.
//! 4. Nothing running → dispatch the ready head.
//! 5. Run for one tick.
//! 6. Finished → clear the running slot.
//! 7. Cumulative `executed_time` a multiple of the quantum → preempt and
//!    dispatch the next ready process right away, if there is one.

use std::num::NonZeroU32;

use super::queue::ReadyQueue;
use super::{Policy, Step};
use crate::dispatching::QueueOrder;
use crate::models::Process;

/// Priority-ordered Round Robin with a fixed quantum.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: NonZeroU32,
    ready: ReadyQueue,
    order: QueueOrder,
    running: Option<usize>,
    preempted: Option<usize>,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroU32) -> Self {
        Self {
            quantum,
            ready: ReadyQueue::new(),
            order: QueueOrder::priority_then_arrival(),
            running: None,
            preempted: None,
        }
    }

    pub fn quantum(&self) -> NonZeroU32 {
        self.quantum
    }

    fn quantum_expired(&self, process: &Process) -> bool {
        process.executed_time != 0 && process.executed_time % self.quantum.get() == 0
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn admit(&mut self, processes: &[Process], tick: u32) {
        self.ready.admit(processes, tick);
    }

    fn step(&mut self, processes: &mut [Process]) -> Step {
        self.ready.sort(&self.order, processes);

        if let Some(index) = self.preempted.take() {
            self.ready.push(index);
            self.ready.sort(&self.order, processes);
        }

        let current = match self.running.or_else(|| self.ready.pop()) {
            Some(index) => index,
            None => return Step::Idle,
        };

        processes[current].execute();

        self.running = if processes[current].is_finished() {
            None
        } else if self.quantum_expired(&processes[current]) {
            self.preempted = Some(current);
            self.ready.pop()
        } else {
            Some(current)
        };

        Step::Ran {
            lane: 0,
            process: current,
        }
    }
}
