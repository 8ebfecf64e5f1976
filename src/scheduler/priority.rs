//! Preemptive priority scheduling with FCFS tie-break.
//!
//! The whole ready queue is re-sorted by `(priority, arrival_time)` every
//! tick, so a newly arrived higher-priority process displaces the running
//! one immediately. The displaced process keeps its progress and resumes
//! from its remaining time.

use super::queue::ReadyQueue;
use super::{Policy, Step};
use crate::dispatching::QueueOrder;
use crate::models::Process;

/// Preemptive priority policy (lower priority value runs first).
#[derive(Debug, Clone)]
pub struct PriorityFcfs {
    ready: ReadyQueue,
    order: QueueOrder,
}

impl PriorityFcfs {
    pub fn new() -> Self {
        Self {
            ready: ReadyQueue::new(),
            order: QueueOrder::priority_then_arrival(),
        }
    }
}

impl Default for PriorityFcfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for PriorityFcfs {
    fn name(&self) -> &'static str {
        "FCFS"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::SchedulerEngine;

    fn run(processes: &[Process]) -> String {
        SchedulerEngine::new(processes)
            .run(&mut PriorityFcfs::new())
            .into_trace()
            .to_string()
    }

    #[test]
    fn test_higher_priority_preempts() {
        let processes = vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
        ];
        assert_eq!(run(&processes), "P1 P2 P2 P2 P1 P1 P1 P1");
    }

    #[test]
    fn test_equal_priority_is_fcfs() {
        let processes = vec![
            Process::new("P1", 0, 2).with_priority(3),
            Process::new("P2", 1, 2).with_priority(3),
        ];
        assert_eq!(run(&processes), "P1 P1 P2 P2");
    }

    #[test]
    fn test_lower_priority_arrival_waits() {
        let processes = vec![
            Process::new("P1", 0, 3).with_priority(1),
            Process::new("P2", 1, 1).with_priority(4),
        ];
        assert_eq!(run(&processes), "P1 P1 P1 P2");
    }

    #[test]
    fn test_idle_gap() {
        let processes = vec![
            Process::new("P1", 0, 1).with_priority(1),
            Process::new("P2", 3, 1).with_priority(1),
        ];
        assert_eq!(run(&processes), "P1 - - P2");
    }
}
