//! Three-level priority queue scheduling.
//!
//! Processes are partitioned by priority on arrival (see
//! [`BandThresholds`]):
//!
//! | Band | Queue discipline | Trace lane |
//! |------|------------------|------------|
//! | High | Round Robin, quantum Q | Level 1 |
//! | Middle | FCFS by `(arrival_time, priority)` | Level 2 |
//! | Low | FIFO holding queue | Level 3 |
//!
//! Bands are served in strict priority order. The low band never runs on
//! its own: when both other bands are empty its whole content moves to the
//! middle band, which takes no simulated time, and runs from there on the
//! Level 2 lane.
//!
//! # Round Robin detail
//!
//! The high band is not re-sorted every tick. It is sorted by
//! `(priority, arrival_time)` when a new process reaches its head, and on
//! rotation: once the head has used up its quantum it moves to the tail,
//! the remainder is re-sorted, and the quantum restarts. A newly arrived
//! process therefore waits for the current head's quantum to end.

use std::num::NonZeroU32;

use log::debug;

use super::queue::{arrivals, ReadyQueue};
use super::{Policy, Step};
use crate::config::{Band, BandThresholds};
use crate::dispatching::QueueOrder;
use crate::models::Process;

/// Trace lane of the high (Round Robin) band.
pub const LEVEL1_LANE: usize = 0;
/// Trace lane of the middle (FCFS) band.
pub const LEVEL2_LANE: usize = 1;
/// Trace lane of the low (holding) band.
pub const LEVEL3_LANE: usize = 2;

/// Three-level queue policy.
#[derive(Debug, Clone)]
pub struct ThreeLevel {
    quantum: NonZeroU32,
    bands: BandThresholds,
    high: ReadyQueue,
    middle: ReadyQueue,
    low: ReadyQueue,
    rr_order: QueueOrder,
    fcfs_order: QueueOrder,
    quantum_left: u32,
    last_head: Option<usize>,
}

impl ThreeLevel {
    pub fn new(quantum: NonZeroU32) -> Self {
        Self::with_bands(quantum, BandThresholds::default())
    }

    pub fn with_bands(quantum: NonZeroU32, bands: BandThresholds) -> Self {
        Self {
            quantum,
            bands,
            high: ReadyQueue::new(),
            middle: ReadyQueue::new(),
            low: ReadyQueue::new(),
            rr_order: QueueOrder::priority_then_arrival(),
            fcfs_order: QueueOrder::arrival_then_priority(),
            quantum_left: quantum.get(),
            last_head: None,
        }
    }

    fn step_high(&mut self, processes: &mut [Process]) -> Step {
        let head = self.high.head();

        if self.quantum_left == 0 && head == self.last_head {
            if let Some(expired) = self.high.pop() {
                self.high.sort(&self.rr_order, processes);
                self.high.push(expired);
            }
            self.quantum_left = self.quantum.get();
        } else if head != self.last_head {
            self.quantum_left = self.quantum.get();
            self.high.sort(&self.rr_order, processes);
        }

        self.last_head = self.high.head();
        match self.high.execute_head(processes) {
            Some(process) => {
                self.quantum_left -= 1;
                Step::Ran {
                    lane: LEVEL1_LANE,
                    process,
                }
            }
            None => Step::Idle,
        }
    }

    fn step_middle(&mut self, processes: &mut [Process]) -> Step {
        self.middle.sort(&self.fcfs_order, processes);
        match self.middle.execute_head(processes) {
            Some(process) => Step::Ran {
                lane: LEVEL2_LANE,
                process,
            },
            None => Step::Idle,
        }
    }
}

impl Policy for ThreeLevel {
    fn name(&self) -> &'static str {
        "THREE-LEVEL"
    }

    fn lanes(&self) -> usize {
        3
    }

    fn admit(&mut self, processes: &[Process], tick: u32) {
        for index in arrivals(processes, tick) {
            match self.bands.band_of(processes[index].priority) {
                Band::High => self.high.push(index),
                Band::Middle => self.middle.push(index),
                Band::Low => self.low.push(index),
            }
        }
    }

    fn step(&mut self, processes: &mut [Process]) -> Step {
        if !self.high.is_empty() {
            self.step_high(processes)
        } else if !self.middle.is_empty() {
            self.step_middle(processes)
        } else if !self.low.is_empty() {
            debug!("moving {} low-band processes to the middle band", self.low.len());
            self.middle.append(&mut self.low);
            Step::Transfer
        } else {
            Step::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThreeLevelTrace;
    use crate::scheduler::SchedulerEngine;

    fn run(processes: &[Process], quantum: u32) -> ThreeLevelTrace {
        let quantum = NonZeroU32::new(quantum).unwrap();
        let lanes = SchedulerEngine::new(processes)
            .run(&mut ThreeLevel::new(quantum))
            .lanes;
        ThreeLevelTrace::from_lanes(lanes)
    }

    #[test]
    fn test_bands_in_strict_order() {
        let processes = vec![
            Process::new("low", 0, 1).with_priority(6),
            Process::new("mid", 0, 1).with_priority(3),
            Process::new("high", 0, 1).with_priority(1),
        ];
        let t = run(&processes, 2);
        assert_eq!(t.level1.to_string(), "high - -");
        assert_eq!(t.level2.to_string(), "- mid low");
        assert_eq!(t.level3.to_string(), "- - -");
    }

    #[test]
    fn test_transfer_takes_no_tick() {
        let processes = vec![Process::new("low", 0, 2).with_priority(5)];
        let t = run(&processes, 2);
        assert_eq!(t.len(), 2);
        assert_eq!(t.level2.to_string(), "low low");
    }

    #[test]
    fn test_high_band_round_robin() {
        let processes = vec![
            Process::new("A", 0, 3).with_priority(1),
            Process::new("B", 0, 3).with_priority(2),
        ];
        let t = run(&processes, 2);
        assert_eq!(t.level1.to_string(), "A A B B A B");
    }

    #[test]
    fn test_arrival_waits_for_quantum_end() {
        let processes = vec![
            Process::new("B", 0, 4).with_priority(2),
            Process::new("A", 1, 2).with_priority(1),
        ];
        let t = run(&processes, 3);
        // A outranks B but only gets the CPU once B's quantum is used up.
        assert_eq!(t.level1.to_string(), "B B B A A B");
    }

    #[test]
    fn test_high_arrival_preempts_middle_band() {
        let processes = vec![
            Process::new("mid", 0, 3).with_priority(4),
            Process::new("high", 1, 1).with_priority(2),
        ];
        let t = run(&processes, 2);
        assert_eq!(t.combined().to_string(), "mid high mid mid");
        assert_eq!(t.level1.to_string(), "- high - -");
        assert_eq!(t.level2.to_string(), "mid - mid mid");
    }

    #[test]
    fn test_middle_band_is_fcfs() {
        let processes = vec![
            Process::new("late", 1, 1).with_priority(3),
            Process::new("early", 0, 2).with_priority(4),
        ];
        let t = run(&processes, 2);
        assert_eq!(t.level2.to_string(), "early early late");
    }

    #[test]
    fn test_all_idle_lanes() {
        let processes = vec![Process::new("P1", 2, 1).with_priority(1)];
        let t = run(&processes, 2);
        assert_eq!(t.level1.to_string(), "- - P1");
        assert_eq!(t.level2.to_string(), "- - -");
        assert_eq!(t.level3.to_string(), "- - -");
    }

    #[test]
    fn test_low_band_waits_for_middle_to_drain() {
        let processes = vec![
            Process::new("low", 0, 1).with_priority(6),
            Process::new("mid", 0, 2).with_priority(3),
            Process::new("mid2", 1, 1).with_priority(4),
        ];
        let t = run(&processes, 2);
        assert_eq!(t.level2.to_string(), "mid mid mid2 low");
    }

    #[test]
    fn test_custom_bands() {
        let quantum = NonZeroU32::new(2).unwrap();
        let processes = vec![
            Process::new("P1", 0, 1).with_priority(3),
            Process::new("P2", 0, 1).with_priority(4),
        ];
        let mut policy = ThreeLevel::with_bands(quantum, BandThresholds::new(3, 4));
        let t = ThreeLevelTrace::from_lanes(SchedulerEngine::new(&processes).run(&mut policy).lanes);
        assert_eq!(t.level1.to_string(), "P1 -");
        assert_eq!(t.level2.to_string(), "- P2");
    }
}
