//! Unit-tick simulation driver.
//!
//! # Algorithm
//!
//! 1. Clone the process set; the run mutates only its own copy.
//! 2. At each new tick, hand that tick's arrivals to the policy.
//! 3. Ask the policy for one step and record it on the trace lanes.
//! 4. Stop once the total remaining burst reaches zero.
//!
//! A [`Step::Transfer`] reshuffles queues without consuming a tick; the
//! next step runs at the same tick and arrivals are not admitted twice.
//!
//! # Complexity
//! O(T * n log n) for T elapsed ticks when the policy re-sorts every tick.

use log::{debug, trace};

use super::{Policy, Step};
use crate::models::{GanttTrace, Process};

/// Drives a [`Policy`] over a private copy of a process set.
#[derive(Debug, Clone)]
pub struct SchedulerEngine {
    processes: Vec<Process>,
}

/// Outcome of one engine run.
#[derive(Debug, Clone)]
pub struct EngineRun {
    /// One trace per policy lane, all of equal length.
    pub lanes: Vec<GanttTrace>,
    /// Final state of the run's process copies (all finished).
    pub processes: Vec<Process>,
}

impl SchedulerEngine {
    /// Creates an engine over an independent copy of `processes`.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            processes: processes.to_vec(),
        }
    }

    /// Runs `policy` to completion.
    ///
    /// # Panics
    /// On internal invariant violations: the run outliving the tick horizon
    /// `max(arrival) + sum(burst)`, two consecutive queue transfers, or a
    /// policy executing a finished process.
    pub fn run<P: Policy + ?Sized>(mut self, policy: &mut P) -> EngineRun {
        let mut lanes = vec![GanttTrace::new(); policy.lanes()];
        let mut remaining: u64 = self
            .processes
            .iter()
            .map(|p| u64::from(p.remaining_time))
            .sum();
        let horizon = self
            .processes
            .iter()
            .map(|p| u64::from(p.arrival_time))
            .max()
            .unwrap_or(0)
            + remaining;

        debug!(
            "{}: starting run of {} processes, {} ticks of work",
            policy.name(),
            self.processes.len(),
            remaining
        );

        let mut tick: u32 = 0;
        let mut admitted: Option<u32> = None;
        let mut transferred = false;

        while remaining > 0 {
            assert!(
                u64::from(tick) < horizon,
                "{}: run exceeded tick horizon {horizon}",
                policy.name()
            );

            if admitted != Some(tick) {
                policy.admit(&self.processes, tick);
                admitted = Some(tick);
            }

            match policy.step(&mut self.processes) {
                Step::Ran { lane, process } => {
                    let name = &self.processes[process].name;
                    trace!("{}: t={tick} lane={lane} ran {name}", policy.name());
                    for (i, lane_trace) in lanes.iter_mut().enumerate() {
                        if i == lane {
                            lane_trace.push_process(name.as_str());
                        } else {
                            lane_trace.push_idle();
                        }
                    }
                    remaining -= 1;
                    tick += 1;
                    transferred = false;
                }
                Step::Idle => {
                    trace!("{}: t={tick} idle", policy.name());
                    lanes.iter_mut().for_each(GanttTrace::push_idle);
                    tick += 1;
                    transferred = false;
                }
                Step::Transfer => {
                    assert!(
                        !transferred,
                        "{}: consecutive queue transfers at t={tick}",
                        policy.name()
                    );
                    debug!("{}: t={tick} queue transfer", policy.name());
                    transferred = true;
                }
            }
        }

        debug!("{}: finished after {tick} ticks", policy.name());

        EngineRun {
            lanes,
            processes: self.processes,
        }
    }
}

impl EngineRun {
    /// Number of elapsed ticks.
    pub fn elapsed(&self) -> usize {
        self.lanes.first().map_or(0, GanttTrace::len)
    }

    /// The trace of a single-lane policy.
    ///
    /// # Panics
    /// If the run produced more than one lane.
    pub fn into_trace(mut self) -> GanttTrace {
        assert_eq!(self.lanes.len(), 1, "expected a single-lane run");
        self.lanes.pop().unwrap_or_default()
    }
}
