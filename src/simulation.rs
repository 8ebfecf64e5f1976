//! Simulation facade.
//!
//! Validates a process set once, then runs any of the four policies on
//! independent copies of it. Policy runs share no state, so they can be
//! called in any order (or from several threads) with identical results.
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::{Simulation, SimulationConfig};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5).with_priority(2),
//!     Process::new("P2", 1, 3).with_priority(1),
//! ];
//! let sim = Simulation::new(processes, SimulationConfig::new().with_quantum(2)).unwrap();
//! assert_eq!(sim.priority_fcfs().to_string(), "P1 P2 P2 P2 P1 P1 P1 P1");
//! ```

use std::num::NonZeroU32;

use log::debug;
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::models::{GanttTrace, Process, ThreeLevelTrace};
use crate::scheduler::{PriorityFcfs, RoundRobin, SchedulerEngine, Srtn, ThreeLevel};
use crate::validation::{validate_input, ValidationError};

/// A validated process set plus configuration.
#[derive(Debug, Clone)]
pub struct Simulation {
    processes: Vec<Process>,
    config: SimulationConfig,
    quantum: NonZeroU32,
}

/// Traces of all four policies over the same process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub srtn: GanttTrace,
    pub priority_fcfs: GanttTrace,
    pub round_robin: GanttTrace,
    pub three_level: ThreeLevelTrace,
}

impl Simulation {
    /// Validates `processes` and `config`.
    ///
    /// # Errors
    /// Every detected validation problem, collected in one list.
    pub fn new(
        processes: Vec<Process>,
        config: SimulationConfig,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_input(&processes, &config)?;
        let quantum = NonZeroU32::new(config.quantum).ok_or_else(Vec::new)?;
        Ok(Self {
            processes,
            config,
            quantum,
        })
    }

    /// The process set every run starts from.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs preemptive priority scheduling (FCFS tie-break).
    pub fn priority_fcfs(&self) -> GanttTrace {
        self.engine().run(&mut PriorityFcfs::new()).into_trace()
    }

    /// Runs shortest remaining time next (priority tie-break).
    pub fn srtn(&self) -> GanttTrace {
        self.engine().run(&mut Srtn::new()).into_trace()
    }

    /// Runs priority-ordered Round Robin.
    pub fn round_robin(&self) -> GanttTrace {
        self.engine()
            .run(&mut RoundRobin::new(self.quantum))
            .into_trace()
    }

    /// Runs the three-level queue.
    pub fn three_level(&self) -> ThreeLevelTrace {
        let mut policy = ThreeLevel::with_bands(self.quantum, self.config.bands);
        ThreeLevelTrace::from_lanes(self.engine().run(&mut policy).lanes)
    }

    /// Runs all four policies.
    pub fn run_all(&self) -> SimulationReport {
        debug!(
            "simulating {} processes with quantum {}",
            self.processes.len(),
            self.quantum
        );
        SimulationReport {
            srtn: self.srtn(),
            priority_fcfs: self.priority_fcfs(),
            round_robin: self.round_robin(),
            three_level: self.three_level(),
        }
    }

    fn engine(&self) -> SchedulerEngine {
        SchedulerEngine::new(&self.processes)
    }
}

impl SimulationReport {
    /// Charts in presentation order with their titles.
    pub fn charts(&self) -> [(&'static str, &GanttTrace); 6] {
        [
            ("SRTN", &self.srtn),
            ("FCFS", &self.priority_fcfs),
            ("RR", &self.round_robin),
            ("Level 1", &self.three_level.level1),
            ("Level 2", &self.three_level.level2),
            ("Level 3", &self.three_level.level3),
        ]
    }

    /// Single-lane traces of all four policies, the three-level one merged.
    pub fn policy_traces(&self) -> [(&'static str, GanttTrace); 4] {
        [
            ("SRTN", self.srtn.clone()),
            ("FCFS", self.priority_fcfs.clone()),
            ("RR", self.round_robin.clone()),
            ("THREE-LEVEL", self.three_level.combined()),
        ]
    }
}
