//! Process model.
//!
//! A process is the unit of CPU work being simulated: it arrives at a given
//! tick, needs a fixed number of ticks of CPU time, and carries a priority
//! used by the priority-aware policies.
//!
//! # Time Representation
//! All times are integer ticks relative to the start of the simulation (t=0).

use serde::{Deserialize, Serialize};

/// A process with identity and mutable run state.
///
/// The run state (`executed_time`, `remaining_time`) always satisfies
/// `executed_time + remaining_time == burst_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProcessDefinition", into = "ProcessDefinition")]
pub struct Process {
    /// Unique process name (e.g., "P1").
    pub name: String,
    /// Tick at which the process becomes ready.
    pub arrival_time: u32,
    /// Total CPU ticks required.
    pub burst_time: u32,
    /// Scheduling priority (lower = more important).
    pub priority: u32,
    /// Ticks consumed so far.
    pub executed_time: u32,
    /// Ticks still required.
    pub remaining_time: u32,
}

/// Static definition of a process, as supplied by an input source.
///
/// `priority` is optional; a missing priority maps to
/// [`Process::DEFAULT_PRIORITY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDefinition {
    pub name: String,
    pub arrival_time: u32,
    pub burst_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl Process {
    /// Priority assigned when none is given: the lowest priority of the 1-6 domain.
    pub const DEFAULT_PRIORITY: u32 = 6;

    /// Creates a process that has not run yet.
    pub fn new(name: impl Into<String>, arrival_time: u32, burst_time: u32) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            priority: Self::DEFAULT_PRIORITY,
            executed_time: 0,
            remaining_time: burst_time,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Runs the process for one tick.
    ///
    /// # Panics
    /// If the process has already finished. Executing a finished process
    /// means a policy kept it queued past exhaustion.
    pub fn execute(&mut self) {
        assert!(
            self.remaining_time > 0,
            "process '{}' executed after completion",
            self.name
        );
        self.remaining_time -= 1;
        self.executed_time += 1;
        debug_assert_eq!(self.executed_time + self.remaining_time, self.burst_time);
    }

    /// Whether all of the burst has been consumed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process has arrived by `tick`.
    #[inline]
    pub fn has_arrived(&self, tick: u32) -> bool {
        self.arrival_time <= tick
    }
}

impl From<ProcessDefinition> for Process {
    fn from(def: ProcessDefinition) -> Self {
        Process::new(def.name, def.arrival_time, def.burst_time)
            .with_priority(def.priority.unwrap_or(Process::DEFAULT_PRIORITY))
    }
}

impl From<Process> for ProcessDefinition {
    fn from(p: Process) -> Self {
        Self {
            name: p.name,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            priority: Some(p.priority),
        }
    }
}
