//! Tick engine, scheduling policies and trace KPIs.
//!
//! # Policies
//!
//! | Policy | Ready-queue order | Preemption |
//! |--------|-------------------|------------|
//! | [`PriorityFcfs`] | `(priority, arrival)` | every tick |
//! | [`Srtn`] | `(remaining, priority)` | every tick |
//! | [`RoundRobin`] | `(priority, arrival)` | quantum expiry |
//! | [`ThreeLevel`] | per band | band priority + quantum |
//!
//! All policies plug into [`SchedulerEngine`] through the [`Policy`] trait.
//!
//! # KPI
//!
//! [`TraceKpi`] derives completion, turnaround, waiting and response times
//! from a finished trace.

mod engine;
mod kpi;
mod priority;
pub mod queue;
mod round_robin;
mod srtn;
mod three_level;

pub use engine::{EngineRun, SchedulerEngine};
pub use kpi::{ProcessKpi, TraceKpi};
pub use priority::PriorityFcfs;
pub use round_robin::RoundRobin;
pub use srtn::Srtn;
pub use three_level::{ThreeLevel, LEVEL1_LANE, LEVEL2_LANE, LEVEL3_LANE};

use crate::models::Process;

/// Outcome of one policy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `process` (an index into the run's process set) ran on `lane`.
    Ran { lane: usize, process: usize },
    /// No process was ready; the tick passes idle on every lane.
    Idle,
    /// Queues were rearranged without running anything; no tick passes.
    Transfer,
}

/// A scheduling discipline driven by [`SchedulerEngine`].
///
/// The engine calls [`admit`](Policy::admit) once per tick, before the
/// first [`step`](Policy::step) of that tick. A policy owns only indices
/// into the process set; the engine owns the processes themselves.
pub trait Policy {
    /// Short policy name (e.g., "SRTN").
    fn name(&self) -> &'static str;

    /// Number of parallel trace lanes the policy reports on.
    fn lanes(&self) -> usize {
        1
    }

    /// Admits the processes arriving at `tick`.
    fn admit(&mut self, processes: &[Process], tick: u32);

    /// Performs one scheduling step, executing at most one process.
    fn step(&mut self, processes: &mut [Process]) -> Step;
}
