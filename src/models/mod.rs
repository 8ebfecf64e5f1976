//! Simulation domain models.
//!
//! Provides the process entity that every policy mutates and the Gantt
//! trace types every policy produces.
//!
//! # Domain Mappings
//!
//! | cpu-sched-sim | Textbook term |
//! |---------------|---------------|
//! | Process | Job / PCB |
//! | GanttTrace | Gantt chart |
//! | Slot::Idle | CPU idle period |

mod process;
mod trace;

pub use process::{Process, ProcessDefinition};
pub use trace::{GanttTrace, Slot, ThreeLevelTrace};
