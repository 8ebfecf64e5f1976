//! Unit-tick CPU scheduling simulator.
//!
//! Replays a fixed set of processes through four scheduling policies and
//! records, tick by tick, which process occupied the CPU.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Slot`, `GanttTrace`, `ThreeLevelTrace`
//! - **`dispatching`**: Ready-queue ordering rules (priority, arrival, remaining time)
//! - **`scheduler`**: Tick engine and policies (priority FCFS, SRTN, Round Robin,
//!   three-level queue) plus trace KPIs
//! - **`simulation`**: Validated entry point running every policy on one input
//! - **`validation`**: Input integrity checks (names, bursts, quantum, bands)
//! - **`input`** / **`report`**: Plain-text process definitions and chart rendering
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::{Simulation, SimulationConfig};
//!
//! let sim = Simulation::new(
//!     vec![Process::new("P1", 0, 2), Process::new("P2", 0, 1)],
//!     SimulationConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(sim.srtn().to_string(), "P2 P1 P1");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", ch. 5
//! - Tanenbaum, Bos (2014), "Modern Operating Systems", §2.4

pub mod config;
pub mod dispatching;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use config::{BandThresholds, SimulationConfig};
pub use simulation::{Simulation, SimulationReport};
