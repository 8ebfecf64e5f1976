//! Trace quality metrics (KPIs).
//!
//! Computes the classic per-process timing measures from a finished
//! Gantt trace and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Tick after the process's last executed tick |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first executed tick - arrival |
//! | Utilization | busy ticks / elapsed ticks |

use serde::Serialize;

use crate::models::{GanttTrace, Process};

/// Timing measures of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessKpi {
    pub name: String,
    pub arrival_time: u32,
    pub burst_time: u32,
    /// First tick the process ran.
    pub first_run: u32,
    pub completion_time: u32,
    pub turnaround_time: u32,
    pub waiting_time: u32,
    pub response_time: u32,
}

/// Trace performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct TraceKpi {
    /// Elapsed ticks, idle ticks included.
    pub makespan: u32,
    pub busy_ticks: u32,
    pub idle_ticks: u32,
    /// Fraction of ticks the CPU was busy (0.0..1.0).
    pub utilization: f64,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
    /// Per-process measures, in input order. Processes absent from the
    /// trace are skipped.
    pub processes: Vec<ProcessKpi>,
}

impl TraceKpi {
    /// Computes KPIs from a trace and the processes it was produced from.
    pub fn calculate(trace: &GanttTrace, processes: &[Process]) -> Self {
        let makespan = to_ticks(trace.len());
        let busy_ticks = to_ticks(trace.busy_count());

        let per_process: Vec<ProcessKpi> = processes
            .iter()
            .filter_map(|p| {
                let first = to_ticks(trace.first_tick_of(&p.name)?);
                let completion = to_ticks(trace.last_tick_of(&p.name)?) + 1;
                let turnaround = completion.saturating_sub(p.arrival_time);
                Some(ProcessKpi {
                    name: p.name.clone(),
                    arrival_time: p.arrival_time,
                    burst_time: p.burst_time,
                    first_run: first,
                    completion_time: completion,
                    turnaround_time: turnaround,
                    waiting_time: turnaround.saturating_sub(p.burst_time),
                    response_time: first.saturating_sub(p.arrival_time),
                })
            })
            .collect();

        let avg = |f: fn(&ProcessKpi) -> u32| {
            if per_process.is_empty() {
                0.0
            } else {
                per_process.iter().map(|k| f64::from(f(k))).sum::<f64>()
                    / per_process.len() as f64
            }
        };

        let avg_turnaround = avg(|k: &ProcessKpi| k.turnaround_time);
        let avg_waiting = avg(|k: &ProcessKpi| k.waiting_time);
        let avg_response = avg(|k: &ProcessKpi| k.response_time);

        let utilization = if makespan == 0 {
            0.0
        } else {
            f64::from(busy_ticks) / f64::from(makespan)
        };

        Self {
            makespan,
            busy_ticks,
            idle_ticks: makespan - busy_ticks,
            utilization,
            avg_turnaround,
            avg_waiting,
            avg_response,
            processes: per_process,
        }
    }

    /// Measures of the named process.
    pub fn process(&self, name: &str) -> Option<&ProcessKpi> {
        self.processes.iter().find(|k| k.name == name)
    }
}

fn to_ticks(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slot;

    fn trace_of(labels: &[&str]) -> GanttTrace {
        labels
            .iter()
            .map(|&l| {
                if l == Slot::IDLE_MARKER {
                    Slot::Idle
                } else {
                    Slot::Process(l.to_string())
                }
            })
            .collect()
    }

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
        ]
    }

    #[test]
    fn test_kpi_basic() {
        let trace = trace_of(&["P1", "P2", "P2", "P2", "P1", "P1", "P1", "P1"]);
        let kpi = TraceKpi::calculate(&trace, &sample_processes());

        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_ticks, 0);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);

        let p1 = kpi.process("P1").unwrap();
        assert_eq!(p1.completion_time, 8);
        assert_eq!(p1.turnaround_time, 8);
        assert_eq!(p1.waiting_time, 3);
        assert_eq!(p1.response_time, 0);

        let p2 = kpi.process("P2").unwrap();
        assert_eq!(p2.completion_time, 4);
        assert_eq!(p2.turnaround_time, 3);
        assert_eq!(p2.waiting_time, 0);

        // (8 + 3) / 2, (3 + 0) / 2
        assert!((kpi.avg_turnaround - 5.5).abs() < 1e-10);
        assert!((kpi.avg_waiting - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_and_response() {
        let processes = vec![Process::new("P1", 2, 2)];
        let trace = trace_of(&["-", "-", "-", "P1", "P1"]);
        let kpi = TraceKpi::calculate(&trace, &processes);

        assert_eq!(kpi.idle_ticks, 3);
        assert!((kpi.utilization - 0.4).abs() < 1e-10);
        let p1 = kpi.process("P1").unwrap();
        assert_eq!(p1.first_run, 3);
        assert_eq!(p1.response_time, 1);
        assert_eq!(p1.waiting_time, 1);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = TraceKpi::calculate(&GanttTrace::new(), &[]);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_waiting - 0.0).abs() < 1e-10);
        assert!(kpi.processes.is_empty());
    }

    #[test]
    fn test_kpi_skips_unscheduled() {
        let trace = trace_of(&["P1"]);
        let processes = vec![Process::new("P1", 0, 1), Process::new("ghost", 0, 1)];
        let kpi = TraceKpi::calculate(&trace, &processes);
        assert_eq!(kpi.processes.len(), 1);
        assert!(kpi.process("ghost").is_none());
    }
}
