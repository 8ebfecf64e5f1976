//! Plain-text rendering of simulation results.
//!
//! Lays out each chart as a Gantt row: each label sits between the two
//! tick numbers it spans. The process table and quantum follow.
//!
//! ```text
//! FCFS
//!   P1  P2
//! 0   1   2
//! ```

use std::fmt;

use crate::models::{GanttTrace, Process};
use crate::simulation::SimulationReport;

/// Text view of a report; render with `to_string()` or `{}`.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    report: &'a SimulationReport,
    processes: &'a [Process],
    quantum: u32,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a SimulationReport, processes: &'a [Process], quantum: u32) -> Self {
        Self {
            report,
            processes,
            quantum,
        }
    }

    fn cell_width(&self) -> usize {
        let charts = self.report.charts();
        let label = charts
            .iter()
            .flat_map(|(_, t)| t.slots())
            .map(|s| s.to_string().len())
            .max()
            .unwrap_or(1);
        let ticks = charts.iter().map(|(_, t)| t.len()).max().unwrap_or(0);
        (label.max(ticks.to_string().len()) + 2).max(4)
    }
}

fn write_chart(f: &mut fmt::Formatter<'_>, title: &str, trace: &GanttTrace, w: usize) -> fmt::Result {
    writeln!(f, "{title}")?;

    let mut labels = " ".repeat(w / 2);
    for slot in trace.slots() {
        labels.push_str(&format!("{:<w$}", slot.to_string()));
    }
    writeln!(f, "{}", labels.trim_end())?;

    let mut ticks = String::new();
    for t in 0..=trace.len() {
        ticks.push_str(&format!("{t:<w$}"));
    }
    writeln!(f, "{}", ticks.trim_end())
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.cell_width();
        for (title, trace) in self.report.charts() {
            write_chart(f, title, trace, w)?;
            writeln!(f)?;
        }

        let name_w = self
            .processes
            .iter()
            .map(|p| p.name.len())
            .max()
            .unwrap_or(0)
            .max("Process".len());
        writeln!(f, "{:<name_w$}  {:>4}  {:>4}  {:>8}", "Process", "AT", "BT", "Priority")?;
        for p in self.processes {
            writeln!(
                f,
                "{:<name_w$}  {:>4}  {:>4}  {:>8}",
                p.name, p.arrival_time, p.burst_time, p.priority
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Q = {}", self.quantum)
    }
}

/// Renders a report as plain text.
pub fn render_text(report: &SimulationReport, processes: &[Process], quantum: u32) -> String {
    TextReport::new(report, processes, quantum).to_string()
}
