//! Gantt trace (solution) model.
//!
//! A trace records, for each tick of a simulation run, which process held
//! the CPU or that the CPU was idle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One tick of a Gantt trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slot {
    /// No process ran during this tick.
    Idle,
    /// The named process ran during this tick.
    Process(String),
}

impl Slot {
    /// Marker used when rendering an idle tick.
    pub const IDLE_MARKER: &'static str = "-";

    /// Name of the process that ran, if any.
    pub fn process_name(&self) -> Option<&str> {
        match self {
            Slot::Idle => None,
            Slot::Process(name) => Some(name),
        }
    }

    /// Whether the CPU was idle.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Slot::Idle)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Idle => f.write_str(Self::IDLE_MARKER),
            Slot::Process(name) => f.write_str(name),
        }
    }
}

/// Per-tick execution record of a single simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GanttTrace {
    slots: Vec<Slot>,
}

impl GanttTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tick in which `name` ran.
    pub fn push_process(&mut self, name: impl Into<String>) {
        self.slots.push(Slot::Process(name.into()));
    }

    /// Appends an idle tick.
    pub fn push_idle(&mut self) {
        self.slots.push(Slot::Idle);
    }

    /// All slots in tick order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot at `tick`, if the run lasted that long.
    pub fn at(&self, tick: usize) -> Option<&Slot> {
        self.slots.get(tick)
    }

    /// Number of elapsed ticks, idle ticks included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no tick was recorded.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of idle ticks.
    pub fn idle_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_idle()).count()
    }

    /// Number of ticks in which some process ran.
    pub fn busy_count(&self) -> usize {
        self.len() - self.idle_count()
    }

    /// Number of ticks the named process ran.
    pub fn ticks_for(&self, name: &str) -> usize {
        self.slots
            .iter()
            .filter(|s| s.process_name() == Some(name))
            .count()
    }

    /// First tick the named process ran.
    pub fn first_tick_of(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.process_name() == Some(name))
    }

    /// Last tick the named process ran.
    pub fn last_tick_of(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .rposition(|s| s.process_name() == Some(name))
    }

    /// Process names (or `-` for idle), one per tick.
    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.to_string()).collect()
    }
}

impl FromIterator<Slot> for GanttTrace {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for GanttTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}

/// The three lock-step traces of a three-level queue run.
///
/// All three lanes have the same length; at any tick at most one lane
/// shows a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeLevelTrace {
    pub level1: GanttTrace,
    pub level2: GanttTrace,
    pub level3: GanttTrace,
}

impl ThreeLevelTrace {
    /// Builds from the lanes produced by the engine.
    ///
    /// # Panics
    /// If `lanes` does not hold exactly three traces.
    pub fn from_lanes(lanes: Vec<GanttTrace>) -> Self {
        let [level1, level2, level3]: [GanttTrace; 3] = lanes
            .try_into()
            .unwrap_or_else(|l: Vec<GanttTrace>| panic!("expected 3 lanes, got {}", l.len()));
        Self {
            level1,
            level2,
            level3,
        }
    }

    /// Lanes in level order.
    pub fn lanes(&self) -> [&GanttTrace; 3] {
        [&self.level1, &self.level2, &self.level3]
    }

    /// Number of elapsed ticks.
    pub fn len(&self) -> usize {
        self.level1.len()
    }

    /// Whether no tick was recorded.
    pub fn is_empty(&self) -> bool {
        self.level1.is_empty()
    }

    /// Merges the lanes into a single CPU trace.
    pub fn combined(&self) -> GanttTrace {
        (0..self.len())
            .map(|t| {
                self.lanes()
                    .iter()
                    .filter_map(|lane| lane.at(t))
                    .find(|s| !s.is_idle())
                    .cloned()
                    .unwrap_or(Slot::Idle)
            })
            .collect()
    }
}
