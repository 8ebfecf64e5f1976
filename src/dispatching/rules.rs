//! Built-in ordering rules.
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{OrderingRule, RuleKey};
use crate::models::Process;

/// Static priority (lower value = more important).
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl OrderingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.priority
    }

    fn description(&self) -> &'static str {
        "Static priority"
    }
}

/// First come, first served.
#[derive(Debug, Clone, Copy)]
pub struct Arrival;

impl OrderingRule for Arrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "Earliest arrival time"
    }
}

/// Shortest remaining time.
///
/// Evaluated on the live run state, so the key shrinks as the process runs.
#[derive(Debug, Clone, Copy)]
pub struct RemainingTime;

impl OrderingRule for RemainingTime {
    fn name(&self) -> &'static str {
        "REMAINING"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest remaining burst time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_key() {
        let p = Process::new("P1", 4, 7).with_priority(3);
        assert_eq!(Priority.key(&p), 3);
    }

    #[test]
    fn test_arrival_key() {
        let p = Process::new("P1", 4, 7);
        assert_eq!(Arrival.key(&p), 4);
    }

    #[test]
    fn test_remaining_key_tracks_execution() {
        let mut p = Process::new("P1", 0, 7);
        assert_eq!(RemainingTime.key(&p), 7);
        p.execute();
        assert_eq!(RemainingTime.key(&p), 6);
    }

    #[test]
    fn test_names() {
        assert_eq!(Priority.name(), "PRIORITY");
        assert_eq!(Arrival.name(), "ARRIVAL");
        assert_eq!(RemainingTime.description(), "Shortest remaining burst time");
    }
}
