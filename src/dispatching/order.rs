//! Lexicographic rule chain used to sort ready queues.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use super::{rules, OrderingRule, RuleKey};
use crate::models::Process;

/// A chain of ordering rules applied in sequence.
///
/// The first rule decides; later rules only break ties. Processes tied on
/// every rule keep their current relative order (stable sort).
#[derive(Clone, Default)]
pub struct QueueOrder {
    rules: Vec<Arc<dyn OrderingRule>>,
}

impl QueueOrder {
    /// Creates an empty chain (sorting is a no-op).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: OrderingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// `(priority, arrival_time)`: preemptive priority and Round Robin.
    pub fn priority_then_arrival() -> Self {
        Self::new()
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::Arrival)
    }

    /// `(remaining_time, priority)`: shortest remaining time next.
    pub fn remaining_then_priority() -> Self {
        Self::new()
            .with_rule(rules::RemainingTime)
            .with_tie_breaker(rules::Priority)
    }

    /// `(arrival_time, priority)`: plain FCFS.
    pub fn arrival_then_priority() -> Self {
        Self::new()
            .with_rule(rules::Arrival)
            .with_tie_breaker(rules::Priority)
    }

    /// Keys of a process under each rule, in chain order.
    pub fn keys(&self, process: &Process) -> Vec<RuleKey> {
        self.rules.iter().map(|r| r.key(process)).collect()
    }

    /// Compares two processes rule by rule.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            match rule.key(a).cmp(&rule.key(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// Stable-sorts a queue of indices into `processes`.
    pub fn sort(&self, queue: &mut VecDeque<usize>, processes: &[Process]) {
        queue
            .make_contiguous()
            .sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
    }
}

impl fmt::Display for QueueOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.rules.iter().map(|r| r.name()).collect();
        f.write_str(&names.join(" > "))
    }
}

impl fmt::Debug for QueueOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueOrder")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
