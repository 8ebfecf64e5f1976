//! Ready-queue ordering rules.
//!
//! Every policy orders its ready queue by a lexicographic chain of
//! single-key rules, e.g. priority then arrival time for preemptive
//! priority scheduling.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, QueueOrder};
//!
//! let order = QueueOrder::new()
//!     .with_rule(rules::RemainingTime)
//!     .with_tie_breaker(rules::Priority);
//! assert_eq!(order.to_string(), "REMAINING > PRIORITY");
//! ```

mod order;
pub mod rules;

pub use order::QueueOrder;

use crate::models::Process;
use std::fmt::Debug;

/// Key returned by an ordering rule.
///
/// Lower keys sort first (are dispatched first).
pub type RuleKey = u32;

/// A single ordering criterion over processes.
///
/// # Key Convention
/// **Lower key = dispatched earlier.**
pub trait OrderingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY").
    fn name(&self) -> &'static str;

    /// Key of a process under this rule.
    fn key(&self, process: &Process) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
