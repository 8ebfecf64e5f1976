//! Random process-set generation.
//!
//! Produces reproducible workloads for stress runs and property checks:
//! the same seed always yields the same process set.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Generator of random process sets named `P1..Pn`.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    arrival: RangeInclusive<u32>,
    burst: RangeInclusive<u32>,
    priority: RangeInclusive<u32>,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges:
    /// arrival 0..=10, burst 1..=8, priority 1..=6.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: 0..=10,
            burst: 1..=8,
            priority: 1..=6,
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival(mut self, range: RangeInclusive<u32>) -> Self {
        self.arrival = range;
        self
    }

    /// Sets the burst time range. A zero lower bound is raised to 1.
    pub fn with_burst(mut self, range: RangeInclusive<u32>) -> Self {
        let (lo, hi) = range.into_inner();
        let lo = lo.max(1);
        self.burst = lo..=hi.max(lo);
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, range: RangeInclusive<u32>) -> Self {
        self.priority = range;
        self
    }

    /// Generates a process set from `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (0..self.count)
            .map(|i| {
                let arrival = rng.random_range(self.arrival.clone());
                let burst = rng.random_range(self.burst.clone());
                let priority = rng.random_range(self.priority.clone());
                Process::new(format!("P{}", i + 1), arrival, burst).with_priority(priority)
            })
            .collect()
    }

    /// Generates a process set from a fixed seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Process> {
        self.generate(&mut StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_respected() {
        let generator = WorkloadGenerator::new(50)
            .with_arrival(2..=4)
            .with_burst(3..=3)
            .with_priority(1..=2);
        let processes = generator.generate_seeded(7);

        assert_eq!(processes.len(), 50);
        for p in &processes {
            assert!((2..=4).contains(&p.arrival_time));
            assert_eq!(p.burst_time, 3);
            assert!((1..=2).contains(&p.priority));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let generator = WorkloadGenerator::new(10);
        assert_eq!(generator.generate_seeded(42), generator.generate_seeded(42));
    }

    #[test]
    fn test_zero_burst_raised() {
        let processes = WorkloadGenerator::new(20)
            .with_burst(0..=0)
            .generate_seeded(1);
        assert!(processes.iter().all(|p| p.burst_time == 1));
    }

    #[test]
    fn test_names_are_sequential() {
        let processes = WorkloadGenerator::new(3).generate_seeded(0);
        let names: Vec<&str> = processes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["P1", "P2", "P3"]);
    }
}
