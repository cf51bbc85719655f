//! Pool statistics
//!
//! Snapshot counters describing the current state of a [`UserPool`](super::UserPool).

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Gender, Persona};
use crate::user::ProfileRecord;

/// Statistics about the users held by a pool
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolStatistics {
    /// Users in the pool, available and active
    pub total_users: usize,
    /// Users not yet checked out
    pub available_users: usize,
    /// Users checked out
    pub active_users: usize,
    /// Users per persona
    pub persona_distribution: BTreeMap<Persona, usize>,
    /// Users per gender
    pub gender_distribution: BTreeMap<Gender, usize>,
    /// Mean age across the pool
    pub average_age: f64,
}

impl PoolStatistics {
    /// Collect statistics over the available and active records
    pub fn collect<'a>(
        available: impl Iterator<Item = &'a ProfileRecord>,
        active: impl Iterator<Item = &'a ProfileRecord>,
    ) -> Self {
        let mut stats = Self::default();
        let mut age_sum = 0u64;

        let mut tally = |record: &ProfileRecord| {
            *stats.persona_distribution.entry(record.persona()).or_insert(0) += 1;
            *stats.gender_distribution.entry(record.gender()).or_insert(0) += 1;
            age_sum += u64::from(record.age());
        };

        let mut available_users = 0;
        for record in available {
            tally(record);
            available_users += 1;
        }
        let mut active_users = 0;
        for record in active {
            tally(record);
            active_users += 1;
        }

        stats.available_users = available_users;
        stats.active_users = active_users;
        stats.total_users = available_users + active_users;
        stats.average_age = if stats.total_users == 0 {
            0.0
        } else {
            age_sum as f64 / stats.total_users as f64
        };
        stats
    }

    /// Percentage of the pool that is checked out
    pub fn active_percentage(&self) -> f64 {
        percentage(self.active_users, self.total_users)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User Pool Statistics:")?;
        writeln!(f, "  Total Users: {}", self.total_users)?;
        writeln!(f, "  Available Users: {}", self.available_users)?;
        writeln!(f, "  Active Users: {} ({:.1}%)", self.active_users, self.active_percentage())?;
        writeln!(f, "  Average Age: {:.1}", self.average_age)?;
        writeln!(f, "  Gender Distribution:")?;
        for (gender, count) in &self.gender_distribution {
            let share = percentage(*count, self.total_users);
            writeln!(f, "    {}: {} ({:.1}%)", gender, count, share)?;
        }
        writeln!(f, "  Persona Distribution:")?;
        for (persona, count) in &self.persona_distribution {
            let share = percentage(*count, self.total_users);
            writeln!(f, "    {}: {} ({:.1}%)", persona, count, share)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeneratorConfig;
    use crate::user::ProfileFactory;

    #[test]
    fn test_empty_statistics() {
        let stats = PoolStatistics::collect(std::iter::empty(), std::iter::empty());
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.average_age, 0.0);
        assert_eq!(stats.active_percentage(), 0.0);
        assert!(stats.to_string().contains("Total Users: 0"));
    }

    #[test]
    fn test_statistics_counts() {
        let mut factory = ProfileFactory::with_seed(GeneratorConfig::default(), 21).unwrap();
        let available: Vec<ProfileRecord> = (0..6).map(|_| factory.create()).collect();
        let active: Vec<ProfileRecord> = (0..2).map(|_| factory.create()).collect();

        let stats = PoolStatistics::collect(available.iter(), active.iter());

        assert_eq!(stats.total_users, 8);
        assert_eq!(stats.available_users, 6);
        assert_eq!(stats.active_users, 2);
        assert_eq!(stats.active_percentage(), 25.0);
        assert_eq!(stats.persona_distribution.values().sum::<usize>(), 8);
        assert_eq!(stats.gender_distribution.values().sum::<usize>(), 8);
        assert!((18.0..=100.0).contains(&stats.average_age));

        let rendered = stats.to_string();
        assert!(rendered.contains("Active Users: 2 (25.0%)"));
        assert!(rendered.contains("Persona Distribution:"));
    }
}
