//! Aggregate statistics over assessment history

use serde::{Deserialize, Serialize};

use crate::models::{AssessmentRecord, HealthStatus};

/// Counts per health status plus the mean ripeness score
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssessmentStats {
    pub total: usize,
    pub healthy: usize,
    pub diseased: usize,
    pub pest_infected: usize,
    pub damaged: usize,
    /// 0 when there are no records
    pub avg_ripeness: f64,
}

impl AssessmentStats {
    pub fn count(&self, status: HealthStatus) -> usize {
        match status {
            HealthStatus::Healthy => self.healthy,
            HealthStatus::Diseased => self.diseased,
            HealthStatus::PestInfected => self.pest_infected,
            HealthStatus::Damaged => self.damaged,
        }
    }
}

/// Summarize a user's assessment history
pub fn summarize_assessments(records: &[AssessmentRecord]) -> AssessmentStats {
    let mut stats = AssessmentStats {
        total: records.len(),
        ..Default::default()
    };

    let mut ripeness_sum = 0u64;
    for record in records {
        match record.health_status {
            HealthStatus::Healthy => stats.healthy += 1,
            HealthStatus::Diseased => stats.diseased += 1,
            HealthStatus::PestInfected => stats.pest_infected += 1,
            HealthStatus::Damaged => stats.damaged += 1,
        }
        ripeness_sum += u64::from(record.ripeness_score);
    }

    if !records.is_empty() {
        stats.avg_ripeness = ripeness_sum as f64 / records.len() as f64;
    }
    stats
}
