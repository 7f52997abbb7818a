//! Implementation timeline estimation
//!
//! Global invariants enforced:
//! - Exactly three phases, always in the same order
//! - Phase weeks sum to the total
//! - Total weeks strictly increase with the overall rating

use crate::rating::Rating;
use anyhow::Result;
use serde::Serialize;

pub const PLANNING_PHASE: &str = "Planning";
pub const IMPLEMENTATION_PHASE: &str = "Implementation";
pub const TESTING_PHASE: &str = "Testing & Adoption";

/// Smallest total that still gives every phase at least one week
pub const MIN_TOTAL_WEEKS: u32 = 3;

/// Upper bound on any total (ten years)
pub const MAX_TOTAL_WEEKS: u32 = 520;

/// Total weeks per overall rating, indexed by ordinal
///
/// Only constructible through `new` or `Default`, so totals always start at
/// `MIN_TOTAL_WEEKS` or more, strictly increase, and stay within
/// `MAX_TOTAL_WEEKS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineSettings {
    weeks: [u32; 5],
}

impl Default for TimelineSettings {
    fn default() -> Self {
        TimelineSettings {
            weeks: [3, 6, 10, 16, 24],
        }
    }
}

impl TimelineSettings {
    pub fn new(weeks: [u32; 5]) -> Result<Self> {
        if weeks[0] < MIN_TOTAL_WEEKS {
            anyhow::bail!(
                "weeks[0] must be at least {} (got {})",
                MIN_TOTAL_WEEKS,
                weeks[0]
            );
        }
        for (i, pair) in weeks.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                anyhow::bail!(
                    "weeks must be strictly increasing (weeks[{}] = {}, weeks[{}] = {})",
                    i,
                    pair[0],
                    i + 1,
                    pair[1]
                );
            }
        }
        if weeks[4] > MAX_TOTAL_WEEKS {
            anyhow::bail!(
                "weeks entries must be at most {} (got {})",
                MAX_TOTAL_WEEKS,
                weeks[4]
            );
        }
        Ok(TimelineSettings { weeks })
    }

    /// Weeks for None, Low, Moderate, High, Very High
    pub fn weeks(&self) -> [u32; 5] {
        self.weeks
    }

    pub fn total_weeks(&self, overall: Rating) -> u32 {
        self.weeks[usize::from(overall.ordinal())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePhase {
    pub name: &'static str,
    pub duration: String,
    pub weeks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationTimeline {
    pub overall_rating: Rating,
    pub total_duration: String,
    pub total_weeks: u32,
    pub phases: Vec<TimelinePhase>,
}

/// Split the total for an overall rating into planning (30%),
/// implementation (remainder, ~50%), and testing & adoption (20%)
pub fn estimate_timeline(overall: Rating, settings: &TimelineSettings) -> ImplementationTimeline {
    let total = settings.total_weeks(overall);
    let planning = percent_half_up(total, 30);
    let testing = percent_half_up(total, 20);
    let implementation = total.saturating_sub(planning + testing);

    let phases = vec![
        phase(PLANNING_PHASE, planning),
        phase(IMPLEMENTATION_PHASE, implementation),
        phase(TESTING_PHASE, testing),
    ];

    ImplementationTimeline {
        overall_rating: overall,
        total_duration: format_weeks(total),
        total_weeks: total,
        phases,
    }
}

fn phase(name: &'static str, weeks: u32) -> TimelinePhase {
    TimelinePhase {
        name,
        duration: format_weeks(weeks),
        weeks,
    }
}

/// `round_half_up(total * percent / 100)` in integer arithmetic
fn percent_half_up(total: u32, percent: u32) -> u32 {
    let scaled = (u64::from(total) * u64::from(percent) + 50) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

pub fn format_weeks(weeks: u32) -> String {
    if weeks == 1 {
        "1 week".to_string()
    } else {
        format!("{} weeks", weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_split() {
        let timeline = estimate_timeline(Rating::Moderate, &TimelineSettings::default());
        assert_eq!(timeline.total_weeks, 10);
        assert_eq!(timeline.total_duration, "10 weeks");
        let weeks: Vec<u32> = timeline.phases.iter().map(|p| p.weeks).collect();
        assert_eq!(weeks, vec![3, 5, 2]);
        let names: Vec<&str> = timeline.phases.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Planning", "Implementation", "Testing & Adoption"]);
    }

    #[test]
    fn test_phases_sum_to_total() {
        let settings = TimelineSettings::default();
        for rating in Rating::ALL {
            let timeline = estimate_timeline(rating, &settings);
            let sum: u32 = timeline.phases.iter().map(|p| p.weeks).sum();
            assert_eq!(sum, timeline.total_weeks);
            assert!(timeline.phases.iter().all(|p| p.weeks >= 1));
        }
    }

    #[test]
    fn test_total_strictly_increases() {
        let settings = TimelineSettings::default();
        for pair in Rating::ALL.windows(2) {
            assert!(settings.total_weeks(pair[0]) < settings.total_weeks(pair[1]));
        }
    }

    #[test]
    fn test_smallest_timeline_uses_singular_week() {
        let timeline = estimate_timeline(Rating::None, &TimelineSettings::default());
        assert_eq!(timeline.total_duration, "3 weeks");
        assert!(timeline.phases.iter().all(|p| p.duration == "1 week"));
    }

    #[test]
    fn test_settings_reject_degenerate_weeks() {
        assert!(TimelineSettings::new([0, 0, 0, 0, u32::MAX]).is_err());
        assert!(TimelineSettings::new([2, 6, 10, 16, 24]).is_err());
        assert!(TimelineSettings::new([3, 6, 6, 16, 24]).is_err());
        assert!(TimelineSettings::new([3, 6, 10, 16, 521]).is_err());
        let err = TimelineSettings::new([3, 8, 6, 16, 24]).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn test_settings_accept_boundaries() {
        let settings = TimelineSettings::new([3, 4, 5, 6, 520]).unwrap();
        assert_eq!(settings.weeks(), [3, 4, 5, 6, 520]);
        for rating in Rating::ALL {
            let timeline = estimate_timeline(rating, &settings);
            let sum: u32 = timeline.phases.iter().map(|p| p.weeks).sum();
            assert_eq!(sum, timeline.total_weeks);
            assert!(timeline.phases.iter().all(|p| p.weeks >= 1));
        }
    }

    #[test]
    fn test_percent_half_up_does_not_overflow() {
        assert_eq!(percent_half_up(u32::MAX, 30), 1_288_490_189);
        assert_eq!(percent_half_up(u32::MAX, 100), u32::MAX);
    }

    #[test]
    fn test_rounding_half_up() {
        // 24 weeks: planning 7.2 -> 7, testing 4.8 -> 5
        let timeline = estimate_timeline(Rating::VeryHigh, &TimelineSettings::default());
        let weeks: Vec<u32> = timeline.phases.iter().map(|p| p.weeks).collect();
        assert_eq!(weeks, vec![7, 12, 5]);
        assert_eq!(percent_half_up(5, 30), 2); // 1.5 -> 2
    }
}
