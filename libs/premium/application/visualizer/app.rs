//! Dashboard state: the read-only view the renderer works from

use chrono::{DateTime, Local};

use crate::application::poller::TickOutcome;
use crate::domain::Sample;

/// Last observed tick state, shown in the header and footer
#[derive(Debug, Clone, PartialEq)]
pub enum TickStatus {
    /// No tick has completed yet
    Starting,
    /// Last tick appended a sample
    Live,
    /// Last tick failed; waiting for the next one
    Pending { since: DateTime<Local> },
}

/// Snapshot-backed state for the terminal UI
///
/// Holds only owned copies of the sample series; the poller keeps exclusive
/// ownership of the history buffer.
pub struct Dashboard {
    pub samples: Vec<Sample>,
    pub status: TickStatus,
    pub should_quit: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            status: TickStatus::Starting,
            should_quit: false,
        }
    }

    /// Fold one tick outcome into the view
    pub fn apply(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Sampled { snapshot, .. } => {
                self.samples = snapshot;
                self.status = TickStatus::Live;
            }
            TickOutcome::Pending { timestamp } => {
                self.status = TickStatus::Pending { since: timestamp };
            }
        }
    }

    /// Most recent sample, if any tick has succeeded yet
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Premium series as chart points, x = sample index
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, s.premium_rate))
            .collect()
    }

    /// Y-axis bounds padded around the observed premiums, always spanning zero
    pub fn premium_bounds(&self) -> [f64; 2] {
        let mut min = 0.0_f64;
        let mut max = 0.0_f64;

        for sample in &self.samples {
            min = min.min(sample.premium_rate);
            max = max.max(sample.premium_rate);
        }

        let padding = ((max - min) * 0.1).max(0.1);
        [min - padding, max + padding]
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sample;

    fn sample(premium: f64) -> Sample {
        let reference = 7.20;
        let mid = reference * (1.0 + premium / 100.0);
        Sample::new(Local::now(), premium, mid, reference)
    }

    fn sampled_outcome(premiums: &[f64]) -> TickOutcome {
        let snapshot: Vec<Sample> = premiums.iter().map(|p| sample(*p)).collect();
        TickOutcome::Sampled {
            sample: snapshot.last().unwrap().clone(),
            snapshot,
        }
    }

    #[test]
    fn test_apply_sampled_outcome() {
        let mut dashboard = Dashboard::new();
        assert_eq!(dashboard.status, TickStatus::Starting);

        dashboard.apply(sampled_outcome(&[1.0, -0.5]));

        assert_eq!(dashboard.status, TickStatus::Live);
        assert_eq!(dashboard.samples.len(), 2);
        assert_eq!(dashboard.latest().unwrap().premium_rate, -0.5);
    }

    #[test]
    fn test_pending_keeps_previous_series() {
        let mut dashboard = Dashboard::new();
        dashboard.apply(sampled_outcome(&[1.0]));

        dashboard.apply(TickOutcome::Pending {
            timestamp: Local::now(),
        });

        // Series survives a failed tick, only the status flips
        assert_eq!(dashboard.samples.len(), 1);
        assert!(matches!(dashboard.status, TickStatus::Pending { .. }));
    }

    #[test]
    fn test_chart_points_are_indexed() {
        let mut dashboard = Dashboard::new();
        dashboard.apply(sampled_outcome(&[1.0, -0.5, 2.0]));

        let points = dashboard.chart_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (0.0, 1.0));
        assert_eq!(points[2], (2.0, 2.0));
    }

    #[test]
    fn test_premium_bounds_span_zero() {
        let mut dashboard = Dashboard::new();
        dashboard.apply(sampled_outcome(&[0.5, 1.5]));

        let [low, high] = dashboard.premium_bounds();
        assert!(low < 0.0);
        assert!(high > 1.5);
    }

    #[test]
    fn test_premium_bounds_empty_series() {
        let dashboard = Dashboard::new();

        let [low, high] = dashboard.premium_bounds();
        assert!(low < high);
    }
}
