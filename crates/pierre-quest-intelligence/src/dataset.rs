// ABOUTME: Feature construction and training pair assembly for the volume estimator
// ABOUTME: Normalizes recovery inputs and pairs each log with the next session's volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_quest_core::constants::estimator::{INPUT_FEATURES, PLACEHOLDER_FEATURE};
use pierre_quest_core::constants::recovery::{SLEEP_SCALE, SORENESS_SCALE, STRESS_SCALE};
use pierre_quest_core::models::DailyLog;

/// Estimator input: `[volume, soreness/5, sleep/10, stress/5, placeholder]`
pub type FeatureVector = [f64; INPUT_FEATURES];

/// Session state the estimator predicts from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeQuery {
    /// Volume handled in the current session (unscaled)
    pub current_volume: f64,
    /// Soreness, 1-5
    pub soreness: f64,
    /// Sleep quality, 1-10
    pub sleep: f64,
    /// Stress, 1-5
    pub stress: f64,
}

impl VolumeQuery {
    /// Query built from a logged session
    #[must_use]
    pub fn from_log(log: &DailyLog) -> Self {
        Self {
            current_volume: log.volume,
            soreness: f64::from(log.soreness),
            sleep: f64::from(log.sleep),
            stress: f64::from(log.stress),
        }
    }

    /// Normalized feature vector; volume stays unscaled
    #[must_use]
    pub fn features(&self) -> FeatureVector {
        [
            self.current_volume,
            self.soreness / SORENESS_SCALE,
            self.sleep / SLEEP_SCALE,
            self.stress / STRESS_SCALE,
            PLACEHOLDER_FEATURE,
        ]
    }
}

/// Supervised pairs built from an ordered log history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    /// Features of session `i`
    pub inputs: Vec<FeatureVector>,
    /// Raw volume of session `i + 1`
    pub labels: Vec<f64>,
}

impl TrainingSet {
    /// Build `n - 1` pairs from `n` logs, ordered by timestamp
    ///
    /// The sort is stable, so logs sharing a timestamp keep their storage order.
    #[must_use]
    pub fn from_logs(logs: &[DailyLog]) -> Self {
        let mut ordered: Vec<&DailyLog> = logs.iter().collect();
        ordered.sort_by_key(|log| log.timestamp);

        let (inputs, labels) = ordered
            .windows(2)
            .map(|pair| (VolumeQuery::from_log(pair[0]).features(), pair[1].volume))
            .unzip();

        Self { inputs, labels }
    }

    /// Number of pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no pairs exist
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
