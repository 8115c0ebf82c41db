// ABOUTME: Recovery readiness score from the most recent session's sleep, stress and soreness
// ABOUTME: Poor recovery (score below 0.5) discounts bodyweight quest targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_quest_core::constants::recovery::{
    POOR_RECOVERY_THRESHOLD, SLEEP_SCALE, SORENESS_SCALE, STRESS_SCALE,
};
use pierre_quest_core::models::RecoveryInputs;

/// Readiness in roughly `[0, 1]`: mean of sleep/10, (5-stress)/5 and (5-soreness)/5
///
/// # Examples
///
/// ```rust
/// use pierre_quest_core::models::RecoveryInputs;
/// use pierre_quest_intelligence::recovery::recovery_score;
///
/// let score = recovery_score(RecoveryInputs { soreness: 4, sleep: 5, stress: 4 });
/// assert!((score - 0.3).abs() < 1e-9);
/// ```
#[must_use]
pub fn recovery_score(inputs: RecoveryInputs) -> f64 {
    let sleep = f64::from(inputs.sleep) / SLEEP_SCALE;
    let calm = (STRESS_SCALE - f64::from(inputs.stress)) / STRESS_SCALE;
    let fresh = (SORENESS_SCALE - f64::from(inputs.soreness)) / SORENESS_SCALE;
    (sleep + calm + fresh) / 3.0
}

/// Whether `score` calls for a lighter bodyweight workload
#[must_use]
pub fn is_poor_recovery(score: f64) -> bool {
    score < POOR_RECOVERY_THRESHOLD
}
