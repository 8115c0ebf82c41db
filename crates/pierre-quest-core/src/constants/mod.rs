// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Quest targets, rank thresholds, recovery policy, estimator hyperparameters, storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the component that owns them. Configuration structs
//! (`EstimatorConfig`, `GeneratorConfig`) take their defaults from here.

/// Rank scale and letter tier thresholds
pub mod rank {
    /// Lowest possible rank score
    pub const MIN_RANK: f64 = 0.0;
    /// Highest possible rank score
    pub const MAX_RANK: f64 = 100.0;

    /// Minimum score for the S tier
    pub const S_THRESHOLD: f64 = 90.0;
    /// Minimum score for the A tier
    pub const A_THRESHOLD: f64 = 75.0;
    /// Minimum score for the B tier
    pub const B_THRESHOLD: f64 = 60.0;
    /// Minimum score for the C tier
    pub const C_THRESHOLD: f64 = 45.0;
    /// Minimum score for the D tier
    pub const D_THRESHOLD: f64 = 30.0;

    /// XP reward units per rank point
    pub const XP_PER_RANK_POINT: f64 = 100.0;
    /// Denominator of the status-window XP display (`rank * 100` out of this)
    pub const XP_DISPLAY_CEILING: u32 = 10_000;
}

/// Stat block bounds and benchmark tiers
pub mod stats {
    /// Lowest legal stat value
    pub const MIN_STAT: u32 = 1;
    /// Highest legal stat value
    pub const MAX_STAT: u32 = 100;
    /// Value of a stat with no derivation input (and of absent persisted stats)
    pub const BASELINE_STAT: u32 = 10;

    /// Bodyweight-relative strength tiers: (ratio strictly above, score)
    pub const STRENGTH_RATIO_TIERS: [(f64, u32); 5] =
        [(5.0, 95), (4.0, 80), (3.0, 60), (2.0, 40), (1.0, 20)];
    /// Push-up bonus tiers: (reps strictly above, bonus)
    pub const PUSHUP_BONUS_TIERS: [(u32, u32); 2] = [(60, 10), (40, 5)];
    /// Burpees-per-minute agility tiers: (rate strictly above, score)
    pub const AGILITY_BURPEE_TIERS: [(u32, u32); 3] = [(30, 80), (20, 50), (10, 30)];
}

/// Daily, penalty and side quest generation policy
pub mod quest {
    /// Base push-up target at rank 0
    pub const BASE_PUSHUPS: f64 = 50.0;
    /// Base sit-up target at rank 0
    pub const BASE_SITUPS: f64 = 50.0;
    /// Base squat target at rank 0
    pub const BASE_SQUATS: f64 = 50.0;
    /// Base running distance (km) at rank 0
    pub const BASE_RUN_KM: f64 = 5.0;

    /// Bodyweight scale gained across the full rank range (1x to 3x)
    pub const BODYWEIGHT_SCALE_SPAN: f64 = 2.0;
    /// Rank divisor for the running scale (1x to 1.5x)
    pub const RUN_SCALE_DIVISOR: f64 = 200.0;
    /// Base XP for a daily quest, multiplied by the bodyweight scale
    pub const BASE_DAILY_XP: f64 = 100.0;

    /// Rep multiplier applied when recovery is poor
    pub const POOR_RECOVERY_MULTIPLIER: f64 = 0.8;

    /// Reward pool used when the profile lists no favorite foods
    pub const DEFAULT_REWARD_FOODS: [&str; 5] = ["Pizza", "Burger", "Sushi", "Steak", "Ice Cream"];
    /// Punishment text attached to daily quests
    pub const DAILY_PUNISHMENT: &str = "PENALTY ZONE: Survival Quest (4 hours)";

    /// Penalty survival run distance (km)
    pub const PENALTY_RUN_KM: u32 = 10;
    /// Penalty burpee count
    pub const PENALTY_BURPEES: u32 = 100;
    /// Penalty reward text
    pub const PENALTY_REWARD: &str = "Status Recovery";
    /// Penalty punishment text
    pub const PENALTY_PUNISHMENT: &str = "DEATH (Account Reset)";

    /// Side quest XP
    pub const SIDE_QUEST_XP: u32 = 20;
    /// Side quest reward text
    pub const SIDE_QUEST_REWARD: &str = "Instant Recovery (Small XP)";
    /// Side quest punishment text
    pub const SIDE_QUEST_PUNISHMENT: &str = "None";
    /// Per-view chance of offering a side quest
    pub const SIDE_QUEST_CHANCE: f64 = 0.2;
    /// Side quest catalogue: (name, target, unit)
    pub const SIDE_QUEST_TASKS: [(&str, u32, &str); 6] = [
        ("Shadow Boxing", 5, "min"),
        ("Plank", 2, "min"),
        ("Wall Sit", 2, "min"),
        ("Jumping Jacks", 50, "reps"),
        ("Stretching", 10, "min"),
        ("Meditation", 5, "min"),
    ];

    /// Workout type recorded on logs created by quest completion
    pub const COMPLETION_WORKOUT_TYPE: &str = "Daily Quest Completion";
}

/// Task unit labels
pub mod units {
    /// Repetition count; the only unit counted toward volume
    pub const REPS: &str = "reps";
    /// Distance in kilometres
    pub const KM: &str = "km";
    /// Duration in minutes
    pub const MINUTES: &str = "min";
}

/// Recovery scoring policy
pub mod recovery {
    /// Recovery scores strictly below this are poor
    pub const POOR_RECOVERY_THRESHOLD: f64 = 0.5;

    /// Soreness recorded at completion when no recovery input exists
    pub const DEFAULT_SORENESS: u8 = 3;
    /// Sleep quality recorded at completion when no recovery input exists
    pub const DEFAULT_SLEEP: u8 = 7;
    /// Stress recorded at completion when no recovery input exists
    pub const DEFAULT_STRESS: u8 = 3;

    /// Soreness scale maximum
    pub const SORENESS_SCALE: f64 = 5.0;
    /// Sleep quality scale maximum
    pub const SLEEP_SCALE: f64 = 10.0;
    /// Stress scale maximum
    pub const STRESS_SCALE: f64 = 5.0;
}

/// Volume estimator architecture and training hyperparameters
pub mod estimator {
    /// Feature vector width: volume, soreness, sleep, stress, placeholder
    pub const INPUT_FEATURES: usize = 5;
    /// First hidden layer width
    pub const HIDDEN_UNITS_1: usize = 32;
    /// Second hidden layer width
    pub const HIDDEN_UNITS_2: usize = 16;
    /// Dropout rate after the first hidden layer
    pub const DROPOUT_RATE: f64 = 0.2;

    /// Adam learning rate
    pub const LEARNING_RATE: f64 = 0.01;
    /// Adam first-moment decay
    pub const ADAM_BETA1: f64 = 0.9;
    /// Adam second-moment decay
    pub const ADAM_BETA2: f64 = 0.999;
    /// Adam numerical stabilizer
    pub const ADAM_EPSILON: f64 = 1e-7;

    /// Training epochs per pass
    pub const EPOCHS: usize = 200;
    /// Mini-batch size
    pub const BATCH_SIZE: usize = 4;
    /// Minimum logs before training runs
    pub const MIN_TRAINING_LOGS: usize = 5;
    /// Default seed for weight init, dropout and shuffling
    pub const DEFAULT_SEED: u64 = 42;

    /// Progressive-overload multiplier used while untrained
    pub const FALLBACK_OVERLOAD: f64 = 1.02;
    /// Reserved bodyweight-change feature value
    pub const PLACEHOLDER_FEATURE: f64 = 1.0;

    /// Version tag written into persisted parameter blobs
    pub const PARAMETER_SCHEMA_VERSION: u32 = 1;
    /// Epoch interval for progress logging
    pub const LOG_EVERY_EPOCHS: usize = 50;
}

/// Keys of the four persisted blobs
pub mod storage_keys {
    /// Profile record
    pub const PROFILE: &str = "pierre_quest_profile";
    /// Ordered daily log list
    pub const LOGS: &str = "pierre_quest_logs";
    /// Estimator parameter blob
    pub const MODEL: &str = "pierre_quest_model";
    /// Active quest record
    pub const ACTIVE_QUEST: &str = "pierre_quest_active_quest";

    /// Every key owned by the engine, used by full reset
    pub const ALL: [&str; 4] = [PROFILE, LOGS, MODEL, ACTIVE_QUEST];
}

/// Service identity used by logging
pub mod service_names {
    /// Default service name
    pub const PIERRE_QUEST: &str = "pierre-quest";
}
