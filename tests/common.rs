// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides profile drafts, log histories and in-memory engine setup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_quest`

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use pierre_quest::config::QuestConfig;
use pierre_quest::errors::{AppResult, StorageError};
use pierre_quest::intelligence::ParameterStore;
use pierre_quest::models::{
    BenchmarkLifts, DailyLog, ExperienceLevel, FitnessGoal, Profile, ProfileDraft, RecoveryInputs,
    StatBlock,
};
use pierre_quest::resources::QuestResources;
use pierre_quest::storage::{InMemoryStore, KeyValueStore, LocalStorage};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration as StdDuration;
use tokio::runtime::Handle;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        // Another harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed calendar day used as "today" across tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

/// Noon UTC on `day`
pub fn noon(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).expect("valid time"))
}

/// Benchmarks from the onboarding example: 300 kg total
pub fn sample_benchmarks() -> BenchmarkLifts {
    BenchmarkLifts {
        bench_kg: 80.0,
        squat_kg: 100.0,
        deadlift_kg: 120.0,
        max_pushups: 35,
        max_burpees_per_minute: 22,
        five_km_seconds: Some(1_620),
    }
}

/// Onboarding draft for a 70 kg intermediate lifter
pub fn sample_draft() -> ProfileDraft {
    ProfileDraft {
        name: "Sung Jin-Woo".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1998, 6, 1),
        weight_kg: 70.0,
        height_cm: 178.0,
        goal: FitnessGoal::Bulk,
        experience: ExperienceLevel::Intermediate,
        benchmarks: sample_benchmarks(),
        favorite_foods: vec!["Ramen".into()],
    }
}

/// Profile at `rank` with baseline stats
pub fn profile_at_rank(rank: f64) -> Profile {
    let mut profile = Profile::from_draft(sample_draft(), StatBlock::default(), rank);
    profile.favorite_foods.clear();
    profile
}

/// Log `days_ago` days before `today()` with the given recovery inputs
pub fn log_days_ago(days_ago: i64, volume: f64, soreness: u8, sleep: u8, stress: u8) -> DailyLog {
    DailyLog::new(
        noon(today()) - Duration::days(days_ago),
        "Strength Session",
        volume,
        RecoveryInputs {
            soreness,
            sleep,
            stress,
        },
        100,
    )
}

/// `count` well-recovered logs ending yesterday with steadily rising volume
pub fn rising_history(count: usize) -> Vec<DailyLog> {
    (0..count)
        .map(|index| {
            let days_ago = (count - index) as i64;
            log_days_ago(days_ago, 150.0 + 10.0 * index as f64, 2, 8, 2)
        })
        .collect()
}

/// Typed storage over a fresh in-memory backend
pub fn memory_storage() -> (Arc<InMemoryStore>, LocalStorage) {
    let backend = Arc::new(InMemoryStore::new());
    let storage = LocalStorage::new(Arc::clone(&backend) as Arc<dyn KeyValueStore>);
    (backend, storage)
}

/// In-memory resources without background training
pub fn memory_resources() -> QuestResources {
    init_test_logging();
    QuestResources::new(
        QuestConfig::in_memory(),
        Arc::new(InMemoryStore::new()),
        None,
    )
}

/// In-memory resources training on the current tokio runtime
pub fn memory_resources_with_training() -> QuestResources {
    init_test_logging();
    QuestResources::new(
        QuestConfig::in_memory(),
        Arc::new(InMemoryStore::new()),
        Some(Handle::current()),
    )
}

/// In-memory backend whose writes to one key fail while armed
pub struct FailingStore {
    inner: InMemoryStore,
    failing_key: &'static str,
    armed: AtomicBool,
}

impl FailingStore {
    pub fn new(failing_key: &'static str) -> Self {
        Self {
            inner: InMemoryStore::new(),
            failing_key,
            armed: AtomicBool::new(false),
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.failing_key && self.armed.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable);
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

/// Parameter store that holds the first save until released
///
/// Keeps a training pass in flight so concurrent submissions can be observed.
pub struct GatedParameterStore {
    entered: Mutex<Option<Sender<()>>>,
    release: Mutex<Receiver<()>>,
    saved: Mutex<Vec<String>>,
}

/// Signals for a [`GatedParameterStore`]
pub struct Gate {
    entered: Receiver<()>,
    release: Sender<()>,
}

impl Gate {
    /// Block until a training pass is saving its parameters
    pub fn wait_until_saving(&self) {
        self.entered
            .recv_timeout(StdDuration::from_secs(60))
            .expect("training pass never reached save");
    }

    /// Let the held save finish
    pub fn open(&self) {
        self.release.send(()).expect("gated store dropped");
    }
}

impl GatedParameterStore {
    pub fn with_gate() -> (Arc<Self>, Gate) {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let store = Arc::new(Self {
            entered: Mutex::new(Some(entered_tx)),
            release: Mutex::new(release_rx),
            saved: Mutex::new(Vec::new()),
        });
        let gate = Gate {
            entered: entered_rx,
            release: release_tx,
        };
        (store, gate)
    }

    /// Every blob saved so far, oldest first
    pub fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

impl ParameterStore for GatedParameterStore {
    fn load_parameters(&self) -> Option<String> {
        None
    }

    fn save_parameters(&self, blob: &str) -> AppResult<()> {
        self.saved.lock().unwrap().push(blob.to_owned());
        if let Some(entered) = self.entered.lock().unwrap().take() {
            entered.send(()).unwrap();
            self.release.lock().unwrap().recv().unwrap();
        }
        Ok(())
    }
}
