// ABOUTME: Core types and constants for the Pierre quest engine
// ABOUTME: Foundation crate with error handling, domain models, rank letters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Quest Core
//!
//! Foundation crate providing shared types and constants for the Pierre quest
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Quest targets, rank thresholds, estimator hyperparameters and storage keys
//! - **models**: Profile, daily log, quest and rank letter definitions

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, `DailyLog`, Quest, `RankLetter`)
pub mod models;
