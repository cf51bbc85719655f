//! Retail User Pool
//!
//! Generates a pool of synthetic retail shoppers for seeding demo environments,
//! keeps it in a JSON file, and hands users out for downstream simulations.
//!
//! # Overview
//!
//! A pool holds two disjoint sets of profiles. *Available* users have never
//! been handed out; *active* users have. Checking a user out moves it from
//! available to active, or, when asked, returns an already active user again.
//! When nothing is available the pool grows itself and rewrites its file.
//!
//! ## Key Features
//!
//! - **Plausible Profiles**: names, emails, ages, personas, device identifiers
//!   and a default postal address
//! - **Lazy Growth**: new users are fabricated only when the pool runs dry
//! - **Forward-Compatible Loading**: older pool files missing newer fields still load
//! - **Shared Handles**: traits assigned to a checked out user are seen by every holder
//! - **Reproducible Runs**: seeded generation for deterministic fixtures
//!
//! ## Quick Start
//!
//! ```rust
//! use retail_user_pool::*;
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("users.json");
//! UserPool::initialize_file(&path)?;
//!
//! let config = GeneratorConfig { growth_batch_size: 50, ..Default::default() };
//! let mut pool = UserPool::load(&path, ProfileFactory::with_seed(config, 1)?)?;
//!
//! // Empty pool: the first checkout grows it by one batch and saves it
//! let user = pool.checkout(true)?;
//! assert_eq!(pool.size(), 50);
//! println!("{}", user.borrow().to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enumerations and configuration
//! - [`user`]: profile records and the profile factory
//! - [`pool`]: the user pool, its errors, statistics and logging setup
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod pool;
pub mod types;
pub mod user;

// Core types and configuration
pub use types::{
    AgeDistribution, ConfigError, ConfigValidationError, Gender, GeneratorConfig, Persona,
    Platform, PlatformTemplates, TraitOptions, UserId,
};

// Profiles
pub use user::{
    Address, DeviceProfile, PersistedProfile, Platforms, ProfileFactory, ProfileRecord,
    SharedProfile,
};

// Pool
pub use pool::{LoggingConfig, PoolError, PoolResult, PoolStatistics, UserPool};
