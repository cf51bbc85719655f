//! Synthetic user profiles
//!
//! This module contains the profile record, its persisted schema, and the
//! factory that fabricates new records.
//!
//! # Overview
//!
//! - **ProfileRecord**: one synthetic shopper with identity, demographic,
//!   device and address data
//! - **SharedProfile**: reference-counted handle handed out by the pool
//! - **PersistedProfile**: optional-field schema used when reading pool files
//! - **ProfileFactory**: seeded or entropy-backed fabrication of new records
//!
//! # Usage Example
//!
//! ```rust
//! use retail_user_pool::types::{GeneratorConfig, Platform, TraitOptions};
//! use retail_user_pool::user::ProfileFactory;
//!
//! let mut factory = ProfileFactory::with_seed(GeneratorConfig::default(), 42).unwrap();
//! let mut record = factory.create();
//! assert_eq!(record.username(), format!("user{}", record.id()));
//! assert!(record.platform(Platform::Android).user_agent.starts_with("Android"));
//!
//! let mut options = TraitOptions::new();
//! options.insert("favorite_color".to_string(), vec!["red".into(), "blue".into()]);
//! record.assign_traits(Some(&options), factory.rng());
//! assert!(record.trait_value("favorite_color").is_some());
//! ```

mod corpus;
pub mod factory;
pub mod persisted;
pub mod profile;

// Re-export all public types for convenience
pub use factory::ProfileFactory;
pub use persisted::PersistedProfile;
pub use profile::{share, Address, DeviceProfile, Platforms, ProfileRecord, SharedProfile};
