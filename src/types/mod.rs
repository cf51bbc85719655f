//! Core types and identifiers for the user pool
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: integer user ids drawn from a ten-digit range
//! - **Enums**: gender, shopping persona tags, and device platforms
//! - **Configuration**: generator configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use retail_user_pool::types::*;
//!
//! let id = UserId::new(1_234_567_890);
//! assert!(id.is_in_generated_range());
//!
//! let persona: Persona = "footwear_outdoors".parse().unwrap();
//! assert_eq!(persona, Persona::FootwearOutdoors);
//!
//! let config = GeneratorConfig {
//!     female_ratio: 0.6,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
