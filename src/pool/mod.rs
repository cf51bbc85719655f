//! User pool lifecycle, persistence and observability
//!
//! # Overview
//!
//! - **UserPool**: available/active partition of profiles backed by one file
//! - **PoolError**: load, persistence and configuration failures
//! - **PoolStatistics**: counts and distributions over the pool
//! - **LoggingConfig**: tracing subscriber setup for the binary and tests
//!
//! # Usage Example
//!
//! ```rust
//! use retail_user_pool::pool::UserPool;
//! use retail_user_pool::types::GeneratorConfig;
//! use retail_user_pool::user::ProfileFactory;
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("users.json");
//! UserPool::initialize_file(&path)?;
//!
//! let factory = ProfileFactory::with_seed(GeneratorConfig::default(), 7)?;
//! let mut pool = UserPool::load(&path, factory)?;
//! pool.grow_pool(10);
//!
//! let user = pool.checkout(false)?;
//! assert_eq!(pool.active_count(), 1);
//! assert!(pool.active_ids().contains(&user.borrow().id()));
//! pool.persist()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod logging;
pub mod statistics;
pub mod user_pool;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use statistics::*;
pub use user_pool::*;
