//! # respool
//!
//! Thread-safe bounded resource pool with lazy creation, validation, and
//! pool-wide shutdown.
//!
//! ## Features
//!
//! - Lazy resource creation up to a fixed capacity
//! - Blocking `acquire` that parks callers while the pool is exhausted
//! - Automatic return of resources via RAII (Drop trait)
//! - Validation before reuse, with transparent replacement of stale resources
//! - Pool-wide shutdown that releases every blocked caller
//! - Bounded-wait and async acquire variants with timeout
//! - Pool warm-up/pre-population
//! - Idle-timeout retirement of cached resources
//!
//! ## Quick Start
//!
//! ```rust
//! use respool::{ResourceFactory, ResourcePool};
//! use std::convert::Infallible;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! struct SessionFactory(AtomicUsize);
//!
//! impl ResourceFactory for SessionFactory {
//!     type Resource = usize;
//!     type Error = Infallible;
//!
//!     fn create(&self) -> Result<usize, Infallible> {
//!         Ok(self.0.fetch_add(1, Ordering::SeqCst))
//!     }
//! }
//!
//! let pool = ResourcePool::new(SessionFactory(AtomicUsize::new(0)), 4);
//! {
//!     let session = pool.acquire().unwrap();
//!     println!("got session {}", *session);
//!     // Returned to the pool when `session` goes out of scope
//! }
//! assert_eq!(pool.available_count(), 1);
//! ```

mod config;
mod errors;
mod factory;
mod pool;

pub use config::PoolConfig;
pub use errors::{PoolError, PoolResult};
pub use factory::ResourceFactory;
pub use pool::{PoolStatus, PooledResource, ResourcePool};
