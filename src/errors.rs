//! Error types for the resource pool

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by pool operations.
///
/// `E` is the creation error of the [`ResourceFactory`](crate::ResourceFactory)
/// backing the pool.
#[derive(Error, Debug)]
pub enum PoolError<E> {
    #[error("pool has been shut down")]
    Closed,

    #[error("resource creation failed")]
    Creation(#[source] E),

    #[error("acquire timed out after {0:?}")]
    Timeout(Duration),

    #[error("released a resource this pool did not issue")]
    IllegalRelease,
}

pub type PoolResult<T, E> = Result<T, PoolError<E>>;
