//! Pool configuration options

use std::time::Duration;

/// Configuration for pool behavior
///
/// # Examples
///
/// ```
/// use respool::PoolConfig;
/// use std::time::Duration;
///
/// let config = PoolConfig::new()
///     .with_max_capacity(8)
///     .with_acquire_timeout(Duration::from_secs(5))
///     .with_idle_timeout(Duration::from_secs(300));
///
/// assert_eq!(config.max_capacity, 8);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of resources the pool will have outstanding
    /// (checked out + idle) at once. Must be positive.
    pub max_capacity: usize,

    /// Default timeout for the bounded-wait acquire variants.
    pub acquire_timeout: Option<Duration>,

    /// Idle resources older than this are retired instead of reissued.
    pub idle_timeout: Option<Duration>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_capacity: 16,
            acquire_timeout: Some(Duration::from_secs(30)),
            idle_timeout: None,
        }
    }
}

impl PoolConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum capacity
    ///
    /// # Examples
    ///
    /// ```
    /// use respool::PoolConfig;
    ///
    /// let config = PoolConfig::new().with_max_capacity(50);
    /// assert_eq!(config.max_capacity, 50);
    /// ```
    pub fn with_max_capacity(mut self, capacity: usize) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Set the default acquire timeout
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = Some(timeout);
        self
    }

    /// Set the idle timeout after which resources are retired
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }
}
