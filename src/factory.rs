//! The factory contract through which the pool creates and validates resources

use std::error::Error;

/// Creates and validates the resources managed by a
/// [`ResourcePool`](crate::ResourcePool).
///
/// The pool never interprets what a resource *is*; everything it knows about
/// resource lifecycles goes through this trait. Implementations typically hold
/// whatever is needed to open fresh connections (addresses, credentials, TLS
/// configuration) and are shared read-only by every pool operation.
///
/// # Examples
///
/// ```
/// use respool::ResourceFactory;
/// use std::convert::Infallible;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// struct SessionFactory(AtomicUsize);
///
/// impl ResourceFactory for SessionFactory {
///     type Resource = usize;
///     type Error = Infallible;
///
///     fn create(&self) -> Result<usize, Infallible> {
///         Ok(self.0.fetch_add(1, Ordering::SeqCst))
///     }
/// }
/// ```
pub trait ResourceFactory: Send + Sync {
    /// The resource type handed out by the pool.
    type Resource: Send;

    /// Error produced when a resource cannot be created.
    type Error: Error + Send + 'static;

    /// Allocates and fully initializes one resource.
    ///
    /// A failure here is propagated to the `acquire` caller without retries
    /// and without consuming a capacity slot.
    fn create(&self) -> Result<Self::Resource, Self::Error>;

    /// Reports whether a previously issued resource is still fit for reuse.
    ///
    /// May probe the resource (a liveness check, say) but must not touch pool
    /// bookkeeping. The default accepts everything.
    fn validate(&self, _resource: &Self::Resource) -> bool {
        true
    }
}
