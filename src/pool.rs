//! Core resource pool implementation

use std::collections::{HashSet, VecDeque};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, error, warn};
use parking_lot::{Condvar, Mutex};

use crate::config::PoolConfig;
use crate::errors::{PoolError, PoolResult};
use crate::factory::ResourceFactory;

/// A resource checked out of a pool, automatically returned when dropped
pub struct PooledResource<M: ResourceFactory> {
    resource: Option<M::Resource>,
    id: u64,
    shared: Arc<PoolShared<M>>,
}

impl<M: ResourceFactory> PooledResource<M> {
    /// Detaches the resource from the pool permanently.
    ///
    /// The pool forgets the resource and frees its capacity slot, so a later
    /// acquire may create a fresh resource in its place.
    pub fn take(mut self) -> M::Resource {
        let resource = self.resource.take().expect("resource already taken");
        self.shared.forget(self.id);
        resource
    }
}

impl<M: ResourceFactory> Deref for PooledResource<M> {
    type Target = M::Resource;

    fn deref(&self) -> &Self::Target {
        self.resource.as_ref().expect("resource already taken")
    }
}

impl<M: ResourceFactory> DerefMut for PooledResource<M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.resource.as_mut().expect("resource already taken")
    }
}

impl<M: ResourceFactory> Drop for PooledResource<M> {
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            if let Err(err) = self.shared.return_resource(self.id, resource) {
                debug_assert!(false, "returning resource {}: {err}", self.id);
                error!("dropping resource {}: {err}", self.id);
            }
        }
    }
}

/// A point-in-time snapshot of pool occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoolStatus {
    /// Maximum number of resources the pool will have outstanding at once
    pub capacity: usize,

    /// Resources currently instantiated (checked out + idle)
    pub created: usize,

    /// Resources currently checked out by callers
    pub active: usize,

    /// Idle resources eligible for reuse
    pub available: usize,

    /// Whether the pool has been shut down
    pub closed: bool,
}

/// An idle resource waiting on the reuse queue.
struct IdleResource<R> {
    id: u64,
    resource: R,
    released_at: Instant,
}

/// Pool bookkeeping. Invariant, under the lock:
/// `created == checked_out.len() + available.len()` and `created <= capacity`.
struct PoolState<R> {
    created: usize,
    checked_out: HashSet<u64>,
    available: VecDeque<IdleResource<R>>,
    closed: bool,
    next_id: u64,
}

impl<R> PoolState<R> {
    fn new() -> Self {
        Self {
            created: 0,
            checked_out: HashSet::new(),
            available: VecDeque::new(),
            closed: false,
            next_id: 0,
        }
    }
}

struct PoolShared<M: ResourceFactory> {
    factory: M,
    config: PoolConfig,
    state: Mutex<PoolState<M::Resource>>,
    wakeup: Condvar,
}

impl<M: ResourceFactory> PoolShared<M> {
    fn expired(&self, released_at: Instant) -> bool {
        match self.config.idle_timeout {
            Some(limit) => released_at.elapsed() > limit,
            None => false,
        }
    }

    fn return_resource(&self, id: u64, resource: M::Resource) -> PoolResult<(), M::Error> {
        let mut state = self.state.lock();
        if !state.checked_out.remove(&id) {
            return Err(PoolError::IllegalRelease);
        }
        if state.closed {
            // The pool will never reissue it; the unit is dropped instead.
            state.created -= 1;
            drop(state);
            drop(resource);
            return Ok(());
        }
        state.available.push_back(IdleResource {
            id,
            resource,
            released_at: Instant::now(),
        });
        drop(state);
        self.wakeup.notify_one();
        Ok(())
    }

    /// Removes a resource from the books without returning it.
    fn forget(&self, id: u64) {
        let mut state = self.state.lock();
        let tracked = state.checked_out.remove(&id);
        debug_assert!(tracked, "resource {id} was not checked out");
        if tracked {
            state.created -= 1;
        }
        drop(state);
        // The freed slot lets a waiter create a fresh resource.
        self.wakeup.notify_one();
    }
}

/// Thread-safe bounded pool of lazily created resources
///
/// Resources are created through a [`ResourceFactory`] on demand, up to a
/// fixed capacity. When every resource is checked out, [`acquire`] blocks the
/// calling thread until a resource is returned or the pool is shut down. Idle
/// resources are reissued oldest-first after validation; one that fails
/// validation is discarded and transparently replaced. Pool handles are cheap
/// to clone and share one underlying pool.
///
/// [`acquire`]: ResourcePool::acquire
pub struct ResourcePool<M: ResourceFactory> {
    shared: Arc<PoolShared<M>>,
}

impl<M: ResourceFactory> Clone for ResourcePool<M> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<M: ResourceFactory> ResourcePool<M> {
    /// Create a pool that lazily builds up to `max_capacity` resources.
    ///
    /// # Panics
    ///
    /// Panics if `max_capacity` is zero.
    pub fn new(factory: M, max_capacity: usize) -> Self {
        Self::with_config(factory, PoolConfig::new().with_max_capacity(max_capacity))
    }

    /// Create a pool from a full [`PoolConfig`].
    ///
    /// # Panics
    ///
    /// Panics if the configured capacity is zero.
    pub fn with_config(factory: M, config: PoolConfig) -> Self {
        assert!(config.max_capacity > 0, "pool capacity must be positive");
        Self {
            shared: Arc::new(PoolShared {
                factory,
                config,
                state: Mutex::new(PoolState::new()),
                wakeup: Condvar::new(),
            }),
        }
    }

    /// Get a resource, blocking until one can be returned or the pool is
    /// shut down.
    pub fn acquire(&self) -> PoolResult<PooledResource<M>, M::Error> {
        let mut state = self.shared.state.lock();
        loop {
            if let Some(pooled) = self.try_acquire_locked(&mut state)? {
                return Ok(pooled);
            }
            self.shared.wakeup.wait(&mut state);
        }
    }

    /// Get a resource, blocking at most `timeout`.
    pub fn acquire_timeout(&self, timeout: Duration) -> PoolResult<PooledResource<M>, M::Error> {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock();
        loop {
            if let Some(pooled) = self.try_acquire_locked(&mut state)? {
                return Ok(pooled);
            }
            if self
                .shared
                .wakeup
                .wait_until(&mut state, deadline)
                .timed_out()
            {
                return Err(PoolError::Timeout(timeout));
            }
        }
    }

    /// Get a resource without blocking; `Ok(None)` means the pool is
    /// exhausted right now.
    pub fn try_acquire(&self) -> PoolResult<Option<PooledResource<M>>, M::Error> {
        let mut state = self.shared.state.lock();
        self.try_acquire_locked(&mut state)
    }

    /// Get a resource asynchronously, bounded by the configured acquire
    /// timeout (30s when unset).
    pub async fn acquire_async(&self) -> PoolResult<PooledResource<M>, M::Error> {
        let timeout = self
            .shared
            .config
            .acquire_timeout
            .unwrap_or(Duration::from_secs(30));

        tokio::time::timeout(timeout, async {
            loop {
                match self.try_acquire()? {
                    Some(pooled) => return Ok(pooled),
                    None => tokio::time::sleep(Duration::from_millis(10)).await,
                }
            }
        })
        .await
        .map_err(|_| PoolError::Timeout(timeout))?
    }

    /// Returns a resource to the pool.
    ///
    /// Dropping the guard is equivalent. This form additionally reports an
    /// attempt to return a resource to a pool that did not issue it as
    /// [`PoolError::IllegalRelease`]; the resource then goes back to the pool
    /// it came from when the guard drops.
    pub fn release(&self, mut pooled: PooledResource<M>) -> PoolResult<(), M::Error> {
        if !Arc::ptr_eq(&self.shared, &pooled.shared) {
            return Err(PoolError::IllegalRelease);
        }
        let resource = pooled.resource.take().expect("resource already taken");
        self.shared.return_resource(pooled.id, resource)
    }

    /// Shut the pool down, waking every blocked caller.
    ///
    /// Irreversible and idempotent. Blocked and future `acquire` calls return
    /// [`PoolError::Closed`]. Checked-out resources stay with their holders;
    /// returning one to a closed pool simply drops it. Idle resources are
    /// dropped immediately.
    pub fn shutdown(&self) {
        let drained = {
            let mut state = self.shared.state.lock();
            if state.closed {
                return;
            }
            state.closed = true;
            let drained: Vec<_> = state.available.drain(..).collect();
            state.created -= drained.len();
            drained
        };
        self.shared.wakeup.notify_all();
        if !drained.is_empty() {
            debug!("shutdown dropped {} idle resources", drained.len());
        }
    }

    /// Pre-create up to `count` resources, bounded by the remaining
    /// capacity. Returns how many were created.
    pub fn warmup(&self, count: usize) -> PoolResult<usize, M::Error> {
        let mut state = self.shared.state.lock();
        if state.closed {
            return Err(PoolError::Closed);
        }
        let room = self.shared.config.max_capacity - state.created;
        let target = count.min(room);
        for done in 0..target {
            match self.shared.factory.create() {
                Ok(resource) => {
                    let id = state.next_id;
                    state.next_id += 1;
                    state.created += 1;
                    state.available.push_back(IdleResource {
                        id,
                        resource,
                        released_at: Instant::now(),
                    });
                }
                Err(err) => {
                    debug!("warmup stopped after {done} resources");
                    return Err(PoolError::Creation(err));
                }
            }
        }
        Ok(target)
    }

    /// Get the capacity bound
    pub fn capacity(&self) -> usize {
        self.shared.config.max_capacity
    }

    /// Get the number of resources currently instantiated
    pub fn created_count(&self) -> usize {
        self.shared.state.lock().created
    }

    /// Get the number of idle resources
    pub fn available_count(&self) -> usize {
        self.shared.state.lock().available.len()
    }

    /// Get the number of checked-out resources
    pub fn active_count(&self) -> usize {
        self.shared.state.lock().checked_out.len()
    }

    /// Whether the pool has been shut down
    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }

    /// Get an occupancy snapshot
    pub fn status(&self) -> PoolStatus {
        let state = self.shared.state.lock();
        PoolStatus {
            capacity: self.shared.config.max_capacity,
            created: state.created,
            active: state.checked_out.len(),
            available: state.available.len(),
            closed: state.closed,
        }
    }

    /// One pass of the acquire state machine, run under the held lock.
    ///
    /// `Ok(None)` means the pool is at capacity with nothing idle and the
    /// caller must wait for a returned resource or a freed slot.
    fn try_acquire_locked(
        &self,
        state: &mut PoolState<M::Resource>,
    ) -> PoolResult<Option<PooledResource<M>>, M::Error> {
        if state.closed {
            return Err(PoolError::Closed);
        }

        if let Some(idle) = state.available.pop_front() {
            let IdleResource {
                id,
                resource,
                released_at,
            } = idle;
            let expired = self.shared.expired(released_at);
            if !expired && self.shared.factory.validate(&resource) {
                state.checked_out.insert(id);
                return Ok(Some(self.pooled(id, resource)));
            }

            if expired {
                debug!("retiring idle resource {id}");
            } else {
                warn!("discarding resource {id}, failed validation");
            }
            state.created -= 1;
            drop(resource);

            // The discard freed a capacity slot; the replacement takes it
            // over, and if the replacement cannot be created a waiter may
            // claim the slot instead.
            return match self.create_locked(state) {
                Err(err) => {
                    self.shared.wakeup.notify_one();
                    Err(err)
                }
                replacement => replacement,
            };
        }

        if state.created < self.shared.config.max_capacity {
            return self.create_locked(state);
        }

        Ok(None)
    }

    fn create_locked(
        &self,
        state: &mut PoolState<M::Resource>,
    ) -> PoolResult<Option<PooledResource<M>>, M::Error> {
        let resource = self.shared.factory.create().map_err(PoolError::Creation)?;
        let id = state.next_id;
        state.next_id += 1;
        state.created += 1;
        state.checked_out.insert(id);
        debug!(
            "created resource {id} ({}/{} instantiated)",
            state.created, self.shared.config.max_capacity
        );
        Ok(Some(self.pooled(id, resource)))
    }

    fn pooled(&self, id: u64, resource: M::Resource) -> PooledResource<M> {
        PooledResource {
            resource: Some(resource),
            id,
            shared: Arc::clone(&self.shared),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use crossbeam::sync::WaitGroup;

    #[derive(Debug)]
    struct CreateFailed;

    impl fmt::Display for CreateFailed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("factory refused to create a resource")
        }
    }

    impl std::error::Error for CreateFailed {}

    /// Hands out ascending integers; failure and staleness are injectable.
    #[derive(Clone)]
    struct TestFactory {
        counter: Arc<AtomicUsize>,
        fail_creation: Arc<AtomicBool>,
        stale_below: Arc<AtomicUsize>,
    }

    impl TestFactory {
        fn new() -> Self {
            Self {
                counter: Arc::new(AtomicUsize::new(0)),
                fail_creation: Arc::new(AtomicBool::new(false)),
                stale_below: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl ResourceFactory for TestFactory {
        type Resource = usize;
        type Error = CreateFailed;

        fn create(&self) -> Result<usize, CreateFailed> {
            if self.fail_creation.load(Ordering::SeqCst) {
                return Err(CreateFailed);
            }
            Ok(self.counter.fetch_add(1, Ordering::SeqCst))
        }

        fn validate(&self, resource: &usize) -> bool {
            *resource >= self.stale_below.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn resources_are_created_lazily() {
        let pool = ResourcePool::new(TestFactory::new(), 4);
        assert_eq!(pool.created_count(), 0);

        let res = pool.acquire().unwrap();
        assert_eq!(*res, 0);
        assert_eq!(pool.created_count(), 1);
        assert_eq!(pool.active_count(), 1);

        drop(res);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.available_count(), 1);
    }

    #[test]
    fn idle_resources_reused_in_arrival_order() {
        let pool = ResourcePool::new(TestFactory::new(), 4);
        let first = pool.acquire().unwrap();
        let second = pool.acquire().unwrap();
        drop(first);
        drop(second);

        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        assert_eq!(*a, 0);
        assert_eq!(*b, 1);
        assert_eq!(pool.created_count(), 2);
    }

    #[test]
    fn try_acquire_reports_exhaustion() {
        let pool = ResourcePool::new(TestFactory::new(), 1);
        let held = pool.try_acquire().unwrap().unwrap();
        assert!(pool.try_acquire().unwrap().is_none());
        drop(held);
        assert!(pool.try_acquire().unwrap().is_some());
    }

    #[test]
    fn creation_failure_leaves_pool_unchanged() {
        let factory = TestFactory::new();
        let pool = ResourcePool::new(factory.clone(), 2);
        factory.fail_creation.store(true, Ordering::SeqCst);

        match pool.acquire() {
            Err(PoolError::Creation(_)) => {}
            _ => panic!("expected creation failure"),
        }
        let status = pool.status();
        assert_eq!((status.created, status.active, status.available), (0, 0, 0));

        factory.fail_creation.store(false, Ordering::SeqCst);
        assert_eq!(*pool.acquire().unwrap(), 0);
    }

    #[test]
    fn stale_resource_replaced_transparently() {
        let factory = TestFactory::new();
        let pool = ResourcePool::new(factory.clone(), 2);
        drop(pool.acquire().unwrap());
        assert_eq!(pool.available_count(), 1);

        factory.stale_below.store(1, Ordering::SeqCst);
        let replacement = pool.acquire().unwrap();
        assert_eq!(*replacement, 1);

        let status = pool.status();
        assert_eq!(status.created, 1);
        assert_eq!(status.active + status.available, status.created);
    }

    #[test]
    fn failed_replacement_frees_the_capacity_slot() {
        let factory = TestFactory::new();
        let pool = ResourcePool::new(factory.clone(), 1);
        drop(pool.acquire().unwrap());

        factory.stale_below.store(1, Ordering::SeqCst);
        factory.fail_creation.store(true, Ordering::SeqCst);
        match pool.acquire() {
            Err(PoolError::Creation(_)) => {}
            _ => panic!("expected creation failure"),
        }
        assert_eq!(pool.created_count(), 0);

        factory.fail_creation.store(false, Ordering::SeqCst);
        assert_eq!(*pool.acquire().unwrap(), 1);
    }

    #[test]
    fn explicit_release_returns_the_resource() {
        let pool = ResourcePool::new(TestFactory::new(), 2);
        let res = pool.acquire().unwrap();
        pool.release(res).unwrap();
        assert_eq!(pool.available_count(), 1);
    }

    #[test]
    fn foreign_release_is_rejected() {
        let pool_a = ResourcePool::new(TestFactory::new(), 1);
        let pool_b = ResourcePool::new(TestFactory::new(), 1);

        let res = pool_a.acquire().unwrap();
        match pool_b.release(res) {
            Err(PoolError::IllegalRelease) => {}
            _ => panic!("expected IllegalRelease"),
        }
        // The guard went home on drop.
        assert_eq!(pool_a.available_count(), 1);
        assert_eq!(pool_b.created_count(), 0);
    }

    #[test]
    fn unknown_id_release_is_rejected() {
        let pool = ResourcePool::new(TestFactory::new(), 1);
        let res = pool.acquire().unwrap();
        match pool.shared.return_resource(7, 99) {
            Err(PoolError::IllegalRelease) => {}
            other => panic!("expected IllegalRelease, got {other:?}"),
        }
        drop(res);
        assert_eq!(pool.available_count(), 1);
    }

    #[test]
    fn take_frees_a_capacity_slot() {
        let pool = ResourcePool::new(TestFactory::new(), 1);
        let res = pool.acquire().unwrap();
        assert_eq!(res.take(), 0);
        assert_eq!(pool.created_count(), 0);
        assert_eq!(*pool.acquire().unwrap(), 1);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn zero_capacity_is_rejected() {
        let _ = ResourcePool::new(TestFactory::new(), 0);
    }

    #[test]
    fn acquire_after_shutdown_fails_immediately() {
        let pool = ResourcePool::new(TestFactory::new(), 2);
        pool.shutdown();
        match pool.acquire() {
            Err(PoolError::Closed) => {}
            _ => panic!("expected Closed"),
        }
    }

    #[test]
    fn shutdown_is_idempotent() {
        let pool = ResourcePool::new(TestFactory::new(), 2);
        drop(pool.acquire().unwrap());

        pool.shutdown();
        let first = pool.status();
        pool.shutdown();
        assert_eq!(pool.status(), first);
        assert!(pool.is_closed());
    }

    #[test]
    fn shutdown_drops_idle_resources() {
        let pool = ResourcePool::new(TestFactory::new(), 2);
        drop(pool.acquire().unwrap());
        assert_eq!(pool.available_count(), 1);

        pool.shutdown();
        assert_eq!(pool.available_count(), 0);
        assert_eq!(pool.created_count(), 0);
    }

    #[test]
    fn release_into_closed_pool_drops_resource() {
        let pool = ResourcePool::new(TestFactory::new(), 2);
        let res = pool.acquire().unwrap();
        pool.shutdown();

        pool.release(res).unwrap();
        assert_eq!(pool.available_count(), 0);
        assert_eq!(pool.created_count(), 0);
    }

    #[test]
    fn warmup_prefills_up_to_capacity() {
        let pool = ResourcePool::new(TestFactory::new(), 4);
        assert_eq!(pool.warmup(10).unwrap(), 4);
        assert_eq!(pool.available_count(), 4);

        let res = pool.acquire().unwrap();
        assert_eq!(*res, 0);
        assert_eq!(pool.created_count(), 4);
    }

    #[test]
    fn idle_resources_are_retired() {
        let factory = TestFactory::new();
        let config = PoolConfig::new()
            .with_max_capacity(2)
            .with_idle_timeout(Duration::from_millis(10));
        let pool = ResourcePool::with_config(factory, config);

        drop(pool.acquire().unwrap());
        thread::sleep(Duration::from_millis(50));

        let fresh = pool.acquire().unwrap();
        assert_eq!(*fresh, 1);
        assert_eq!(pool.created_count(), 1);
    }

    #[test]
    fn acquire_timeout_expires_while_exhausted() {
        let pool = ResourcePool::new(TestFactory::new(), 1);
        let held = pool.acquire().unwrap();

        match pool.acquire_timeout(Duration::from_millis(50)) {
            Err(PoolError::Timeout(_)) => {}
            _ => panic!("expected timeout"),
        }

        drop(held);
        assert!(pool.acquire_timeout(Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn cloned_handles_share_state() {
        let pool = ResourcePool::new(TestFactory::new(), 2);
        let handle = pool.clone();

        let res = handle.acquire().unwrap();
        assert_eq!(pool.active_count(), 1);
        drop(res);
        assert_eq!(pool.available_count(), 1);
    }

    #[test]
    fn blocking_acquire_waits_for_release() {
        let pool = ResourcePool::new(TestFactory::new(), 1);
        let held = pool.acquire().unwrap();

        let (tx, rx) = mpsc::channel();
        let waiter = {
            let pool = pool.clone();
            thread::spawn(move || {
                let res = pool.acquire().unwrap();
                tx.send(*res).unwrap();
            })
        };

        // The waiter must stay blocked while the resource is held.
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(100)),
            Err(mpsc::RecvTimeoutError::Timeout)
        );

        drop(held);
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), 0);
        waiter.join().unwrap();
    }

    #[test]
    fn released_resource_satisfies_waiter_without_new_creation() {
        let pool = ResourcePool::new(TestFactory::new(), 2);
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        assert_eq!((*a, *b), (0, 1));

        let (tx, rx) = mpsc::channel();
        let waiter = {
            let pool = pool.clone();
            thread::spawn(move || {
                let res = pool.acquire().unwrap();
                tx.send(*res).unwrap();
            })
        };
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(100)),
            Err(mpsc::RecvTimeoutError::Timeout)
        );

        drop(a);
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), 0);
        waiter.join().unwrap();
        assert_eq!(pool.created_count(), 2);
    }

    #[test]
    fn shutdown_wakes_all_waiters() {
        let pool = ResourcePool::new(TestFactory::new(), 1);
        let held = pool.acquire().unwrap();

        let wg = WaitGroup::new();
        let mut waiters = Vec::new();
        for _ in 0..4 {
            let pool = pool.clone();
            let wg = wg.clone();
            waiters.push(thread::spawn(move || {
                drop(wg);
                pool.acquire()
            }));
        }

        wg.wait();
        // Give the waiters time to block on the pool.
        thread::sleep(Duration::from_millis(50));
        pool.shutdown();

        for waiter in waiters {
            match waiter.join().unwrap() {
                Err(PoolError::Closed) => {}
                Err(other) => panic!("expected Closed, got {other:?}"),
                Ok(_) => panic!("expected Closed, got a resource"),
            }
        }

        drop(held);
        assert_eq!(pool.created_count(), 0);
    }

    #[test]
    fn concurrent_churn_preserves_invariants() {
        let pool = ResourcePool::new(TestFactory::new(), 4);
        crossbeam::scope(|scope| {
            for _ in 0..8 {
                let pool = pool.clone();
                scope.spawn(move |_| {
                    for _ in 0..100 {
                        let res = pool.acquire().unwrap();
                        let _ = *res;
                    }
                });
            }
        })
        .unwrap();

        let status = pool.status();
        assert_eq!(status.active, 0);
        assert!(status.created <= 4);
        assert_eq!(status.available, status.created);
    }

    #[tokio::test]
    async fn acquire_async_returns_a_resource() {
        let pool = ResourcePool::new(TestFactory::new(), 2);
        let res = pool.acquire_async().await.unwrap();
        assert_eq!(*res, 0);
    }

    #[tokio::test]
    async fn acquire_async_times_out_when_exhausted() {
        let config = PoolConfig::new()
            .with_max_capacity(1)
            .with_acquire_timeout(Duration::from_millis(100));
        let pool = ResourcePool::with_config(TestFactory::new(), config);
        let held = pool.acquire().unwrap();

        match pool.acquire_async().await {
            Err(PoolError::Timeout(_)) => {}
            _ => panic!("expected timeout"),
        }
        drop(held);
    }
}
