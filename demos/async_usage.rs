//! Async usage examples

use respool::{PoolConfig, ResourceFactory, ResourcePool};
use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

struct SessionFactory(AtomicUsize);

impl ResourceFactory for SessionFactory {
    type Resource = usize;
    type Error = Infallible;

    fn create(&self) -> Result<usize, Infallible> {
        Ok(self.0.fetch_add(1, Ordering::SeqCst))
    }
}

fn session_factory() -> SessionFactory {
    SessionFactory(AtomicUsize::new(0))
}

#[tokio::main]
async fn main() {
    println!("=== respool - Async Examples ===\n");

    // Example 1: Async acquire
    async_acquire().await;

    // Example 2: Async with timeout
    async_with_timeout().await;

    // Example 3: Concurrent tasks
    concurrent_tasks().await;
}

async fn async_acquire() {
    println!("1. Async Acquire:");
    let pool = ResourcePool::new(session_factory(), 4);

    {
        let session = pool.acquire_async().await.unwrap();
        println!("   Got session asynchronously: {}", *session);
    }

    println!();
}

async fn async_with_timeout() {
    println!("2. Async with Timeout:");

    let config = PoolConfig::new()
        .with_max_capacity(1)
        .with_acquire_timeout(Duration::from_millis(100));

    let pool = ResourcePool::with_config(session_factory(), config);

    // Hold the only session
    let _held = pool.acquire().unwrap();

    // Try to get another (should time out)
    match pool.acquire_async().await {
        Ok(_) => println!("   Got session"),
        Err(e) => println!("   Error: {e}"),
    }

    println!();
}

async fn concurrent_tasks() {
    println!("3. Concurrent Tasks:");

    let pool = Arc::new(ResourcePool::new(session_factory(), 3));

    let mut handles = vec![];

    for i in 0..6 {
        let pool = Arc::clone(&pool);
        let handle = tokio::spawn(async move {
            let session = pool.acquire_async().await.unwrap();
            println!("   Task {i} got session {}", *session);
            sleep(Duration::from_millis(50)).await;
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.await.unwrap();
    }

    println!("   Final available: {}", pool.available_count());
}
