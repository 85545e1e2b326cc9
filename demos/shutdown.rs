//! Shutdown and validation: waking blocked callers, retiring broken resources

use respool::{PoolError, ResourceFactory, ResourcePool};
use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

struct Connection {
    id: usize,
}

#[derive(Clone)]
struct ConnectionFactory {
    opened: Arc<AtomicUsize>,
    broken: Arc<AtomicBool>,
}

impl ConnectionFactory {
    fn new() -> Self {
        Self {
            opened: Arc::new(AtomicUsize::new(0)),
            broken: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl ResourceFactory for ConnectionFactory {
    type Resource = Connection;
    type Error = Infallible;

    fn create(&self) -> Result<Connection, Infallible> {
        Ok(Connection {
            id: self.opened.fetch_add(1, Ordering::SeqCst),
        })
    }

    fn validate(&self, _conn: &Connection) -> bool {
        !self.broken.load(Ordering::SeqCst)
    }
}

fn main() {
    println!("=== respool - Shutdown and Validation ===\n");

    // Example 1: Shutdown releases blocked callers
    shutdown_releases_waiters();

    // Example 2: Returning to a closed pool
    release_after_shutdown();

    // Example 3: Stale connections replaced on reuse
    validation_replacement();
}

fn shutdown_releases_waiters() {
    println!("1. Shutdown Releases Blocked Callers:");

    let pool = ResourcePool::new(ConnectionFactory::new(), 1);
    let held = pool.acquire().unwrap();
    println!("   Holding connection {}", held.id);

    let mut waiters = vec![];
    for i in 0..3 {
        let pool = pool.clone();
        waiters.push(thread::spawn(move || match pool.acquire() {
            Ok(conn) => println!("   Waiter {i} got connection {}", conn.id),
            Err(PoolError::Closed) => println!("   Waiter {i}: pool closed"),
            Err(e) => println!("   Waiter {i}: {e}"),
        }));
    }

    thread::sleep(Duration::from_millis(100));
    println!("   Shutting down with 3 blocked waiters...");
    pool.shutdown();

    for waiter in waiters {
        waiter.join().unwrap();
    }

    println!();
}

fn release_after_shutdown() {
    println!("2. Release After Shutdown:");

    let pool = ResourcePool::new(ConnectionFactory::new(), 2);
    let conn = pool.acquire().unwrap();

    pool.shutdown();
    println!("   Pool closed with connection {} still out", conn.id);

    drop(conn); // dropped, not re-pooled
    println!("   Available after return: {}", pool.available_count());
    println!("   Instantiated after return: {}\n", pool.created_count());
}

fn validation_replacement() {
    println!("3. Validation Replaces Stale Connections:");

    let factory = ConnectionFactory::new();
    let pool = ResourcePool::new(factory.clone(), 2);

    {
        let conn = pool.acquire().unwrap();
        println!("   Using connection {}", conn.id);
    }
    println!("   Cached connections: {}", pool.available_count());

    println!("   Marking cached connections broken...");
    factory.broken.store(true, Ordering::SeqCst);

    let conn = pool.acquire().unwrap();
    println!("   Got replacement connection {}", conn.id);
    println!("   Instantiated: {}", pool.created_count());
}
