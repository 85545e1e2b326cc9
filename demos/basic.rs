//! Basic usage examples for respool

use respool::{PoolConfig, ResourceFactory, ResourcePool};
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

struct Connection {
    id: usize,
}

struct ConnectionFactory {
    opened: AtomicUsize,
}

impl ConnectionFactory {
    fn new() -> Self {
        Self {
            opened: AtomicUsize::new(0),
        }
    }
}

impl ResourceFactory for ConnectionFactory {
    type Resource = Connection;
    type Error = Infallible;

    fn create(&self) -> Result<Connection, Infallible> {
        let id = self.opened.fetch_add(1, Ordering::SeqCst);
        println!("   (opening connection {id})");
        Ok(Connection { id })
    }
}

fn main() {
    println!("=== respool - Basic Examples ===\n");

    // Example 1: Lazy creation and RAII return
    lazy_creation();

    // Example 2: Try methods
    try_methods();

    // Example 3: Bounded wait
    bounded_wait();

    // Example 4: Warmup and status
    warmup_and_status();
}

fn lazy_creation() {
    println!("1. Lazy Creation:");
    let pool = ResourcePool::new(ConnectionFactory::new(), 4);
    println!("   Created on construction: {}", pool.created_count());

    {
        let conn = pool.acquire().unwrap();
        println!("   Got connection: {}", conn.id);
        // Connection automatically returned when dropped
    }

    println!("   Available after return: {}\n", pool.available_count());
}

fn try_methods() {
    println!("2. Try Methods:");
    let pool = ResourcePool::new(ConnectionFactory::new(), 1);

    let first = pool.try_acquire().unwrap();
    assert!(first.is_some());
    println!("   First try: Success");

    let second = pool.try_acquire().unwrap();
    assert!(second.is_none());
    println!("   Second try: None (pool exhausted)");

    drop(first);

    let third = pool.try_acquire().unwrap();
    assert!(third.is_some());
    println!("   Third try: Success\n");
}

fn bounded_wait() {
    println!("3. Bounded Wait:");
    let pool = ResourcePool::new(ConnectionFactory::new(), 1);

    let held = pool.acquire().unwrap();
    println!("   Holding connection {}", held.id);

    match pool.acquire_timeout(Duration::from_millis(100)) {
        Ok(conn) => println!("   Got connection: {}", conn.id),
        Err(e) => println!("   Error: {e}"),
    }

    drop(held);
    println!();
}

fn warmup_and_status() {
    println!("4. Warmup and Status:");

    let config = PoolConfig::new().with_max_capacity(8);
    let pool = ResourcePool::with_config(ConnectionFactory::new(), config);

    let created = pool.warmup(3).unwrap();
    println!("   Warmed up {created} connections");

    {
        let _a = pool.acquire().unwrap();
        let _b = pool.acquire().unwrap();

        let status = pool.status();
        println!(
            "   Active: {}, Available: {}, Capacity: {}",
            status.active, status.available, status.capacity
        );
    }

    println!("   After return - Available: {}", pool.available_count());
}
