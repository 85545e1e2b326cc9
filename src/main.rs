// respool - bounded resource pool
// Thread-safe resource pooling with lazy creation, validation, and shutdown

// This is just a binary wrapper - the actual library is in lib.rs
// Run examples with: cargo run --example basic

use respool::{ResourceFactory, ResourcePool};
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

struct SessionFactory(AtomicUsize);

impl ResourceFactory for SessionFactory {
    type Resource = usize;
    type Error = Infallible;

    fn create(&self) -> Result<usize, Infallible> {
        Ok(self.0.fetch_add(1, Ordering::SeqCst))
    }
}

fn main() {
    println!("=== respool ===");
    println!("See demos/ directory for usage examples");
    println!("Run: cargo run --example basic");
    println!();

    println!("Quick Demo:");
    let pool = ResourcePool::new(SessionFactory(AtomicUsize::new(0)), 4);

    {
        let session = pool.acquire().unwrap();
        println!("  Got session: {}", *session);
    }

    println!("  Available after return: {}", pool.available_count());
}
