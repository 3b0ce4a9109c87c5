//! Example: fanning a health check out to several replicas
//!
//! Run with: `cargo run --example fan_out`

use errgroup_rail::prelude::*;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Replica {
    id: u32,
    latency_ms: u64,
    healthy: bool,
}

const REPLICAS: [Replica; 4] = [
    Replica::new(1, 40, true),
    Replica::new(2, 10, false),
    Replica::new(3, 25, true),
    Replica::new(4, 5, false),
];

impl Replica {
    const fn new(id: u32, latency_ms: u64, healthy: bool) -> Self {
        Self {
            id,
            latency_ms,
            healthy,
        }
    }
}

fn probe(replica: Replica, timeout: Error) -> Result<(), Error> {
    thread::sleep(Duration::from_millis(replica.latency_ms));
    if replica.healthy {
        return Ok(());
    }
    let cause = if replica.id % 2 == 0 {
        timeout
    } else {
        new("connection refused")
    };
    wrapf!(cause, "replica {}", replica.id).map_or(Ok(()), Err)
}

fn checks(timeout: &Error) -> Vec<ErrFunc> {
    REPLICAS
        .iter()
        .map(|&replica| {
            let timeout = timeout.clone();
            thunk(move || probe(replica, timeout))
        })
        .collect()
}

fn main() {
    let timeout = new("probe timed out");

    // 1. Collect every failure
    println!("1. all:");
    match all(checks(&timeout)) {
        Ok(()) => println!("   every replica healthy"),
        Err(err) => println!("   {err:#}"),
    }

    // 2. Stop caring after the first failure
    println!("\n2. first:");
    if let Err(err) = first(checks(&timeout)) {
        println!("   {err}");
    }

    // 3. Treat timeouts as noise
    println!("\n3. ignoring timeouts:");
    let group = Group::new([with_ignored_errors([timeout.clone()])]);
    group.add(checks(&timeout));
    match group.wait() {
        Ok(()) => println!("   only timeouts"),
        Err(err) => println!("   {err}"),
    }

    // 4. Deferred message
    println!("\n4. lazy:");
    let summary = lazy(|| Err(newf!("{} of {} replicas down", 2, REPLICAS.len())));
    println!("   {summary}");
}
