//! Example: the same fan-out on a tokio runtime
//!
//! Run with: `cargo run --example async_fan_out --features async-tokio`

use errgroup_rail::async_ext::AsyncGroup;
use errgroup_rail::{new, with_first_only, wrapf, Error};
use std::time::Duration;

async fn fetch_shard(shard: u32) -> Result<(), Error> {
    tokio::time::sleep(Duration::from_millis(u64::from(shard) * 10)).await;
    if shard % 3 == 0 {
        return wrapf!(new("checksum mismatch"), "shard {shard}").map_or(Ok(()), Err);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let mut group = AsyncGroup::default();
    for shard in 1..=7 {
        group.add(fetch_shard(shard)).await;
    }
    println!("pending tasks: {}", group.pending());

    match group.wait().await {
        Ok(()) => println!("all shards fetched"),
        Err(err) => println!("{err:#}"),
    }

    let mut group = AsyncGroup::new([with_first_only()]);
    for shard in 1..=7 {
        group.add(fetch_shard(shard)).await;
    }
    if let Err(err) = group.wait().await {
        println!("first failure: {err}");
    }
}
