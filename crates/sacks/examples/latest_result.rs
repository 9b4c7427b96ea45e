//! Last-result-wins delivery through the worker thread.
//!
//! Submits a burst of requests the way an interactive caller would while a
//! slider moves, then waits: only the final submission's result is kept.

use sacks::orchestrator::{ComputeCfg, SpiralClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = SpiralClient::spawn(ComputeCfg::default())?;
    for bound in [10_000u32, 32_400, 62_500, 100_000] {
        let token = client.submit(bound, 50)?;
        println!("submitted bound={bound} token={token}");
    }
    if let Some(result) = client.blocking_next_current() {
        println!(
            "kept token={} bound={} primes={} efficient={} sequences={} counts={:?}",
            result.generation_token,
            result.bound,
            result.points.len(),
            result.efficient_len(),
            result.ordered_sequences.len(),
            result.count_summary,
        );
    }
    client.shutdown()?;
    Ok(())
}
