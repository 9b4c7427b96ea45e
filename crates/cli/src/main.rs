mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sacks::domain::{
    clamp_bound, clamp_polynomial_count, RawNumber, LARGE_BOUND_THRESHOLD, POLYNOMIAL_COUNT,
    PRIME_BOUND, PRIME_BOUND_PRESETS,
};
use sacks::orchestrator::{ComputationResult, ComputeCfg, SpiralClient};
use sacks::poly_search::{find_efficient_polynomials, IntRange, SearchCfg};
use sacks::sieve::sieve;
use sacks::spiral::{point_for, polar};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use crate::provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "sacks")]
#[command(about = "Sacks spiral primes and prime-generating quadratics")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// The (b, c) rectangle searched for `x² + b·x + c`.
#[derive(Args, Clone, Copy)]
struct SearchArgs {
    #[arg(long, default_value_t = -120, allow_negative_numbers = true)]
    b_min: i64,
    #[arg(long, default_value_t = 120, allow_negative_numbers = true)]
    b_max: i64,
    #[arg(long, default_value_t = 2)]
    c_min: i64,
    #[arg(long, default_value_t = 200)]
    c_max: i64,
}

impl SearchArgs {
    fn cfg(&self) -> SearchCfg {
        SearchCfg {
            b_range: IntRange::new(self.b_min, self.b_max),
            c_range: IntRange::new(self.c_min, self.c_max),
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Run one request through the worker and write the JSON response
    Compute {
        /// Raw prime bound; rounded and clamped into the supported domain
        #[arg(long, default_value = "10000")]
        max_prime: RawNumber,
        /// Raw number of polynomials to select; rounded and clamped
        #[arg(long, default_value = "100")]
        polynomials: RawNumber,
        /// Radial distance per unit of √n
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        /// Write the full response here (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Count (or list) the primes up to a bound
    Primes {
        #[arg(long)]
        bound: u32,
        #[arg(long)]
        list: bool,
    },
    /// Print the ranked prime-generating quadratics
    Polys {
        #[arg(long, default_value = "10000")]
        max_prime: RawNumber,
        #[arg(long, default_value = "10")]
        polynomials: RawNumber,
        /// Leading values shown per sequence
        #[arg(long, default_value_t = 8)]
        head: usize,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print the spiral position of one integer
    Point {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(long, default_value_t = 1.0)]
        step: f64,
    },
    /// List the request domains and bound presets
    Presets,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Compute {
            max_prime,
            polynomials,
            step,
            out,
            search,
        } => run_compute(max_prime, polynomials, step, out, search),
        Action::Primes { bound, list } => primes(bound, list),
        Action::Polys {
            max_prime,
            polynomials,
            head,
            search,
        } => polys(max_prime, polynomials, head, search),
        Action::Point { n, step } => point(n, step),
        Action::Presets => presets(),
        Action::Report => report(),
    }
}

/// Clamp raw inputs, logging whenever the domain changed them.
fn clamp_inputs(max_prime: RawNumber, polynomials: RawNumber) -> (u32, u32) {
    let bound = clamp_bound(max_prime);
    let count = clamp_polynomial_count(polynomials);
    if f64::from(bound) != max_prime.value() {
        tracing::warn!(raw = %max_prime, bound, "max prime clamped into domain");
    }
    if f64::from(count) != polynomials.value() {
        tracing::warn!(raw = %polynomials, count, "polynomial count clamped into domain");
    }
    if bound > LARGE_BOUND_THRESHOLD {
        tracing::warn!(bound, "large bound; computation may take a while");
    }
    (bound, count)
}

/// Response without the coordinate buffers, for terminal output and sidecars.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    generation_token: u64,
    bound: u32,
    primes: usize,
    efficient: usize,
    regular: usize,
    sequences: usize,
    count_summary: Option<sacks::poly_search::CountSummary>,
}

impl From<&ComputationResult> for Summary {
    fn from(r: &ComputationResult) -> Self {
        Self {
            generation_token: r.generation_token,
            bound: r.bound,
            primes: r.points.len(),
            efficient: r.efficient_len(),
            regular: r.regular_len(),
            sequences: r.ordered_sequences.len(),
            count_summary: r.count_summary,
        }
    }
}

fn run_compute(
    max_prime: RawNumber,
    polynomials: RawNumber,
    step: f64,
    out: Option<PathBuf>,
    search: SearchArgs,
) -> Result<()> {
    let (bound, count) = clamp_inputs(max_prime, polynomials);
    tracing::info!(bound, count, step, "compute");
    let cfg = ComputeCfg {
        search: search.cfg(),
        step,
    };
    let mut client = SpiralClient::spawn(cfg)?;
    let token = client.submit(max_prime, polynomials)?;
    let result = client
        .blocking_next_current()
        .context("worker stopped before delivering a result")?;
    client.shutdown()?;
    anyhow::ensure!(
        result.generation_token == token,
        "result token {} does not match request token {token}",
        result.generation_token
    );

    let summary = serde_json::to_value(Summary::from(&result))?;
    match out {
        Some(out) => {
            write_response(&out, &result)?;
            let params = json!({
                "maxPrimeRaw": max_prime.value(),
                "polynomialCountRaw": polynomials.value(),
                "step": step,
                "search": cfg.search,
            });
            let prov = write_sidecar(&out, Payload::new(params).with_summary(summary))?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote response");
        }
        None => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn write_response(out: &Path, result: &ComputationResult) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let bytes = serde_json::to_vec(result)?;
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn primes(bound: u32, list: bool) -> Result<()> {
    tracing::info!(bound, "primes");
    let primes = sieve(bound);
    println!("{}", primes.len());
    if list {
        let values: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
        println!("{}", values.join(" "));
    }
    Ok(())
}

fn polys(
    max_prime: RawNumber,
    polynomials: RawNumber,
    head: usize,
    search: SearchArgs,
) -> Result<()> {
    let (bound, count) = clamp_inputs(max_prime, polynomials);
    let cfg = search.cfg();
    tracing::info!(bound, count, space = cfg.search_space(), "polys");
    let primes = sieve(bound);
    let outcome = find_efficient_polynomials(&primes, bound, count as usize, cfg);
    println!("{:>4} {:>6} {:>6} {:>6}  leading values", "rank", "b", "c", "count");
    for (rank, cand) in outcome.candidates.iter().enumerate() {
        let lead: Vec<String> = cand.sequence.iter().take(head).map(u32::to_string).collect();
        println!(
            "{:>4} {:>6} {:>6} {:>6}  {}",
            rank + 1,
            cand.b,
            cand.c,
            cand.count(),
            lead.join(" ")
        );
    }
    match outcome.count_summary() {
        Some(s) => println!(
            "efficient primes: {}  counts: {}..={}",
            outcome.efficient.len(),
            s.min,
            s.max
        ),
        None => println!("no prime-generating quadratics in range"),
    }
    Ok(())
}

fn point(n: i64, step: f64) -> Result<()> {
    let (r, theta) = polar(n, step);
    let p = point_for(n, step);
    let obj = json!({ "n": n, "r": r, "theta": theta, "x": p.x, "y": p.y });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn presets() -> Result<()> {
    let obj = json!({
        "primeBound": PRIME_BOUND,
        "polynomialCount": POLYNOMIAL_COUNT,
        "largeBoundThreshold": LARGE_BOUND_THRESHOLD,
        "boundPresets": PRIME_BOUND_PRESETS,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "engine": provenance::Engine::current(),
        "defaults": {
            "search": SearchCfg::default(),
            "compute": ComputeCfg::default(),
        },
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_args_accept_negative_b_and_text_bounds() {
        let cmd = Cmd::try_parse_from([
            "sacks",
            "compute",
            "--max-prime",
            "lots",
            "--b-min",
            "-40",
            "--b-max",
            "40",
        ])
        .unwrap();
        match cmd.action {
            Action::Compute {
                max_prime,
                polynomials,
                search,
                out,
                ..
            } => {
                assert!(max_prime.value().is_nan());
                assert_eq!(polynomials, RawNumber(100.0));
                assert_eq!(search.cfg().b_range, IntRange::new(-40, 40));
                assert_eq!(search.cfg().c_range, SearchCfg::default().c_range);
                assert!(out.is_none());
            }
            _ => panic!("expected compute"),
        }
    }

    #[test]
    fn clamp_inputs_applies_domains() {
        assert_eq!(clamp_inputs(RawNumber(12.0), RawNumber(999.0)), (1_000, 200));
        assert_eq!(clamp_inputs(RawNumber(62_500.2), RawNumber(7.0)), (62_500, 7));
    }

    #[test]
    fn summary_drops_coordinate_buffers() {
        let result = sacks::orchestrator::compute_bounded(1_000, 3, 5, ComputeCfg::default());
        let summary = serde_json::to_value(Summary::from(&result)).unwrap();
        assert_eq!(summary["generationToken"], 5);
        assert_eq!(summary["primes"], 168);
        assert_eq!(summary["sequences"], 3);
        assert!(summary.get("points").is_none());
    }
}
