use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cliquer::config::SearchParams;
use cliquer::io::read_dimacs;
use cliquer::report::{render_table, write_json, ReportRecord};
use cliquer::search::{solve_instance, Algorithm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    /// Branch-and-bound
    Bnb,
    /// Branch-and-cut
    Bnc,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bnb => Algorithm::BranchAndBound,
            AlgorithmArg::Bnc => Algorithm::BranchAndCut,
        }
    }
}

/// Exact maximum-clique solver over DIMACS .clq/.col instances.
#[derive(Parser)]
#[command(name = "clq", version)]
struct Cli {
    /// DIMACS instance files
    #[arg(required = true)]
    instances: Vec<PathBuf>,

    /// Search algorithm
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Bnc)]
    algorithm: AlgorithmArg,

    /// Wall-clock limit per instance, seconds
    #[arg(long)]
    time_limit: Option<f64>,

    /// Seed for the randomized heuristic and colorings
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut params = SearchParams::default();
    if let Some(limit) = cli.time_limit {
        params.time_limit = limit;
    }
    if let Some(seed) = cli.seed {
        params.seed = seed;
    }
    let algorithm: Algorithm = cli.algorithm.into();

    let mut records = Vec::new();
    for path in &cli.instances {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let graph = match read_dimacs(path) {
            Ok(graph) => graph,
            Err(e) => {
                tracing::error!(instance = %name, error = %e, "skipping instance");
                continue;
            }
        };
        tracing::info!(instance = %name, "started");

        let solution = solve_instance(&graph, algorithm, &params);
        tracing::info!(
            instance = %name,
            heuristic = solution.heuristic.size(),
            secs = solution.heuristic_secs,
            "heuristic finished"
        );
        tracing::info!(
            instance = %name,
            size = solution.outcome.size,
            nodes = solution.outcome.nodes,
            timed_out = solution.outcome.timed_out,
            secs = solution.outcome.duration.as_secs_f64(),
            "search finished"
        );
        records.push(ReportRecord::new(
            name,
            solution.heuristic_secs,
            &solution.outcome,
        ));
    }

    print!("{}", render_table(&records));
    if let Some(path) = &cli.json {
        write_json(path, &records)?;
    }
    Ok(())
}
