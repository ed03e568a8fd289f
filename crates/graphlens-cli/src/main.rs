//! Graphlens CLI - run graph analyses from the command line.
//!
//! A graph is read from an edge-list file (or standard input), replayed into
//! the engine, and one analysis is run and printed per invocation.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use graphlens::EngineConfig;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::types::{HighlightArg, KindArg, PathAlgorithmArg, StrategyArg};

/// Graphlens: graph analysis and layout engine.
#[derive(Parser)]
#[command(name = "graphlens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Edge-list file to analyze (reads standard input when omitted)
    #[arg(short, long, global = true)]
    graph: Option<PathBuf>,

    /// Graph kind; overrides a `directed`/`undirected` line in the file
    #[arg(short, long, value_enum, global = true)]
    kind: Option<KindArg>,

    /// YAML file with engine parameters
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest path between two vertices
    Path {
        /// Start vertex id
        #[arg(allow_negative_numbers = true)]
        start: i64,

        /// End vertex id
        #[arg(allow_negative_numbers = true)]
        end: i64,

        /// Shortest-path algorithm
        #[arg(short, long, value_enum, default_value = "dijkstra")]
        algorithm: PathAlgorithmArg,
    },

    /// List cycles reachable from a start vertex
    Cycles {
        /// Vertex to search from
        #[arg(allow_negative_numbers = true)]
        start: i64,
    },

    /// List strongly connected components (directed graphs)
    Scc,

    /// List bridges (undirected graphs)
    Bridges,

    /// Build a minimum spanning tree or forest (undirected graphs)
    Mst,

    /// Rank vertices by LeaderRank centrality
    Rank {
        /// Maximum number of vertices to display
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Detect communities by greedy modularity optimization (undirected graphs)
    Communities {
        /// Seed for the visiting order (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Modularity resolution (overrides the config file)
        #[arg(short, long)]
        resolution: Option<f64>,
    },

    /// Compute vertex positions on a canvas
    Layout {
        /// Canvas width
        #[arg(long, default_value = "1280")]
        width: f64,

        /// Canvas height
        #[arg(long, default_value = "720")]
        height: f64,

        /// Placement strategy
        #[arg(short, long, value_enum, default_value = "force-directed")]
        strategy: StrategyArg,

        /// Analysis whose result is applied as colors and sizes
        #[arg(long, value_enum, default_value = "none")]
        highlight: HighlightArg,

        /// Seed for the initial scatter (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print vertex and edge counts and other quick facts
    Summary,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "graphlens=info",
        1 => "graphlens=debug",
        _ => "graphlens=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let graph = cli::loader::load(cli.graph.as_deref(), cli.kind.map(Into::into))?;

    match cli.command {
        Commands::Path {
            start,
            end,
            algorithm,
        } => cli::path::run(&graph, start, end, algorithm),
        Commands::Cycles { start } => cli::cycles::run(&graph, start),
        Commands::Scc => cli::scc::run(&graph),
        Commands::Bridges => cli::bridges::run(&graph),
        Commands::Mst => cli::mst::run(&graph),
        Commands::Rank { limit } => cli::rank::run(&graph, &config.leader_rank, limit),
        Commands::Communities { seed, resolution } => {
            let mut settings = config.community;
            settings.seed = seed.or(settings.seed);
            if let Some(resolution) = resolution {
                settings.resolution = resolution;
            }
            cli::communities::run(&graph, &settings)
        }
        Commands::Layout {
            width,
            height,
            strategy,
            highlight,
            seed,
        } => {
            let mut config = config;
            config.layout.seed = seed.or(config.layout.seed);
            let options = cli::layout::LayoutOptions {
                width,
                height,
                strategy,
                highlight,
            };
            cli::layout::run(&graph, &config, &options)
        }
        Commands::Summary => cli::summary::run(&graph),
    }
}
