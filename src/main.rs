use anyhow::Context;
use clap::Parser;
use convpath::{ConversionGraph, SearchStrategy, SolveReport, Solver};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit status when the graph has no path to the target.
const EXIT_NO_PATH: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "convpath",
    version,
    author,
    about = "Find the shortest chain of format converters",
    long_about = "Find a chain of format converters that turns one of the formats you \
    already have into the format you need.\n\n\
    The conversion graph is a JSON file holding either an array of \
    {\"from\": .., \"to\": ..} objects or an object with an \"edges\" array.\n\n\
    USAGE EXAMPLES:\n  \
      # Find a path from png to jpg\n  \
      convpath --graph converters.json --from png --to jpg\n\n  \
      # Several starting formats, minimum number of conversions\n  \
      convpath --graph converters.json --from png,gif --to avif --strategy shortest\n\n  \
      # Machine-readable output\n  \
      convpath --graph converters.json --from md --to pdf --output json\n\n  \
      # List every format the graph knows about\n  \
      convpath --graph converters.json --list-formats"
)]
struct Cli {
    /// JSON file describing the available converters
    #[arg(short, long, value_name = "FILE", env = "CONVPATH_GRAPH")]
    graph: PathBuf,

    /// Formats you already have (repeat or separate with commas)
    #[arg(
        short = 'f',
        long = "from",
        value_name = "FORMAT",
        value_delimiter = ',',
        required_unless_present = "list_formats"
    )]
    available: Vec<String>,

    /// Format you need
    #[arg(
        short = 't',
        long = "to",
        value_name = "FORMAT",
        required_unless_present = "list_formats"
    )]
    target: Option<String>,

    /// Search strategy
    #[arg(short, long, value_enum, default_value = "greedy")]
    strategy: CliStrategy,

    /// Longest chain of conversions to accept
    #[arg(long, value_name = "N")]
    max_hops: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: CliOutput,

    /// Print search statistics after the path
    #[arg(long)]
    stats: bool,

    /// List the formats in the graph and exit
    #[arg(long)]
    list_formats: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliStrategy {
    /// Depth-first, first path found, direct conversions first
    Greedy,
    /// Breadth-first, fewest conversions
    Shortest,
}

impl From<CliStrategy> for SearchStrategy {
    fn from(s: CliStrategy) -> Self {
        match s {
            CliStrategy::Greedy => Self::Greedy,
            CliStrategy::Shortest => Self::Shortest,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutput {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    let graph = ConversionGraph::load(&cli.graph)
        .with_context(|| format!("Failed to load conversion graph from {}", cli.graph.display()))?;

    if cli.list_formats {
        for format in graph.formats() {
            println!("{format}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let target = cli
        .target
        .context("--to is required unless --list-formats is given")?;

    let mut builder = Solver::builder().strategy(cli.strategy.into());
    if let Some(max_hops) = cli.max_hops {
        builder = builder.max_hops(max_hops);
    }
    let solver = builder.build().context("Failed to build solver")?;

    let outcome = solver
        .solve_with_stats(graph.edges(), &cli.available, &target)
        .context("Failed to solve conversion path")?;

    let report = SolveReport::new(target, cli.available, outcome);

    match cli.output {
        CliOutput::Text => {
            println!("{}", report.render_text());
            if cli.stats {
                report.print_summary();
            }
        }
        CliOutput::Json => {
            let json = report.render_json().context("Failed to encode report")?;
            println!("{json}");
        }
    }

    Ok(if report.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NO_PATH)
    })
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("convpath=warn"),
        1 => EnvFilter::new("convpath=debug"),
        _ => EnvFilter::new("convpath=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}
