#![forbid(unsafe_code)]

mod cmd;
mod fetch;
mod output;
mod selection;
mod source;

use std::env;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "longpole: release dependency graphs and critical paths",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format (defaults to pretty on a TTY, text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Project root containing the .longpole directory (defaults to cwd).
    #[arg(long, global = true, value_name = "DIR")]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags, env, and TTY state.
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Analysis",
        about = "Show the dependency graph for a release",
        long_about = "Build and show the full dependency graph for one release: \
                      nodes with resolved statuses, edges, critical path, and summary.",
        after_help = "EXAMPLES:\n    # Graph for release v1.2 from GitHub\n    lp graph v1.2\n\n    # Offline, from a fixture\n    lp graph v1.2 --issues-file issues.json\n\n    # Emit machine-readable output\n    lp graph v1.2 --json"
    )]
    Graph(cmd::graph::GraphArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Show the critical path for a release",
        long_about = "Compute the longest dependency chain for one release. \
                      A dependency cycle renders a warning instead of a path.",
        after_help = "EXAMPLES:\n    # Critical path for release v1.2\n    lp path v1.2\n\n    # Emit machine-readable output\n    lp path v1.2 --json"
    )]
    Path(cmd::path::PathArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "List dependency cycles in a release",
        after_help = "EXAMPLES:\n    # Cycles among release v1.2's issues\n    lp cycles v1.2"
    )]
    Cycles(cmd::cycles::CyclesArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Show resolved issue statuses for a release",
        long_about = "Resolve one canonical status per issue from live work, \
                      completion history, and the remote tracker state.",
        after_help = "EXAMPLES:\n    # Statuses for release v1.2\n    lp status v1.2"
    )]
    Status(cmd::status::StatusArgs),

    #[command(
        next_help_heading = "Read",
        about = "List releases from the manifest",
        after_help = "EXAMPLES:\n    # List all releases\n    lp releases"
    )]
    Releases(cmd::releases::ReleasesArgs),

    #[command(
        next_help_heading = "Misc",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Bash completions\n    lp completions bash > /etc/bash_completion.d/lp"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LONGPOLE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "longpole=debug,info"
        } else {
            "longpole=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let project_root = match cli.project.clone() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let output = cli.output_mode();

    match cli.command {
        Commands::Graph(ref args) => cmd::graph::run_graph(args, output, &project_root),
        Commands::Path(ref args) => cmd::path::run_path(args, output, &project_root),
        Commands::Cycles(ref args) => cmd::cycles::run_cycles(args, output, &project_root),
        Commands::Status(ref args) => cmd::status::run_status(args, output, &project_root),
        Commands::Releases(ref args) => cmd::releases::run_releases(args, output, &project_root),
        Commands::Completions(args) => {
            cmd::completions::run_completions(args.shell, &mut Cli::command())
        }
    }
}
