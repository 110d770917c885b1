use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The topdecay developers",
    version,
    about = "topdecay CLI - Resolves the top-quark decay chains of semileptonic ttbar events and writes the indices and regression targets of the hadronic and leptonic branches.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to resolve events in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve every event of a particle table and write the six decay indices per event.
    Resolve(ResolveArgs),
    /// Print the record of one event together with its resolution result.
    Inspect(InspectArgs),
}

/// Arguments for the `resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the input particle table (CSV with event,pid,d1,d2[,px,py,pz,e]).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output assignment table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path for the regression-target table. Requires momentum columns in the input.
    #[arg(short, long, value_name = "PATH")]
    pub targets: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the bound on self-decay steps followed per particle.
    #[arg(long, value_name = "INT")]
    pub max_self_decay_steps: Option<usize>,

    /// Abort the whole batch on the first corrupt record instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S resolver.lepton-threshold=10
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the input particle table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Number of the event to inspect.
    #[arg(short, long, required = true, value_name = "EVENT")]
    pub event: u64,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
