#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Context;
use clap::Parser;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use teamroute_core::output::{gha, ChannelReport};
use teamroute_core::types::{DEFAULT_LOG_DIR, DEFAULT_MAPPING_FILE};
use teamroute_core::{
    ExtractConfig, LogDirWriter, LookupConfig, MissingFile, OutputFormat, ParseMode,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "teamroute",
    version,
    about = "Team channel lookup and team code extraction for CI"
)]
struct Cli {
    /// Print diagnostics (team checked, result, log file) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the channel number mapped to a team (empty line if none)
    FindChannel(FindChannelArgs),
    /// Extract the team code from a repository name and log it
    FindTeam(FindTeamArgs),
}

/// Output format accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum FormatArg {
    /// Bare value on one line
    Plain,
    /// Human-readable sentence
    Sentence,
    /// One JSON object
    Json,
    /// Write $GITHUB_OUTPUT and print the bare value
    Gha,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Sentence => OutputFormat::Sentence,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Gha => OutputFormat::Gha,
        }
    }
}

#[derive(clap::Args)]
struct FindChannelArgs {
    /// Team name to look up
    #[arg(long, env = "TEAM")]
    team: Option<String>,

    /// Mapping file with one `team:channel` pair per line
    #[arg(long, env = "TEAMROUTE_MAPPING_FILE", default_value = DEFAULT_MAPPING_FILE)]
    mapping_file: String,

    /// Skip malformed mapping lines instead of failing
    #[arg(long, env = "TEAMROUTE_LENIENT")]
    lenient: bool,

    /// Treat a missing mapping file as "team not found"
    #[arg(long, env = "TEAMROUTE_ALLOW_MISSING")]
    allow_missing: bool,

    /// Output format
    #[arg(long, env = "TEAMROUTE_OUTPUT_FORMAT", value_enum, default_value = "plain")]
    format: FormatArg,
}

#[derive(clap::Args)]
struct FindTeamArgs {
    /// Repository identifier; the segment after the last '/' is searched
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Directory for timestamped log records
    #[arg(long, env = "TEAMROUTE_LOG_DIR", default_value = DEFAULT_LOG_DIR)]
    log_dir: String,

    /// Output format (sentence prints the same line as plain)
    #[arg(long, env = "TEAMROUTE_OUTPUT_FORMAT", value_enum, default_value = "plain")]
    format: FormatArg,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::FindChannel(args) => run_find_channel(args),
        Commands::FindTeam(args) => run_find_team(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout stays a single capturable value
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Filter empty string from Option (env vars may produce "" for empty values)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn run_find_channel(args: FindChannelArgs) -> anyhow::Result<()> {
    let config = LookupConfig {
        team: clean_opt(&args.team).map(Cow::Borrowed),
        mapping_file: Cow::Borrowed(&args.mapping_file),
        parse_mode: if args.lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        },
        missing_file: if args.allow_missing {
            MissingFile::NotFound
        } else {
            MissingFile::Fail
        },
    };

    let lookup = teamroute_core::find_channel(&config)
        .with_context(|| format!("channel lookup in '{}' failed", args.mapping_file))?;

    let report = ChannelReport {
        team: config.team.as_deref().unwrap_or_default(),
        lookup: &lookup,
    };
    let format = OutputFormat::from(args.format);

    if format == OutputFormat::Gha {
        write_gha_outputs(&report.gha_outputs());
    }
    print_line(&report.render(format)?)
}

fn run_find_team(args: FindTeamArgs) -> anyhow::Result<()> {
    let config = ExtractConfig {
        repository: clean_opt(&args.repository).map(Cow::Borrowed),
    };
    let writer = LogDirWriter::new(&args.log_dir);
    let now = chrono::Local::now().naive_local();

    let report =
        teamroute_core::find_team(&config, &writer, now).context("team extraction failed")?;
    let format = OutputFormat::from(args.format);

    if format == OutputFormat::Gha {
        write_gha_outputs(&report.gha_outputs());
    }
    print_line(&report.render(format)?)
}

/// Append step outputs to $GITHUB_OUTPUT; stdout still carries the value
fn write_gha_outputs(outputs: &[(&str, String)]) {
    let output_file = match std::env::var("GITHUB_OUTPUT") {
        Ok(f) if !f.is_empty() => f,
        _ => {
            tracing::warn!("GITHUB_OUTPUT not set, writing to stdout only");
            return;
        }
    };

    match gha::append_outputs(Path::new(&output_file), outputs) {
        Ok(()) => tracing::debug!(path = %output_file, count = outputs.len(), "wrote step outputs"),
        Err(e) => tracing::warn!(error = %e, "failed to write step outputs"),
    }
}

fn print_line(line: &str) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    writeln!(lock, "{line}").context("failed to write to stdout")?;
    Ok(())
}
