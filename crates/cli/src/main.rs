use anyhow::Context;
use clap::Parser;
use dnstap_quiet_domain::{CliOverrides, NameDecodeFailurePolicy};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use tracing::{debug, info};

mod bootstrap;
mod di;
mod pipeline;

#[derive(Parser)]
#[command(name = "dnstap-quiet")]
#[command(version)]
#[command(about = "Print dnstap Frame Streams data as one compact line per DNS message")]
struct Cli {
    /// Frame Streams file to read ("-" or absent for stdin)
    #[arg(short = 'r', long, value_name = "FILE")]
    read: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// IANA time zone used for timestamps (default UTC)
    #[arg(short = 'z', long, value_name = "ZONE")]
    time_zone: Option<String>,

    /// Print only the X marker when a query name cannot be decoded
    #[arg(long)]
    marker_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        time_zone: cli.time_zone.clone(),
        name_decode_failure: cli
            .marker_only
            .then_some(NameDecodeFailurePolicy::MarkerOnly),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    debug!(
        time_zone = %config.formatter.time_zone,
        name_decode_failure = ?config.formatter.name_decode_failure,
        "Configuration loaded"
    );

    let use_cases = di::UseCases::new(&config)?;

    let stdout = std::io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    let stats = match cli.read.as_deref() {
        None | Some("-") => pipeline::convert_stream(
            std::io::stdin().lock(),
            &mut output,
            &use_cases.convert_frame,
        )?,
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            pipeline::convert_stream(BufReader::new(file), &mut output, &use_cases.convert_frame)?
        }
    };

    info!(
        frames = stats.frames,
        lines = stats.lines,
        failures = stats.failures,
        "Conversion complete"
    );
    Ok(())
}
