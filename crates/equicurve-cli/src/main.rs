mod commands;
mod infra;
mod obs;
mod output;

use clap::{Parser, Subcommand};
use commands::Command;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "equicurve")]
#[command(about = "Equicurve CLI", version, arg_required_else_help = true)]
#[command(
    after_help = "Examples:\n  equicurve simulate --config configs/sample.toml --out runs/\n  equicurve validate --config configs/sample.toml --strict\n  equicurve report --input runs/<run_id>/\n  equicurve bench --observations 1000000 --json\n"
)]
struct Cli {
    /// Log filter when EQUICURVE_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    /// Log output format: text or json.
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
    /// Expose Prometheus metrics on host:port (requires feature `prometheus`).
    #[arg(long, global = true)]
    metrics_addr: Option<String>,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    Simulate {
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    Validate {
        #[arg(long)]
        config: PathBuf,
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    Report {
        #[arg(long)]
        input: PathBuf,
    },
    Bench {
        /// Number of synthetic observations to fold (default: 1_000_000).
        #[arg(long, default_value_t = 1_000_000)]
        observations: usize,
        /// Print a single JSON line instead of human output.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() {
    output::print_banner();
    let cli = Cli::parse();

    if let Err(err) = obs::init_tracing(&cli.log_level, &cli.log_format) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
    if let Err(err) = obs::init_metrics(cli.metrics_addr.as_deref()) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }

    let command = match cli.command {
        CliCommand::Simulate { config, out } => Command::Simulate { config, out },
        CliCommand::Validate { config, strict } => Command::Validate { config, strict },
        CliCommand::Report { input } => Command::Report { input },
        CliCommand::Bench { observations, json } => Command::Bench { observations, json },
    };

    if let Err(err) = commands::run(command) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
