//! Standalone CLI tool: maximum digit-sum over fixed-length windows.

use clap::Parser;
use wdsum_core::{OffsetStrategy, WindowOptions};

#[derive(Parser)]
#[command(
    name = "wdsum",
    about = "Print the maximum digit-sum over all fixed-length windows of a digit string"
)]
struct Args {
    /// The digit string to scan
    digits: String,

    /// Window length. Defaults to ceil(N/2) for an N-digit input
    #[arg(short, long, allow_hyphen_values = true)]
    window: Option<i64>,

    /// Offset enumeration: counted or filtered
    #[arg(long, default_value = "counted", value_parser = parse_strategy)]
    strategy: OffsetStrategy,

    /// Sum windows on the Rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Print the full report as JSON instead of the bare maximum
    #[arg(long)]
    json: bool,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_strategy(s: &str) -> Result<OffsetStrategy, String> {
    s.parse()
}

fn run(args: &Args) -> Result<String, String> {
    let options = WindowOptions {
        strategy: args.strategy,
        parallel: args.parallel,
    };
    let report = wdsum_core::max_window_digit_sum_report(&args.digits, args.window, options)
        .map_err(|e| e.to_string())?;

    if args.json {
        serde_json::to_string_pretty(&report).map_err(|e| format!("JSON serialization failed: {e}"))
    } else {
        Ok(report.max_sum.to_string())
    }
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    match run(&args) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            log::debug!("rejected input {:?}: {e}", args.digits);
            eprintln!("wdsum: {e}");
            std::process::exit(1);
        }
    }
}
