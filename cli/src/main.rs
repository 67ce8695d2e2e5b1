use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use recover_core::{RecoveryResult, Report, ShareDocument};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Recover a threshold secret from a share document, flagging tampered shares.
#[derive(Debug, Parser)]
#[command(name = "recover-secret", version)]
struct Args {
    /// Share document to read
    #[arg(default_value = "input.json")]
    input: PathBuf,

    /// Override the document's threshold `k`
    #[arg(short = 'k', long)]
    threshold: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logger(verbose: u8) {
    let cfg = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    // stdout carries only the result
    if TermLogger::init(
        level_filter(verbose),
        cfg,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialized");
    }
}

fn run(args: &Args) -> RecoveryResult<String> {
    let doc = ShareDocument::from_path(&args.input)?;
    let threshold = args.threshold.unwrap_or(doc.threshold());
    info!(
        "Loaded {} shares from {}, threshold {threshold}",
        doc.shares().len(),
        args.input.display()
    );

    let recovery = doc.recover_with_threshold(threshold)?;
    let report = Report::new(&recovery);
    if args.json {
        report.to_json()
    } else {
        Ok(report.to_string())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
