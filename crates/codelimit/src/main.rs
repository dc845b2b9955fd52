use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use codelimit::{init_tracing, run_check, run_scan, ScanOptions};

#[derive(Parser)]
#[command(name = "codelimit")]
#[command(about = "Find functions that are too long to maintain", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Measure every source file under a directory
    Scan {
        /// Directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Glob of paths to leave out (repeatable)
        #[arg(long = "exclude", value_name = "GLOB")]
        excludes: Vec<String>,
        /// Ignore and do not update the cached report
        #[arg(long)]
        no_cache: bool,
    },
    /// Fail if any of the given files has an unmaintainable function
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    let outcome = match cli.command {
        Command::Scan {
            path,
            excludes,
            no_cache,
        } => {
            let options = ScanOptions {
                root: path,
                excludes,
                no_cache,
            };
            run_scan(&options, &mut stdout).map(|_| true)
        }
        Command::Check { files } => run_check(&files, &mut stdout),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
