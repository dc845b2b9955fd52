//! The `codelimit` command line tool.
//!
//! `codelimit scan` measures a source tree and keeps a report in
//! `.codelimit_cache/` so unchanged files are not measured again.
//! `codelimit check` measures individual files and fails when one of them
//! has an unmaintainable function, for use in pre-commit hooks.

mod commands;
mod error;
mod render;

pub use commands::{run_check, run_scan, ScanOptions};
pub use error::CliError;
pub use render::{summary_table, unit_line, worst_units};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`, writing to
/// stderr so it never mixes with command output.
///
/// Does nothing when `RUST_LOG` is unset or unparsable; safe to call more
/// than once. Useful targets:
/// - `cl_scan=debug`: one event per file, cache hits included
/// - `cl_scan=info`: skipped and unclassified files, the scan summary
/// - `cl_scope=debug`: extractor registry setup
/// - `cl_gsm=trace`: automaton sizes of each compiled pattern
/// - `codelimit=debug`: unusable cached reports, non-source files given
///   to `check`
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::debug!("still usable after repeated initialisation");
    }
}
