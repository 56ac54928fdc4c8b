//! src/main.rs
use clap::Parser;
use rowtally::configuration::get_configuration;
use rowtally::job::{CountJob, JobOptions, SinkTarget};
use rowtally::telemetry::init_tracing;
use std::process::ExitCode;

/// Scan a table of rows and aggregate per-key counts into a destination
/// table or a text file.
#[derive(Debug, Parser)]
#[command(name = "rowtally", version, about)]
struct Cli {
    /// Table to read from (must exist)
    #[arg(short = 't', long = "inputTable", value_name = "table-name")]
    input_table: String,

    /// Table to write to (must exist), or an output path with `--sink text`
    #[arg(short = 'o', long = "outputTable", value_name = "table-or-path")]
    output_table: String,

    /// Extraction policy to run
    #[arg(short = 'e', long, default_value = "word-match")]
    extractor: String,

    /// Where totals are written
    #[arg(long, value_enum, default_value = "table")]
    sink: SinkArg,

    /// Switch on DEBUG log level
    #[arg(short = 'd', long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum SinkArg {
    Table,
    Text,
}

impl From<SinkArg> for SinkTarget {
    fn from(arg: SinkArg) -> Self {
        match arg {
            SinkArg::Table => SinkTarget::Table,
            SinkArg::Text => SinkTarget::Text,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_directive = if cli.debug { "debug" } else { "info" };
    if let Err(err) = init_tracing(default_directive) {
        eprintln!("Failed to initialise tracing: {err}");
        return ExitCode::FAILURE;
    }

    let settings = match get_configuration() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(error = %err, "Failed to read configuration");
            return ExitCode::FAILURE;
        }
    };

    let options = JobOptions {
        input_table: cli.input_table,
        output: cli.output_table,
        extractor: cli.extractor,
        sink: cli.sink.into(),
    };

    match CountJob::run(&options, &settings).await {
        Ok(report) => {
            tracing::info!(
                rows = report.counters.rows,
                valid = report.counters.valid,
                error = report.counters.error,
                distinct_keys = report.distinct_keys,
                "rowtally finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
