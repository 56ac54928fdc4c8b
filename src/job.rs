//! src/job.rs
use crate::configuration::Settings;
use crate::counters::CounterDelta;
use crate::error::JobError;
use crate::executors::{Executor, ParallelExecutor, SequentialExecutor};
use crate::pipeline::CountPipeline;
use crate::registry;
use crate::sinks::{ResultSink, TableSink, TextFileSink};
use crate::storage::TableStore;
use uuid::Uuid;

/// Which destination a job's totals land in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkTarget {
    /// `data:count` cell updates on a pre-existing destination table.
    Table,
    /// `key<TAB>total` lines in a single output file.
    Text,
}

/// Everything the command line contributes to one job run.
#[derive(Clone, Debug)]
pub struct JobOptions {
    pub input_table: String,
    /// Destination table name, or an output path when `sink` is `Text`.
    pub output: String,
    pub extractor: String,
    pub sink: SinkTarget,
}

/// What a completed job reports. Observational only: counters are not part
/// of the output data contract.
#[derive(Clone, Debug, serde::Serialize)]
pub struct JobReport {
    pub job_id: Uuid,
    pub counters: CounterDelta,
    pub distinct_keys: usize,
}

pub struct CountJob;

impl CountJob {
    /// Assembles extraction policy, pipeline, store and sink, runs the job
    /// to completion, and reports merged counters.
    ///
    /// Configuration problems (unknown policy, missing tables, unwritable
    /// output) fail here before any row is processed.
    #[tracing::instrument(name = "Run count job", skip_all, fields(input = %options.input_table, output = %options.output, extractor = %options.extractor))]
    pub async fn run(options: &JobOptions, settings: &Settings) -> Result<JobReport, JobError> {
        let job_id = Uuid::new_v4();
        let extractor =
            registry::get_extractor(&options.extractor).map_err(JobError::Configuration)?;

        let store = TableStore::open(&settings.storage.root)?;
        if !store.table_exists(&options.input_table) {
            return Err(JobError::Configuration(format!(
                "input table {} does not exist",
                options.input_table
            )));
        }

        let mut sink: Box<dyn ResultSink> = match options.sink {
            SinkTarget::Table => {
                if !store.table_exists(&options.output) {
                    return Err(JobError::Configuration(format!(
                        "output table {} does not exist; create it before running the job",
                        options.output
                    )));
                }
                Box::new(TableSink::new(store.clone(), &options.output))
            }
            SinkTarget::Text => Box::new(TextFileSink::create(&options.output).map_err(|err| {
                JobError::Configuration(format!(
                    "output path {} is not writable: {err:#}",
                    options.output
                ))
            })?),
        };

        let rows = store.scan(&options.input_table, &extractor.scan())?;

        let workers = usize::from(settings.cluster.workers);
        let pipeline = CountPipeline::new(extractor, workers);
        let executor: Box<dyn Executor> = if workers <= 1 {
            Box::new(SequentialExecutor)
        } else {
            Box::new(ParallelExecutor)
        };

        let report = pipeline.run(rows, executor.as_ref(), sink.as_mut()).await?;

        tracing::info!(
            job_id = %job_id,
            rows = report.counters.rows,
            valid = report.counters.valid,
            error = report.counters.error,
            distinct_keys = report.distinct_keys,
            "job complete"
        );
        Ok(JobReport {
            job_id,
            counters: report.counters,
            distinct_keys: report.distinct_keys,
        })
    }
}
