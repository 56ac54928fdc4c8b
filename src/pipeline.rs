//! src/pipeline.rs
use crate::aggregate::{reduce_group, shuffle, Combiner};
use crate::counters::CounterDelta;
use crate::error::JobError;
use crate::executors::{Executor, MapUnit, UnitOutput};
use crate::extractors::RowExtractor;
use crate::row::{Emission, Row};
use crate::sinks::ResultSink;
use std::sync::Arc;

/// What one pipeline run observed: merged counters and the number of
/// distinct group keys reduced.
#[derive(Clone, Copy, Debug)]
pub struct PipelineReport {
    pub counters: CounterDelta,
    pub distinct_keys: usize,
}

/// One engine for every counting job: shard the input, run extract/combine
/// per shard, group by key, sum per key, hand totals to the sink.
///
/// The extraction policy and the sink are the only variant-specific pieces;
/// everything between them is shared machinery.
pub struct CountPipeline {
    extractor: Arc<dyn RowExtractor>,
    combine: bool,
    shards: usize,
}

impl CountPipeline {
    pub fn new(extractor: Arc<dyn RowExtractor>, shards: usize) -> Self {
        CountPipeline {
            extractor,
            combine: true,
            shards: shards.max(1),
        }
    }

    /// Disables worker-local pre-aggregation. Totals never change either
    /// way; the shuffle just carries more values.
    pub fn without_combiner(mut self) -> Self {
        self.combine = false;
        self
    }

    #[tracing::instrument(name = "Run count pipeline", skip_all, fields(rows = rows.len(), shards = self.shards))]
    pub async fn run(
        &self,
        rows: Vec<Row>,
        executor: &dyn Executor,
        sink: &mut dyn ResultSink,
    ) -> Result<PipelineReport, JobError> {
        let units = self.map_units(rows);
        let outputs = executor.execute(units).await?;

        // Barrier reached: every shard's output is in hand.
        let mut counters = CounterDelta::default();
        let mut shard_emissions = Vec::with_capacity(outputs.len());
        for output in outputs {
            counters.merge(&output.counters);
            shard_emissions.push(output.emissions);
        }

        let grouped = shuffle(shard_emissions);
        let distinct_keys = grouped.len();
        for (key, values) in grouped {
            let total = reduce_group(&values);
            sink.write(&key, total).map_err(JobError::SinkWrite)?;
        }
        sink.flush().map_err(JobError::SinkWrite)?;

        tracing::info!(
            rows = counters.rows,
            valid = counters.valid,
            error = counters.error,
            distinct_keys,
            "pipeline complete"
        );
        Ok(PipelineReport {
            counters,
            distinct_keys,
        })
    }

    fn map_units(&self, mut rows: Vec<Row>) -> Vec<MapUnit> {
        let shard_size = rows.len().div_ceil(self.shards).max(1);
        let mut units: Vec<MapUnit> = Vec::new();
        while !rows.is_empty() {
            let rest = rows.split_off(shard_size.min(rows.len()));
            let shard = std::mem::replace(&mut rows, rest);
            let extractor = Arc::clone(&self.extractor);
            let combine = self.combine;
            units.push(Box::new(move || {
                map_shard(extractor.as_ref(), &shard, combine)
            }));
        }
        units
    }
}

/// Maps one shard: exactly one ROWS tick per row, then VALID with the row's
/// emissions kept or ERROR with them dropped.
fn map_shard(extractor: &dyn RowExtractor, shard: &[Row], combine: bool) -> UnitOutput {
    let mut counters = CounterDelta::default();
    let mut combiner = Combiner::new();
    let mut raw: Vec<Emission> = Vec::new();
    for row in shard {
        tracing::debug!(row_key = row.key(), "mapping row");
        match extractor.extract(row) {
            Ok(emissions) => {
                counters.record_valid();
                if combine {
                    for emission in emissions {
                        combiner.fold(emission);
                    }
                } else {
                    raw.extend(emissions);
                }
            }
            Err(err) => {
                counters.record_error();
                tracing::warn!(row_key = row.key(), error = %err, "row skipped");
            }
        }
    }
    let emissions = if combine { combiner.into_emissions() } else { raw };
    UnitOutput { emissions, counters }
}
