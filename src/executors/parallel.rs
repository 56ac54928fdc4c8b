//! src/executors/parallel.rs
use crate::executors::{Executor, MapUnit, UnitOutput};
use anyhow::Context;
use async_trait::async_trait;

/// Fans units out over the tokio blocking pool, one task per unit, and joins
/// them all before returning.
pub struct ParallelExecutor;

#[async_trait]
impl Executor for ParallelExecutor {
    #[tracing::instrument(name = "Execute map units", skip_all, fields(units = units.len()))]
    async fn execute(&self, units: Vec<MapUnit>) -> Result<Vec<UnitOutput>, anyhow::Error> {
        let mut handles = Vec::with_capacity(units.len());
        for unit in units {
            handles.push(tokio::task::spawn_blocking(unit));
        }

        let mut outputs = Vec::with_capacity(handles.len());
        for handle in handles {
            let output = handle
                .await
                .context("A map unit panicked or was cancelled")?;
            outputs.push(output);
        }
        Ok(outputs)
    }
}
