//! src/executors/sequential.rs
use crate::executors::{Executor, MapUnit, UnitOutput};
use async_trait::async_trait;

/// Runs every unit inline on the calling task. The harness of choice for
/// tests and single-worker runs.
pub struct SequentialExecutor;

#[async_trait]
impl Executor for SequentialExecutor {
    async fn execute(&self, units: Vec<MapUnit>) -> Result<Vec<UnitOutput>, anyhow::Error> {
        Ok(units.into_iter().map(|unit| unit()).collect())
    }
}
