//! src/executors/mod.rs
use crate::counters::CounterDelta;
use crate::row::Emission;
use async_trait::async_trait;

/// Output of one map-phase work unit: the unit's emissions (raw or
/// pre-aggregated) plus the counter delta it accumulated.
#[derive(Debug, Default)]
pub struct UnitOutput {
    pub emissions: Vec<Emission>,
    pub counters: CounterDelta,
}

/// One self-contained unit of map-phase work over a shard of input rows.
pub type MapUnit = Box<dyn FnOnce() -> UnitOutput + Send + 'static>;

/// Drives map-phase units to completion.
///
/// Returning implies the synchronization barrier: every unit's output is in
/// hand before the caller starts grouping by key. Units share no mutable
/// state, so any scheduling substrate can run them in any order or
/// interleaving.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, units: Vec<MapUnit>) -> Result<Vec<UnitOutput>, anyhow::Error>;
}

mod parallel;
pub use parallel::ParallelExecutor;

mod sequential;
pub use sequential::SequentialExecutor;
