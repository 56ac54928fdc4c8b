//! src/aggregate.rs
use crate::row::Emission;
use std::collections::{BTreeMap, HashMap};

/// Worker-local pre-aggregation.
///
/// Folding emissions into per-key partial sums before they cross the shuffle
/// boundary shrinks the data volume without changing final totals: integer
/// addition is associative and commutative, so applying this zero, one, or
/// many times is invisible to the reducer.
#[derive(Debug, Default)]
pub struct Combiner {
    partials: HashMap<String, u64>,
}

impl Combiner {
    pub fn new() -> Self {
        Combiner::default()
    }

    pub fn fold(&mut self, emission: Emission) {
        *self.partials.entry(emission.key).or_insert(0) += emission.increment;
    }

    pub fn into_emissions(self) -> Vec<Emission> {
        self.partials
            .into_iter()
            .map(|(key, sum)| Emission::new(key, sum))
            .collect()
    }
}

/// Groups emissions from every map unit by key, keys ascending.
///
/// Reduce relies on the grouping being complete: each key appears exactly
/// once, carrying every value emitted for it anywhere in the job.
pub fn shuffle(shards: impl IntoIterator<Item = Vec<Emission>>) -> BTreeMap<String, Vec<u64>> {
    let mut grouped: BTreeMap<String, Vec<u64>> = BTreeMap::new();
    for shard in shards {
        for emission in shard {
            grouped.entry(emission.key).or_default().push(emission.increment);
        }
    }
    grouped
}

/// The authoritative per-key sum. Delivery order of values is irrelevant.
pub fn reduce_group(values: &[u64]) -> u64 {
    values.iter().sum()
}
