//! src/registry.rs
use crate::extractors::RowExtractor;
use std::sync::Arc;

/// A named extraction policy, discoverable at runtime. Policies register
/// themselves at link time via `register_extractor!`, so one pipeline engine
/// serves every job variant without per-variant wiring.
pub struct ExtractorRegistration {
    pub name: &'static str,
    pub factory: fn() -> Arc<dyn RowExtractor>,
}

inventory::collect!(ExtractorRegistration);

// Get an extraction policy by name
pub fn get_extractor(name: &str) -> Result<Arc<dyn RowExtractor>, String> {
    inventory::iter::<ExtractorRegistration>()
        .find(|reg| reg.name == name)
        .map(|reg| (reg.factory)())
        .ok_or_else(|| {
            format!(
                "Extractor '{}' not found (known: {})",
                name,
                list_extractors().join(", ")
            )
        })
}

// List all registered extraction policies
pub fn list_extractors() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = inventory::iter::<ExtractorRegistration>()
        .map(|reg| reg.name)
        .collect();
    names.sort_unstable();
    names
}

#[macro_export]
macro_rules! register_extractor {
    ($name:expr, $factory:expr) => {
        inventory::submit! {
            $crate::registry::ExtractorRegistration {
                name: $name,
                factory: $factory,
            }
        }
    };
}
