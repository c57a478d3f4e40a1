//! Name-keyed registry of algorithm units.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use algolab_core::errors::RegistryError;
use algolab_core::AlgorithmFamily;

use crate::contract::{AnyAlgorithm, GraphAlgorithm, SearchAlgorithm, SortAlgorithm};

/// Holds every registered unit under its unique name.
///
/// Registration validates the declared complexity profile and rejects
/// duplicates; lookups by family return units sorted by name so suite
/// run order is deterministic.
#[derive(Default)]
pub struct Registry {
    units: FxHashMap<String, AnyAlgorithm>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sorting unit.
    pub fn register_sort(&mut self, unit: Arc<dyn SortAlgorithm>) -> Result<(), RegistryError> {
        self.insert(AnyAlgorithm::Sort(unit))
    }

    /// Register a searching unit.
    pub fn register_search(
        &mut self,
        unit: Arc<dyn SearchAlgorithm>,
    ) -> Result<(), RegistryError> {
        self.insert(AnyAlgorithm::Search(unit))
    }

    /// Register a graph unit.
    pub fn register_graph(&mut self, unit: Arc<dyn GraphAlgorithm>) -> Result<(), RegistryError> {
        self.insert(AnyAlgorithm::Graph(unit))
    }

    fn insert(&mut self, unit: AnyAlgorithm) -> Result<(), RegistryError> {
        let meta = unit.meta();
        if meta.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if !meta.profile.is_well_formed() {
            return Err(RegistryError::InvalidProfile { name: meta.name });
        }
        if self.units.contains_key(&meta.name) {
            return Err(RegistryError::DuplicateName(meta.name));
        }
        tracing::debug!(name = %meta.name, family = %meta.family, "registered algorithm unit");
        self.units.insert(meta.name, unit);
        Ok(())
    }

    /// Look up a unit by name.
    pub fn get(&self, name: &str) -> Result<&AnyAlgorithm, RegistryError> {
        self.units
            .get(name)
            .ok_or_else(|| RegistryError::UnknownAlgorithm(name.to_string()))
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.units.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All units of one family, sorted by name for deterministic run order.
    pub fn family(&self, family: AlgorithmFamily) -> Vec<&AnyAlgorithm> {
        let mut units: Vec<&AnyAlgorithm> = self
            .units
            .values()
            .filter(|u| u.family() == family)
            .collect();
        units.sort_unstable_by_key(|u| u.name());
        units
    }

    /// Like [`family`](Self::family) but errs when the family is empty,
    /// for suites that cannot run on nothing.
    pub fn family_non_empty(
        &self,
        family: AlgorithmFamily,
    ) -> Result<Vec<&AnyAlgorithm>, RegistryError> {
        let units = self.family(family);
        if units.is_empty() {
            return Err(RegistryError::EmptyFamily(family));
        }
        Ok(units)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
