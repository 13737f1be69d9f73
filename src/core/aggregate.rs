//! Folds the usage fragments of the API payloads into per-type totals.
//!
//! Both accumulators are built from an iterator with [`FromIterator`], and nothing escapes them
//! until the fold completes.

use std::collections::{BTreeMap, btree_map::Entry};

use crate::core::{
    energy_type::EnergyType,
    usage::{EnergyUsage, PeriodicEnergyUsage},
};

/// One [`PeriodicEnergyUsage`] per energy type, each holding one entry per period.
#[must_use]
#[derive(Default)]
pub struct PeriodicAccumulator(BTreeMap<EnergyType, PeriodicEnergyUsage>);

impl PeriodicAccumulator {
    pub fn with(mut self, usage: EnergyUsage) -> Self {
        self.0
            .entry(usage.energy_type)
            .or_insert_with(|| PeriodicEnergyUsage::new(usage.energy_type))
            .push(usage);
        self
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<PeriodicEnergyUsage> {
        self.0.into_values().collect()
    }
}

impl FromIterator<EnergyUsage> for PeriodicAccumulator {
    fn from_iter<T: IntoIterator<Item = EnergyUsage>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

/// Single running total per energy type over a whole requested range.
#[must_use]
#[derive(Default)]
pub struct HistoricAccumulator(BTreeMap<EnergyType, EnergyUsage>);

impl HistoricAccumulator {
    pub fn with(mut self, usage: EnergyUsage) -> Self {
        match self.0.entry(usage.energy_type) {
            Entry::Vacant(entry) => {
                entry.insert(usage);
            }
            Entry::Occupied(mut entry) => {
                let total = entry.get().merge(usage);
                entry.insert(total);
            }
        }
        self
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<EnergyUsage> {
        self.0.into_values().collect()
    }
}

impl FromIterator<EnergyUsage> for HistoricAccumulator {
    fn from_iter<T: IntoIterator<Item = EnergyUsage>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}
