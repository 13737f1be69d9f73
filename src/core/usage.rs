use std::fmt::{Display, Formatter};

use bon::Builder;
use tracing::warn;

use crate::{
    core::{
        energy_type::EnergyType,
        time_period::TimePeriod,
        unit::{EnergyUnit, PowerUnit},
    },
    quantity::{cost::Pence, energy::KilowattHours, power::Watts, sum_present},
};

/// Snapshot of the current power draw.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LivePowerUsage {
    pub energy_type: EnergyType,
    pub power: Watts,
}

impl LivePowerUsage {
    pub const fn unit(&self) -> PowerUnit {
        PowerUnit::Watt
    }
}

impl Display for LivePowerUsage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.0}", self.energy_type, self.power)
    }
}

/// Energy used over a period of time.
///
/// The amount and the cost are independent: an API section may report only one of them.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Builder)]
pub struct EnergyUsage {
    pub period: TimePeriod,
    pub energy_type: EnergyType,
    pub amount: Option<KilowattHours>,
    pub cost: Option<Pence>,
}

impl EnergyUsage {
    pub const fn unit(&self) -> EnergyUnit {
        EnergyUnit::KilowattHour
    }

    /// Add up another usage of the same type and period.
    ///
    /// A field stays absent only when neither side has it.
    pub fn merge(self, other: Self) -> Self {
        debug_assert_eq!(self.energy_type, other.energy_type);
        debug_assert_eq!(self.period, other.period);
        Self {
            amount: sum_present(self.amount, other.amount),
            cost: sum_present(self.cost, other.cost),
            ..self
        }
    }
}

impl Display for EnergyUsage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.amount {
            Some(amount) => write!(f, "{}: {amount}", self.period),
            None => write!(f, "{}: no usage", self.period),
        }
    }
}

/// Vendor-reported usage of one energy type, normally one entry per period.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::IntoIterator)]
pub struct PeriodicEnergyUsage {
    energy_type: EnergyType,

    #[into_iterator(owned, ref)]
    usage: Vec<EnergyUsage>,
}

impl PeriodicEnergyUsage {
    pub const fn new(energy_type: EnergyType) -> Self {
        Self { energy_type, usage: Vec::new() }
    }

    #[must_use]
    pub const fn energy_type(&self) -> EnergyType {
        self.energy_type
    }

    /// First entry for the period.
    #[must_use]
    pub fn get(&self, period: TimePeriod) -> Option<&EnergyUsage> {
        self.usage.iter().find(|usage| usage.period == period)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.usage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }

    /// Append the usage.
    ///
    /// Payload sections never report the same period twice, so nothing is merged here.
    /// A repeated period is only logged, and [`PeriodicEnergyUsage::get`] keeps returning the first entry.
    pub fn push(&mut self, usage: EnergyUsage) {
        debug_assert_eq!(usage.energy_type, self.energy_type);
        if self.get(usage.period).is_some() {
            warn!(energy_type = ?usage.energy_type, period = ?usage.period, "repeated period");
        }
        self.usage.push(usage);
    }
}

impl Extend<EnergyUsage> for PeriodicEnergyUsage {
    fn extend<T: IntoIterator<Item = EnergyUsage>>(&mut self, iter: T) {
        for usage in iter {
            self.push(usage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(period: TimePeriod, amount: Option<f64>, cost: Option<f64>) -> EnergyUsage {
        EnergyUsage::builder()
            .period(period)
            .energy_type(EnergyType::Electricity)
            .maybe_amount(amount.map(KilowattHours))
            .maybe_cost(cost.map(Pence))
            .build()
    }

    #[test]
    fn test_merge_sums_present_fields() {
        let total = usage(TimePeriod::Day, Some(3.0), None).merge(usage(TimePeriod::Day, Some(2.0), None));
        assert_eq!(total.amount, Some(KilowattHours(5.0)));
        assert_eq!(total.cost, None);
    }

    #[test]
    fn test_merge_keeps_one_sided_fields() {
        let total = usage(TimePeriod::Day, Some(1.5), None).merge(usage(TimePeriod::Day, None, Some(40.0)));
        assert_eq!(total.amount, Some(KilowattHours(1.5)));
        assert_eq!(total.cost, Some(Pence(40.0)));
    }

    #[test]
    fn test_periodic_get() {
        let mut periodic = PeriodicEnergyUsage::new(EnergyType::Electricity);
        periodic.extend([
            usage(TimePeriod::Forever, Some(1000.0), None),
            usage(TimePeriod::Unbilled, None, Some(2500.0)),
        ]);
        assert_eq!(periodic.len(), 2);
        assert_eq!(periodic.get(TimePeriod::Forever).and_then(|usage| usage.amount), Some(KilowattHours(1000.0)));
        assert_eq!(periodic.get(TimePeriod::Unbilled).and_then(|usage| usage.cost), Some(Pence(2500.0)));
        assert_eq!(periodic.get(TimePeriod::Day), None);
    }

    #[test]
    fn test_periodic_push_same_period_appends() {
        let mut periodic = PeriodicEnergyUsage::new(EnergyType::Electricity);
        periodic.push(usage(TimePeriod::Day, Some(1.0), None));
        periodic.push(usage(TimePeriod::Day, Some(2.0), None));
        assert_eq!(periodic.len(), 2);
        assert_eq!(periodic.get(TimePeriod::Day).and_then(|usage| usage.amount), Some(KilowattHours(1.0)));
    }

    #[test]
    fn test_periodic_into_iter_keeps_order() {
        let mut periodic = PeriodicEnergyUsage::new(EnergyType::Electricity);
        periodic.extend([usage(TimePeriod::Month, None, None), usage(TimePeriod::Day, None, None)]);
        let periods: Vec<_> = periodic.into_iter().map(|usage| usage.period).collect();
        assert_eq!(periods, [TimePeriod::Month, TimePeriod::Day]);
    }

    #[test]
    fn test_display() {
        let live = LivePowerUsage { energy_type: EnergyType::Gas, power: Watts(120.0) };
        assert_eq!(live.to_string(), "Gas: 120 W");
        assert_eq!(live.unit(), PowerUnit::Watt);
        assert_eq!(usage(TimePeriod::Week, Some(1.5), None).to_string(), "Week: 1.5 kWh");
        assert_eq!(usage(TimePeriod::Week, None, Some(1.0)).to_string(), "Week: no usage");
    }
}
