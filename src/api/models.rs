//! Payloads of the Geo Together API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use tracing::warn;

use crate::{
    api::session::SystemId,
    core::{
        date_range::DateRange,
        energy_type::EnergyType,
        time_period::TimePeriod,
        usage::{EnergyUsage, LivePowerUsage},
    },
    quantity::{cost::Pence, energy::KilowattHours, power::Watts},
};

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub identity: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
}

#[derive(Deserialize)]
pub struct SystemDetailsResponse {
    #[serde(rename = "systemDetails")]
    systems: Option<Vec<SystemDetails>>,
}

#[derive(Deserialize)]
struct SystemDetails {
    #[serde(rename = "systemId")]
    id: Option<SystemId>,

    name: Option<String>,
}

impl SystemDetailsResponse {
    /// Find the first system with the name, or just the first one when no name is given.
    ///
    /// Systems without an identifier or a name are never selected.
    pub fn find(self, name: Option<&str>) -> Option<SystemId> {
        let name = name.filter(|name| !name.is_empty());
        self.systems
            .into_iter()
            .flatten()
            .filter_map(|system| Some((system.id?, system.name?)))
            .find(|(_, system_name)| name.is_none_or(|name| name == system_name))
            .map(|(id, _)| id)
    }
}

#[derive(Deserialize)]
pub struct LiveDataResponse {
    power: Option<Vec<PowerReading>>,
}

/// Readings are independent: an incomplete or unrecognised one must not spoil the others.
#[serde_as]
#[derive(Deserialize)]
struct PowerReading {
    #[serde(rename = "type", default)]
    #[serde_as(deserialize_as = "serde_with::DefaultOnError")]
    energy_type: Option<EnergyType>,

    #[serde(default)]
    #[serde_as(deserialize_as = "serde_with::DefaultOnError")]
    watts: Option<Watts>,
}

impl LiveDataResponse {
    pub fn into_usage(self) -> Vec<LivePowerUsage> {
        self.power
            .into_iter()
            .flatten()
            .filter_map(|reading| match (reading.energy_type, reading.watts) {
                (Some(energy_type), Some(power)) => Some(LivePowerUsage { energy_type, power }),
                (energy_type, _) => {
                    warn!(?energy_type, "skipping the incomplete power reading");
                    None
                }
            })
            .collect()
    }
}

/// Vendor-computed totals, split into independent optional sections.
#[derive(Deserialize)]
pub struct PeriodicDataResponse {
    #[serde(rename = "totalConsumptionList")]
    total_consumption: Option<Vec<TotalConsumption>>,

    #[serde(rename = "billToDateList")]
    bill_to_date: Option<Vec<BillToDate>>,

    #[serde(rename = "currentCostsElec")]
    current_costs_electricity: Option<Vec<CurrentCost>>,

    #[serde(rename = "currentCostsGas")]
    current_costs_gas: Option<Vec<CurrentCost>>,
}

#[derive(Deserialize)]
struct TotalConsumption {
    #[serde(rename = "commodityType")]
    energy_type: EnergyType,

    #[serde(rename = "totalConsumption")]
    amount: Option<KilowattHours>,
}

#[derive(Deserialize)]
struct BillToDate {
    #[serde(rename = "commodityType")]
    energy_type: EnergyType,

    #[serde(rename = "billToDate")]
    cost: Option<Pence>,
}

#[derive(Deserialize)]
struct CurrentCost {
    #[serde(rename = "duration")]
    period: TimePeriod,

    #[serde(rename = "energyAmount")]
    amount: Option<KilowattHours>,

    #[serde(rename = "costAmount")]
    cost: Option<Pence>,
}

impl PeriodicDataResponse {
    /// Flatten all the present sections into usage entries.
    pub fn into_usage(self) -> impl Iterator<Item = EnergyUsage> {
        let total_consumption = self.total_consumption.into_iter().flatten().map(|total| {
            EnergyUsage::builder()
                .period(TimePeriod::Forever)
                .energy_type(total.energy_type)
                .maybe_amount(total.amount)
                .build()
        });
        let bill_to_date = self.bill_to_date.into_iter().flatten().map(|bill| {
            EnergyUsage::builder()
                .period(TimePeriod::Unbilled)
                .energy_type(bill.energy_type)
                .maybe_cost(bill.cost)
                .build()
        });
        let current_costs = [
            (EnergyType::Electricity, self.current_costs_electricity),
            (EnergyType::Gas, self.current_costs_gas),
        ]
        .into_iter()
        .flat_map(|(energy_type, costs)| {
            costs.into_iter().flatten().map(move |cost| {
                EnergyUsage::builder()
                    .period(cost.period)
                    .energy_type(energy_type)
                    .maybe_amount(cost.amount)
                    .maybe_cost(cost.cost)
                    .build()
            })
        });
        total_consumption.chain(bill_to_date).chain(current_costs)
    }
}

#[derive(Serialize)]
pub struct HistoricQuery {
    from: NaiveDate,
    to: NaiveDate,
}

impl From<DateRange> for HistoricQuery {
    fn from(range: DateRange) -> Self {
        Self { from: range.start, to: range.end }
    }
}

#[derive(Deserialize)]
pub struct HistoricDataResponse {
    #[serde(rename = "totalsList")]
    totals: Option<Vec<PeriodTotals>>,
}

#[derive(Deserialize)]
struct PeriodTotals {
    #[serde(rename = "commodityTotalsList")]
    commodity_totals: Option<Vec<CommodityTotal>>,
}

#[derive(Deserialize)]
struct CommodityTotal {
    #[serde(rename = "commodityType")]
    energy_type: EnergyType,

    #[serde(rename = "energyKWh")]
    amount: Option<KilowattHours>,

    #[serde(rename = "costPence")]
    cost: Option<Pence>,
}

impl HistoricDataResponse {
    /// Every commodity total of every sub-period, attributed to the requested period.
    pub fn into_usage(self, period: TimePeriod) -> impl Iterator<Item = EnergyUsage> {
        self.totals
            .into_iter()
            .flatten()
            .flat_map(|totals| totals.commodity_totals.into_iter().flatten())
            .map(move |total| {
                EnergyUsage::builder()
                    .period(period)
                    .energy_type(total.energy_type)
                    .maybe_amount(total.amount)
                    .maybe_cost(total.cost)
                    .build()
            })
    }
}
