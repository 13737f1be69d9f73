use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::core::label::{Labelled, UnknownLabel};

/// Unit of power.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
}

impl Labelled for PowerUnit {
    const KIND: &'static str = "power unit";
    const ALL: &'static [Self] = &[Self::Watt, Self::Kilowatt];

    fn key(self) -> &'static str {
        match self {
            Self::Watt => "WATT",
            Self::Kilowatt => "KILOWATT",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Watt => "W",
            Self::Kilowatt => "kW",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Watt => "Watts",
            Self::Kilowatt => "Kilowatts",
        }
    }
}

/// Unit of energy, that is power used over time.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum EnergyUnit {
    WattHour,
    KilowattHour,
}

impl Labelled for EnergyUnit {
    const KIND: &'static str = "energy unit";
    const ALL: &'static [Self] = &[Self::WattHour, Self::KilowattHour];

    fn key(self) -> &'static str {
        match self {
            Self::WattHour => "WATT_HOUR",
            Self::KilowattHour => "KILOWATT_HOUR",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::WattHour => "Wh",
            Self::KilowattHour => "kWh",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::WattHour => "Watt Hours",
            Self::KilowattHour => "Kilowatt Hours",
        }
    }
}

impl FromStr for PowerUnit {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl FromStr for EnergyUnit {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl Display for PowerUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_label(f)
    }
}

impl Display for EnergyUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_label(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_and_descriptions() {
        assert_eq!(PowerUnit::Watt.label(), "W");
        assert_eq!(PowerUnit::Kilowatt.description(), "Kilowatts");
        assert_eq!(EnergyUnit::KilowattHour.to_string(), "kWh");
        assert_eq!(EnergyUnit::WattHour.description(), "Watt Hours");
    }

    #[test]
    fn test_lookup_by_symbol() -> Result<(), UnknownLabel> {
        assert_eq!("kwh".parse::<EnergyUnit>()?, EnergyUnit::KilowattHour);
        assert_eq!("Wh".parse::<EnergyUnit>()?, EnergyUnit::WattHour);
        assert_eq!("w".parse::<PowerUnit>()?, PowerUnit::Watt);
        assert_eq!("kilowatt".parse::<PowerUnit>()?, PowerUnit::Kilowatt);
        Ok(())
    }
}
