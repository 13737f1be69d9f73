use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::core::label::{Labelled, UnknownLabel};

/// Commodity being measured.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde_with::DeserializeFromStr,
)]
pub enum EnergyType {
    Electricity,
    Gas,
}

impl Labelled for EnergyType {
    const KIND: &'static str = "energy type";
    const ALL: &'static [Self] = &[Self::Electricity, Self::Gas];

    fn key(self) -> &'static str {
        match self {
            Self::Electricity => "ELECTRICITY",
            Self::Gas => "GAS_ENERGY",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Gas => "Gas",
        }
    }
}

impl FromStr for EnergyType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl Display for EnergyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_label(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_ok() -> Result<(), UnknownLabel> {
        assert_eq!("ELECTRICITY".parse::<EnergyType>()?, EnergyType::Electricity);
        assert_eq!("electricity".parse::<EnergyType>()?, EnergyType::Electricity);
        assert_eq!("GAS_ENERGY".parse::<EnergyType>()?, EnergyType::Gas);
        assert_eq!("gas".parse::<EnergyType>()?, EnergyType::Gas);
        Ok(())
    }

    #[test]
    fn test_from_str_unknown() {
        let error = "WATER".parse::<EnergyType>().unwrap_err();
        assert_eq!(error.to_string(), "unknown energy type `WATER`");
    }

    #[test]
    fn test_deserialize_ok() -> serde_json::Result<()> {
        assert_eq!(serde_json::from_str::<EnergyType>(r#""GAS_ENERGY""#)?, EnergyType::Gas);
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(EnergyType::Gas.to_string(), "Gas");
    }
}
