#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod api;
pub mod core;
mod prelude;
pub mod quantity;

pub use crate::{
    api::{ApiError, AuthenticationError, Client, Error, SystemId},
    core::{
        energy_type::EnergyType,
        time_period::TimePeriod,
        unit::{EnergyUnit, PowerUnit},
        usage::{EnergyUsage, LivePowerUsage, PeriodicEnergyUsage},
    },
};
