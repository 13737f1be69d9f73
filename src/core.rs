pub mod aggregate;
pub mod date_range;
pub mod energy_type;
pub mod label;
pub mod time_period;
pub mod unit;
pub mod usage;
