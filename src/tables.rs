use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use geotogether::{
    EnergyUsage,
    LivePowerUsage,
    quantity::{cost::Pence, energy::KilowattHours, power::Watts, sum_present},
};

fn new_table<const N: usize>(header: [&str; N]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(header.to_vec());
    table
}

#[must_use]
pub fn build_live_table(usage: &[LivePowerUsage]) -> Table {
    let mut table = new_table(["Energy", "Power"]);
    for reading in usage {
        table.add_row(vec![
            Cell::new(reading.energy_type),
            Cell::new(format!("{:.0}", reading.power))
                .set_alignment(CellAlignment::Right)
                .fg(if reading.power > Watts::zero() { Color::DarkYellow } else { Color::Green }),
        ]);
    }
    table
}

/// Usage per energy type under the period `label`, followed by the total.
#[must_use]
pub fn build_usage_table<'a>(label: &str, usage: impl IntoIterator<Item = &'a EnergyUsage>) -> Table {
    let mut table = new_table(["Energy", label, "Cost"]);
    let mut total_amount = None;
    let mut total_cost = None;
    for usage in usage {
        total_amount = sum_present(total_amount, usage.amount);
        total_cost = sum_present(total_cost, usage.cost);
        table.add_row(vec![
            Cell::new(usage.energy_type),
            amount_cell(usage.amount),
            cost_cell(usage.cost),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        amount_cell(total_amount).add_attribute(Attribute::Bold),
        cost_cell(total_cost).add_attribute(Attribute::Bold),
    ]);
    table
}

fn amount_cell(amount: Option<KilowattHours>) -> Cell {
    amount.map_or_else(
        || Cell::new("n/a").add_attribute(Attribute::Dim),
        |amount| Cell::new(format!("{amount:.1}")),
    )
    .set_alignment(CellAlignment::Right)
}

fn cost_cell(cost: Option<Pence>) -> Cell {
    cost.map_or_else(
        || Cell::new("n/a").add_attribute(Attribute::Dim),
        |cost| Cell::new(cost.to_pounds()),
    )
    .set_alignment(CellAlignment::Right)
}

#[cfg(test)]
mod tests {
    use geotogether::{EnergyType, TimePeriod};

    use super::*;

    #[test]
    fn test_usage_table_total() {
        let usage = [
            EnergyUsage::builder()
                .period(TimePeriod::Day)
                .energy_type(EnergyType::Electricity)
                .amount(KilowattHours(4.5))
                .cost(Pence(123.0))
                .build(),
            EnergyUsage::builder()
                .period(TimePeriod::Day)
                .energy_type(EnergyType::Gas)
                .amount(KilowattHours(10.0))
                .build(),
        ];
        let rendered = build_usage_table("Today", &usage).to_string();
        assert!(rendered.contains("Today"));
        assert!(rendered.contains("14.5 kWh"));
        assert!(rendered.contains("£1.23"));
        assert!(rendered.contains("n/a"));
    }

    #[test]
    fn test_live_table() {
        let usage = [LivePowerUsage { energy_type: EnergyType::Electricity, power: Watts(250.0) }];
        let rendered = build_live_table(&usage).to_string();
        assert!(rendered.contains("Electricity"));
        assert!(rendered.contains("250 W"));
    }
}
