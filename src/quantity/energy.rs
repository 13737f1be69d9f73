quantity!(KilowattHours, "kWh");

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.1}", KilowattHours(1.26)), "1.3 kWh");
        assert_eq!(format!("{:?}", KilowattHours(3.0)), "3.0kWh");
    }

    #[test]
    fn test_sum() {
        let total: KilowattHours = [KilowattHours(0.1), KilowattHours(0.2)].into_iter().sum();
        assert_abs_diff_eq!(total.0, 0.3);
    }
}
