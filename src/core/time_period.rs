use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use chrono::{Datelike, Days, Months, NaiveDate, TimeDelta};

use crate::core::{
    date_range::DateRange,
    label::{Labelled, UnknownLabel},
};

/// Amount of time that energy usage can be reported for.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    clap::ValueEnum,
    serde_with::DeserializeFromStr,
)]
pub enum TimePeriod {
    Day,
    Week,
    Month,

    /// Since the last bill.
    Unbilled,

    /// Since the meter was installed.
    Forever,
}

impl Labelled for TimePeriod {
    const KIND: &'static str = "time period";
    const ALL: &'static [Self] = &[Self::Day, Self::Week, Self::Month, Self::Unbilled, Self::Forever];

    fn key(self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Unbilled => "UNBILLED",
            Self::Forever => "FOREVER",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Unbilled => "Since Last Bill",
            Self::Forever => "All Time",
        }
    }
}

impl TimePeriod {
    /// Resolve the period which is `offset` periods away from the one containing `reference`.
    ///
    /// Weeks start on Monday. Returns [`None`] for [`TimePeriod::Unbilled`] and [`TimePeriod::Forever`],
    /// and when the range falls outside of the supported calendar.
    #[must_use]
    pub fn resolve(self, offset: i32, reference: NaiveDate) -> Option<DateRange> {
        match self {
            Self::Day => {
                let day = reference.checked_add_signed(TimeDelta::days(offset.into()))?;
                Some(DateRange::new(day, day))
            }
            Self::Week => {
                let monday = reference
                    .checked_sub_days(Days::new(reference.weekday().num_days_from_monday().into()))?;
                let start = monday.checked_add_signed(TimeDelta::weeks(offset.into()))?;
                Some(DateRange::new(start, start.checked_add_days(Days::new(6))?))
            }
            Self::Month => {
                let months = Months::new(offset.unsigned_abs());
                let first_day = reference.with_day(1)?;
                let start = if offset >= 0 {
                    first_day.checked_add_months(months)?
                } else {
                    first_day.checked_sub_months(months)?
                };
                let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
                Some(DateRange::new(start, end))
            }
            Self::Unbilled | Self::Forever => None,
        }
    }

    /// Human-friendly name of the period `offset` periods away, which starts on `start`.
    #[must_use]
    pub fn friendly_label(self, offset: i32, start: NaiveDate) -> String {
        let formats: &[&str] = match self {
            Self::Day => &["Today", "Yesterday", "%x"],
            Self::Week => &["This Week", "Last Week", "Week Commencing %x"],
            Self::Month => &["This Month", "Last Month", "%b %Y"],
            Self::Unbilled => &["Since Last Bill"],
            Self::Forever => &["Since Last Meter Change"],
        };
        let index =
            usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX).min(formats.len() - 1);
        start.format(formats[index]).to_string()
    }
}

/// Point the offset into the past, whatever its sign.
#[must_use]
pub const fn look_back(offset: i32) -> i32 {
    if offset > 0 { -offset } else { offset }
}

impl FromStr for TimePeriod {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl Display for TimePeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_label(f)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_resolve_day() {
        let reference = date(2024, 3, 13);
        assert_eq!(TimePeriod::Day.resolve(0, reference), Some(DateRange::new(reference, reference)));
        assert_eq!(
            TimePeriod::Day.resolve(-1, reference),
            Some(DateRange::new(date(2024, 3, 12), date(2024, 3, 12))),
        );
    }

    #[test]
    fn test_resolve_day_across_leap_day() {
        assert_eq!(
            TimePeriod::Day.resolve(-1, date(2024, 3, 1)),
            Some(DateRange::new(date(2024, 2, 29), date(2024, 2, 29))),
        );
    }

    #[test]
    fn test_resolve_week_for_every_weekday() {
        let expected = Some(DateRange::new(date(2024, 3, 11), date(2024, 3, 17)));
        for day in 11..=17 {
            assert_eq!(TimePeriod::Week.resolve(0, date(2024, 3, day)), expected, "day={day}");
        }
    }

    #[test]
    fn test_resolve_previous_week() {
        assert_eq!(
            TimePeriod::Week.resolve(-1, date(2024, 3, 13)),
            Some(DateRange::new(date(2024, 3, 4), date(2024, 3, 10))),
        );
    }

    #[test]
    fn test_resolve_month() {
        let march = Some(DateRange::new(date(2024, 3, 1), date(2024, 3, 31)));
        assert_eq!(TimePeriod::Month.resolve(0, date(2024, 3, 20)), march);
        assert_eq!(TimePeriod::Month.resolve(-1, date(2024, 4, 15)), march);
        assert_eq!(TimePeriod::Month.resolve(1, date(2024, 2, 29)), march);
    }

    #[test]
    fn test_resolve_month_from_the_last_day() {
        assert_eq!(
            TimePeriod::Month.resolve(-1, date(2024, 3, 31)),
            Some(DateRange::new(date(2024, 2, 1), date(2024, 2, 29))),
        );
    }

    #[test]
    fn test_resolve_month_across_year() {
        assert_eq!(
            TimePeriod::Month.resolve(-1, date(2024, 1, 10)),
            Some(DateRange::new(date(2023, 12, 1), date(2023, 12, 31))),
        );
        assert_eq!(
            TimePeriod::Month.resolve(-13, date(2024, 1, 10)),
            Some(DateRange::new(date(2022, 12, 1), date(2022, 12, 31))),
        );
    }

    #[test]
    fn test_resolve_without_date_range() {
        assert_eq!(TimePeriod::Unbilled.resolve(0, date(2024, 3, 13)), None);
        assert_eq!(TimePeriod::Forever.resolve(-1, date(2024, 3, 13)), None);
    }

    #[test]
    fn test_resolve_out_of_calendar() {
        assert_eq!(TimePeriod::Day.resolve(i32::MAX, date(2024, 3, 13)), None);
    }

    #[test]
    fn test_resolved_ranges_are_ordered() {
        for reference in [date(2024, 2, 29), date(2023, 12, 31), date(2025, 6, 1)] {
            for offset in -60..=60 {
                for period in [TimePeriod::Day, TimePeriod::Week, TimePeriod::Month] {
                    let range = period.resolve(offset, reference).unwrap();
                    assert!(range.start <= range.end, "{period:?} {offset} {reference}");
                }
                let week = TimePeriod::Week.resolve(offset, reference).unwrap();
                assert_eq!(week.start.weekday(), Weekday::Mon);
                assert_eq!((week.end - week.start).num_days(), 6);
                let month = TimePeriod::Month.resolve(offset, reference).unwrap();
                assert_eq!(month.start.day(), 1);
                assert_eq!(month.end.succ_opt().unwrap().day(), 1);
            }
        }
    }

    #[test]
    fn test_resolve_is_pure() {
        let reference = date(2024, 3, 13);
        assert_eq!(TimePeriod::Week.resolve(-3, reference), TimePeriod::Week.resolve(-3, reference));
    }

    #[test]
    fn test_look_back() {
        assert_eq!(look_back(2), -2);
        assert_eq!(look_back(-2), -2);
        assert_eq!(look_back(0), 0);
        assert_eq!(look_back(i32::MIN), i32::MIN);
    }

    #[test]
    fn test_friendly_label() {
        let start = date(2024, 3, 11);
        assert_eq!(TimePeriod::Day.friendly_label(0, start), "Today");
        assert_eq!(TimePeriod::Day.friendly_label(-1, start), "Yesterday");
        assert_eq!(TimePeriod::Day.friendly_label(-2, start), "03/11/24");
        assert_eq!(TimePeriod::Week.friendly_label(-1, start), "Last Week");
        assert_eq!(TimePeriod::Week.friendly_label(-3, start), "Week Commencing 03/11/24");
        assert_eq!(TimePeriod::Month.friendly_label(0, start), "This Month");
        assert_eq!(TimePeriod::Month.friendly_label(-5, date(2023, 10, 1)), "Oct 2023");
        assert_eq!(TimePeriod::Unbilled.friendly_label(0, start), "Since Last Bill");
        assert_eq!(TimePeriod::Forever.friendly_label(-7, start), "Since Last Meter Change");
    }

    #[test]
    fn test_from_str_ok() -> Result<(), UnknownLabel> {
        assert_eq!("MONTH".parse::<TimePeriod>()?, TimePeriod::Month);
        assert_eq!("since last bill".parse::<TimePeriod>()?, TimePeriod::Unbilled);
        assert_eq!("All Time".parse::<TimePeriod>()?, TimePeriod::Forever);
        Ok(())
    }
}
