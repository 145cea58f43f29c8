//! Recurrence rules for scheduled transactions
//!
//! A [`Frequency`] names how often a transaction repeats and knows how to
//! step a due date forward by one occurrence. Day and week cadences add a
//! fixed number of days; month and year cadences use calendar arithmetic so
//! that billing on the 31st lands on the last day of shorter months.

use std::fmt;

use chrono::{Days, Months, NaiveDate};

use crate::error::{ForecastError, ForecastResult};

/// How often a recurring transaction fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    SemiYearly,
    Yearly,
}

/// A single calendar step, either a fixed day count or whole months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarStep {
    Days(u64),
    Months(u32),
}

impl Frequency {
    /// All frequencies, in ascending step size
    pub const ALL: [Frequency; 7] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::SemiYearly,
        Frequency::Yearly,
    ];

    /// Resolve a frequency category from input, naming `owner` on failure
    pub fn parse(category: &str, owner: &str) -> ForecastResult<Self> {
        match category {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::BiWeekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "semiyearly" => Ok(Self::SemiYearly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(ForecastError::InvalidFrequency {
                name: owner.to_string(),
            }),
        }
    }

    /// The input keyword for this frequency
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::BiWeekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::SemiYearly => "semiyearly",
            Self::Yearly => "yearly",
        }
    }

    pub fn step(&self) -> CalendarStep {
        match self {
            Self::Daily => CalendarStep::Days(1),
            Self::Weekly => CalendarStep::Days(7),
            Self::BiWeekly => CalendarStep::Days(14),
            Self::Monthly => CalendarStep::Months(1),
            Self::Quarterly => CalendarStep::Months(3),
            Self::SemiYearly => CalendarStep::Months(6),
            Self::Yearly => CalendarStep::Months(12),
        }
    }

    /// The date one step after `date`, or `None` past the calendar range
    ///
    /// Month steps clamp to the end of the target month, so Jan 31 + 1 month
    /// is Feb 28 (or 29), and Feb 29 + 1 year is Feb 28.
    pub fn next_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self.step() {
            CalendarStep::Days(days) => date.checked_add_days(Days::new(days)),
            CalendarStep::Months(months) => date.checked_add_months(Months::new(months)),
        }
    }

    /// Step `date` forward by whole occurrences until it is on or after `today`
    pub fn roll_forward(&self, date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
        let mut next = date;
        while next < today {
            next = self.next_after(next)?;
        }
        Some(next)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
