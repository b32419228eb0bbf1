//! Calendar months and inclusive date ranges
//!
//! Budgets are keyed by calendar month ("2024-03"). Reports work over an
//! inclusive [`DateRange`] and need the ordered set of month keys that range
//! touches.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, serialized as `"YYYY-MM"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BudgetMonth {
    year: i32,
    month: u32,
}

impl BudgetMonth {
    /// Create a month, rejecting month numbers outside 1..=12 and years chrono
    /// cannot represent
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(MonthParseError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // Every constructor, next() and prev() keep the month representable.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        (28..=31)
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(self.year, self.month, day))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month, or `None` past the last month chrono can represent
    pub fn checked_next(&self) -> Option<Self> {
        let (year, month) = if self.month == 12 {
            (self.year.checked_add(1)?, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month).ok()
    }

    /// The preceding month, or `None` before the first month chrono can
    /// represent
    pub fn checked_prev(&self) -> Option<Self> {
        let (year, month) = if self.month == 1 {
            (self.year.checked_sub(1)?, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month).ok()
    }

    /// The following month; stays put at the last representable month
    pub fn next(&self) -> Self {
        self.checked_next().unwrap_or(*self)
    }

    /// The preceding month; stays put at the first representable month
    pub fn prev(&self) -> Self {
        self.checked_prev().unwrap_or(*self)
    }

    /// Step back `count` months
    pub fn minus_months(&self, count: u32) -> Self {
        (0..count).fold(*self, |m, _| m.prev())
    }

    /// Long display form, e.g. "March 2024"
    pub fn long_name(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Short display form, e.g. "Mar 2024"
    pub fn short_name(&self) -> String {
        self.first_day().format("%b %Y").to_string()
    }

    /// Parse a `"YYYY-MM"` key
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for BudgetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for BudgetMonth {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BudgetMonth> for String {
    fn from(month: BudgetMonth) -> Self {
        month.to_string()
    }
}

impl std::str::FromStr for BudgetMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range; callers are expected to pass `start <= end`. A reversed
    /// range is accepted and simply contains no dates.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The whole of one calendar month
    pub fn for_month(month: BudgetMonth) -> Self {
        Self::new(month.first_day(), month.last_day())
    }

    /// From the first day of `first` to the last day of `last`
    pub fn between_months(first: BudgetMonth, last: BudgetMonth) -> Self {
        Self::new(first.first_day(), last.last_day())
    }

    /// The `count` whole months ending with `last` (at least one)
    pub fn trailing_months(last: BudgetMonth, count: u32) -> Self {
        let first = last.minus_months(count.saturating_sub(1));
        Self::between_months(first, last)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Ordered month keys whose first day lies within
    /// `[start_of_month(start), start_of_month(end)]`
    pub fn months(&self) -> Vec<BudgetMonth> {
        if self.start > self.end {
            return Vec::new();
        }

        let last = BudgetMonth::from_date(self.end);
        let mut current = BudgetMonth::from_date(self.start);
        let mut months = Vec::new();

        while current <= last {
            months.push(current);
            match current.checked_next() {
                Some(next) => current = next,
                None => break,
            }
        }

        months
    }

    /// Parse `"YYYY-MM-DD..YYYY-MM-DD"`
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Ok(Self::new(start, end))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Error type for month and range parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidYear(i32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            MonthParseError::InvalidYear(y) => write!(f, "Invalid year: {}", y),
        }
    }
}

impl std::error::Error for MonthParseError {}
