/// Calendar identifiers
///
/// `DateId` names one day (`YYYY-MM-DD`) and doubles as the file stem of a
/// progress photo. `MonthId` names one month (`YYYY-MM`) and is what the
/// calendar pages through.
use chrono::{Datelike, Local, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateId(NaiveDate);

impl DateId {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today in local time
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> MonthId {
        MonthId {
            year: self.0.year(),
            month: self.0.month(),
        }
    }

    /// File name of the progress photo for this day
    pub fn filename(&self) -> String {
        format!("{}.jpg", self)
    }

    /// Parse a progress photo file name back into its date
    pub fn from_filename(filename: &str) -> Option<Self> {
        filename.strip_suffix(".jpg")?.parse().ok()
    }
}

impl fmt::Display for DateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DateId {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(Self)
    }
}

/// Direction of a one-month step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthDelta {
    Previous,
    Next,
}

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthId {
    year: i32,
    month: u32,
}

impl MonthId {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day 1 of this month
    pub fn first_day(&self) -> NaiveDate {
        // `new` only admits months 1..=12, and day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .map(|next| (next - first).num_days() as u32)
            .unwrap_or(31)
    }

    /// The month one step away, rolling the year at December/January
    pub fn offset(&self, delta: MonthDelta) -> Self {
        let anchor = self.first_day();
        let moved = match delta {
            MonthDelta::Previous => anchor.checked_sub_months(Months::new(1)),
            MonthDelta::Next => anchor.checked_add_months(Months::new(1)),
        };

        match moved {
            Some(date) => DateId::new(date).month(),
            None => *self,
        }
    }

    pub fn contains(&self, date: DateId) -> bool {
        date.month() == *self
    }

    /// Human readable title, e.g. "June 2024"
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthId {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Anchor at day 1 so chrono validates both fields
        let date = NaiveDate::parse_from_str(&format!("{}-01", s), DATE_FORMAT)?;
        Ok(DateId::new(date).month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> MonthId {
        s.parse().unwrap()
    }

    #[test]
    fn test_date_id_format() {
        let date = DateId::from_ymd(2024, 6, 5).unwrap();
        assert_eq!(date.to_string(), "2024-06-05");
        assert_eq!(date.filename(), "2024-06-05.jpg");
    }

    #[test]
    fn test_date_id_from_filename() {
        assert_eq!(
            DateId::from_filename("2024-06-15.jpg"),
            DateId::from_ymd(2024, 6, 15)
        );
        assert_eq!(DateId::from_filename("notes.txt"), None);
        assert_eq!(DateId::from_filename("2024-13-01.jpg"), None);
    }

    #[test]
    fn test_month_rolls_over_year_boundary() {
        assert_eq!(month("2024-12").offset(MonthDelta::Next), month("2025-01"));
        assert_eq!(month("2025-01").offset(MonthDelta::Previous), month("2024-12"));
    }

    #[test]
    fn test_forward_then_back_is_identity() {
        for m in 1..=12 {
            let start = MonthId::new(2024, m).unwrap();
            let there = start.offset(MonthDelta::Next);
            assert_eq!(there.offset(MonthDelta::Previous), start);
            let back = start.offset(MonthDelta::Previous);
            assert_eq!(back.offset(MonthDelta::Next), start);
        }
    }

    #[test]
    fn test_month_id_parsing() {
        assert_eq!(month("2024-06").to_string(), "2024-06");
        assert!("2024-13".parse::<MonthId>().is_err());
        assert!(MonthId::new(2024, 0).is_none());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(month("2024-02").days_in_month(), 29);
        assert_eq!(month("2023-02").days_in_month(), 28);
        assert_eq!(month("2024-12").days_in_month(), 31);
    }

    #[test]
    fn test_title() {
        assert_eq!(month("2024-06").title(), "June 2024");
    }
}
