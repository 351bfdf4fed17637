use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime};

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A calendar day with no time-of-day or offset attached.
///
/// Two timestamps that fall on the same calendar day convert into equal
/// `Day` values, which makes it usable as a lookup key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Day(Date);

impl Day {
    pub fn new(year: i32, month: u8, day: u8) -> crate::Result<Self> {
        let month = Month::try_from(month)?;

        Ok(Self(Date::from_calendar_date(year, month, day)?))
    }

    /// Current day in the local time zone, or in UTC when the local offset
    /// cannot be determined.
    pub fn today() -> Self {
        Self::local_or_utc(OffsetDateTime::now_local().ok())
    }

    fn local_or_utc(now: Option<OffsetDateTime>) -> Self {
        Self(now.unwrap_or_else(OffsetDateTime::now_utc).date())
    }

    pub fn date(&self) -> Date {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        self.0.month().into()
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }

    /// Calendar addition; negative values move backwards.
    pub fn add_days(self, days: i64) -> crate::Result<Self> {
        self.0
            .checked_add(Duration::days(days))
            .map(Self)
            .ok_or(crate::Error::DateOutOfRange)
    }
}

impl From<Date> for Day {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl From<PrimitiveDateTime> for Day {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value.date())
    }
}

impl From<OffsetDateTime> for Day {
    fn from(value: OffsetDateTime) -> Self {
        Self(value.date())
    }
}

impl FromStr for Day {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Date::parse(s.trim(), DAY_FORMAT)?))
    }
}

impl TryFrom<String> for Day {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Day> for String {
    fn from(value: Day) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}
