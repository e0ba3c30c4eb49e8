//! Pure clock-string parsing and clock/date formatting.
//!
//! Nothing here touches store state. Malformed input degrades to documented
//! defaults instead of failing; the rendering layer should never have to
//! handle a formatting error mid-frame.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fallback for unparseable clock strings: 9:00.
pub const DEFAULT_CLOCK: ClockTime = ClockTime { hour: 9, minute: 0 };

/// A wall-clock time of day, already clamped to valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// 0..=23
    pub hour: u32,
    /// 0..=59
    pub minute: u32,
}

impl ClockTime {
    /// Parse an `"HH:MM"` string.
    ///
    /// Numeric parts outside their range are clamped (hour to 0..=23,
    /// minute to 0..=59). Anything else (missing colon, missing part,
    /// non-numeric part) yields [`DEFAULT_CLOCK`]. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use daygrid::{ClockTime, DEFAULT_CLOCK};
    ///
    /// assert_eq!(ClockTime::parse("14:30"), ClockTime { hour: 14, minute: 30 });
    /// assert_eq!(ClockTime::parse("25:99"), ClockTime { hour: 23, minute: 59 });
    /// assert_eq!(ClockTime::parse("lunch"), DEFAULT_CLOCK);
    /// ```
    pub fn parse(input: &str) -> ClockTime {
        let mut parts = input.splitn(2, ':');
        let (Some(hour), Some(minute)) = (parts.next(), parts.next()) else {
            return DEFAULT_CLOCK;
        };
        let (Ok(hour), Ok(minute)) = (hour.trim().parse::<i64>(), minute.trim().parse::<i64>())
        else {
            return DEFAULT_CLOCK;
        };
        ClockTime {
            hour: hour.clamp(0, 23) as u32,
            minute: minute.clamp(0, 59) as u32,
        }
    }
}

/// Clock display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `9:00 AM`; noon renders as `12 PM`, midnight as `12 AM`.
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// Zero-padded `09:00`, wrapped modulo 24.
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Date display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateOrder {
    /// `MM/DD/YYYY`
    #[default]
    #[serde(rename = "mdy")]
    MonthDayYear,
    /// `DD/MM/YYYY`
    #[serde(rename = "dmy")]
    DayMonthYear,
}

/// Render a minute offset from `start_hour` as a clock string.
///
/// The grid positions events as minutes past its day-start hour; this turns
/// that offset back into wall-clock text. Offsets past midnight wrap.
///
/// # Examples
///
/// ```
/// use daygrid::{format_clock, TimeFormat};
///
/// assert_eq!(format_clock(0, 9, TimeFormat::TwelveHour), "9:00 AM");
/// assert_eq!(format_clock(900, 9, TimeFormat::TwentyFourHour), "00:00");
/// ```
pub fn format_clock(offset_minutes: u32, start_hour: u32, format: TimeFormat) -> String {
    let total = start_hour * 60 + offset_minutes;
    let hour = (total / 60) % 24;
    let minute = total % 60;
    match format {
        TimeFormat::TwentyFourHour => format!("{hour:02}:{minute:02}"),
        TimeFormat::TwelveHour => {
            let suffix = if hour < 12 { "AM" } else { "PM" };
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{display}:{minute:02} {suffix}")
        }
    }
}

/// Render a date as `MM/DD/YYYY` or `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate, order: DateOrder) -> String {
    match order {
        DateOrder::MonthDayYear => date.format("%m/%d/%Y").to_string(),
        DateOrder::DayMonthYear => date.format("%d/%m/%Y").to_string(),
    }
}
