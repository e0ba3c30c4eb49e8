use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical day-partition key: a zero-padded `YYYY-MM-DD` calendar date
/// with no time component.
///
/// Keys are only constructible from a valid date: infallibly via
/// [`From<NaiveDate>`], fallibly via [`FromStr`] (which also backs serde
/// deserialization). String input must already be in canonical form;
/// near-misses like `"2024-1-2"` are rejected, not normalized. Ordering and
/// hashing follow the string form, so lexicographic order is chronological
/// order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daygrid::DateKey;
///
/// let key = DateKey::from(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
/// assert_eq!(key.as_str(), "2024-03-05");
///
/// assert!("2024-03-05".parse::<DateKey>().is_ok());
/// assert!("2024-3-5".parse::<DateKey>().is_err());
/// assert!("03/05/2024".parse::<DateKey>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(String);

impl DateKey {
    /// Returns the key as its canonical `YYYY-MM-DD` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date.format(DATE_KEY_FORMAT).to_string())
    }
}

impl TryFrom<String> for DateKey {
    type Error = ParseDateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for DateKey {
    type Err = ParseDateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded month and day parts; keys are an exact
        // cross-component format, so only the canonical rendering passes.
        NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .ok()
            .map(DateKey::from)
            .filter(|key| key.0 == s)
            .ok_or_else(|| ParseDateKeyError {
                input: s.to_string(),
            })
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The input was not a valid `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date key '{input}': expected YYYY-MM-DD")]
pub struct ParseDateKeyError {
    input: String,
}
