//! Expiry computation — days between a canonical date and a point in time.
//!
//! A canonical date expires at midnight UTC of that day. Day counts are the
//! ceiling of the elapsed time expressed in days, at millisecond precision.

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Days-remaining threshold below which an item counts as expiring soon.
const EXPIRING_SOON_DAYS: i64 = 2;

/// Why a canonical date could not be turned into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("expected 3 `/`-separated segments, got {0}")]
    SegmentCount(usize),

    #[error("segment {0:?} is not numeric")]
    NotNumeric(String),

    #[error("{day:02}/{month:02}/{year} is not a calendar date")]
    OutOfRange { day: u32, month: u32, year: i32 },
}

/// Parse `DD/MM/YYYY` text into a calendar date.
///
/// # Errors
///
/// Returns [`DateParseError`] when the text does not have exactly three
/// numeric segments or when they do not form a real date.
pub fn parse_canonical(text: &str) -> Result<NaiveDate, DateParseError> {
    let segments: Vec<&str> = text.split('/').collect();
    let [day, month, year] = segments.as_slice() else {
        return Err(DateParseError::SegmentCount(segments.len()));
    };

    let day: u32 = parse_segment(day)?;
    let month: u32 = parse_segment(month)?;
    let year: i32 = parse_segment(year)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateParseError::OutOfRange { day, month, year })
}

fn parse_segment<T: std::str::FromStr>(segment: &str) -> Result<T, DateParseError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError::NotNumeric(segment.to_string()));
    }
    segment
        .parse()
        .map_err(|_| DateParseError::NotNumeric(segment.to_string()))
}

fn until_expiry(canonical: &str, now: Timestamp) -> Result<TimeDelta, DateParseError> {
    let expiry = parse_canonical(canonical)?
        .and_time(chrono::NaiveTime::MIN)
        .and_utc();
    Ok(expiry - now)
}

fn ceil_days(millis: i64) -> i64 {
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Whole days between the expiry date and `now`, ignoring direction.
///
/// A date ten days in the past and one ten days in the future both yield
/// `10`. Use [`signed_days_until_expiry`] to tell them apart.
///
/// # Errors
///
/// Returns [`DateParseError`] when `canonical` is not a valid `DD/MM/YYYY`
/// calendar date.
pub fn days_until_expiry(canonical: &str, now: Timestamp) -> Result<i64, DateParseError> {
    let delta = until_expiry(canonical, now)?;
    Ok(ceil_days(delta.num_milliseconds().abs()))
}

/// Whole days until the expiry date, negative once it has passed.
///
/// # Errors
///
/// Returns [`DateParseError`] when `canonical` is not a valid `DD/MM/YYYY`
/// calendar date.
pub fn signed_days_until_expiry(canonical: &str, now: Timestamp) -> Result<i64, DateParseError> {
    let delta = until_expiry(canonical, now)?;
    Ok(ceil_days(delta.num_milliseconds()))
}

/// Freshness of an item derived from its signed day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// The expiry instant has passed.
    Expired,
    /// The expiry instant is reached within the current day.
    ExpiresToday,
    /// Expires within the next couple of days.
    ExpiresSoon,
    Fresh,
}

impl ExpiryStatus {
    /// Classify a value returned by [`signed_days_until_expiry`].
    #[must_use]
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Self::Expired,
            0 => Self::ExpiresToday,
            1..=EXPIRING_SOON_DAYS => Self::ExpiresSoon,
            _ => Self::Fresh,
        }
    }
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expired => write!(f, "expired"),
            Self::ExpiresToday => write!(f, "expires_today"),
            Self::ExpiresSoon => write!(f, "expires_soon"),
            Self::Fresh => write!(f, "fresh"),
        }
    }
}
