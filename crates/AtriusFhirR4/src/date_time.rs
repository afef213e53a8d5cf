//! Precision-preserving FHIR date and time primitives.
//!
//! FHIR dates and times may be partial (`2023`, `2023-03`, `2023-03-15T14`) and must be
//! written back exactly as received. Each type here validates its input, records
//! which components were present, and keeps the original text for serialization.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::FhirJson;
use crate::error::FhirError;

/// Precision levels for FHIR Date values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// Precision levels for FHIR Time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePrecision {
    /// Hour, minute, and second (HH:MM:SS)
    HourMinuteSecond,
    /// Sub-second precision (HH:MM:SS.sss)
    Fraction,
}

/// Precision levels for FHIR DateTime values.
///
/// A dateTime with a time part always has seconds; `YYYY-MM-DDTHH:MM` is not valid R4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Date only (YYYY-MM-DD)
    Date,
    /// Date with time to seconds (YYYY-MM-DDTHH:MM:SS+zz:zz)
    Second,
    /// Date with sub-second time (YYYY-MM-DDTHH:MM:SS.sss+zz:zz)
    Fraction,
}

/// Precision-aware FHIR Date type.
///
/// # FHIR Date Formats
/// - `YYYY` - Year only
/// - `YYYY-MM` - Year and month
/// - `YYYY-MM-DD` - Full date
///
/// # Examples
/// ```rust
/// use atrius_fhir_r4::{DatePrecision, PrecisionDate};
///
/// let year_date = PrecisionDate::from_year(2023);
/// assert_eq!(year_date.precision(), DatePrecision::Year);
/// assert_eq!(year_date.original_string(), "2023");
///
/// let parsed = PrecisionDate::parse("2023-03-15").unwrap();
/// assert_eq!(parsed.day(), Some(15));
/// assert!(PrecisionDate::parse("2023-02-30").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

/// Parses exactly `len` ASCII digits.
fn digits(s: &str, len: usize) -> Option<u32> {
    if s.len() == len && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

impl PrecisionDate {
    /// Creates a year-only precision date.
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
            precision: DatePrecision::Year,
            original_string: Arc::from(format!("{:04}", year)),
        }
    }

    /// Creates a year-month precision date.
    pub fn from_year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
            precision: DatePrecision::YearMonth,
            original_string: Arc::from(format!("{:04}-{:02}", year, month)),
        }
    }

    /// Creates a full precision date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
            precision: DatePrecision::Full,
            original_string: Arc::from(format!("{:04}-{:02}-{:02}", year, month, day)),
        }
    }

    /// Parses a FHIR date string, preserving precision.
    ///
    /// Full dates are checked against the calendar, so `2023-02-30` is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('-');
        let year = digits(parts.next()?, 4)? as i32;
        let month = match parts.next() {
            Some(month) => Some(digits(month, 2)?),
            None => None,
        };
        let day = match parts.next() {
            Some(day) => Some(digits(day, 2)?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }

        let precision = match (month, day) {
            (None, _) => DatePrecision::Year,
            (Some(month), None) => {
                if !(1..=12).contains(&month) {
                    return None;
                }
                DatePrecision::YearMonth
            }
            (Some(month), Some(day)) => {
                NaiveDate::from_ymd_opt(year, month, day)?;
                DatePrecision::Full
            }
        };

        Some(Self {
            year,
            month,
            day,
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Returns the precision level of this date.
    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Converts to a NaiveDate, using the first month/day for missing components.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

/// Precision-aware FHIR Time type (`HH:MM:SS` with optional fraction, no timezone).
///
/// # Examples
/// ```rust
/// use atrius_fhir_r4::{PrecisionTime, TimePrecision};
///
/// let time = PrecisionTime::parse("14:30:45.123").unwrap();
/// assert_eq!(time.precision(), TimePrecision::Fraction);
/// assert_eq!(time.original_string(), "14:30:45.123");
/// assert!(PrecisionTime::parse("14:30").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionTime {
    time: NaiveTime,
    precision: TimePrecision,
    original_string: Arc<str>,
}

impl PrecisionTime {
    /// Creates an hour-minute-second precision time.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        Some(Self {
            time: NaiveTime::from_hms_opt(hour, minute, second)?,
            precision: TimePrecision::HourMinuteSecond,
            original_string: Arc::from(format!("{:02}:{:02}:{:02}", hour, minute, second)),
        })
    }

    /// Parses a FHIR time string, preserving precision.
    pub fn parse(s: &str) -> Option<Self> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        let mut parts = whole.split(':');
        let hour = digits(parts.next()?, 2)?;
        let minute = digits(parts.next()?, 2)?;
        let second = digits(parts.next()?, 2)?;
        if parts.next().is_some() {
            return None;
        }

        let nanos = match fraction {
            None => 0,
            Some(fraction) => {
                if fraction.is_empty()
                    || fraction.len() > 9
                    || !fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    return None;
                }
                format!("{:0<9}", fraction).parse::<u32>().ok()?
            }
        };

        Some(Self {
            time: NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)?,
            precision: if fraction.is_some() {
                TimePrecision::Fraction
            } else {
                TimePrecision::HourMinuteSecond
            },
            original_string: Arc::from(s),
        })
    }

    /// Returns the precision level of this time.
    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        self.time
    }
}

/// Precision-aware FHIR DateTime type.
///
/// # FHIR DateTime Formats
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD` - partial dates, no timezone
/// - `YYYY-MM-DDThh:mm:ss[.fff](Z|+hh:mm|-hh:mm)` - a time requires a timezone
///
/// # Examples
/// ```rust
/// use atrius_fhir_r4::{DateTimePrecision, PrecisionDateTime};
///
/// let date_dt = PrecisionDateTime::parse("2023-03-15").unwrap();
/// assert_eq!(date_dt.precision(), DateTimePrecision::Date);
///
/// let full_dt = PrecisionDateTime::parse("2023-03-15T14:30:45.123Z").unwrap();
/// assert_eq!(full_dt.precision(), DateTimePrecision::Fraction);
/// assert_eq!(full_dt.timezone_offset(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    /// Timezone offset in minutes from UTC
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    /// Creates a PrecisionDateTime from a PrecisionDate.
    pub fn from_precision_date(date: PrecisionDate) -> Self {
        let precision = match date.precision {
            DatePrecision::Year => DateTimePrecision::Year,
            DatePrecision::YearMonth => DateTimePrecision::YearMonth,
            DatePrecision::Full => DateTimePrecision::Date,
        };
        Self {
            original_string: date.original_string.clone(),
            date,
            time: None,
            timezone_offset: None,
            precision,
        }
    }

    /// Parses a FHIR dateTime string, preserving precision and timezone.
    pub fn parse(s: &str) -> Option<Self> {
        let Some((date_part, time_and_tz)) = s.split_once('T') else {
            let mut parsed = Self::from_precision_date(PrecisionDate::parse(s)?);
            parsed.original_string = Arc::from(s);
            return Some(parsed);
        };

        let date = PrecisionDate::parse(date_part)?;
        if date.precision != DatePrecision::Full {
            return None;
        }

        let (time_part, timezone_offset) = if let Some(stripped) = time_and_tz.strip_suffix('Z') {
            (stripped, 0)
        } else {
            let sign_pos = time_and_tz.rfind(['+', '-'])?;
            let offset = Self::parse_timezone_offset(&time_and_tz[sign_pos + 1..])?;
            let offset = if time_and_tz[sign_pos..].starts_with('-') {
                -offset
            } else {
                offset
            };
            (&time_and_tz[..sign_pos], offset)
        };

        let time = PrecisionTime::parse(time_part)?;
        let precision = match time.precision {
            TimePrecision::HourMinuteSecond => DateTimePrecision::Second,
            TimePrecision::Fraction => DateTimePrecision::Fraction,
        };

        Some(Self {
            date,
            time: Some(time),
            timezone_offset: Some(timezone_offset),
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Parses a timezone offset (`hh:mm`) into minutes.
    fn parse_timezone_offset(s: &str) -> Option<i32> {
        let (hours, minutes) = s.split_once(':')?;
        let hours = digits(hours, 2)?;
        let minutes = digits(minutes, 2)?;
        if hours > 14 || minutes > 59 {
            return None;
        }
        Some((hours * 60 + minutes) as i32)
    }

    /// Returns the precision level of this datetime.
    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    /// Timezone offset in minutes east of UTC, present whenever a time is.
    pub fn timezone_offset(&self) -> Option<i32> {
        self.timezone_offset
    }

    /// Converts to a chrono DateTime<Utc>, using the start of the period for missing
    /// components and UTC when no timezone was given.
    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        let naive_time = self
            .time
            .as_ref()
            .map(PrecisionTime::to_naive_time)
            .unwrap_or(NaiveTime::MIN);
        let naive_dt = self.date.to_naive_date()?.and_time(naive_time);
        let offset = TimeDelta::try_minutes(i64::from(self.timezone_offset.unwrap_or(0)))?;
        Some(ChronoDateTime::<Utc>::from_naive_utc_and_offset(naive_dt - offset, Utc))
    }

    /// The value with its own timezone, when it has a time part.
    pub fn to_fixed_offset(&self) -> Option<ChronoDateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.timezone_offset? * 60)?;
        Some(self.to_chrono_datetime()?.with_timezone(&offset))
    }
}

/// A FHIR instant: a dateTime with at least second precision and a timezone.
///
/// ```rust
/// use atrius_fhir_r4::PrecisionInstant;
///
/// assert!(PrecisionInstant::parse("2015-02-07T13:28:17.239+02:00").is_some());
/// assert!(PrecisionInstant::parse("2015-02-07").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionInstant {
    inner: PrecisionDateTime,
}

impl PrecisionInstant {
    pub fn parse(s: &str) -> Option<Self> {
        let inner = PrecisionDateTime::parse(s)?;
        (inner.precision >= DateTimePrecision::Second).then_some(PrecisionInstant { inner })
    }

    pub fn original_string(&self) -> &str {
        self.inner.original_string()
    }

    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.inner
    }

    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        self.inner.to_chrono_datetime()
    }
}

// === Display, serde and codec implementations ===

macro_rules! impl_precision_text {
    ($($ty:ident => $kind:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.original_string())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = FhirError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $ty::parse(s).ok_or_else(|| FhirError::invalid_value($kind, s))
                }
            }

            impl FhirJson for $ty {
                fn from_json(value: Value) -> Result<Self, FhirError> {
                    match value {
                        Value::String(text) => text.parse(),
                        other => Err(FhirError::invalid_type("string", &other)),
                    }
                }

                fn to_json(&self) -> Result<Value, FhirError> {
                    Ok(Value::String(self.original_string().to_string()))
                }
            }

            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str(self.original_string())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(de::Error::custom)
                }
            }
        )*
    };
}

impl_precision_text! {
    PrecisionDate => "date",
    PrecisionTime => "time",
    PrecisionDateTime => "dateTime",
    PrecisionInstant => "instant",
}
