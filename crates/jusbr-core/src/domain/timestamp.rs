use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ValidationError;

const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_TIME_SPACE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATE_TIME_T: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Instant normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parse the date shapes the provider emits.
    ///
    /// Accepts RFC3339 with any offset, `YYYY-MM-DD HH:MM:SS`,
    /// `YYYY-MM-DDTHH:MM:SS` and bare `YYYY-MM-DD`. Values without an offset
    /// are taken as UTC.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let invalid = || ValidationError::InvalidTimestamp {
            value: input.to_owned(),
        };

        if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
            return Ok(Self::from_offset_datetime(parsed));
        }

        for format in [DATE_TIME_SPACE, DATE_TIME_T] {
            if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, format) {
                return Ok(Self(parsed.assume_utc()));
            }
        }

        Date::parse(trimmed, DATE_ONLY)
            .map(|date| Self(date.midnight().assume_utc()))
            .map_err(|_| invalid())
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Self {
        Self(value.to_offset(UtcOffset::UTC))
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    pub fn format_rfc3339(self) -> Result<String, time::error::Format> {
        self.0.format(&Rfc3339)
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = self.format_rfc3339().map_err(|_| std::fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rendered = self.format_rfc3339().map_err(S::Error::custom)?;
        serializer.serialize_str(&rendered)
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Docket date as reported by the provider.
///
/// An unparsable or missing date is carried as `Invalid` and serializes to
/// `null`; it never fails the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovementDate {
    Valid(UtcDateTime),
    Invalid { raw: Option<String> },
}

impl MovementDate {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) => UtcDateTime::parse(value)
                .map(Self::Valid)
                .unwrap_or_else(|_| Self::Invalid {
                    raw: Some(value.to_owned()),
                }),
            None => Self::Invalid { raw: None },
        }
    }

    pub fn instant(&self) -> Option<UtcDateTime> {
        match self {
            Self::Valid(instant) => Some(*instant),
            Self::Invalid { .. } => None,
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl Serialize for MovementDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Valid(instant) => instant.serialize(serializer),
            Self::Invalid { .. } => serializer.serialize_none(),
        }
    }
}
