//! Common type definitions shared by the graph crates and their front ends.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A label/value pair for tabular display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableDatum {
    /// Row label.
    pub label: String,
    /// Already formatted value.
    pub value: String,
}

impl TableDatum {
    /// Creates a new row from anything displayable.
    pub fn new(label: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for TableDatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Amount of review history to request from the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum RevlogRange {
    /// The last year of reviews.
    #[default]
    Year = 1,
    /// The complete review history.
    All = 2,
}

impl RevlogRange {
    /// Number of days to send to the backend; 0 asks for everything.
    pub const fn days(self) -> u32 {
        match self {
            Self::Year => 365,
            Self::All => 0,
        }
    }

    /// Stable name used in configuration files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

impl TryFrom<i32> for RevlogRange {
    type Error = StatsError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::Year),
            2 => Ok(Self::All),
            other => Err(StatsError::validation_field(
                format!("unknown revlog range tag {other}"),
                "revlog_range",
            )),
        }
    }
}

impl FromStr for RevlogRange {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            other => Err(StatsError::validation_field(
                format!("unknown revlog range '{other}'"),
                "revlog_range",
            )),
        }
    }
}

impl fmt::Display for RevlogRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Period a graph should cover.
///
/// Raw tags outside the known set are treated as [`GraphRange::AllTime`];
/// see [`GraphRange::from_tag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum GraphRange {
    /// The last 31 days.
    #[default]
    Month = 0,
    /// The last 90 days.
    ThreeMonths = 1,
    /// The last 365 days.
    Year = 2,
    /// No cutoff.
    AllTime = 3,
}

impl GraphRange {
    /// Range used for tags that do not name a known variant.
    pub const UNKNOWN_TAG_FALLBACK: Self = Self::AllTime;

    /// Maps a raw integer tag to a range. Unknown tags map to
    /// [`Self::UNKNOWN_TAG_FALLBACK`].
    pub const fn from_tag(tag: i32) -> Self {
        match tag {
            0 => Self::Month,
            1 => Self::ThreeMonths,
            2 => Self::Year,
            3 => Self::AllTime,
            _ => Self::UNKNOWN_TAG_FALLBACK,
        }
    }

    /// The integer tag of this range.
    pub const fn tag(self) -> i32 {
        self as i32
    }

    /// Number of days covered, or `None` for the unbounded range.
    pub const fn window_days(self) -> Option<u32> {
        match self {
            Self::Month => Some(31),
            Self::ThreeMonths => Some(90),
            Self::Year => Some(365),
            Self::AllTime => None,
        }
    }

    /// Stable name used in configuration files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::ThreeMonths => "three_months",
            Self::Year => "year",
            Self::AllTime => "all_time",
        }
    }
}

impl From<i32> for GraphRange {
    fn from(tag: i32) -> Self {
        Self::from_tag(tag)
    }
}

impl FromStr for GraphRange {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Self::Month),
            "three_months" => Ok(Self::ThreeMonths),
            "year" => Ok(Self::Year),
            "all_time" => Ok(Self::AllTime),
            other => Err(StatsError::validation_field(
                format!("unknown graph range '{other}'"),
                "graph_range",
            )),
        }
    }
}

impl fmt::Display for GraphRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
