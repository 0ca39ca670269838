use crate::error::FipsError;
use crate::models::{serialize_flag, serialize_joined, Column, Record, Value};
use crate::utils::constants::{RO_SEPARATOR, STATE_FIPS_WIDTH};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Columns of the state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateColumn {
    /// State name, e.g. `California`
    State,
    /// Two-letter abbreviation, e.g. `CA`
    St,
    /// Two-digit FIPS code, e.g. `06`
    Fips,
    /// Hours from UTC of the largest population center
    TzOffset,
    /// Whether summer time is observed
    Dst,
    /// Grid interconnection, e.g. `WECC`
    System,
    /// Reliability organizations, pipe-joined
    Ro,
}

impl Column for StateColumn {
    const ALL: &'static [Self] = &[
        StateColumn::State,
        StateColumn::St,
        StateColumn::Fips,
        StateColumn::TzOffset,
        StateColumn::Dst,
        StateColumn::System,
        StateColumn::Ro,
    ];

    fn name(self) -> &'static str {
        match self {
            StateColumn::State => "STATE",
            StateColumn::St => "ST",
            StateColumn::Fips => "FIPS",
            StateColumn::TzOffset => "TZOFFSET",
            StateColumn::Dst => "DST",
            StateColumn::System => "SYSTEM",
            StateColumn::Ro => "RO",
        }
    }
}

impl FromStr for StateColumn {
    type Err = FipsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s)
    }
}

impl fmt::Display for StateColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRecord {
    #[serde(rename = "STATE")]
    pub state: String,

    #[serde(rename = "ST")]
    pub st: String,

    #[serde(rename = "FIPS")]
    pub fips: String,

    #[serde(rename = "TZOFFSET")]
    pub tzoffset: f64,

    #[serde(rename = "DST", serialize_with = "serialize_flag")]
    pub dst: bool,

    #[serde(rename = "SYSTEM")]
    pub system: String,

    #[serde(rename = "RO", serialize_with = "serialize_joined")]
    pub ro: Vec<String>,
}

impl StateRecord {
    pub fn new(
        state: String,
        st: String,
        fips: String,
        tzoffset: f64,
        dst: bool,
        system: String,
        ro: Vec<String>,
    ) -> Self {
        Self {
            state,
            st,
            fips,
            tzoffset,
            dst,
            system,
            ro,
        }
    }

    /// Reliability organizations joined with `|`, e.g. `SERC|RF|MRO`.
    pub fn ro_joined(&self) -> String {
        self.ro.join(RO_SEPARATOR)
    }

    /// True for states, DC and US territories. Canadian provinces and the
    /// Mexico aggregate use letter-prefixed codes.
    pub fn is_us(&self) -> bool {
        self.fips.len() == STATE_FIPS_WIDTH && self.fips.chars().all(|c| c.is_ascii_digit())
    }
}

impl Record for StateRecord {
    type Column = StateColumn;

    fn value(&self, column: StateColumn) -> Value {
        match column {
            StateColumn::State => Value::from(&self.state),
            StateColumn::St => Value::from(&self.st),
            StateColumn::Fips => Value::from(&self.fips),
            StateColumn::TzOffset => Value::from(self.tzoffset),
            StateColumn::Dst => Value::from(self.dst),
            StateColumn::System => Value::from(&self.system),
            StateColumn::Ro => Value::from(self.ro_joined()),
        }
    }
}
