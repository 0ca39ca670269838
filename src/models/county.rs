use crate::error::FipsError;
use crate::models::{serialize_flag, serialize_joined, Column, Record, StateRecord, Value};
use crate::utils::constants::RO_SEPARATOR;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Columns of the county table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CountyColumn {
    St,
    Fips,
    County,
    Lat,
    Lon,
    Geohash,
    TzOffset,
    Dst,
    System,
    Ro,
}

impl Column for CountyColumn {
    const ALL: &'static [Self] = &[
        CountyColumn::St,
        CountyColumn::Fips,
        CountyColumn::County,
        CountyColumn::Lat,
        CountyColumn::Lon,
        CountyColumn::Geohash,
        CountyColumn::TzOffset,
        CountyColumn::Dst,
        CountyColumn::System,
        CountyColumn::Ro,
    ];

    fn name(self) -> &'static str {
        match self {
            CountyColumn::St => "ST",
            CountyColumn::Fips => "FIPS",
            CountyColumn::County => "COUNTY",
            CountyColumn::Lat => "LAT",
            CountyColumn::Lon => "LON",
            CountyColumn::Geohash => "GEOHASH",
            CountyColumn::TzOffset => "TZOFFSET",
            CountyColumn::Dst => "DST",
            CountyColumn::System => "SYSTEM",
            CountyColumn::Ro => "RO",
        }
    }
}

impl FromStr for CountyColumn {
    type Err = FipsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s)
    }
}

impl fmt::Display for CountyColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A county row, with the owning state's timezone and grid attributes
/// copied in.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CountyRecord {
    #[serde(rename = "ST")]
    #[validate(length(equal = 2))]
    pub st: String,

    #[serde(rename = "FIPS")]
    #[validate(length(equal = 5))]
    pub fips: String,

    /// Bare name, without "County", "Parish" or similar qualifiers
    #[serde(rename = "COUNTY")]
    #[validate(length(min = 1))]
    pub county: String,

    #[serde(rename = "LAT")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[serde(rename = "LON")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,

    #[serde(rename = "GEOHASH")]
    pub geohash: String,

    #[serde(rename = "TZOFFSET")]
    pub tzoffset: f64,

    #[serde(rename = "DST", serialize_with = "serialize_flag")]
    pub dst: bool,

    #[serde(rename = "SYSTEM")]
    pub system: String,

    #[serde(rename = "RO", serialize_with = "serialize_joined")]
    pub ro: Vec<String>,
}

impl CountyRecord {
    /// Build a county row, inheriting timezone, DST, system and reliability
    /// organizations from `state`.
    pub fn with_state(
        state: &StateRecord,
        fips: String,
        county: String,
        lat: f64,
        lon: f64,
        geohash: String,
    ) -> Self {
        Self {
            st: state.st.clone(),
            fips,
            county,
            lat,
            lon,
            geohash,
            tzoffset: state.tzoffset,
            dst: state.dst,
            system: state.system.clone(),
            ro: state.ro.clone(),
        }
    }

    pub fn ro_joined(&self) -> String {
        self.ro.join(RO_SEPARATOR)
    }

    /// The two-digit state portion of the county FIPS code.
    pub fn state_fips(&self) -> &str {
        self.fips.get(..2).unwrap_or(&self.fips)
    }
}

impl Record for CountyRecord {
    type Column = CountyColumn;

    fn value(&self, column: CountyColumn) -> Value {
        match column {
            CountyColumn::St => Value::from(&self.st),
            CountyColumn::Fips => Value::from(&self.fips),
            CountyColumn::County => Value::from(&self.county),
            CountyColumn::Lat => Value::from(self.lat),
            CountyColumn::Lon => Value::from(self.lon),
            CountyColumn::Geohash => Value::from(&self.geohash),
            CountyColumn::TzOffset => Value::from(self.tzoffset),
            CountyColumn::Dst => Value::from(self.dst),
            CountyColumn::System => Value::from(&self.system),
            CountyColumn::Ro => Value::from(self.ro_joined()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn california() -> StateRecord {
        StateRecord::new(
            "California".to_string(),
            "CA".to_string(),
            "06".to_string(),
            -8.0,
            true,
            "WECC".to_string(),
            vec!["WECC".to_string()],
        )
    }

    fn alameda() -> CountyRecord {
        CountyRecord::with_state(
            &california(),
            "06001".to_string(),
            "Alameda".to_string(),
            37.647139,
            -121.912488,
            "9q9q1v".to_string(),
        )
    }

    #[test]
    fn test_inherits_state_attributes() {
        let county = alameda();
        assert_eq!(county.st, "CA");
        assert_eq!(county.tzoffset, -8.0);
        assert!(county.dst);
        assert_eq!(county.system, "WECC");
        assert_eq!(county.ro_joined(), "WECC");
        assert_eq!(county.state_fips(), "06");
    }

    #[test]
    fn test_validation() {
        assert!(alameda().validate().is_ok());

        let mut bad = alameda();
        bad.lat = 97.0;
        assert!(bad.validate().is_err());

        let mut bad = alameda();
        bad.fips = "6001".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_value_by_name() {
        let county = alameda();
        assert_eq!(county.value_by_name("GEOHASH").unwrap(), Value::from("9q9q1v"));
        assert_eq!(county.value_by_name("LON").unwrap(), Value::from(-121.912488));
        assert!(matches!(
            county.value_by_name("STATE"),
            Err(FipsError::UnknownColumn(_))
        ));
    }
}
