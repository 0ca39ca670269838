use crate::error::Result;
use crate::models::{CountyRecord, Record, Value};
use crate::resolver::{attribute, resolve_one, State};
use crate::store::county_records;
use crate::table::Criteria;
use std::collections::BTreeMap;
use std::fmt;

/// A single county, resolved against the base county table.
#[derive(Clone, PartialEq)]
pub struct County {
    record: CountyRecord,
}

impl County {
    /// Resolve `(column, value)` criteria, e.g.
    /// `[("ST", "CA"), ("COUNTY", "Alameda")]`.
    pub fn find<I, K, V>(criteria: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::from_criteria(&criteria.into_iter().collect())
    }

    pub fn from_criteria(criteria: &Criteria) -> Result<Self> {
        let rows = county_records()?;
        let record = resolve_one(&rows, criteria)?;
        Ok(Self { record })
    }

    /// County names repeat across states, so the state is always required.
    pub fn by_name(st: &str, county: &str) -> Result<Self> {
        Self::find([("ST", st), ("COUNTY", county)])
    }

    pub fn by_fips(fips: &str) -> Result<Self> {
        Self::find([("FIPS", fips)])
    }

    pub fn get(&self, name: &str) -> Result<Value> {
        attribute(&self.record, name)
    }

    /// The state this county belongs to.
    pub fn state(&self) -> Result<State> {
        State::by_abbreviation(&self.record.st)
    }

    pub fn record(&self) -> &CountyRecord {
        &self.record
    }

    pub fn into_record(self) -> CountyRecord {
        self.record
    }

    pub fn name(&self) -> &str {
        &self.record.county
    }

    pub fn st(&self) -> &str {
        &self.record.st
    }

    pub fn fips(&self) -> &str {
        &self.record.fips
    }

    pub fn lat(&self) -> f64 {
        self.record.lat
    }

    pub fn lon(&self) -> f64 {
        self.record.lon
    }

    pub fn geohash(&self) -> &str {
        &self.record.geohash
    }

    pub fn tzoffset(&self) -> f64 {
        self.record.tzoffset
    }

    pub fn dst(&self) -> bool {
        self.record.dst
    }

    pub fn system(&self) -> &str {
        &self.record.system
    }

    pub fn ro(&self) -> &[String] {
        &self.record.ro
    }

    pub fn to_dict(&self) -> BTreeMap<&'static str, Value> {
        self.record.to_dict()
    }
}

impl fmt::Display for County {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record.county)
    }
}

impl fmt::Debug for County {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "County(FIPS={})", self.record.fips)
    }
}
