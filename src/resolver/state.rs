use crate::error::Result;
use crate::models::{Record, StateRecord, Value};
use crate::resolver::{attribute, resolve_one};
use crate::store::{state_records, StateSet};
use crate::table::Criteria;
use std::collections::BTreeMap;
use std::fmt;

/// A single state, province or territory.
///
/// Resolution searches the full table (territories, Canada and Mexico
/// included) and holds a private copy of the matched row.
#[derive(Clone, PartialEq)]
pub struct State {
    record: StateRecord,
}

impl State {
    /// Resolve `(column, value)` criteria, e.g. `[("ST", "CA")]`.
    pub fn find<I, K, V>(criteria: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::from_criteria(&criteria.into_iter().collect())
    }

    pub fn from_criteria(criteria: &Criteria) -> Result<Self> {
        let rows = state_records(StateSet::all());
        let record = resolve_one(&rows, criteria)?;
        Ok(Self { record })
    }

    pub fn by_abbreviation(st: &str) -> Result<Self> {
        Self::find([("ST", st)])
    }

    pub fn by_name(name: &str) -> Result<Self> {
        Self::find([("STATE", name)])
    }

    pub fn by_fips(fips: &str) -> Result<Self> {
        Self::find([("FIPS", fips)])
    }

    /// Any column by name; unknown names are an `UnknownAttribute` error.
    pub fn get(&self, name: &str) -> Result<Value> {
        attribute(&self.record, name)
    }

    pub fn record(&self) -> &StateRecord {
        &self.record
    }

    pub fn into_record(self) -> StateRecord {
        self.record
    }

    pub fn name(&self) -> &str {
        &self.record.state
    }

    pub fn st(&self) -> &str {
        &self.record.st
    }

    pub fn fips(&self) -> &str {
        &self.record.fips
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

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record.state)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State(ST={})", self.record.st)
    }
}
