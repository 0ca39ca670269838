//! Bulk access to the reference tables.

use crate::error::Result;
use crate::models::{CountyRecord, StateRecord};
use crate::store::{county_records_from, state_records, CountySource, StateSet};
use crate::table::Table;

/// Builder for the state table.
///
/// ```
/// use fips::States;
///
/// let states = States::new().with_territories(true).use_index(["ST"]).load().unwrap();
/// assert_eq!(states.len(), 53);
/// ```
#[derive(Debug, Clone, Default)]
pub struct States {
    set: StateSet,
    use_index: Vec<String>,
}

impl States {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base states plus territories, Canada and Mexico.
    pub fn all() -> Self {
        Self {
            set: StateSet::all(),
            use_index: Vec::new(),
        }
    }

    pub fn with_territories(mut self, enabled: bool) -> Self {
        self.set.with_territories = enabled;
        self
    }

    pub fn with_canada(mut self, enabled: bool) -> Self {
        self.set.with_canada = enabled;
        self
    }

    pub fn with_mexico(mut self, enabled: bool) -> Self {
        self.set.with_mexico = enabled;
        self
    }

    /// Index the loaded table by these columns (sorted by them).
    pub fn use_index<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_index = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Build a fresh table.
    pub fn load(&self) -> Result<Table<StateRecord>> {
        index_table(Table::new(state_records(self.set)), &self.use_index)
    }
}

/// Builder for the county table.
#[derive(Debug, Clone, Default)]
pub struct Counties {
    source: CountySource,
    state: Option<String>,
    use_index: Vec<String>,
}

impl Counties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read counties from `source` instead of the bundled table.
    pub fn source(mut self, source: CountySource) -> Self {
        self.source = source;
        self
    }

    /// Restrict the table to one state's counties.
    pub fn state(mut self, st: impl Into<String>) -> Self {
        self.state = Some(st.into());
        self
    }

    pub fn use_index<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_index = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn load(&self) -> Result<Table<CountyRecord>> {
        let mut rows = county_records_from(&self.source)?;
        if let Some(st) = &self.state {
            rows.retain(|row| &row.st == st);
        }
        index_table(Table::new(rows), &self.use_index)
    }
}

fn index_table<R: crate::models::Record>(table: Table<R>, columns: &[String]) -> Result<Table<R>> {
    if columns.is_empty() {
        return Ok(table);
    }
    Ok(table.set_index(columns)?.sort_index())
}
