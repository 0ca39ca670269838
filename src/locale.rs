//! Locale queries: one token selects a state, two select a county.

use crate::accessor::{Counties, States};
use crate::error::{FipsError, Result};
use crate::models::{CountyRecord, StateRecord, Value};
use crate::store::CountySource;
use crate::table::Table;
use crate::writers::OutputOptions;
use std::io::Write;
use tracing::debug;

/// Rows selected by a locale query.
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleTable {
    States(Table<StateRecord>),
    Counties(Table<CountyRecord>),
}

impl LocaleTable {
    pub fn len(&self) -> usize {
        match self {
            LocaleTable::States(table) => table.len(),
            LocaleTable::Counties(table) => table.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn write<W: Write>(&self, options: &OutputOptions, out: W) -> Result<()> {
        match self {
            LocaleTable::States(table) => options.write(table, out),
            LocaleTable::Counties(table) => options.write(table, out),
        }
    }
}

/// Look up a state by abbreviation (`["CA"]`) or a county by state and
/// name (`["CA", "Alameda"]`).
///
/// States are searched with territories, Canada and Mexico included and
/// indexed by `ST`; counties are indexed by `ST` and `COUNTY`. A key with no
/// rows is [`FipsError::KeyNotFound`].
pub fn lookup_locale<S: AsRef<str>>(locale: &[S]) -> Result<LocaleTable> {
    lookup_locale_in(locale, &CountySource::Embedded)
}

/// [`lookup_locale`] with counties read from `source`.
pub fn lookup_locale_in<S: AsRef<str>>(locale: &[S], source: &CountySource) -> Result<LocaleTable> {
    let key: Vec<Value> = locale.iter().map(|token| Value::from(token.as_ref())).collect();
    debug!(key = ?key, "locale lookup");

    match key.len() {
        1 => {
            let table = States::all().use_index(["ST"]).load()?;
            Ok(LocaleTable::States(table.loc(&key)?))
        }
        2 => {
            let table = Counties::new()
                .source(source.clone())
                .use_index(["ST", "COUNTY"])
                .load()?;
            Ok(LocaleTable::Counties(table.loc(&key)?))
        }
        found => Err(FipsError::KeyArity { expected: 2, found }),
    }
}
