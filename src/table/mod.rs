pub mod criteria;
pub mod lookup;

pub use criteria::Criteria;
pub use lookup::{lookup, lookup_columns};

use crate::error::{FipsError, Result};
use crate::models::{Column, Record, Value};
use tracing::warn;

/// An immutable reference table with an optional index.
///
/// Operations that change the view (`set_index`, `sort_index`, `loc`, ...)
/// consume the table or borrow it and return a new one; rows are owned, so
/// two tables never share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R: Record> {
    rows: Vec<R>,
    index: Vec<R::Column>,
}

impl<R: Record> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows,
            index: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn into_records(self) -> Vec<R> {
        self.rows
    }

    pub fn first(&self) -> Option<&R> {
        self.rows.first()
    }

    /// Current index columns, outermost first.
    pub fn index(&self) -> &[R::Column] {
        &self.index
    }

    /// Every column of the schema, in schema order.
    pub fn columns(&self) -> &'static [R::Column] {
        R::Column::ALL
    }

    /// Columns that are not part of the index.
    pub fn data_columns(&self) -> Vec<R::Column> {
        R::Column::ALL
            .iter()
            .copied()
            .filter(|column| !self.index.contains(column))
            .collect()
    }

    /// Index the table by the named columns.
    pub fn set_index<S: AsRef<str>>(self, names: &[S]) -> Result<Self> {
        let columns = names
            .iter()
            .map(|name| R::Column::parse_name(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.set_index_columns(columns))
    }

    pub fn set_index_columns(mut self, columns: Vec<R::Column>) -> Self {
        let mut index: Vec<R::Column> = Vec::with_capacity(columns.len());
        for column in columns {
            if !index.contains(&column) {
                index.push(column);
            }
        }
        self.index = index;
        self
    }

    pub fn reset_index(mut self) -> Self {
        self.index.clear();
        self
    }

    /// Stable sort by index values; a table without an index keeps its order.
    pub fn sort_index(mut self) -> Self {
        if !self.index.is_empty() {
            let index = self.index.clone();
            self.rows
                .sort_by_cached_key(|row| index.iter().map(|c| row.value(*c)).collect::<Vec<_>>());
        }
        self
    }

    /// Index values of `row`.
    pub fn index_key(&self, row: &R) -> Vec<Value> {
        self.index.iter().map(|column| row.value(*column)).collect()
    }

    /// Rows whose leading index values equal `key`.
    ///
    /// `key` may be shorter than the index, selecting on its outer levels
    /// only (e.g. every county of a state on an `[ST, COUNTY]` index). The
    /// result keeps this table's index and may be empty.
    pub fn select(&self, key: &[Value]) -> Result<Self> {
        if key.is_empty() || key.len() > self.index.len() {
            return Err(FipsError::KeyArity {
                expected: self.index.len(),
                found: key.len(),
            });
        }

        let rows = lookup_columns(&self.rows, &self.index[..key.len()], key)?
            .into_iter()
            .cloned()
            .collect();

        Ok(Self {
            rows,
            index: self.index.clone(),
        })
    }

    /// Like [`Table::select`], but a key with no rows is an error.
    pub fn loc(&self, key: &[Value]) -> Result<Self> {
        let selected = self.select(key)?;
        if selected.is_empty() {
            let key = format_key(key);
            warn!(%key, "no rows for key");
            return Err(FipsError::KeyNotFound { key });
        }
        Ok(selected)
    }

    /// Rows matching a predicate, keeping the index.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&R) -> bool,
    {
        Self {
            rows: self.rows.iter().filter(|row| predicate(row)).cloned().collect(),
            index: self.index.clone(),
        }
    }
}

impl<'a, R: Record> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Render an index key as `[CA, Alameda]`.
pub fn format_key(key: &[Value]) -> String {
    let parts: Vec<String> = key.iter().map(|value| value.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountyRecord, StateColumn, StateRecord};
    use crate::store::{county_records, state_records, StateSet};

    fn states() -> Table<StateRecord> {
        Table::new(state_records(StateSet::all()))
    }

    fn counties() -> Table<CountyRecord> {
        Table::new(county_records().unwrap())
    }

    #[test]
    fn test_set_index_and_loc() -> Result<()> {
        let table = states().set_index(&["ST"])?;
        assert_eq!(table.index(), &[StateColumn::St]);
        assert!(!table.data_columns().contains(&StateColumn::St));

        let california = table.loc(&[Value::from("CA")])?;
        assert_eq!(california.len(), 1);
        assert_eq!(california.first().unwrap().fips, "06");
        Ok(())
    }

    #[test]
    fn test_set_index_unknown_column() {
        let err = states().set_index(&["COUNTY"]).unwrap_err();
        assert!(matches!(err, FipsError::UnknownColumn(_)));
    }

    #[test]
    fn test_sort_index() -> Result<()> {
        let table = states().set_index(&["ST"])?.sort_index();
        let codes: Vec<&str> = table.iter().map(|r| r.st.as_str()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert_eq!(codes[0], "AB");
        Ok(())
    }

    #[test]
    fn test_sort_without_index_keeps_order() {
        let table = states().sort_index();
        assert_eq!(table.first().unwrap().st, "AL");
    }

    #[test]
    fn test_loc_missing_key() -> Result<()> {
        let table = states().set_index(&["ST"])?;
        assert!(table.select(&[Value::from("ZZ")])?.is_empty());
        assert!(matches!(
            table.loc(&[Value::from("ZZ")]),
            Err(FipsError::KeyNotFound { key }) if key == "[ZZ]"
        ));
        Ok(())
    }

    #[test]
    fn test_partial_key_on_multi_index() -> Result<()> {
        let table = counties().set_index(&["ST", "COUNTY"])?.sort_index();

        let delaware = table.loc(&[Value::from("DE")])?;
        let names: Vec<&str> = delaware.iter().map(|r| r.county.as_str()).collect();
        assert_eq!(names, vec!["Kent", "New Castle", "Sussex"]);

        let kent = table.loc(&[Value::from("RI"), Value::from("Kent")])?;
        assert_eq!(kent.len(), 1);
        assert_eq!(kent.first().unwrap().fips, "44003");
        Ok(())
    }

    #[test]
    fn test_key_longer_than_index() -> Result<()> {
        let table = states().set_index(&["ST"])?;
        let err = table
            .select(&[Value::from("CA"), Value::from("06")])
            .unwrap_err();
        assert!(matches!(err, FipsError::KeyArity { expected: 1, found: 2 }));

        assert!(states().select(&[Value::from("CA")]).is_err());
        Ok(())
    }

    #[test]
    fn test_reset_and_duplicate_index_columns() -> Result<()> {
        let table = states().set_index(&["ST", "ST", "FIPS"])?;
        assert_eq!(table.index(), &[StateColumn::St, StateColumn::Fips]);
        assert!(table.reset_index().index().is_empty());
        Ok(())
    }

    #[test]
    fn test_filter() {
        let ercot = states().filter(|r| r.system == "ERCOT");
        assert_eq!(ercot.len(), 1);
        assert_eq!(ercot.first().unwrap().st, "TX");
    }

    #[test]
    fn test_index_key() -> Result<()> {
        let table = counties().set_index(&["ST", "COUNTY"])?;
        let row = table.first().unwrap();
        assert_eq!(
            table.index_key(row),
            vec![Value::from("AL"), Value::from("Autauga")]
        );
        Ok(())
    }
}
