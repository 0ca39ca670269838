pub mod county;
pub mod state;
pub mod value;

pub use county::{CountyColumn, CountyRecord};
pub use state::{StateColumn, StateRecord};
pub use value::Value;

use crate::error::{FipsError, Result};
use crate::utils::constants::RO_SEPARATOR;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A column of a fixed table schema.
///
/// Columns parse from their exact upper-case names (`"ST"`, `"FIPS"`, ...);
/// any other name is an [`FipsError::UnknownColumn`]. The derived ordering
/// follows the schema's declaration order.
pub trait Column:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr<Err = FipsError> + 'static
{
    /// Every column, in schema order.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn parse_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|column| column.name() == name)
            .ok_or_else(|| FipsError::UnknownColumn(name.to_string()))
    }
}

/// A row of a reference table with a known, enumerated column set.
pub trait Record: Clone + fmt::Debug + Serialize {
    type Column: Column;

    fn value(&self, column: Self::Column) -> Value;

    /// Look up a column by name.
    fn value_by_name(&self, name: &str) -> Result<Value> {
        Ok(self.value(name.parse::<Self::Column>()?))
    }

    /// Plain mapping of column name to scalar value.
    fn to_dict(&self) -> BTreeMap<&'static str, Value> {
        Self::Column::ALL
            .iter()
            .map(|column| (column.name(), self.value(*column)))
            .collect()
    }
}

pub(crate) fn serialize_flag<S: Serializer>(
    flag: &bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

pub(crate) fn serialize_joined<S: Serializer>(
    values: &[String],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&values.join(RO_SEPARATOR))
}
