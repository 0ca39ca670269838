use crate::models::Value;
use std::fmt;

/// Column-name to value criteria for single-record resolution.
///
/// Behaves like a mapping: setting a column twice keeps the last value, and
/// two criteria with the same terms in a different order select the same
/// rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    terms: Vec<(String, Value)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.terms.iter_mut().find(|(name, _)| *name == column) {
            Some(term) => term.1 = value,
            None => self.terms.push((column, value)),
        }
    }

    pub fn columns(&self) -> Vec<&str> {
        self.terms.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Value> {
        self.terms.iter().map(|(_, value)| value.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Criteria
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut criteria = Criteria::new();
        for (column, value) in iter {
            criteria.set(column, value);
        }
        criteria
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Value::Text(text) => write!(f, "{}={:?}", name, text)?,
                other => write!(f, "{}={}", name, other)?,
            }
        }
        write!(f, "}}")
    }
}
