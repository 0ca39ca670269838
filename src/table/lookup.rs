use crate::error::{FipsError, Result};
use crate::models::{Column, Record, Value};
use tracing::debug;

/// Select the rows whose key columns equal `values`, matched positionally.
///
/// Column names are resolved against the record schema first, so an unknown
/// name fails with [`FipsError::UnknownColumn`] even when `rows` is empty.
/// No match is an empty result, not an error; uniqueness is the caller's
/// concern.
pub fn lookup<'a, R, S>(rows: &'a [R], columns: &[S], values: &[Value]) -> Result<Vec<&'a R>>
where
    R: Record,
    S: AsRef<str>,
{
    let columns = columns
        .iter()
        .map(|name| R::Column::parse_name(name.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    lookup_columns(rows, &columns, values)
}

/// Typed form of [`lookup`].
pub fn lookup_columns<'a, R: Record>(
    rows: &'a [R],
    columns: &[R::Column],
    values: &[Value],
) -> Result<Vec<&'a R>> {
    if columns.is_empty() || columns.len() != values.len() {
        return Err(FipsError::KeyArity {
            expected: columns.len(),
            found: values.len(),
        });
    }

    let matches: Vec<&R> = rows
        .iter()
        .filter(|row| {
            columns
                .iter()
                .zip(values)
                .all(|(column, value)| row.value(*column) == *value)
        })
        .collect();

    debug!(
        columns = ?columns,
        matched = matches.len(),
        scanned = rows.len(),
        "lookup"
    );

    Ok(matches)
}
