//! Single-record resolution: criteria that must match exactly one row.

pub mod county;
pub mod state;

pub use county::County;
pub use state::State;

use crate::error::{FipsError, Result};
use crate::models::Record;
use crate::table::{lookup, Criteria};
use tracing::debug;

/// Resolve `criteria` to exactly one row of `rows`.
///
/// No match, several matches and an invalid column set all surface as
/// [`FipsError::InvalidKey`]; only the match count in the message tells
/// them apart.
pub(crate) fn resolve_one<R: Record>(rows: &[R], criteria: &Criteria) -> Result<R> {
    let invalid = |matches| FipsError::InvalidKey {
        criteria: criteria.to_string(),
        matches,
    };

    if criteria.is_empty() {
        return Err(invalid(0));
    }

    match lookup(rows, &criteria.columns(), &criteria.values()) {
        Ok(found) if found.len() == 1 => Ok(found[0].clone()),
        Ok(found) => Err(invalid(found.len())),
        Err(err) => {
            debug!(%criteria, error = %err, "criteria rejected");
            Err(invalid(0))
        }
    }
}

/// Map a schema miss on a resolved record to an attribute error.
pub(crate) fn attribute<R: Record>(record: &R, name: &str) -> Result<crate::models::Value> {
    record.value_by_name(name).map_err(|err| match err {
        FipsError::UnknownColumn(name) => FipsError::UnknownAttribute(name),
        other => other,
    })
}
