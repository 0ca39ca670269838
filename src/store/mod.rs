//! Reference tables: states compiled in, counties from the bundled data or
//! an external county file.
//!
//! Every call builds a fresh, owned copy of the rows; nothing here is cached
//! or shared between callers.

pub mod counties;
pub mod states;

pub use counties::{county_records, county_records_from, CountySource};
pub use states::{state_records, StateSet};
