//! US state and county reference data.
//!
//! States carry their FIPS code, timezone offset, daylight-saving flag, grid
//! interconnection and reliability organizations; counties add a centroid
//! and its geohash.
//!
//! ```
//! use fips::{County, State};
//!
//! assert_eq!(State::by_abbreviation("CA").unwrap().fips(), "06");
//! assert_eq!(County::by_name("CA", "Alameda").unwrap().geohash(), "9q9q1v");
//! ```

pub mod accessor;
pub mod cli;
pub mod error;
pub mod locale;
pub mod models;
pub mod readers;
pub mod resolver;
pub mod settings;
pub mod store;
pub mod table;
pub mod utils;
pub mod writers;

pub use accessor::{Counties, States};
pub use error::{FipsError, Result};
pub use locale::{lookup_locale, lookup_locale_in, LocaleTable};
pub use models::{CountyRecord, StateRecord, Value};
pub use resolver::{County, State};
pub use store::CountySource;
pub use table::{Criteria, Table};
