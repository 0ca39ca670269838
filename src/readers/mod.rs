pub mod county_reader;

pub use county_reader::{CountyReader, CountyRow};
