pub mod constants;
pub mod geohash;

pub use constants::*;
pub use geohash::encode as geohash_encode;
