pub mod coerce;

pub use coerce::{parse_float, parse_int};
