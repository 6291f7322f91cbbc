pub mod aggregate;

pub use aggregate::{ComponentRecord, MatchRecord};
