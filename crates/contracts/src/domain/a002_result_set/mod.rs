pub mod aggregate;

pub use aggregate::{IntakeRow, ResultRow, RowId};
