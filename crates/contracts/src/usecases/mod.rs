pub mod common;
pub mod u101_find_alternatives;
pub mod u102_email_results;
