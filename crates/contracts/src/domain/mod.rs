pub mod a001_component;
pub mod a002_result_set;
