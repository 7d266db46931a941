//! Per-record checks. Each returns the issues of one record.

pub mod error;
pub mod macroseismic;
pub mod main;
pub mod phase;
pub mod structure;
pub mod text;
