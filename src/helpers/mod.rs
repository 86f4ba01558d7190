//! Helper functions

pub mod date;
pub mod reading_time;
