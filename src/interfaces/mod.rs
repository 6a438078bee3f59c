//! Edges of the station: CSV customer input, CSV and JSON report output.

pub mod csv;
pub mod json;
