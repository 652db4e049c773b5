//! Export of a projected record set as JSON or CSV text.

pub mod csv;
pub mod json;

pub use csv::records_to_csv;
pub use json::records_to_json;
