pub mod dates;
pub mod classification;
pub mod query;
pub mod alerts;
pub mod json_storage;
pub mod agenda;
