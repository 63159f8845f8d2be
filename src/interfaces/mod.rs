//! Adapters between the aggregators and the outside world: the JSON catalog that
//! seeds the in-memory backend and the CSV rendering of view states.

pub mod csv;
pub mod json;
