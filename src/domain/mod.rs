//! Domain model of the cart and checkout screens.
//!
//! Directory records (`Order`, `ItemDetail`, `Currency`) are merged with their
//! fetched images into display entities, which are then collected into the view
//! states delivered to the presentation layer.

pub mod currency;
pub mod image;
pub mod item;
pub mod ports;
pub mod view_state;
