//! Application layer: the aggregators that turn directory lookups into view states.
//!
//! Both aggregators share the `FanOut` join, which runs one tokio task per list
//! member and collects the results in a per-call accumulation context.

pub mod cart;
pub mod config;
pub mod fan_out;
pub mod payment;
