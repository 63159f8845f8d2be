use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Order of the members in a delivered view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultOrdering {
    /// Network-completion order.
    #[default]
    Arrival,
    /// Position in the root list (order item ids, currency listing).
    Request,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub ordering: ResultOrdering,
}

impl AggregatorConfig {
    pub fn with_ordering(ordering: ResultOrdering) -> Self {
        Self { ordering }
    }
}
