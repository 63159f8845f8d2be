use super::currency::DisplayCurrency;
use super::item::{DisplayItem, Price};

/// What the cart screen renders.
#[derive(Debug, Clone, PartialEq)]
pub enum CartViewState {
    Empty,
    Loaded { items: Vec<DisplayItem>, total: Price },
}

impl CartViewState {
    /// Builds the loaded state, totalling the item prices.
    pub fn loaded(items: Vec<DisplayItem>) -> Self {
        let total = items.iter().map(|item| item.price).sum();
        Self::Loaded { items, total }
    }

    pub fn items(&self) -> &[DisplayItem] {
        match self {
            Self::Empty => &[],
            Self::Loaded { items, .. } => items,
        }
    }

    pub fn total(&self) -> Price {
        match self {
            Self::Empty => Price::ZERO,
            Self::Loaded { total, .. } => *total,
        }
    }
}

/// What the payment screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentViewState {
    Empty,
    Loaded { currencies: Vec<DisplayCurrency> },
}

impl PaymentViewState {
    pub fn currencies(&self) -> &[DisplayCurrency] {
        match self {
            Self::Empty => &[],
            Self::Loaded { currencies } => currencies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: &str, price: Price) -> DisplayItem {
        DisplayItem {
            id: id.into(),
            name: id.to_uppercase(),
            image: None,
            rating: 1,
            price,
        }
    }

    #[test]
    fn test_loaded_totals_prices() {
        let state = CartViewState::loaded(vec![
            item("a", Price::new(dec!(10.5))),
            item("b", Price::new(dec!(4.25))),
        ]);
        assert_eq!(state.total(), Price::new(dec!(14.75)));
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn test_empty_has_no_items() {
        assert!(CartViewState::Empty.items().is_empty());
        assert_eq!(CartViewState::Empty.total(), Price::ZERO);
        assert!(PaymentViewState::Empty.currencies().is_empty());
    }
}
