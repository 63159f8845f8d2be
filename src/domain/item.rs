use super::image::Image;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// The price of an NFT, in the marketplace's quote currency.
///
/// Wraps `rust_decimal::Decimal` so that cart totals are summed exactly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// An order as held by the order directory: its id and the NFTs in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "nfts", default)]
    pub item_ids: Vec<String>,
}

impl Order {
    pub fn new(id: impl Into<String>, item_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            item_ids,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }
}

/// NFT detail record returned by the item directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: String,
    pub name: String,
    #[serde(rename = "images", default)]
    pub image_refs: Vec<String>,
    pub rating: i32,
    pub price: Price,
}

/// An NFT merged with its fetched image, ready for a cart row.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub id: String,
    pub name: String,
    pub image: Option<Image>,
    pub rating: i32,
    pub price: Price,
}

impl DisplayItem {
    pub fn new(detail: ItemDetail, image: Option<Image>) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            image,
            rating: detail.rating,
            price: detail.price,
        }
    }
}
