use super::image::Image;
use serde::{Deserialize, Serialize};

/// A payment currency as listed by the currency directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    pub title: String,
    pub name: String,
    #[serde(rename = "image")]
    pub image_ref: String,
}

/// A currency merged with its fetched icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCurrency {
    pub id: String,
    pub title: String,
    pub name: String,
    pub image: Option<Image>,
}

impl DisplayCurrency {
    pub fn new(currency: Currency, image: Option<Image>) -> Self {
        Self {
            id: currency.id,
            title: currency.title,
            name: currency.name,
            image,
        }
    }
}
