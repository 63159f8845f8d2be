use crate::domain::currency::Currency;
use crate::domain::item::{ItemDetail, Order};
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryMarketplace;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// Snapshot of a marketplace backend, in the shape of its REST payloads.
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub nfts: Vec<ItemDetail>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    /// Image URL to image payload (stored as text).
    #[serde(default)]
    pub images: HashMap<String, String>,
}

/// Reads a JSON catalog from any `Read` source.
pub struct CatalogReader<R: Read> {
    source: R,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn catalog(self) -> Result<Catalog> {
        Ok(serde_json::from_reader(self.source)?)
    }

    /// Parses the catalog and seeds an in-memory marketplace with it.
    pub async fn into_marketplace(self) -> Result<InMemoryMarketplace> {
        let catalog = self.catalog()?;
        let market = InMemoryMarketplace::new();
        for order in catalog.orders {
            market.insert_order(order).await;
        }
        for item in catalog.nfts {
            market.insert_item(item).await;
        }
        for currency in catalog.currencies {
            market.insert_currency(currency).await;
        }
        for (url, payload) in catalog.images {
            market.insert_image(url, payload.into_bytes()).await;
        }
        Ok(market)
    }
}
