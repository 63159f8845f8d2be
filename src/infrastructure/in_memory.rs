use crate::domain::currency::Currency;
use crate::domain::image::ImageUrl;
use crate::domain::item::{ItemDetail, Order};
use crate::domain::ports::{CurrencyDirectory, ImageFetcher, ItemDirectory, OrderDirectory};
use crate::error::{CartError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Catalog {
    orders: HashMap<String, Order>,
    items: HashMap<String, ItemDetail>,
    currencies: Vec<Currency>,
    images: HashMap<String, Vec<u8>>,
}

/// A thread-safe in-memory marketplace backend.
///
/// Implements every directory port plus the image fetcher over one shared
/// `Arc<RwLock<..>>`, so clones observe each other's updates. Backs the CLI and
/// the tests.
#[derive(Default, Clone)]
pub struct InMemoryMarketplace {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryMarketplace {
    /// Creates a new, empty marketplace.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_order(&self, order: Order) {
        let mut catalog = self.catalog.write().await;
        catalog.orders.insert(order.id.clone(), order);
    }

    pub async fn insert_item(&self, item: ItemDetail) {
        let mut catalog = self.catalog.write().await;
        catalog.items.insert(item.id.clone(), item);
    }

    /// Currencies are listed in insertion order.
    pub async fn insert_currency(&self, currency: Currency) {
        let mut catalog = self.catalog.write().await;
        catalog.currencies.push(currency);
    }

    pub async fn insert_image(&self, url: impl Into<String>, bytes: Vec<u8>) {
        let mut catalog = self.catalog.write().await;
        catalog.images.insert(url.into(), bytes);
    }
}

#[async_trait]
impl OrderDirectory for InMemoryMarketplace {
    async fn fetch(&self, order_id: &str) -> Result<Order> {
        let catalog = self.catalog.read().await;
        catalog
            .orders
            .get(order_id)
            .cloned()
            .ok_or_else(|| CartError::not_found("order", order_id))
    }

    async fn update(&self, order_id: &str, item_ids: Vec<String>) -> Result<()> {
        let mut catalog = self.catalog.write().await;
        let order = catalog
            .orders
            .get_mut(order_id)
            .ok_or_else(|| CartError::not_found("order", order_id))?;
        order.item_ids = item_ids;
        Ok(())
    }
}

#[async_trait]
impl ItemDirectory for InMemoryMarketplace {
    async fn get(&self, item_id: &str) -> Result<ItemDetail> {
        let catalog = self.catalog.read().await;
        catalog
            .items
            .get(item_id)
            .cloned()
            .ok_or_else(|| CartError::not_found("nft", item_id))
    }
}

#[async_trait]
impl CurrencyDirectory for InMemoryMarketplace {
    async fn list(&self) -> Result<Vec<Currency>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.currencies.clone())
    }
}

#[async_trait]
impl ImageFetcher for InMemoryMarketplace {
    async fn fetch(&self, url: Option<ImageUrl>) -> Result<Vec<u8>> {
        let url = url.ok_or(CartError::InvalidImageUrl)?;
        let catalog = self.catalog.read().await;
        catalog
            .images
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| CartError::not_found("image", url.as_str()))
    }
}
