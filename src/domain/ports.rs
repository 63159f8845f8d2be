use super::currency::Currency;
use super::image::ImageUrl;
use super::item::{ItemDetail, Order};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait OrderDirectory: Send + Sync {
    async fn fetch(&self, order_id: &str) -> Result<Order>;
    async fn update(&self, order_id: &str, item_ids: Vec<String>) -> Result<()>;
}

#[async_trait]
pub trait ItemDirectory: Send + Sync {
    async fn get(&self, item_id: &str) -> Result<ItemDetail>;
}

#[async_trait]
pub trait CurrencyDirectory: Send + Sync {
    async fn list(&self) -> Result<Vec<Currency>>;
}

/// Fetches raw image bytes. Receives `None` when the reference could not be
/// parsed into a URL and decides itself how to fail.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: Option<ImageUrl>) -> Result<Vec<u8>>;
}

pub type OrderDirectoryRef = Arc<dyn OrderDirectory>;
pub type ItemDirectoryRef = Arc<dyn ItemDirectory>;
pub type CurrencyDirectoryRef = Arc<dyn CurrencyDirectory>;
pub type ImageFetcherRef = Arc<dyn ImageFetcher>;
