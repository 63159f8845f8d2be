#![allow(dead_code)]

use async_trait::async_trait;
use nftcart::domain::currency::Currency;
use nftcart::domain::image::ImageUrl;
use nftcart::domain::item::{ItemDetail, Order, Price};
use nftcart::domain::ports::{CurrencyDirectory, ImageFetcher, ItemDirectory, OrderDirectory};
use nftcart::error::{CartError, Result};
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

pub const ROOT_FAILURE: &str = "directory unavailable";

/// A marketplace backend with scripted latencies and failures that counts
/// every call it receives.
#[derive(Default)]
pub struct ScriptedMarketplace {
    orders: Mutex<HashMap<String, Vec<String>>>,
    items: HashMap<String, ItemDetail>,
    currencies: Vec<Currency>,
    /// Keyed by item id, currency id or image URL.
    latencies: HashMap<String, Duration>,
    /// Keyed by item id or image URL.
    failing: HashSet<String>,
    fail_root: bool,
    fail_update: bool,
    pub order_fetches: AtomicUsize,
    pub order_updates: AtomicUsize,
    pub item_fetches: AtomicUsize,
    pub image_fetches: AtomicUsize,
    pub absent_urls: AtomicUsize,
}

impl ScriptedMarketplace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(self, id: &str, item_ids: &[&str]) -> Self {
        self.orders.lock().unwrap().insert(
            id.to_string(),
            item_ids.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn with_item(mut self, id: &str, price: Decimal) -> Self {
        self.items.insert(
            id.to_string(),
            ItemDetail {
                id: id.to_string(),
                name: format!("NFT {id}"),
                image_refs: vec![image_url(id)],
                rating: 3,
                price: Price::new(price),
            },
        );
        self
    }

    pub fn with_item_refs(mut self, id: &str, price: Decimal, refs: &[&str]) -> Self {
        self.items.insert(
            id.to_string(),
            ItemDetail {
                id: id.to_string(),
                name: format!("NFT {id}"),
                image_refs: refs.iter().map(|s| s.to_string()).collect(),
                rating: 1,
                price: Price::new(price),
            },
        );
        self
    }

    pub fn with_currency(mut self, id: &str, name: &str) -> Self {
        self.currencies.push(Currency {
            id: id.to_string(),
            title: name.to_lowercase(),
            name: name.to_string(),
            image_ref: image_url(id),
        });
        self
    }

    pub fn with_latency(mut self, key: impl Into<String>, latency: Duration) -> Self {
        self.latencies.insert(key.into(), latency);
        self
    }

    /// Gives every listed key a random latency below `max_ms`.
    pub fn with_random_latencies<'a>(
        mut self,
        keys: impl IntoIterator<Item = &'a str>,
        max_ms: u64,
    ) -> Self {
        let mut rng = rand::thread_rng();
        for key in keys {
            let latency = Duration::from_millis(rng.gen_range(0..max_ms));
            self.latencies.insert(key.to_string(), latency);
        }
        self
    }

    pub fn failing(mut self, key: impl Into<String>) -> Self {
        self.failing.insert(key.into());
        self
    }

    pub fn failing_root(mut self) -> Self {
        self.fail_root = true;
        self
    }

    pub fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn member_fetches(&self) -> usize {
        self.item_fetches.load(Ordering::SeqCst) + self.image_fetches.load(Ordering::SeqCst)
    }

    async fn delay(&self, key: &str) {
        if let Some(latency) = self.latencies.get(key) {
            sleep(*latency).await;
        }
    }

    fn check(&self, key: &str) -> Result<()> {
        if self.failing.contains(key) {
            Err(CartError::Network(format!("fetch failed: {key}")))
        } else {
            Ok(())
        }
    }
}

pub fn image_url(id: &str) -> String {
    format!("https://cdn.example/{id}.png")
}

#[async_trait]
impl OrderDirectory for ScriptedMarketplace {
    async fn fetch(&self, order_id: &str) -> Result<Order> {
        self.order_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_root {
            return Err(CartError::Network(ROOT_FAILURE.to_string()));
        }
        let item_ids = self
            .orders
            .lock()
            .unwrap()
            .get(order_id)
            .cloned()
            .ok_or_else(|| CartError::not_found("order", order_id))?;
        Ok(Order::new(order_id, item_ids))
    }

    async fn update(&self, order_id: &str, item_ids: Vec<String>) -> Result<()> {
        self.order_updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_update {
            return Err(CartError::Network(ROOT_FAILURE.to_string()));
        }
        self.orders
            .lock()
            .unwrap()
            .insert(order_id.to_string(), item_ids);
        Ok(())
    }
}

#[async_trait]
impl ItemDirectory for ScriptedMarketplace {
    async fn get(&self, item_id: &str) -> Result<ItemDetail> {
        self.item_fetches.fetch_add(1, Ordering::SeqCst);
        self.delay(item_id).await;
        self.check(item_id)?;
        self.items
            .get(item_id)
            .cloned()
            .ok_or_else(|| CartError::not_found("nft", item_id))
    }
}

#[async_trait]
impl CurrencyDirectory for ScriptedMarketplace {
    async fn list(&self) -> Result<Vec<Currency>> {
        if self.fail_root {
            return Err(CartError::Network(ROOT_FAILURE.to_string()));
        }
        Ok(self.currencies.clone())
    }
}

#[async_trait]
impl ImageFetcher for ScriptedMarketplace {
    /// An absent URL yields an empty payload, like a placeholder image.
    async fn fetch(&self, url: Option<ImageUrl>) -> Result<Vec<u8>> {
        self.image_fetches.fetch_add(1, Ordering::SeqCst);
        let Some(url) = url else {
            self.absent_urls.fetch_add(1, Ordering::SeqCst);
            return Ok(Vec::new());
        };
        self.delay(url.as_str()).await;
        self.check(url.as_str())?;
        Ok(url.as_str().as_bytes().to_vec())
    }
}
