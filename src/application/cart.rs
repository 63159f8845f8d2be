use super::config::AggregatorConfig;
use super::fan_out::FanOut;
use crate::domain::image::{Image, ImageUrl};
use crate::domain::item::DisplayItem;
use crate::domain::ports::{ImageFetcherRef, ItemDirectoryRef, OrderDirectoryRef};
use crate::domain::view_state::CartViewState;
use crate::error::Result;
use tracing::{debug, info};

const FETCH_LABEL: &str = "fetch-nft";

/// Builds the cart view state for an order.
///
/// `CartAggregator` resolves every NFT of an order (detail, then image) on its
/// own task and delivers the priced list once all of them have arrived. Each call
/// owns its accumulation context, so overlapping calls do not interfere.
pub struct CartAggregator {
    orders: OrderDirectoryRef,
    items: ItemDirectoryRef,
    images: ImageFetcherRef,
    fan_out: FanOut,
}

impl CartAggregator {
    pub fn new(
        orders: OrderDirectoryRef,
        items: ItemDirectoryRef,
        images: ImageFetcherRef,
    ) -> Self {
        Self::with_config(orders, items, images, AggregatorConfig::default())
    }

    pub fn with_config(
        orders: OrderDirectoryRef,
        items: ItemDirectoryRef,
        images: ImageFetcherRef,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            orders,
            items,
            images,
            fan_out: FanOut::new(FETCH_LABEL, config.ordering),
        }
    }

    /// Fetches the order and resolves all of its NFTs.
    ///
    /// Directory and image errors are returned unchanged.
    pub async fn fetch_order(&self, order_id: &str) -> Result<CartViewState> {
        let order = self.orders.fetch(order_id).await?;
        if order.is_empty() {
            info!(order_id, "order is empty");
            return Ok(CartViewState::Empty);
        }

        debug!(order_id, count = order.item_ids.len(), "resolving order items");
        let items = self.items.clone();
        let images = self.images.clone();
        let resolved = self
            .fan_out
            .gather(order.item_ids, move |item_id| {
                resolve_item(items.clone(), images.clone(), item_id)
            })
            .await?;

        let state = CartViewState::loaded(resolved);
        info!(
            order_id,
            items = state.items().len(),
            total = %state.total().value(),
            "order loaded"
        );
        Ok(state)
    }

    /// Replaces the NFTs of an order, then reloads it from the directory.
    pub async fn change_order(&self, order_id: &str, item_ids: Vec<String>) -> Result<CartViewState> {
        debug!(order_id, count = item_ids.len(), "updating order");
        self.orders.update(order_id, item_ids).await?;
        self.fetch_order(order_id).await
    }
}

async fn resolve_item(
    items: ItemDirectoryRef,
    images: ImageFetcherRef,
    item_id: String,
) -> Result<DisplayItem> {
    let detail = items.get(&item_id).await?;
    let url = ImageUrl::from_first(&detail.image_refs);
    let bytes = images.fetch(url).await?;
    Ok(DisplayItem::new(detail, Image::decode(bytes)))
}
