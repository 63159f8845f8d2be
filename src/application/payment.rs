use super::config::AggregatorConfig;
use super::fan_out::FanOut;
use crate::domain::currency::{Currency, DisplayCurrency};
use crate::domain::image::{Image, ImageUrl};
use crate::domain::ports::{CurrencyDirectoryRef, ImageFetcherRef};
use crate::domain::view_state::PaymentViewState;
use crate::error::Result;
use tracing::info;

const FETCH_LABEL: &str = "fetch-currency";

/// Builds the payment view state: every supported currency with its icon.
pub struct CurrencyAggregator {
    currencies: CurrencyDirectoryRef,
    images: ImageFetcherRef,
    fan_out: FanOut,
}

impl CurrencyAggregator {
    pub fn new(currencies: CurrencyDirectoryRef, images: ImageFetcherRef) -> Self {
        Self::with_config(currencies, images, AggregatorConfig::default())
    }

    pub fn with_config(
        currencies: CurrencyDirectoryRef,
        images: ImageFetcherRef,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            currencies,
            images,
            fan_out: FanOut::new(FETCH_LABEL, config.ordering),
        }
    }

    pub async fn fetch_currencies(&self) -> Result<PaymentViewState> {
        let listed = self.currencies.list().await?;
        if listed.is_empty() {
            info!("no payment currencies listed");
            return Ok(PaymentViewState::Empty);
        }

        let images = self.images.clone();
        let currencies = self
            .fan_out
            .gather(listed, move |currency| resolve_currency(images.clone(), currency))
            .await?;

        info!(count = currencies.len(), "currencies loaded");
        Ok(PaymentViewState::Loaded { currencies })
    }
}

async fn resolve_currency(images: ImageFetcherRef, currency: Currency) -> Result<DisplayCurrency> {
    let url = ImageUrl::parse(&currency.image_ref);
    let bytes = images.fetch(url).await?;
    Ok(DisplayCurrency::new(currency, Image::decode(bytes)))
}
