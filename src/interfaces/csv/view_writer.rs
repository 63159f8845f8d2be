use crate::domain::currency::DisplayCurrency;
use crate::domain::item::DisplayItem;
use crate::domain::view_state::{CartViewState, PaymentViewState};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CartRow<'a> {
    id: &'a str,
    name: &'a str,
    rating: i32,
    price: Decimal,
    image_bytes: usize,
}

impl<'a> From<&'a DisplayItem> for CartRow<'a> {
    fn from(item: &'a DisplayItem) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            rating: item.rating,
            price: item.price.value(),
            image_bytes: item.image.as_ref().map_or(0, |image| image.len()),
        }
    }
}

#[derive(Serialize)]
struct CurrencyRow<'a> {
    id: &'a str,
    title: &'a str,
    name: &'a str,
    image_bytes: usize,
}

impl<'a> From<&'a DisplayCurrency> for CurrencyRow<'a> {
    fn from(currency: &'a DisplayCurrency) -> Self {
        Self {
            id: &currency.id,
            title: &currency.title,
            name: &currency.name,
            image_bytes: currency.image.as_ref().map_or(0, |image| image.len()),
        }
    }
}

/// Writes view states as CSV to any `Write` sink (e.g. stdout).
pub struct ViewWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ViewWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    /// One row per NFT followed by a `total` row. An empty cart writes the
    /// header and a zero total.
    pub fn write_cart(&mut self, state: &CartViewState) -> Result<()> {
        self.writer
            .write_record(["id", "name", "rating", "price", "image_bytes"])?;
        for item in state.items() {
            self.writer.serialize(CartRow::from(item))?;
        }
        let total = state.total().value().to_string();
        self.writer.write_record(["total", "", "", total.as_str(), ""])?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_payment(&mut self, state: &PaymentViewState) -> Result<()> {
        self.writer
            .write_record(["id", "title", "name", "image_bytes"])?;
        for currency in state.currencies() {
            self.writer.serialize(CurrencyRow::from(currency))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
