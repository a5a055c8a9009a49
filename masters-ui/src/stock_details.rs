use async_trait::async_trait;

use masters_core::models::{CreateStockDetail, StockDetailLookup, StockPriceRow};

use crate::errors::Result;
use crate::http_client::ApiClient;

/// Source of the (stock, unit) rows offered by the stock lookup dialog.
#[async_trait]
pub trait StockDetailLookupSource: Send + Sync {
    async fn lookup(&self) -> Result<Vec<StockDetailLookup>>;
}

/// Per-unit price rows of stock items.
#[derive(Debug, Clone)]
pub struct StockDetailClient {
    api: ApiClient,
}

impl StockDetailClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_for_stock(&self, stock_id: &str) -> Result<Vec<StockPriceRow>> {
        self.api.get(&format!("/stocks/{}/details", stock_id)).await
    }

    pub async fn create(&self, stock_id: &str, detail: &CreateStockDetail) -> Result<StockPriceRow> {
        self.api
            .post(&format!("/stocks/{}/details", stock_id), detail)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<StockPriceRow> {
        self.api.get(&format!("/stocks/details/{}", id)).await
    }

    pub async fn update(&self, id: &str, detail: &CreateStockDetail) -> Result<StockPriceRow> {
        self.api
            .patch(&format!("/stocks/details/{}", id), detail)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.delete(&format!("/stocks/details/{}", id)).await
    }
}

#[async_trait]
impl StockDetailLookupSource for StockDetailClient {
    async fn lookup(&self) -> Result<Vec<StockDetailLookup>> {
        self.api.get("/stocks/details/lookup").await
    }
}
