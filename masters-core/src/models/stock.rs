use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::lookup::Keyed;
use crate::util::errors::ValidationError;
use crate::validation::{require_text, Validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxOption {
    #[default]
    Tax,
    #[serde(rename = "Tax Free")]
    TaxFree,
    #[serde(rename = "Non Tax")]
    NonTax,
}

/// One unit-specific price row of a stock item ("Widget per Box" vs.
/// "Widget per Piece").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPriceRow {
    pub stock_code: String,
    pub unit: String,
    /// How many of the smallest unit this unit holds.
    pub factor: f64,
    pub purchase: f64,
    pub wholesale: f64,
    pub retail: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_dollar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price4: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price5: Option<f64>,
    #[serde(default)]
    pub is_key: bool,
}

impl Default for StockPriceRow {
    fn default() -> Self {
        Self {
            stock_code: String::new(),
            unit: "Pcs".to_string(),
            factor: 1.0,
            purchase: 0.0,
            wholesale: 0.0,
            retail: 0.0,
            price_dollar: None,
            price3: None,
            price4: None,
            price5: None,
            is_key: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockDetail {
    pub stock_code: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wholesale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_dollar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price4: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price5: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_key: Option<bool>,
}

/// A (stock, unit) pairing offered by the lookup dialog when picking the
/// item of an opening-balance or invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetailLookup {
    pub id: String,
    pub stock_id: String,
    pub stock_name: String,
    pub stock_code: String,
    /// Unit id.
    pub unit: String,
    pub unit_description: Option<String>,
    #[serde(default)]
    pub purchase: f64,
}

impl StockDetailLookup {
    /// Case-insensitive match on code, name or unit description.
    pub fn matches(&self, search: &str) -> bool {
        let search = search.trim().to_lowercase();
        if search.is_empty() {
            return true;
        }
        self.stock_code.to_lowercase().contains(&search)
            || self.stock_name.to_lowercase().contains(&search)
            || self
                .unit_description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&search))
    }
}

impl Keyed for StockDetailLookup {
    fn key(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.stock_name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQtyTier {
    pub qty_from: f64,
    pub qty_to: Option<f64>,
    pub price: Option<f64>,
    pub discount_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[serde(alias = "cSTKpk")]
    pub id: String,
    pub stock_name: String,
    pub stock_group_id: Option<String>,
    pub brand: Option<String>,
    pub supplier: Option<String>,
    pub purchase_price: Option<f64>,
    pub purchase_price_dollar: Option<f64>,
    pub cogs: Option<f64>,
    pub gross_price: Option<f64>,
    #[serde(default)]
    pub tax_option: TaxOption,
    pub min_stock: Option<f64>,
    pub max_stock: Option<f64>,
    #[serde(default)]
    pub is_service: bool,
    #[serde(default)]
    pub is_consignment: bool,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub is_discontinue: bool,
    pub part_no1: Option<String>,
    pub part_no2: Option<String>,
    pub image_path: Option<String>,
    pub memo: Option<String>,
    #[serde(default)]
    pub price_by_qty: bool,
    #[serde(default)]
    pub price_qty_tiers: Vec<PriceQtyTier>,
    #[serde(default)]
    pub stock_details: Vec<StockPriceRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStock {
    pub stock_name: String,
    pub tax_option: TaxOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price_dollar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cogs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_consignment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_suspended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_discontinue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_no1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_no2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_by_qty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_qty_tiers: Option<Vec<PriceQtyTier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_details: Option<Vec<StockPriceRow>>,
}

impl CreateStock {
    /// Appends a blank price row (one piece, zero prices).
    pub fn add_price_row(&mut self) {
        self.stock_details
            .get_or_insert_with(Vec::new)
            .push(StockPriceRow::default());
    }

    pub fn remove_price_row(&mut self, index: usize) -> Option<StockPriceRow> {
        let rows = self.stock_details.as_mut()?;
        (index < rows.len()).then(|| rows.remove(index))
    }
}

impl Validate for CreateStock {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Stock Name", &self.stock_name);
        errors
    }
}

impl EntityForm for CreateStock {}

impl From<&Stock> for CreateStock {
    fn from(stock: &Stock) -> Self {
        Self {
            stock_name: stock.stock_name.clone(),
            tax_option: stock.tax_option,
            stock_group_id: stock.stock_group_id.clone(),
            brand: stock.brand.clone(),
            supplier: stock.supplier.clone(),
            purchase_price: stock.purchase_price,
            purchase_price_dollar: stock.purchase_price_dollar,
            cogs: stock.cogs,
            gross_price: stock.gross_price,
            min_stock: stock.min_stock,
            max_stock: stock.max_stock,
            is_service: Some(stock.is_service),
            is_consignment: Some(stock.is_consignment),
            is_suspended: Some(stock.is_suspended),
            is_discontinue: Some(stock.is_discontinue),
            part_no1: stock.part_no1.clone(),
            part_no2: stock.part_no2.clone(),
            image_path: stock.image_path.clone(),
            memo: stock.memo.clone(),
            price_by_qty: Some(stock.price_by_qty),
            price_qty_tiers: Some(stock.price_qty_tiers.clone()),
            stock_details: Some(stock.stock_details.clone()),
        }
    }
}

impl_entity!(
    Stock => CreateStock,
    path: "/stocks",
    names: ("Stock", "Stocks"),
    label: stock_name
);
