use serde::{Deserialize, Serialize};

/// One stock line of an opening-balance document. `amount` is derived from
/// `qty * purchase_price` by the document, never typed directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningBalanceLine {
    pub stock_detail_id: String,
    pub stock_code: Option<String>,
    pub stock_name: Option<String>,
    /// Display only.
    #[serde(default, skip_serializing)]
    pub prev_stock: Option<f64>,
    pub qty: f64,
    /// Unit id, filled from the chosen stock detail.
    pub unit: Option<String>,
    #[serde(default, skip_serializing)]
    pub unit_description: Option<String>,
    pub purchase_price: f64,
    pub amount: f64,
}

impl OpeningBalanceLine {
    pub fn recompute_amount(&mut self) {
        self.amount = self.qty * self.purchase_price;
    }

    /// Lines with a stock reference, a positive quantity and a non-negative
    /// amount are the only ones sent to the server.
    pub fn is_sendable(&self) -> bool {
        !self.stock_detail_id.trim().is_empty() && self.qty > 0.0 && self.amount >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningBalanceLinePayload {
    pub stock_detail_id: String,
    pub stock_code: Option<String>,
    pub stock_name: Option<String>,
    pub qty: f64,
    pub unit: Option<String>,
    pub purchase_price: f64,
    pub amount: f64,
}

impl From<&OpeningBalanceLine> for OpeningBalanceLinePayload {
    fn from(line: &OpeningBalanceLine) -> Self {
        Self {
            stock_detail_id: line.stock_detail_id.trim().to_string(),
            stock_code: line.stock_code.clone(),
            stock_name: line.stock_name.clone(),
            qty: line.qty,
            unit: line.unit.clone(),
            purchase_price: line.purchase_price,
            amount: line.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpeningBalanceRequest {
    pub ref_no: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub warehouse_id: String,
    pub remark: Option<String>,
    pub lines: Vec<OpeningBalanceLinePayload>,
}

/// Invoice summary returned by create/update and by the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningBalanceSummary {
    pub id: String,
    pub invoice: String,
    pub date: Option<String>,
    pub warehouse: Option<String>,
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: f64,
    pub remark: Option<String>,
    pub rem: Option<f64>,
}

/// A saved document with its lines, used to reopen it for editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningBalanceDetail {
    pub id: String,
    #[serde(alias = "invoice")]
    pub ref_no: String,
    pub date: Option<String>,
    #[serde(alias = "warehouse")]
    pub warehouse_id: Option<String>,
    pub remark: Option<String>,
    #[serde(default)]
    pub lines: Vec<OpeningBalanceLine>,
}
