use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::date::{to_date_only_string, today};

/// Salesman recorded on opening invoices entered from a party screen.
pub const DEFAULT_SALESMAN_ID: &str = "..default..............";

/// Which party an opening invoice belongs to. Selects the
/// `/invoices/{kind}/{id}` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
    Customer,
    Supplier,
}

impl PartyKind {
    pub fn as_path(&self) -> &'static str {
        match self {
            PartyKind::Customer => "customer",
            PartyKind::Supplier => "supplier",
        }
    }
}

impl fmt::Display for PartyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Opening invoice as listed under a customer or supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyInvoice {
    pub id: Option<String>,
    pub invoice: String,
    pub date: Option<String>,
    pub warehouse: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<f64>,
    pub remark: Option<String>,
    /// Remaining (unpaid) amount.
    pub rem: Option<f64>,
}

/// One row of the invoice grid inside the party dialog. Every field may be
/// blank while the user is typing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableInvoice {
    pub id: Option<String>,
    pub invoice: Option<String>,
    pub date: Option<String>,
    pub warehouse: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<f64>,
    pub remark: Option<String>,
    pub rem: Option<f64>,
}

impl EditableInvoice {
    /// A fresh unsaved row dated today.
    pub fn blank() -> Self {
        Self {
            invoice: Some(String::new()),
            date: Some(today().format("%Y-%m-%d").to_string()),
            ..Default::default()
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Reference, date, warehouse, currency and a positive amount are all
    /// present.
    pub fn is_complete(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.invoice)
            && filled(&self.date)
            && filled(&self.warehouse)
            && filled(&self.currency)
            && self.amount.is_some_and(|a| a > 0.0)
    }

    /// Bulk-save body for this row. Callers validate first; blank fields are
    /// sent as empty strings or zero rather than failing here.
    pub fn to_payload(&self) -> InvoicePayload {
        let date = self
            .date
            .as_deref()
            .map(|raw| to_date_only_string(raw).unwrap_or_else(|| raw.to_string()))
            .unwrap_or_default();

        InvoicePayload {
            id: self.id.clone().filter(|id| !id.is_empty()),
            ref_no: self.invoice.as_deref().unwrap_or_default().trim().to_string(),
            date,
            warehouse_id: self.warehouse.clone().unwrap_or_default(),
            exchange_id: self.currency.clone().unwrap_or_default(),
            value: self.amount.unwrap_or_default(),
            remark: self.remark.clone(),
            salesman_id: DEFAULT_SALESMAN_ID.to_string(),
            opening: 1,
        }
    }
}

impl From<&PartyInvoice> for EditableInvoice {
    fn from(inv: &PartyInvoice) -> Self {
        Self {
            id: inv.id.clone(),
            invoice: Some(inv.invoice.clone()),
            date: inv.date.as_deref().and_then(to_date_only_string),
            warehouse: inv.warehouse.clone().filter(|w| !w.is_empty()),
            currency: inv.currency.clone().filter(|c| !c.is_empty()),
            amount: inv.amount.filter(|a| *a != 0.0),
            remark: inv.remark.clone().filter(|r| !r.is_empty()),
            rem: inv.rem,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub ref_no: String,
    pub date: String,
    pub warehouse_id: String,
    pub exchange_id: String,
    pub value: f64,
    pub remark: Option<String>,
    pub salesman_id: String,
    pub opening: u8,
}
