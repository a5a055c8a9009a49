use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::util::errors::ValidationError;
use crate::validation::{require_some, require_text, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    /// Currency code, e.g. `IDR`.
    pub currency: String,
    pub rate: f64,
    #[serde(default)]
    pub tax_rate: f64,
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurrency {
    pub currency: String,
    /// Exchange rate against the base currency. Optional in the form so an
    /// untouched field can be told apart from an explicit zero.
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

impl Validate for CreateCurrency {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Currency", &self.currency);
        require_some(&mut errors, "Rate", self.rate.as_ref());
        errors
    }
}

impl EntityForm for CreateCurrency {}

impl From<&Currency> for CreateCurrency {
    fn from(currency: &Currency) -> Self {
        Self {
            currency: currency.currency.clone(),
            rate: Some(currency.rate),
            tax_rate: Some(currency.tax_rate),
            serial_number: currency.serial_number.clone(),
        }
    }
}

impl_entity!(
    Currency => CreateCurrency,
    path: "/currencies",
    names: ("Currency", "Currencies"),
    label: currency,
    serial: serial_number
);
