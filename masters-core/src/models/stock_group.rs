use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::util::errors::ValidationError;
use crate::validation::{require_text, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockGroup {
    pub id: String,
    pub description: String,
    pub serial_number: Option<String>,
    pub markup_amount1: Option<f64>,
    pub markup_percentage1: Option<f64>,
    pub markup_amount2: Option<f64>,
    pub markup_percentage2: Option<f64>,
    pub group_value: Option<f64>,
    pub group_value_dollar: Option<f64>,
    pub group_code: Option<String>,
    #[serde(default)]
    pub quantity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockGroup {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_amount1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_percentage1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_amount2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_percentage2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_value_dollar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl Validate for CreateStockGroup {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Description", &self.description);
        errors
    }
}

impl EntityForm for CreateStockGroup {}

impl From<&StockGroup> for CreateStockGroup {
    fn from(group: &StockGroup) -> Self {
        Self {
            description: group.description.clone(),
            serial_number: group.serial_number.clone(),
            markup_amount1: group.markup_amount1,
            markup_percentage1: group.markup_percentage1,
            markup_amount2: group.markup_amount2,
            markup_percentage2: group.markup_percentage2,
            group_value: group.group_value,
            group_value_dollar: group.group_value_dollar,
            group_code: group.group_code.clone(),
            quantity: Some(group.quantity),
        }
    }
}

impl_entity!(
    StockGroup => CreateStockGroup,
    path: "/stockgroups",
    names: ("Stock Group", "Stock Groups"),
    label: description,
    serial: serial_number
);
