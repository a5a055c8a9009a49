use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::util::errors::ValidationError;
use crate::validation::{require_text, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub description: String,
    pub serial_number: Option<String>,
    /// Unit code reported to the tax authority.
    pub core_tax: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnit {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_tax: Option<String>,
}

impl Validate for CreateUnit {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Description", &self.description);
        errors
    }
}

impl EntityForm for CreateUnit {}

impl From<&Unit> for CreateUnit {
    fn from(unit: &Unit) -> Self {
        Self {
            description: unit.description.clone(),
            serial_number: unit.serial_number.clone(),
            core_tax: unit.core_tax.clone(),
        }
    }
}

impl_entity!(
    Unit => CreateUnit,
    path: "/units",
    names: ("Unit", "Units"),
    label: description,
    serial: serial_number
);
