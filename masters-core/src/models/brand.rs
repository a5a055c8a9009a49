use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::util::errors::ValidationError;
use crate::validation::{require_text, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub description: String,
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrand {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

impl Validate for CreateBrand {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Description", &self.description);
        errors
    }
}

impl EntityForm for CreateBrand {}

impl From<&Brand> for CreateBrand {
    fn from(row: &Brand) -> Self {
        Self {
            description: row.description.clone(),
            serial_number: row.serial_number.clone(),
        }
    }
}

impl_entity!(
    Brand => CreateBrand,
    path: "/brands",
    names: ("Brand", "Brands"),
    label: description,
    serial: serial_number
);
