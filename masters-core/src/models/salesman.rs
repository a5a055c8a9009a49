use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::util::date::to_date_only_string;
use crate::util::errors::ValidationError;
use crate::validation::{require_text, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salesman {
    pub id: String,
    pub name: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub last_date: Option<String>,
    pub commission: Option<f64>,
    #[serde(default)]
    pub is_suspended: bool,
    pub memo: Option<String>,
    pub image_path: Option<String>,
    pub special: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalesman {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_suspended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
}

impl Validate for CreateSalesman {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Name", &self.name);
        errors
    }
}

impl EntityForm for CreateSalesman {
    fn to_payload(&self) -> Self {
        Self {
            last_date: to_date_only_string(self.last_date.as_deref()),
            ..self.clone()
        }
    }
}

impl From<&Salesman> for CreateSalesman {
    fn from(s: &Salesman) -> Self {
        Self {
            name: s.name.clone(),
            address1: s.address1.clone(),
            address2: s.address2.clone(),
            address3: s.address3.clone(),
            last_date: s.last_date.clone(),
            commission: s.commission,
            is_suspended: Some(s.is_suspended),
            memo: s.memo.clone(),
            image_path: s.image_path.clone(),
            special: s.special.clone(),
        }
    }
}

impl_entity!(
    Salesman => CreateSalesman,
    path: "/salesmen",
    names: ("Salesman", "Salesmen"),
    label: name
);
