use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::util::date::to_date_only_string;
use crate::util::errors::ValidationError;
use crate::validation::{require_text, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub code: String,
    pub name: String,
    pub city_id: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub address4: Option<String>,
    pub address5: Option<String>,
    /// Taxpayer identification number.
    pub npwp: Option<String>,
    /// Legacy taxable-entrepreneur number.
    pub nppkp: Option<String>,
    pub credit_limit: Option<f64>,
    pub discount: Option<f64>,
    /// Payment term in days.
    pub term: Option<i32>,
    pub bill_to_same: Option<bool>,
    pub bill_to_name: Option<String>,
    pub bill_to_address1: Option<String>,
    pub bill_to_address2: Option<String>,
    pub bill_to_address3: Option<String>,
    pub bill_to_address4: Option<String>,
    pub create_date: Option<String>,
    pub last_date: Option<String>,
    pub is_suspended: Option<bool>,
    pub memo: Option<String>,
    pub image_path: Option<String>,
    pub visit_frequency: Option<i32>,
    pub email: Option<String>,
    pub email2: Option<String>,
    pub email3: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplier {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npwp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nppkp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_same: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_address3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_address4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_suspended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_frequency: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email3: Option<String>,
}

impl Validate for CreateSupplier {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Code", &self.code);
        require_text(&mut errors, "Name", &self.name);
        errors
    }
}

impl EntityForm for CreateSupplier {
    fn to_payload(&self) -> Self {
        Self {
            create_date: to_date_only_string(self.create_date.as_deref()),
            last_date: to_date_only_string(self.last_date.as_deref()),
            ..self.clone()
        }
    }
}

impl From<&Supplier> for CreateSupplier {
    fn from(row: &Supplier) -> Self {
        Self {
            code: row.code.clone(),
            name: row.name.clone(),
            city_id: row.city_id.clone(),
            address1: row.address1.clone(),
            address2: row.address2.clone(),
            address3: row.address3.clone(),
            address4: row.address4.clone(),
            address5: row.address5.clone(),
            npwp: row.npwp.clone(),
            nppkp: row.nppkp.clone(),
            credit_limit: row.credit_limit,
            discount: row.discount,
            term: row.term,
            bill_to_same: row.bill_to_same,
            bill_to_name: row.bill_to_name.clone(),
            bill_to_address1: row.bill_to_address1.clone(),
            bill_to_address2: row.bill_to_address2.clone(),
            bill_to_address3: row.bill_to_address3.clone(),
            bill_to_address4: row.bill_to_address4.clone(),
            create_date: row.create_date.clone(),
            last_date: row.last_date.clone(),
            is_suspended: row.is_suspended,
            memo: row.memo.clone(),
            image_path: row.image_path.clone(),
            visit_frequency: row.visit_frequency,
            email: row.email.clone(),
            email2: row.email2.clone(),
            email3: row.email3.clone(),
        }
    }
}

impl_entity!(
    Supplier => CreateSupplier,
    path: "/suppliers",
    names: ("Supplier", "Suppliers"),
    label: name
);
