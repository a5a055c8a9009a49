use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::util::errors::ValidationError;
use crate::validation::{require_text, Validate};

/// A stock location. Besides its description it carries the document
/// numbering heads ("kepala seri") and reference counters used when the
/// warehouse issues invoices, plus bin locations and stock limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub description: String,
    pub serial_number: Option<String>,
    pub ref_no: Option<String>,
    pub kepala_seri: Option<String>,
    pub option: Option<i32>,
    pub cr: Option<f64>,
    pub kepala_seri1: Option<String>,
    pub kepala_seri2: Option<String>,
    pub kepala_seri3: Option<String>,
    pub kepala_seri4: Option<String>,
    pub kepala_seri5: Option<String>,
    pub ref_no1: Option<String>,
    pub ref_no2: Option<String>,
    pub ref_no3: Option<String>,
    pub ref_no4: Option<String>,
    pub ref_no5: Option<String>,
    pub lok1: Option<String>,
    pub lok2: Option<String>,
    pub lok3: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub slipat: Option<f64>,
    pub kepala_seri1b: Option<String>,
    pub kepala_seri1c: Option<String>,
    pub ref_no1b: Option<String>,
    pub ref_no1c: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouse {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepala_seri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepala_seri1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepala_seri2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepala_seri3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepala_seri4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepala_seri5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lok1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lok2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lok3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slipat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepala_seri1b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepala_seri1c: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no1b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no1c: Option<String>,
}

impl Validate for CreateWarehouse {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Description", &self.description);
        errors
    }
}

impl EntityForm for CreateWarehouse {}

impl From<&Warehouse> for CreateWarehouse {
    fn from(w: &Warehouse) -> Self {
        Self {
            description: w.description.clone(),
            serial_number: w.serial_number.clone(),
            ref_no: w.ref_no.clone(),
            kepala_seri: w.kepala_seri.clone(),
            option: w.option.clone(),
            cr: w.cr.clone(),
            kepala_seri1: w.kepala_seri1.clone(),
            kepala_seri2: w.kepala_seri2.clone(),
            kepala_seri3: w.kepala_seri3.clone(),
            kepala_seri4: w.kepala_seri4.clone(),
            kepala_seri5: w.kepala_seri5.clone(),
            ref_no1: w.ref_no1.clone(),
            ref_no2: w.ref_no2.clone(),
            ref_no3: w.ref_no3.clone(),
            ref_no4: w.ref_no4.clone(),
            ref_no5: w.ref_no5.clone(),
            lok1: w.lok1.clone(),
            lok2: w.lok2.clone(),
            lok3: w.lok3.clone(),
            min: w.min.clone(),
            max: w.max.clone(),
            slipat: w.slipat.clone(),
            kepala_seri1b: w.kepala_seri1b.clone(),
            kepala_seri1c: w.kepala_seri1c.clone(),
            ref_no1b: w.ref_no1b.clone(),
            ref_no1c: w.ref_no1c.clone(),
        }
    }
}

impl_entity!(
    Warehouse => CreateWarehouse,
    path: "/warehouses",
    names: ("Warehouse", "Warehouses"),
    label: description,
    serial: serial_number
);
