use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::util::date::to_date_only_string;
use crate::util::errors::ValidationError;
use crate::validation::{require_optional_text, require_text, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
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
    pub outstanding_limit: Option<f64>,
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
    pub zip: Option<String>,
    pub telephone: Option<String>,
    pub birthday: Option<String>,
    pub religion: Option<String>,
    pub distance: Option<f64>,
    pub freight: Option<f64>,
    pub price_type: Option<PriceType>,
    pub salesman_id: Option<String>,
    /// 0 = male, 1 = female.
    pub gender: Option<u8>,
    /// National identity number.
    pub nik: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
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
    pub outstanding_limit: Option<f64>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<PriceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salesman_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nik: Option<String>,
}

impl Validate for CreateCustomer {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Code", &self.code);
        require_text(&mut errors, "Name", &self.name);
        require_optional_text(&mut errors, "City", self.city_id.as_deref());
        errors
    }
}

impl EntityForm for CreateCustomer {
    fn blank() -> Self {
        Self::new_default()
    }

    fn to_payload(&self) -> Self {
        Self {
            create_date: to_date_only_string(self.create_date.as_deref()),
            last_date: to_date_only_string(self.last_date.as_deref()),
            birthday: to_date_only_string(self.birthday.as_deref()),
            ..self.clone()
        }
    }
}

impl From<&Customer> for CreateCustomer {
    fn from(row: &Customer) -> Self {
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
            outstanding_limit: row.outstanding_limit,
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
            zip: row.zip.clone(),
            telephone: row.telephone.clone(),
            birthday: row.birthday.clone(),
            religion: row.religion.clone(),
            distance: row.distance,
            freight: row.freight,
            price_type: row.price_type.or(Some(PriceType::All)),
            salesman_id: row.salesman_id.clone(),
            gender: row.gender.or(Some(0)),
            nik: row.nik.clone(),
        }
    }
}

impl_entity!(
    Customer => CreateCustomer,
    path: "/customers",
    names: ("Customer", "Customers"),
    label: name
);

/// Which sales channel prices a customer buys at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PriceType {
    Isx,
    Posx,
    All,
}

impl PriceType {
    pub fn label(self) -> &'static str {
        match self {
            PriceType::Isx => "ISX",
            PriceType::Posx => "POSX",
            PriceType::All => "All",
        }
    }
}

impl From<PriceType> for u8 {
    fn from(value: PriceType) -> Self {
        match value {
            PriceType::Isx => 1,
            PriceType::Posx => 2,
            PriceType::All => 3,
        }
    }
}

impl TryFrom<u8> for PriceType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PriceType::Isx),
            2 => Ok(PriceType::Posx),
            3 => Ok(PriceType::All),
            other => Err(format!("unknown price type {other}")),
        }
    }
}

impl CreateCustomer {
    /// Defaults of a freshly opened "new customer" dialog.
    pub fn new_default() -> Self {
        Self {
            discount: Some(0.0),
            term: Some(0),
            credit_limit: Some(0.0),
            outstanding_limit: Some(0.0),
            is_suspended: Some(false),
            bill_to_same: Some(true),
            price_type: Some(PriceType::All),
            gender: Some(0),
            ..Default::default()
        }
    }
}
