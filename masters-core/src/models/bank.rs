use serde::{Deserialize, Serialize};

use super::EntityForm;
use crate::util::errors::ValidationError;
use crate::validation::{require_text, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: String,
    pub description: String,
    /// General-ledger account code.
    pub gl: Option<String>,
    pub account: Option<String>,
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBank {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

impl Validate for CreateBank {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "Description", &self.description);
        errors
    }
}

impl EntityForm for CreateBank {}

impl From<&Bank> for CreateBank {
    fn from(bank: &Bank) -> Self {
        Self {
            description: bank.description.clone(),
            gl: bank.gl.clone(),
            account: bank.account.clone(),
            serial_number: bank.serial_number.clone(),
        }
    }
}

impl_entity!(
    Bank => CreateBank,
    path: "/banks",
    names: ("Bank", "Banks"),
    label: description,
    serial: serial_number
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;

    #[test]
    fn blank_description_is_rejected() {
        let form = CreateBank {
            description: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), vec![ValidationError::required("Description")]);
    }

    #[test]
    fn patch_omits_unset_fields() {
        let form = CreateBank {
            description: "BCA".to_string(),
            gl: Some("1-100".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json, serde_json::json!({"description": "BCA", "gl": "1-100"}));
    }

    #[test]
    fn edit_form_copies_row() {
        let bank: Bank = serde_json::from_value(serde_json::json!({
            "id": "b1",
            "description": "Mandiri",
            "gl": null,
            "account": "123",
            "serialNumber": "02"
        }))
        .unwrap();

        assert_eq!(bank.serial_number(), Some("02"));
        let form = bank.to_form();
        assert_eq!(form.description, "Mandiri");
        assert_eq!(form.account.as_deref(), Some("123"));
        assert_eq!(Bank::RESOURCE_PATH, "/banks");
    }
}
