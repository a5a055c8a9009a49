use crate::models::EditableInvoice;
use crate::util::errors::ValidationError;

/// Required-field checks run before a form is submitted. An empty result
/// means the form may be sent.
pub trait Validate {
    fn validate(&self) -> Vec<ValidationError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

pub(crate) fn require_text(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::required(field));
    }
}

pub(crate) fn require_some<T>(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: Option<&T>,
) {
    if value.is_none() {
        errors.push(ValidationError::required(field));
    }
}

pub(crate) fn require_optional_text(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: Option<&str>,
) {
    if value.map_or(true, |v| v.trim().is_empty()) {
        errors.push(ValidationError::required(field));
    }
}

/// Checks an editable invoice grid. Reports at most one error per violation
/// class: incomplete rows first, then duplicate invoice numbers.
pub fn validate_invoices(invoices: &[EditableInvoice]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let invalid_rows: Vec<usize> = invoices
        .iter()
        .enumerate()
        .filter(|(_, inv)| !inv.is_complete())
        .map(|(idx, _)| idx)
        .collect();
    if !invalid_rows.is_empty() {
        errors.push(ValidationError::InvalidInvoiceLines { rows: invalid_rows });
    }

    let duplicates = duplicate_invoice_numbers(invoices);
    if !duplicates.is_empty() {
        errors.push(ValidationError::DuplicateInvoiceNumbers(duplicates));
    }

    errors
}

/// Distinct invoice numbers (trimmed, blanks ignored) that occur more than
/// once, in the order their first repeat is seen.
pub fn duplicate_invoice_numbers(invoices: &[EditableInvoice]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    let mut duplicates: Vec<String> = Vec::new();

    for number in invoices
        .iter()
        .filter_map(|inv| inv.invoice.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty())
    {
        if seen.contains(&number) {
            if !duplicates.iter().any(|d| d == number) {
                duplicates.push(number.to_string());
            }
        } else {
            seen.push(number);
        }
    }

    duplicates
}
