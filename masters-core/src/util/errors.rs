use thiserror::Error;

/// Client-side violations that block a submission before any request is made.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("Please fill all required invoice fields (Invoice, Date, Warehouse, Currency, Amount > 0)")]
    InvalidInvoiceLines { rows: Vec<usize> },

    #[error("Duplicate invoice number(s) found: {}", .0.join(", "))]
    DuplicateInvoiceNumbers(Vec<String>),

    #[error("Add at least one stock line with quantity > 0")]
    NoValidLines,

    #[error("Invalid date")]
    InvalidDate,

    #[error("Line {index} does not exist")]
    LineOutOfRange { index: usize },
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        Self::Required { field }
    }

    /// Notification title for this violation class.
    pub fn summary(&self) -> &'static str {
        match self {
            ValidationError::InvalidInvoiceLines { .. } => "Validation Error",
            ValidationError::DuplicateInvoiceNumbers(_) => "Duplicate Invoice",
            _ => "Validation",
        }
    }
}
