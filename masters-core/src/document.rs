//! The in-memory stock opening-balance document: a header plus an ordered
//! list of stock lines whose amounts are kept in step with qty and price.

use log::debug;

use crate::models::{
    CreateOpeningBalanceRequest, OpeningBalanceDetail, OpeningBalanceLine,
    OpeningBalanceLinePayload, StockDetailLookup,
};
use crate::util::date::{to_date_only_string, today};
use crate::util::errors::ValidationError;
use crate::validation::Validate;

#[derive(Debug, Clone, PartialEq)]
pub struct OpeningBalanceDocument {
    pub ref_no: String,
    /// Raw date input; normalised to `YYYY-MM-DD` when the request is built.
    pub date: String,
    pub warehouse_id: Option<String>,
    pub remark: String,
    pub lines: Vec<OpeningBalanceLine>,
    /// Set when an existing document was opened; saving then updates it.
    pub loaded_id: Option<String>,
}

impl Default for OpeningBalanceDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl OpeningBalanceDocument {
    /// A blank document dated today.
    pub fn new() -> Self {
        Self {
            ref_no: String::new(),
            date: today().format("%Y-%m-%d").to_string(),
            warehouse_id: None,
            remark: String::new(),
            lines: Vec::new(),
            loaded_id: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replaces the document with a saved one, entering edit-in-place mode.
    pub fn load(&mut self, detail: OpeningBalanceDetail) {
        debug!(
            "Loading opening balance {} with {} lines",
            detail.id,
            detail.lines.len()
        );
        let mut lines = detail.lines;
        for line in &mut lines {
            line.recompute_amount();
        }
        *self = Self {
            ref_no: detail.ref_no,
            date: detail
                .date
                .as_deref()
                .and_then(to_date_only_string)
                .unwrap_or_default(),
            warehouse_id: detail.warehouse_id,
            remark: detail.remark.unwrap_or_default(),
            lines,
            loaded_id: Some(detail.id),
        };
    }

    pub fn is_editing_existing(&self) -> bool {
        self.loaded_id.is_some()
    }

    pub fn add_empty_line(&mut self) {
        self.lines.push(OpeningBalanceLine {
            prev_stock: Some(0.0),
            ..Default::default()
        });
    }

    /// Appends a line for `detail` with quantity 1 at its purchase price.
    pub fn add_from_detail(&mut self, detail: &StockDetailLookup) {
        let mut line = OpeningBalanceLine {
            prev_stock: Some(0.0),
            qty: 1.0,
            ..Default::default()
        };
        apply_detail(&mut line, detail);
        self.lines.push(line);
    }

    /// Points an existing line at another stock detail. The quantity is kept,
    /// or becomes 1 if it was zero.
    pub fn replace_reference(
        &mut self,
        index: usize,
        detail: &StockDetailLookup,
    ) -> Result<(), ValidationError> {
        let line = self.line_mut(index)?;
        if line.qty == 0.0 {
            line.qty = 1.0;
        }
        apply_detail(line, detail);
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> Result<OpeningBalanceLine, ValidationError> {
        if index >= self.lines.len() {
            return Err(ValidationError::LineOutOfRange { index });
        }
        Ok(self.lines.remove(index))
    }

    pub fn set_qty(&mut self, index: usize, qty: f64) -> Result<(), ValidationError> {
        let line = self.line_mut(index)?;
        line.qty = qty;
        line.recompute_amount();
        Ok(())
    }

    pub fn set_purchase_price(&mut self, index: usize, price: f64) -> Result<(), ValidationError> {
        let line = self.line_mut(index)?;
        line.purchase_price = price;
        line.recompute_amount();
        Ok(())
    }

    /// Sum of line amounts, recomputed on every call.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.amount).sum()
    }

    pub fn sendable_lines(&self) -> impl Iterator<Item = &OpeningBalanceLine> {
        self.lines.iter().filter(|line| line.is_sendable())
    }

    /// Validates the document and builds the create/update body from the
    /// sendable lines only.
    pub fn to_request(&self) -> Result<CreateOpeningBalanceRequest, Vec<ValidationError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let date = to_date_only_string(self.date.as_str())
            .ok_or_else(|| vec![ValidationError::InvalidDate])?;
        let remark = self.remark.trim();

        Ok(CreateOpeningBalanceRequest {
            ref_no: self.ref_no.trim().to_string(),
            date,
            warehouse_id: self
                .warehouse_id
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            remark: (!remark.is_empty()).then(|| remark.to_string()),
            lines: self
                .sendable_lines()
                .map(OpeningBalanceLinePayload::from)
                .collect(),
        })
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut OpeningBalanceLine, ValidationError> {
        self.lines
            .get_mut(index)
            .ok_or(ValidationError::LineOutOfRange { index })
    }
}

fn apply_detail(line: &mut OpeningBalanceLine, detail: &StockDetailLookup) {
    line.stock_detail_id = detail.id.clone();
    line.stock_code = Some(detail.stock_code.clone());
    line.stock_name = Some(detail.stock_name.clone());
    line.unit = Some(detail.unit.clone());
    line.unit_description = detail.unit_description.clone();
    line.purchase_price = detail.purchase;
    line.recompute_amount();
}

impl Validate for OpeningBalanceDocument {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.ref_no.trim().is_empty() {
            errors.push(ValidationError::required("Invoice No."));
        }
        if self.date.trim().is_empty() {
            errors.push(ValidationError::required("Date"));
        } else if to_date_only_string(self.date.as_str()).is_none() {
            errors.push(ValidationError::InvalidDate);
        }
        if self
            .warehouse_id
            .as_deref()
            .map_or(true, |w| w.trim().is_empty())
        {
            errors.push(ValidationError::required("Warehouse"));
        }
        if self.sendable_lines().next().is_none() {
            errors.push(ValidationError::NoValidLines);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str, purchase: f64) -> StockDetailLookup {
        StockDetailLookup {
            id: id.to_string(),
            stock_id: format!("stock-{id}"),
            stock_name: format!("Item {id}"),
            stock_code: id.to_uppercase(),
            unit: "u1".to_string(),
            unit_description: Some("Pcs".to_string()),
            purchase,
        }
    }

    fn ready_document() -> OpeningBalanceDocument {
        let mut doc = OpeningBalanceDocument::new();
        doc.ref_no = " OB-01 ".to_string();
        doc.date = "2024-01-31".to_string();
        doc.warehouse_id = Some("w1".to_string());
        doc
    }

    #[test]
    fn quantity_change_recomputes_amount_and_total() {
        let mut doc = ready_document();
        doc.add_from_detail(&detail("a", 1500.0));
        assert_eq!(doc.lines[0].qty, 1.0);
        assert_eq!(doc.lines[0].amount, 1500.0);

        doc.set_qty(0, 3.0).unwrap();
        assert_eq!(doc.lines[0].amount, 4500.0);

        doc.add_from_detail(&detail("b", 250.0));
        doc.set_purchase_price(1, 300.0).unwrap();
        assert_eq!(doc.total(), 4800.0);
    }

    #[test]
    fn replacing_reference_keeps_quantity() {
        let mut doc = ready_document();
        doc.add_from_detail(&detail("a", 10.0));
        doc.set_qty(0, 4.0).unwrap();
        doc.add_empty_line();

        doc.replace_reference(0, &detail("b", 20.0)).unwrap();
        assert_eq!(doc.lines[0].stock_detail_id, "b");
        assert_eq!(doc.lines[0].qty, 4.0);
        assert_eq!(doc.lines[0].amount, 80.0);

        doc.replace_reference(1, &detail("c", 5.0)).unwrap();
        assert_eq!(doc.lines[1].qty, 1.0);
        assert_eq!(doc.lines[1].amount, 5.0);

        assert_eq!(
            doc.replace_reference(9, &detail("d", 1.0)),
            Err(ValidationError::LineOutOfRange { index: 9 })
        );
    }

    #[test]
    fn request_only_carries_sendable_lines() {
        let mut doc = ready_document();
        doc.add_from_detail(&detail("a", 10.0));
        doc.add_empty_line();
        doc.add_from_detail(&detail("b", 10.0));
        doc.set_qty(2, 0.0).unwrap();
        doc.remark = "   ".to_string();

        let request = doc.to_request().unwrap();
        assert_eq!(request.ref_no, "OB-01");
        assert_eq!(request.date, "2024-01-31");
        assert_eq!(request.remark, None);
        assert_eq!(request.lines.len(), 1);
        assert_eq!(request.lines[0].stock_detail_id, "a");
    }

    #[test]
    fn blank_document_reports_every_problem() {
        let mut doc = OpeningBalanceDocument::new();
        doc.date = "not a date".to_string();

        let errors = doc.to_request().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::required("Invoice No."),
                ValidationError::InvalidDate,
                ValidationError::required("Warehouse"),
                ValidationError::NoValidLines,
            ]
        );
        assert_eq!(errors[0].to_string(), "Invoice No. is required");
    }

    #[test]
    fn load_then_reset_leaves_edit_mode() {
        let mut doc = OpeningBalanceDocument::new();
        doc.load(OpeningBalanceDetail {
            id: "ob1".to_string(),
            ref_no: "OB-9".to_string(),
            date: Some("2024-02-01T00:00:00Z".to_string()),
            warehouse_id: Some("w2".to_string()),
            remark: None,
            lines: vec![OpeningBalanceLine {
                stock_detail_id: "a".to_string(),
                qty: 2.0,
                purchase_price: 7.5,
                ..Default::default()
            }],
        });

        assert!(doc.is_editing_existing());
        assert_eq!(doc.date, "2024-02-01");
        assert_eq!(doc.total(), 15.0);

        doc.reset();
        assert!(!doc.is_editing_existing());
        assert!(doc.lines.is_empty());
        assert!(doc.ref_no.is_empty());
    }

    #[test]
    fn removing_out_of_range_line_fails() {
        let mut doc = OpeningBalanceDocument::new();
        doc.add_empty_line();
        assert!(doc.remove_line(3).is_err());
        assert!(doc.remove_line(0).is_ok());
        assert!(doc.lines.is_empty());
    }
}
