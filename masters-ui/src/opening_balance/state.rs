use masters_core::models::{OpeningBalanceSummary, StockDetailLookup, Unit, Warehouse};
use masters_core::{LookupIndex, OpeningBalanceDocument, ValidationError};

use crate::notifications::NotificationCenter;

/// Stock lookup dialog. `target_row` of `None` means a pick appends a new
/// line instead of repointing an existing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupModal {
    pub visible: bool,
    pub search: String,
    pub target_row: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBalanceState {
    pub document: OpeningBalanceDocument,
    pub lookup: LookupModal,
    pub submitted: bool,
    pub validation_errors: Vec<ValidationError>,
    pub warehouses: Vec<Warehouse>,
    pub stock_details: Vec<StockDetailLookup>,
    pub units: Vec<Unit>,
    /// Saved documents, filled by `ListExisting`.
    pub existing: Vec<OpeningBalanceSummary>,
    pub notifications: NotificationCenter,
    pub is_loading: bool,
    warehouse_index: LookupIndex<Warehouse>,
    unit_index: LookupIndex<Unit>,
}

impl OpeningBalanceState {
    pub fn set_warehouses(&mut self, warehouses: Vec<Warehouse>) {
        self.warehouse_index = LookupIndex::build(&warehouses);
        self.warehouses = warehouses;
    }

    pub fn set_units(&mut self, units: Vec<Unit>) {
        self.unit_index = LookupIndex::build(&units);
        self.units = units;
    }

    pub fn warehouse_description(&self, id: Option<&str>) -> String {
        self.warehouse_index.describe(id)
    }

    /// Unit description, or the raw id when the unit is unknown.
    pub fn unit_description(&self, id: Option<&str>) -> String {
        self.unit_index.describe_or_key(id)
    }

    /// Lookup rows matching the dialog's search text.
    pub fn filtered_lookup(&self) -> Vec<&StockDetailLookup> {
        self.stock_details
            .iter()
            .filter(|detail| detail.matches(&self.lookup.search))
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.document.total()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}
