use masters_core::models::{City, Currency, EditableInvoice, Warehouse};
use masters_core::LookupIndex;

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceConfirmation {
    pub index: usize,
    pub invoice_id: String,
    pub message: String,
}

/// Everything the party screen holds on top of the shared master state.
#[derive(Debug, Clone, Default)]
pub struct PartyState {
    /// Grid rows of the open dialog.
    pub invoices: Vec<EditableInvoice>,
    pub invoice_confirmation: Option<InvoiceConfirmation>,
    pub cities: Vec<City>,
    pub warehouses: Vec<Warehouse>,
    pub currencies: Vec<Currency>,
    city_index: LookupIndex<City>,
    warehouse_index: LookupIndex<Warehouse>,
    currency_index: LookupIndex<Currency>,
}

impl PartyState {
    pub fn set_cities(&mut self, cities: Vec<City>) {
        self.city_index = LookupIndex::build(&cities);
        self.cities = cities;
    }

    pub fn set_warehouses(&mut self, warehouses: Vec<Warehouse>) {
        self.warehouse_index = LookupIndex::build(&warehouses);
        self.warehouses = warehouses;
    }

    pub fn set_currencies(&mut self, currencies: Vec<Currency>) {
        self.currency_index = LookupIndex::build(&currencies);
        self.currencies = currencies;
    }

    pub fn city_description(&self, id: Option<&str>) -> String {
        self.city_index.describe(id)
    }

    pub fn warehouse_description(&self, id: Option<&str>) -> String {
        self.warehouse_index.describe(id)
    }

    pub fn currency_code(&self, id: Option<&str>) -> String {
        self.currency_index.describe(id)
    }

    pub fn clear_invoices(&mut self) {
        self.invoices.clear();
        self.invoice_confirmation = None;
    }
}
