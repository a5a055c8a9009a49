//! In-memory stand-ins for the HTTP clients, used by controller tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use masters_core::models::{
    Bank, City, CreateBank, CreateOpeningBalanceRequest, Currency, InvoicePayload,
    OpeningBalanceDetail, OpeningBalanceSummary, PartyInvoice, PartyKind, StockDetailLookup, Unit,
    Warehouse,
};
use masters_core::{Entity, EntityForm};

use crate::errors::{ApiError, Result};
use crate::invoices::InvoiceRepository;
use crate::opening_balance_client::OpeningBalanceRepository;
use crate::resource::Repository;
use crate::stock_details::StockDetailLookupSource;

pub fn status_error(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Status {
        status,
        status_text: "Test".to_string(),
        message: message.map(str::to_string),
    }
}

type Builder<E> = fn(String, &<E as Entity>::Form) -> E;

pub struct MemoryRepository<E: Entity> {
    pub items: Mutex<Vec<E>>,
    build: Builder<E>,
    next_id: AtomicUsize,
    pub fail_list: Mutex<bool>,
    pub fail_save: Mutex<Option<u16>>,
    pub fail_delete: Mutex<HashSet<String>>,
    pub calls: Mutex<Vec<String>>,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new(items: Vec<E>, build: Builder<E>) -> Self {
        Self {
            items: Mutex::new(items),
            build,
            next_id: AtomicUsize::new(100),
            fail_list: Mutex::new(false),
            fail_save: Mutex::new(None),
            fail_delete: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn list(&self) -> Result<Vec<E>> {
        self.log("list".to_string());
        if *self.fail_list.lock().unwrap() {
            return Err(status_error(500, None));
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<E> {
        self.log(format!("get {}", id));
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id() == id)
            .cloned()
            .ok_or_else(|| status_error(404, None))
    }

    async fn create(&self, form: &E::Form) -> Result<E> {
        self.log("create".to_string());
        if let Some(status) = *self.fail_save.lock().unwrap() {
            return Err(status_error(status, Some("rejected")));
        }
        let id = format!("id-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = (self.build)(id, &form.to_payload());
        self.items.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, form: &E::Form) -> Result<E> {
        self.log(format!("update {}", id));
        if let Some(status) = *self.fail_save.lock().unwrap() {
            return Err(status_error(status, Some("rejected")));
        }
        let record = (self.build)(id.to_string(), &form.to_payload());
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.id() == id) {
            Some(slot) => *slot = record.clone(),
            None => return Err(status_error(404, None)),
        }
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.log(format!("delete {}", id));
        if self.fail_delete.lock().unwrap().contains(id) {
            return Err(status_error(409, Some("in use")));
        }
        self.items.lock().unwrap().retain(|i| i.id() != id);
        Ok(())
    }
}

pub fn bank(id: &str, description: &str, serial: Option<&str>) -> Bank {
    Bank {
        id: id.to_string(),
        description: description.to_string(),
        gl: None,
        account: None,
        serial_number: serial.map(str::to_string),
    }
}

pub fn bank_repository(items: Vec<Bank>) -> MemoryRepository<Bank> {
    MemoryRepository::new(items, |id, form: &CreateBank| Bank {
        id,
        description: form.description.clone(),
        gl: form.gl.clone(),
        account: form.account.clone(),
        serial_number: form.serial_number.clone(),
    })
}

pub fn city(id: &str, description: &str) -> City {
    City {
        id: id.to_string(),
        description: description.to_string(),
        serial_number: None,
    }
}

pub fn unit(id: &str, description: &str) -> Unit {
    Unit {
        id: id.to_string(),
        description: description.to_string(),
        serial_number: None,
        core_tax: None,
    }
}

pub fn warehouse(id: &str, description: &str) -> Warehouse {
    serde_json::from_value(serde_json::json!({ "id": id, "description": description }))
        .unwrap()
}

pub fn currency(id: &str, code: &str) -> Currency {
    Currency {
        id: id.to_string(),
        currency: code.to_string(),
        rate: 1.0,
        tax_rate: 0.0,
        serial_number: None,
    }
}

/// Builder for lookup-only repositories whose create path is never hit.
pub fn read_only<E: Entity>(items: Vec<E>) -> MemoryRepository<E> {
    MemoryRepository::new(items, |_, _| unreachable!("read-only repository"))
}

#[derive(Default)]
pub struct MemoryInvoices {
    pub stored: Mutex<Vec<PartyInvoice>>,
    pub saved: Mutex<Vec<(PartyKind, String, Vec<InvoicePayload>)>>,
    pub deleted: Mutex<Vec<String>>,
    pub fail_list: Mutex<bool>,
    pub fail_bulk: Mutex<bool>,
}

#[async_trait]
impl InvoiceRepository for MemoryInvoices {
    async fn list(&self, _kind: PartyKind, _party_id: &str) -> Result<Vec<PartyInvoice>> {
        if *self.fail_list.lock().unwrap() {
            return Err(status_error(500, None));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save_bulk(
        &self,
        kind: PartyKind,
        party_id: &str,
        invoices: &[InvoicePayload],
    ) -> Result<()> {
        if *self.fail_bulk.lock().unwrap() {
            return Err(status_error(400, Some("Warehouse not found")));
        }
        self.saved
            .lock()
            .unwrap()
            .push((kind, party_id.to_string(), invoices.to_vec()));
        Ok(())
    }

    async fn delete(&self, invoice_id: &str) -> Result<()> {
        self.deleted.lock().unwrap().push(invoice_id.to_string());
        Ok(())
    }
}

pub struct MemoryLookup(pub Vec<StockDetailLookup>);

#[async_trait]
impl StockDetailLookupSource for MemoryLookup {
    async fn lookup(&self) -> Result<Vec<StockDetailLookup>> {
        Ok(self.0.clone())
    }
}

pub fn stock_detail(id: &str, code: &str, name: &str, purchase: f64) -> StockDetailLookup {
    StockDetailLookup {
        id: id.to_string(),
        stock_id: format!("s-{}", id),
        stock_name: name.to_string(),
        stock_code: code.to_string(),
        unit: "u1".to_string(),
        unit_description: Some("Pcs".to_string()),
        purchase,
    }
}

#[derive(Default)]
pub struct MemoryOpeningBalances {
    pub details: Mutex<Vec<OpeningBalanceDetail>>,
    pub created: Mutex<Vec<CreateOpeningBalanceRequest>>,
    pub updated: Mutex<Vec<(String, CreateOpeningBalanceRequest)>>,
    pub fail_save: Mutex<Option<u16>>,
}

impl MemoryOpeningBalances {
    fn summary(id: &str, request: &CreateOpeningBalanceRequest) -> OpeningBalanceSummary {
        OpeningBalanceSummary {
            id: id.to_string(),
            invoice: request.ref_no.clone(),
            date: Some(request.date.clone()),
            warehouse: Some(request.warehouse_id.clone()),
            currency: None,
            amount: request.lines.iter().map(|l| l.amount).sum(),
            remark: request.remark.clone(),
            rem: None,
        }
    }

    fn check_failure(&self) -> Result<()> {
        match *self.fail_save.lock().unwrap() {
            Some(status) => Err(status_error(status, None)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OpeningBalanceRepository for MemoryOpeningBalances {
    async fn list(&self) -> Result<Vec<OpeningBalanceSummary>> {
        Ok(self
            .details
            .lock()
            .unwrap()
            .iter()
            .map(|d| OpeningBalanceSummary {
                id: d.id.clone(),
                invoice: d.ref_no.clone(),
                date: d.date.clone(),
                warehouse: d.warehouse_id.clone(),
                currency: None,
                amount: d.lines.iter().map(|l| l.amount).sum(),
                remark: d.remark.clone(),
                rem: None,
            })
            .collect())
    }

    async fn get_detail(&self, id: &str) -> Result<OpeningBalanceDetail> {
        self.details
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| status_error(404, None))
    }

    async fn create(&self, request: &CreateOpeningBalanceRequest) -> Result<OpeningBalanceSummary> {
        self.check_failure()?;
        self.created.lock().unwrap().push(request.clone());
        Ok(Self::summary("ob-new", request))
    }

    async fn update(
        &self,
        id: &str,
        request: &CreateOpeningBalanceRequest,
    ) -> Result<OpeningBalanceSummary> {
        self.check_failure()?;
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), request.clone()));
        Ok(Self::summary(id, request))
    }
}
