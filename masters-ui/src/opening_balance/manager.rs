use std::collections::VecDeque;
use std::sync::Arc;

use masters_core::models::{Unit, Warehouse};
use masters_core::ValidationError;

use super::state::OpeningBalanceState;
use super::OpeningBalanceAction;
use crate::notifications::{NotificationCenter, Severity};
use crate::opening_balance_client::OpeningBalanceRepository;
use crate::resource::Repository;
use crate::stock_details::StockDetailLookupSource;

const DOCUMENT_NAME: &str = "Stock Opening Balance";

#[derive(Clone)]
pub struct OpeningBalanceRepositories {
    pub opening_balances: Arc<dyn OpeningBalanceRepository>,
    pub stock_details: Arc<dyn StockDetailLookupSource>,
    pub warehouses: Arc<dyn Repository<Warehouse>>,
    pub units: Arc<dyn Repository<Unit>>,
}

pub struct OpeningBalanceManager {
    state: OpeningBalanceState,
    repositories: OpeningBalanceRepositories,
    pending_actions: VecDeque<OpeningBalanceAction>,
    is_processing: bool,
}

impl OpeningBalanceManager {
    pub fn new(repositories: OpeningBalanceRepositories) -> Self {
        Self {
            state: OpeningBalanceState::default(),
            repositories,
            pending_actions: VecDeque::new(),
            is_processing: false,
        }
    }

    pub fn with_notifications(mut self, notifications: NotificationCenter) -> Self {
        self.state.notifications = notifications;
        self
    }

    pub fn dispatch(&mut self, action: OpeningBalanceAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    pub async fn update(&mut self) {
        if self.is_processing {
            return;
        }

        if let Some(action) = self.pending_actions.pop_front() {
            self.is_processing = true;
            log::debug!("Processing action: {}", action.description());

            self.handle_action(action).await;

            self.is_processing = false;
        }
    }

    pub async fn run_pending(&mut self) {
        while !self.pending_actions.is_empty() {
            self.update().await;
        }
    }

    pub fn state(&self) -> &OpeningBalanceState {
        &self.state
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty() || self.is_processing
    }

    async fn handle_action(&mut self, action: OpeningBalanceAction) {
        match action {
            OpeningBalanceAction::Load => self.handle_load().await,

            OpeningBalanceAction::SetRefNo(ref_no) => self.state.document.ref_no = ref_no,
            OpeningBalanceAction::SetDate(date) => self.state.document.date = date,
            OpeningBalanceAction::SetWarehouse(id) => self.state.document.warehouse_id = id,
            OpeningBalanceAction::SetRemark(remark) => self.state.document.remark = remark,

            OpeningBalanceAction::AddEmptyRow => self.state.document.add_empty_line(),
            OpeningBalanceAction::RemoveLine { index } => self.handle_remove_line(index),
            OpeningBalanceAction::SetQty { index, qty } => {
                let result = self.state.document.set_qty(index, qty);
                self.report_line_error(result);
            }
            OpeningBalanceAction::SetPurchasePrice { index, price } => {
                let result = self.state.document.set_purchase_price(index, price);
                self.report_line_error(result);
            }

            OpeningBalanceAction::OpenLookupToAdd => self.open_lookup(None),
            OpeningBalanceAction::OpenLookupForRow { index } => self.open_lookup(Some(index)),
            OpeningBalanceAction::SetLookupSearch(search) => self.state.lookup.search = search,
            OpeningBalanceAction::SelectFromLookup { detail_id } => {
                self.handle_select_from_lookup(&detail_id)
            }
            OpeningBalanceAction::CloseLookup => self.close_lookup(),

            OpeningBalanceAction::Save => self.handle_save().await,
            OpeningBalanceAction::Reset => self.reset_form(),

            OpeningBalanceAction::ListExisting => self.handle_list_existing().await,
            OpeningBalanceAction::LoadExisting { id } => self.handle_load_existing(id).await,

            OpeningBalanceAction::DismissNotification { index } => {
                self.state.notifications.dismiss(index)
            }
        }
    }
}

// Action handler implementations
impl OpeningBalanceManager {
    async fn handle_load(&mut self) {
        self.state.set_loading(true);

        match self.repositories.warehouses.list().await {
            Ok(warehouses) => self.state.set_warehouses(warehouses),
            Err(error) => self.load_failed("warehouses", error.to_string()),
        }
        match self.repositories.stock_details.lookup().await {
            Ok(details) => {
                log::info!("Loaded {} stock detail lookup rows", details.len());
                self.state.stock_details = details;
            }
            Err(error) => self.load_failed("stock details", error.to_string()),
        }
        match self.repositories.units.list().await {
            Ok(units) => self.state.set_units(units),
            Err(error) => self.load_failed("units", error.to_string()),
        }

        self.state.set_loading(false);
    }

    fn load_failed(&mut self, what: &str, error: String) {
        log::error!("Failed to load {}: {}", what, error);
        self.state
            .notifications
            .error(format!("Failed to load {}", what));
    }

    fn report_line_error(&mut self, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            log::warn!("{}", error);
        }
    }

    /// Keeps the lookup pointed at the same line: rows after the removed one
    /// shift down, and a lookup opened for the removed row is closed.
    fn handle_remove_line(&mut self, index: usize) {
        if let Err(error) = self.state.document.remove_line(index) {
            log::warn!("{}", error);
            return;
        }
        match self.state.lookup.target_row {
            Some(row) if row == index => self.close_lookup(),
            Some(row) if row > index => self.state.lookup.target_row = Some(row - 1),
            _ => {}
        }
    }

    fn open_lookup(&mut self, target_row: Option<usize>) {
        self.state.lookup.target_row = target_row;
        self.state.lookup.search.clear();
        self.state.lookup.visible = true;
    }

    fn close_lookup(&mut self) {
        self.state.lookup.visible = false;
        self.state.lookup.target_row = None;
    }

    fn handle_select_from_lookup(&mut self, detail_id: &str) {
        let Some(detail) = self
            .state
            .stock_details
            .iter()
            .find(|d| d.id == detail_id)
            .cloned()
        else {
            log::warn!("Stock detail {} is not in the lookup", detail_id);
            return;
        };

        match self.state.lookup.target_row {
            Some(index) => {
                let result = self.state.document.replace_reference(index, &detail);
                self.report_line_error(result);
            }
            None => self.state.document.add_from_detail(&detail),
        }
        self.close_lookup();
    }

    /// Validation problems are each reported and nothing is sent. A loaded
    /// document is updated in place, anything else is created.
    async fn handle_save(&mut self) {
        self.state.submitted = true;

        let request = match self.state.document.to_request() {
            Ok(request) => request,
            Err(errors) => {
                for error in &errors {
                    self.state
                        .notifications
                        .push(Severity::Error, error.summary(), error.to_string());
                }
                self.state.validation_errors = errors;
                return;
            }
        };
        self.state.validation_errors.clear();

        self.state.set_loading(true);
        let result = match self.state.document.loaded_id.clone() {
            Some(id) => self.repositories.opening_balances.update(&id, &request).await,
            None => self.repositories.opening_balances.create(&request).await,
        };
        self.state.set_loading(false);

        match result {
            Ok(summary) => {
                log::info!("{} saved: {}", DOCUMENT_NAME, summary.id);
                self.state.notifications.push(
                    Severity::Success,
                    "Success",
                    format!("{} saved", DOCUMENT_NAME),
                );
                self.reset_form();
            }
            Err(error) => {
                log::error!("Failed to save {}: {}", DOCUMENT_NAME, error);
                self.state
                    .notifications
                    .error(error.message_or(&format!("Failed to save {}", DOCUMENT_NAME)));
            }
        }
    }

    fn reset_form(&mut self) {
        self.state.document.reset();
        self.state.submitted = false;
        self.state.validation_errors.clear();
        self.close_lookup();
    }

    async fn handle_list_existing(&mut self) {
        match self.repositories.opening_balances.list().await {
            Ok(existing) => self.state.existing = existing,
            Err(error) => {
                log::error!("Failed to list opening balances: {}", error);
                self.state
                    .notifications
                    .error(error.message_or("Failed to load opening balances"));
            }
        }
    }

    async fn handle_load_existing(&mut self, id: String) {
        match self.repositories.opening_balances.get_detail(&id).await {
            Ok(detail) => {
                self.state.document.load(detail);
                self.state.submitted = false;
                self.state.validation_errors.clear();
            }
            Err(error) => {
                log::error!("Failed to open opening balance {}: {}", id, error);
                self.state
                    .notifications
                    .error(error.message_or(&format!("Failed to load {}", DOCUMENT_NAME)));
            }
        }
    }
}
