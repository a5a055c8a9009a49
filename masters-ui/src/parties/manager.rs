use std::collections::VecDeque;
use std::sync::Arc;

use masters_core::models::{City, Currency, EditableInvoice, InvoicePayload, Warehouse};
use masters_core::{validate_invoices, Entity, Validate};

use super::state::{InvoiceConfirmation, PartyState};
use super::{PartyAction, PartyEntity};
use crate::invoices::InvoiceRepository;
use crate::masters::{MasterAction, MasterManager};
use crate::notifications::{NotificationCenter, Severity};
use crate::resource::Repository;

/// Data sources of a party screen besides the party collection itself.
#[derive(Clone)]
pub struct PartyRepositories {
    pub invoices: Arc<dyn InvoiceRepository>,
    pub cities: Arc<dyn Repository<City>>,
    pub warehouses: Arc<dyn Repository<Warehouse>>,
    pub currencies: Arc<dyn Repository<Currency>>,
}

pub struct PartyManager<E: PartyEntity> {
    master: MasterManager<E>,
    state: PartyState,
    repositories: PartyRepositories,
    pending_actions: VecDeque<PartyAction<E::Form>>,
    is_processing: bool,
}

impl<E: PartyEntity> PartyManager<E> {
    pub fn new(repository: Arc<dyn Repository<E>>, repositories: PartyRepositories) -> Self {
        Self {
            master: MasterManager::new(repository),
            state: PartyState::default(),
            repositories,
            pending_actions: VecDeque::new(),
            is_processing: false,
        }
    }

    pub fn with_notifications(mut self, notifications: NotificationCenter) -> Self {
        self.master = self.master.with_notifications(notifications);
        self
    }

    pub fn dispatch(&mut self, action: impl Into<PartyAction<E::Form>>) {
        let action = action.into();
        log::debug!("Dispatching {} action: {}", E::SINGULAR, action.description());
        self.pending_actions.push_back(action);
    }

    pub async fn update(&mut self) {
        if self.is_processing {
            return;
        }

        if let Some(action) = self.pending_actions.pop_front() {
            self.is_processing = true;
            log::debug!("Processing {} action: {}", E::SINGULAR, action.description());

            self.handle_action(action).await;

            self.is_processing = false;
        }
    }

    pub async fn run_pending(&mut self) {
        while !self.pending_actions.is_empty() {
            self.update().await;
        }
    }

    /// List, dialog and notification state.
    pub fn master(&self) -> &MasterManager<E> {
        &self.master
    }

    /// Invoice grid and lookups.
    pub fn state(&self) -> &PartyState {
        &self.state
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty() || self.is_processing
    }

    async fn handle_action(&mut self, action: PartyAction<E::Form>) {
        match action {
            PartyAction::Master(MasterAction::Load) => {
                self.master.handle_action(MasterAction::Load).await;
                self.load_lookups().await;
            }
            PartyAction::Master(MasterAction::OpenNew) => {
                self.state.clear_invoices();
                self.master.handle_action(MasterAction::OpenNew).await;
            }
            PartyAction::Master(MasterAction::Edit { id }) => self.handle_edit(id).await,
            PartyAction::Master(MasterAction::HideDialog) => {
                self.state.clear_invoices();
                self.master.handle_action(MasterAction::HideDialog).await;
            }
            PartyAction::Master(MasterAction::Save) => self.handle_save().await,
            PartyAction::Master(MasterAction::Confirm) if self.state.invoice_confirmation.is_some() => {
                self.handle_confirm_invoice_delete().await;
            }
            PartyAction::Master(MasterAction::CancelConfirm) if self.state.invoice_confirmation.is_some() => {
                self.state.invoice_confirmation = None;
            }
            PartyAction::Master(other) => self.master.handle_action(other).await,
            PartyAction::AddInvoiceRow => {
                self.state.invoices.push(EditableInvoice::blank());
            }
            PartyAction::UpdateInvoiceRow { index, invoice } => {
                match self.state.invoices.get_mut(index) {
                    Some(row) => *row = invoice,
                    None => log::warn!("Invoice row {} does not exist", index),
                }
            }
            PartyAction::RemoveInvoiceRow { index } => self.handle_remove_invoice_row(index),
        }
    }
}

// Action handler implementations
impl<E: PartyEntity> PartyManager<E> {
    async fn load_lookups(&mut self) {
        match self.repositories.cities.list().await {
            Ok(cities) => self.state.set_cities(cities),
            Err(error) => self.lookup_failed("cities", error.to_string()),
        }
        match self.repositories.warehouses.list().await {
            Ok(warehouses) => self.state.set_warehouses(warehouses),
            Err(error) => self.lookup_failed("warehouses", error.to_string()),
        }
        match self.repositories.currencies.list().await {
            Ok(currencies) => self.state.set_currencies(currencies),
            Err(error) => self.lookup_failed("currencies", error.to_string()),
        }
    }

    fn lookup_failed(&mut self, what: &str, error: String) {
        log::error!("Failed to load {}: {}", what, error);
        self.master
            .state_mut()
            .notifications
            .error(format!("Failed to load {}", what));
    }

    /// Opens the dialog, then fetches the party's invoices. Invoice failures
    /// leave the grid empty without a notification.
    async fn handle_edit(&mut self, id: String) {
        self.state.clear_invoices();
        self.master
            .handle_action(MasterAction::Edit { id: id.clone() })
            .await;
        if self.master.state().dialog.editing_id() != Some(id.as_str()) {
            return;
        }

        match self.repositories.invoices.list(E::KIND, &id).await {
            Ok(invoices) => {
                self.state.invoices = invoices.iter().map(EditableInvoice::from).collect();
            }
            Err(error) => {
                log::debug!("No invoices for {} {}: {}", E::SINGULAR, id, error);
            }
        }
    }

    /// Invoice problems block the whole save. Otherwise the party is saved
    /// first and its invoices are then sent in one bulk request.
    async fn handle_save(&mut self) {
        let invoice_errors = validate_invoices(&self.state.invoices);
        if !invoice_errors.is_empty() {
            let master_state = self.master.state_mut();
            if let Some(form) = master_state.dialog.form() {
                master_state.validation_errors = form.validate();
            }
            master_state.dialog.mark_submitted();
            for error in invoice_errors {
                master_state
                    .notifications
                    .push(Severity::Error, error.summary(), error.to_string());
            }
            return;
        }

        let payloads: Vec<InvoicePayload> = self
            .state
            .invoices
            .iter()
            .map(EditableInvoice::to_payload)
            .collect();

        let Some(saved) = self.master.save_dialog().await else {
            return;
        };
        self.state.clear_invoices();
        if payloads.is_empty() {
            return;
        }

        match self
            .repositories
            .invoices
            .save_bulk(E::KIND, saved.id(), &payloads)
            .await
        {
            Ok(()) => log::info!(
                "Saved {} invoices for {} {}",
                payloads.len(),
                E::SINGULAR,
                saved.id()
            ),
            Err(error) => {
                log::error!("Bulk invoice save failed for {}: {}", saved.id(), error);
                let reason = error.server_message().unwrap_or("Unknown error").to_string();
                self.master.state_mut().notifications.warn(format!(
                    "{} saved but some invoices may not have been saved: {}",
                    E::SINGULAR,
                    reason
                ));
            }
        }
    }

    fn handle_remove_invoice_row(&mut self, index: usize) {
        let Some(row) = self.state.invoices.get(index) else {
            log::warn!("Invoice row {} does not exist", index);
            return;
        };

        match row.id.clone().filter(|id| !id.is_empty()) {
            Some(invoice_id) => {
                self.state.invoice_confirmation = Some(InvoiceConfirmation {
                    index,
                    invoice_id,
                    message: "Are you sure you want to delete this invoice?".to_string(),
                });
            }
            None => {
                self.state.invoices.remove(index);
            }
        }
    }

    async fn handle_confirm_invoice_delete(&mut self) {
        let Some(confirmation) = self.state.invoice_confirmation.take() else {
            return;
        };

        match self
            .repositories
            .invoices
            .delete(&confirmation.invoice_id)
            .await
        {
            Ok(()) => {
                let position = self
                    .state
                    .invoices
                    .iter()
                    .position(|row| row.id.as_deref() == Some(confirmation.invoice_id.as_str()));
                if let Some(position) = position {
                    self.state.invoices.remove(position);
                }
                self.master
                    .state_mut()
                    .notifications
                    .success("Invoice deleted successfully");
            }
            Err(error) => {
                log::error!("Failed to delete invoice {}: {}", confirmation.invoice_id, error);
                self.master
                    .state_mut()
                    .notifications
                    .error("Failed to delete invoice");
            }
        }
    }
}
