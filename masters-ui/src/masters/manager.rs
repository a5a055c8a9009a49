use futures::future::join_all;
use std::collections::VecDeque;
use std::sync::Arc;

use masters_core::{sort_by_serial_number, Entity, EntityForm, Keyed, Validate};

use super::state::{ConfirmKind, Confirmation, DialogState, MasterState};
use super::MasterAction;
use crate::errors::BatchOutcome;
use crate::notifications::NotificationCenter;
use crate::resource::Repository;

pub struct MasterManager<E: Entity> {
    // Current state - single source of truth
    state: MasterState<E>,

    repository: Arc<dyn Repository<E>>,

    // Action queue for sequential processing
    pending_actions: VecDeque<MasterAction<E::Form>>,

    is_processing: bool,
}

impl<E: Entity> MasterManager<E> {
    pub fn new(repository: Arc<dyn Repository<E>>) -> Self {
        Self {
            state: MasterState::default(),
            repository,
            pending_actions: VecDeque::new(),
            is_processing: false,
        }
    }

    /// Replaces the screen's toast queue, e.g. with one using the configured
    /// notification life.
    pub fn with_notifications(mut self, notifications: NotificationCenter) -> Self {
        self.state.notifications = notifications;
        self
    }

    /// Synchronous, just queues the action
    pub fn dispatch(&mut self, action: MasterAction<E::Form>) {
        log::debug!("Dispatching {} action: {}", E::SINGULAR, action.description());
        self.pending_actions.push_back(action);
    }

    /// Processes one action from the queue
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

    /// Drains the queue, including anything queued while handling.
    pub async fn run_pending(&mut self) {
        while !self.pending_actions.is_empty() {
            self.update().await;
        }
    }

    pub fn state(&self) -> &MasterState<E> {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut MasterState<E> {
        &mut self.state
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty() || self.is_processing
    }

    pub fn clear_pending_actions(&mut self) {
        self.pending_actions.clear();
    }

    pub(crate) async fn handle_action(&mut self, action: MasterAction<E::Form>) {
        match action {
            MasterAction::Load => self.load_items().await,
            MasterAction::OpenNew => self.handle_open_new(),
            MasterAction::Edit { id } => self.handle_edit(id).await,
            MasterAction::UpdateForm(form) => self.handle_update_form(form),
            MasterAction::HideDialog => self.handle_hide_dialog(),
            MasterAction::Save => {
                self.save_dialog().await;
            }
            MasterAction::RequestDelete { id } => self.handle_request_delete(id),
            MasterAction::RequestDeleteSelected => self.handle_request_delete_selected(),
            MasterAction::ToggleSelection { id } => self.handle_toggle_selection(id),
            MasterAction::ClearSelection => self.state.selected.clear(),
            MasterAction::Confirm => self.handle_confirm().await,
            MasterAction::CancelConfirm => {
                self.state.confirmation = None;
            }
            MasterAction::DismissNotification { index } => self.state.notifications.dismiss(index),
        }
    }
}

// Action handler implementations
impl<E: Entity> MasterManager<E> {
    /// Fetches the collection, sorts it and replaces the list in one step.
    /// On failure the previous list stays.
    pub(crate) async fn load_items(&mut self) {
        self.state.set_loading(true);

        match self.repository.list().await {
            Ok(mut items) => {
                sort_by_serial_number(&mut items, |item| item.serial_number());
                log::info!("Loaded {} {}", items.len(), E::PLURAL);
                self.state.selected.retain(|id| items.iter().any(|i| i.id() == id));
                self.state.items = items;
            }
            Err(error) => {
                log::error!("Failed to load {}: {}", E::PLURAL, error);
                self.state
                    .notifications
                    .error(format!("Failed to load {}", E::PLURAL));
            }
        }

        self.state.set_loading(false);
    }

    fn handle_open_new(&mut self) {
        self.state.validation_errors.clear();
        self.state.dialog = DialogState::Creating {
            form: E::Form::blank(),
            submitted: false,
        };
    }

    async fn handle_edit(&mut self, id: String) {
        let record = match self.state.find(&id) {
            Some(record) => Some(record.clone()),
            None => match self.repository.get(&id).await {
                Ok(record) => Some(record),
                Err(error) => {
                    log::error!("Failed to fetch {} {}: {}", E::SINGULAR, id, error);
                    self.state
                        .notifications
                        .error(error.message_or(&format!("Failed to load {}", E::SINGULAR)));
                    None
                }
            },
        };

        if let Some(record) = record {
            self.state.validation_errors.clear();
            self.state.dialog = DialogState::Editing {
                id,
                form: record.to_form(),
                submitted: false,
            };
        }
    }

    fn handle_update_form(&mut self, new_form: E::Form) {
        match &mut self.state.dialog {
            DialogState::Creating { form, submitted } | DialogState::Editing { form, submitted, .. } => {
                *form = new_form;
                if *submitted {
                    self.state.validation_errors = form.validate();
                }
            }
            DialogState::Submitting { .. } => {
                log::warn!("Ignoring form update while {} is being saved", E::SINGULAR);
            }
            DialogState::Closed => {
                log::warn!("Ignoring form update with no open {} dialog", E::SINGULAR);
            }
        }
    }

    fn handle_hide_dialog(&mut self) {
        self.state.dialog = DialogState::Closed;
        self.state.validation_errors.clear();
    }

    /// Validates and submits the dialog. Returns the saved record when the
    /// server accepted it; the dialog is then closed and the list reloaded.
    pub(crate) async fn save_dialog(&mut self) -> Option<E> {
        let (id, form) = match std::mem::take(&mut self.state.dialog) {
            DialogState::Creating { form, .. } => (None, form),
            DialogState::Editing { id, form, .. } => (Some(id), form),
            other => {
                log::warn!("Save requested without an editable {} dialog", E::SINGULAR);
                self.state.dialog = other;
                return None;
            }
        };

        let errors = form.validate();
        if !errors.is_empty() {
            log::debug!("{} form has {} violations", E::SINGULAR, errors.len());
            self.state.validation_errors = errors;
            self.state.dialog = reopen(id, form);
            return None;
        }
        self.state.validation_errors.clear();

        self.state.dialog = DialogState::Submitting {
            id: id.clone(),
            form: form.clone(),
        };
        self.state.set_loading(true);

        let result = match &id {
            Some(id) => self.repository.update(id, &form).await,
            None => self.repository.create(&form).await,
        };
        self.state.set_loading(false);

        let verb = if id.is_some() { "update" } else { "create" };
        match result {
            Ok(saved) => {
                log::info!("{} {}d: {}", E::SINGULAR, verb, saved.id());
                self.state.dialog = DialogState::Closed;
                let past = if id.is_some() { "Updated" } else { "Created" };
                self.state
                    .notifications
                    .success(format!("{} {}", E::SINGULAR, past));
                self.load_items().await;
                Some(saved)
            }
            Err(error) => {
                log::error!("Failed to {} {}: {}", verb, E::SINGULAR, error);
                self.state
                    .notifications
                    .error(error.message_or(&format!("Failed to {} {}", verb, E::SINGULAR)));
                self.state.dialog = reopen(id, form);
                None
            }
        }
    }

    fn handle_request_delete(&mut self, id: String) {
        match self.state.find(&id) {
            Some(record) => {
                let confirmation = Confirmation::delete_one(id.clone(), record.label());
                self.state.confirmation = Some(confirmation);
            }
            None => log::warn!("Delete requested for unknown {} {}", E::SINGULAR, id),
        }
    }

    fn handle_request_delete_selected(&mut self) {
        if self.state.selected.is_empty() {
            log::debug!("Batch delete requested with nothing selected");
            return;
        }
        let ids = self.state.selected.clone();
        self.state.confirmation = Some(Confirmation::delete_selected(ids, E::PLURAL));
    }

    fn handle_toggle_selection(&mut self, id: String) {
        if let Some(pos) = self.state.selected.iter().position(|s| *s == id) {
            self.state.selected.remove(pos);
        } else {
            self.state.selected.push(id);
        }
    }

    async fn handle_confirm(&mut self) {
        let Some(confirmation) = self.state.confirmation.take() else {
            log::debug!("Confirm with nothing pending");
            return;
        };

        match confirmation.kind {
            ConfirmKind::DeleteOne { id } => self.delete_one(id).await,
            ConfirmKind::DeleteSelected { ids } => self.delete_many(ids).await,
        }
    }

    async fn delete_one(&mut self, id: String) {
        self.state.set_loading(true);
        let result = self.repository.delete(&id).await;
        self.state.set_loading(false);

        match result {
            Ok(()) => {
                log::info!("{} deleted: {}", E::SINGULAR, id);
                self.state
                    .notifications
                    .success(format!("{} Deleted", E::SINGULAR));
                self.load_items().await;
            }
            Err(error) => {
                log::error!("Failed to delete {} {}: {}", E::SINGULAR, id, error);
                self.state
                    .notifications
                    .error(error.message_or(&format!("Failed to delete {}", E::SINGULAR)));
            }
        }
    }

    /// Issues every delete at once, waits for all of them, then reloads.
    async fn delete_many(&mut self, ids: Vec<String>) {
        self.state.set_loading(true);
        let repository = Arc::clone(&self.repository);
        let results = join_all(ids.iter().map(|id| repository.delete(id))).await;
        self.state.set_loading(false);

        let mut outcome = BatchOutcome::default();
        for (id, result) in ids.into_iter().zip(results) {
            outcome.record(id, result);
        }

        if outcome.is_complete_success() {
            log::info!("Deleted {} {}", outcome.total(), E::PLURAL);
            self.state
                .notifications
                .success(format!("{} Deleted", E::PLURAL));
        } else {
            log::error!(
                "{} of {} {} deletes failed",
                outcome.failed.len(),
                outcome.total(),
                E::SINGULAR
            );
            self.state.notifications.warn(format!(
                "{} of {} {} could not be deleted",
                outcome.failed.len(),
                outcome.total(),
                E::PLURAL.to_lowercase()
            ));
        }

        self.state.selected.clear();
        self.state.last_batch = Some(outcome);
        self.load_items().await;
    }
}

fn reopen<F>(id: Option<String>, form: F) -> DialogState<F> {
    match id {
        Some(id) => DialogState::Editing {
            id,
            form,
            submitted: true,
        },
        None => DialogState::Creating {
            form,
            submitted: true,
        },
    }
}
