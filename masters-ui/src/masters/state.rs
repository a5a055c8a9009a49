use masters_core::{Entity, ValidationError};

use crate::errors::BatchOutcome;
use crate::notifications::NotificationCenter;

/// Create/edit dialog. `submitted` turns on inline required-field errors
/// after the first save attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<F> {
    Closed,
    Creating { form: F, submitted: bool },
    Editing { id: String, form: F, submitted: bool },
    /// Request in flight; `id` is `None` for a create.
    Submitting { id: Option<String>, form: F },
}

impl<F> Default for DialogState<F> {
    fn default() -> Self {
        DialogState::Closed
    }
}

impl<F> DialogState<F> {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            DialogState::Closed => None,
            DialogState::Creating { form, .. }
            | DialogState::Editing { form, .. }
            | DialogState::Submitting { form, .. } => Some(form),
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            DialogState::Editing { id, .. } => Some(id),
            DialogState::Submitting { id, .. } => id.as_deref(),
            _ => None,
        }
    }

    /// Turns on inline errors without submitting.
    pub fn mark_submitted(&mut self) {
        if let DialogState::Creating { submitted, .. } | DialogState::Editing { submitted, .. } = self {
            *submitted = true;
        }
    }

    pub fn submitted(&self) -> bool {
        match self {
            DialogState::Creating { submitted, .. } | DialogState::Editing { submitted, .. } => {
                *submitted
            }
            DialogState::Submitting { .. } => true,
            DialogState::Closed => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmKind {
    DeleteOne { id: String },
    DeleteSelected { ids: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub header: String,
    pub message: String,
    pub kind: ConfirmKind,
}

impl Confirmation {
    pub fn delete_one(id: String, label: &str) -> Self {
        Self {
            header: "Confirm".to_string(),
            message: format!("Are you sure you want to delete {}?", label),
            kind: ConfirmKind::DeleteOne { id },
        }
    }

    pub fn delete_selected(ids: Vec<String>, plural: &str) -> Self {
        Self {
            header: "Confirm".to_string(),
            message: format!(
                "Are you sure you want to delete the selected {}?",
                plural.to_lowercase()
            ),
            kind: ConfirmKind::DeleteSelected { ids },
        }
    }
}

#[derive(Debug, Clone)]
pub struct MasterState<E: Entity> {
    /// Sorted by serial number, replaced wholesale on every load.
    pub items: Vec<E>,
    pub selected: Vec<String>,
    pub dialog: DialogState<E::Form>,
    pub confirmation: Option<Confirmation>,
    pub validation_errors: Vec<ValidationError>,
    pub notifications: NotificationCenter,
    /// Per-item results of the most recent batch delete.
    pub last_batch: Option<BatchOutcome>,
    pub is_loading: bool,
}

impl<E: Entity> Default for MasterState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: Vec::new(),
            dialog: DialogState::Closed,
            confirmation: None,
            validation_errors: Vec::new(),
            notifications: NotificationCenter::default(),
            last_batch: None,
            is_loading: false,
        }
    }
}

impl<E: Entity> MasterState<E> {
    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}
