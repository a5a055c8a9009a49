#[derive(Debug, Clone)]
pub enum MasterAction<F> {
    // Collection
    Load,

    // Dialog
    OpenNew,
    Edit { id: String },
    UpdateForm(F),
    HideDialog,
    Save,

    // Deletion
    RequestDelete { id: String },
    RequestDeleteSelected,
    ToggleSelection { id: String },
    ClearSelection,

    // Confirmation prompt
    Confirm,
    CancelConfirm,

    DismissNotification { index: usize },
}

impl<F> MasterAction<F> {
    pub fn description(&self) -> &'static str {
        match self {
            MasterAction::Load => "Loading records",
            MasterAction::OpenNew => "Opening dialog for a new record",
            MasterAction::Edit { .. } => "Opening dialog for an existing record",
            MasterAction::UpdateForm(_) => "Updating dialog form",
            MasterAction::HideDialog => "Closing dialog",
            MasterAction::Save => "Saving dialog form",
            MasterAction::RequestDelete { .. } => "Requesting delete confirmation",
            MasterAction::RequestDeleteSelected => "Requesting batch delete confirmation",
            MasterAction::ToggleSelection { .. } => "Toggling row selection",
            MasterAction::ClearSelection => "Clearing row selection",
            MasterAction::Confirm => "Accepting confirmation",
            MasterAction::CancelConfirm => "Rejecting confirmation",
            MasterAction::DismissNotification { .. } => "Dismissing notification",
        }
    }
}
