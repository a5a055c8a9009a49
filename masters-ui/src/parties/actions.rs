use masters_core::models::EditableInvoice;

use crate::masters::MasterAction;

#[derive(Debug, Clone)]
pub enum PartyAction<F> {
    /// List/dialog/delete handling shared with every master screen.
    Master(MasterAction<F>),

    // Opening invoice grid
    AddInvoiceRow,
    UpdateInvoiceRow { index: usize, invoice: EditableInvoice },
    RemoveInvoiceRow { index: usize },
}

impl<F> PartyAction<F> {
    pub fn description(&self) -> &'static str {
        match self {
            PartyAction::Master(action) => action.description(),
            PartyAction::AddInvoiceRow => "Adding invoice row",
            PartyAction::UpdateInvoiceRow { .. } => "Updating invoice row",
            PartyAction::RemoveInvoiceRow { .. } => "Removing invoice row",
        }
    }
}

impl<F> From<MasterAction<F>> for PartyAction<F> {
    fn from(action: MasterAction<F>) -> Self {
        PartyAction::Master(action)
    }
}
