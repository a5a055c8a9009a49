#[derive(Debug, Clone)]
pub enum OpeningBalanceAction {
    /// Fetches warehouses, stock-detail lookup rows and units.
    Load,

    // Header
    SetRefNo(String),
    SetDate(String),
    SetWarehouse(Option<String>),
    SetRemark(String),

    // Lines
    AddEmptyRow,
    RemoveLine { index: usize },
    SetQty { index: usize, qty: f64 },
    SetPurchasePrice { index: usize, price: f64 },

    // Stock lookup dialog
    OpenLookupToAdd,
    OpenLookupForRow { index: usize },
    SetLookupSearch(String),
    SelectFromLookup { detail_id: String },
    CloseLookup,

    Save,
    Reset,

    // Reopening saved documents
    ListExisting,
    LoadExisting { id: String },

    DismissNotification { index: usize },
}

impl OpeningBalanceAction {
    pub fn description(&self) -> &'static str {
        match self {
            OpeningBalanceAction::Load => "Loading warehouses, stock details and units",
            OpeningBalanceAction::SetRefNo(_) => "Setting invoice number",
            OpeningBalanceAction::SetDate(_) => "Setting document date",
            OpeningBalanceAction::SetWarehouse(_) => "Setting warehouse",
            OpeningBalanceAction::SetRemark(_) => "Setting remark",
            OpeningBalanceAction::AddEmptyRow => "Adding empty line",
            OpeningBalanceAction::RemoveLine { .. } => "Removing line",
            OpeningBalanceAction::SetQty { .. } => "Setting line quantity",
            OpeningBalanceAction::SetPurchasePrice { .. } => "Setting line purchase price",
            OpeningBalanceAction::OpenLookupToAdd => "Opening stock lookup to add a line",
            OpeningBalanceAction::OpenLookupForRow { .. } => "Opening stock lookup for a line",
            OpeningBalanceAction::SetLookupSearch(_) => "Filtering stock lookup",
            OpeningBalanceAction::SelectFromLookup { .. } => "Selecting stock from lookup",
            OpeningBalanceAction::CloseLookup => "Closing stock lookup",
            OpeningBalanceAction::Save => "Saving opening balance",
            OpeningBalanceAction::Reset => "Resetting opening balance form",
            OpeningBalanceAction::ListExisting => "Listing saved opening balances",
            OpeningBalanceAction::LoadExisting { .. } => "Opening saved opening balance",
            OpeningBalanceAction::DismissNotification { .. } => "Dismissing notification",
        }
    }
}
