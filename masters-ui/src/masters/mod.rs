//! List/edit screen shared by every master entity.

pub mod actions;
pub mod manager;
pub mod state;

#[cfg(test)]
mod tests;

pub use actions::MasterAction;
pub use manager::MasterManager;
pub use state::{ConfirmKind, Confirmation, DialogState, MasterState};
