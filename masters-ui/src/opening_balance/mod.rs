//! Stock opening-balance entry screen.

pub mod actions;
pub mod manager;
pub mod state;

#[cfg(test)]
mod tests;

pub use actions::OpeningBalanceAction;
pub use manager::{OpeningBalanceManager, OpeningBalanceRepositories};
pub use state::{LookupModal, OpeningBalanceState};
