//! Customer and supplier screens: the master list/edit screen plus an
//! editable grid of opening invoices saved after the party itself.

pub mod actions;
pub mod manager;
pub mod state;


use masters_core::models::{Customer, PartyKind, Supplier};
use masters_core::Entity;

pub use actions::PartyAction;
pub use manager::{PartyManager, PartyRepositories};
pub use state::{InvoiceConfirmation, PartyState};

/// A master entity that owns opening invoices.
pub trait PartyEntity: Entity {
    const KIND: PartyKind;

    fn city_id(&self) -> Option<&str>;
}

impl PartyEntity for Customer {
    const KIND: PartyKind = PartyKind::Customer;

    fn city_id(&self) -> Option<&str> {
        self.city_id.as_deref()
    }
}

impl PartyEntity for Supplier {
    const KIND: PartyKind = PartyKind::Supplier;

    fn city_id(&self) -> Option<&str> {
        self.city_id.as_deref()
    }
}
