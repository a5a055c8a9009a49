//! Master-data records as the API returns them, paired with the payload
//! shape used to create or patch them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::lookup::Keyed;
use crate::validation::Validate;

/// Implements [`Keyed`] and [`Entity`] for a record with an `id` field.
macro_rules! impl_entity {
    (
        $entity:ty => $form:ty,
        path: $path:expr,
        names: ($singular:expr, $plural:expr),
        label: $label:ident
        $(, serial: $serial:ident)?
    ) => {
        impl $crate::lookup::Keyed for $entity {
            fn key(&self) -> &str {
                &self.id
            }

            fn label(&self) -> &str {
                &self.$label
            }
        }

        impl $crate::models::Entity for $entity {
            type Form = $form;

            const RESOURCE_PATH: &'static str = $path;
            const SINGULAR: &'static str = $singular;
            const PLURAL: &'static str = $plural;

            fn id(&self) -> &str {
                &self.id
            }

            $(
                fn serial_number(&self) -> Option<&str> {
                    self.$serial.as_deref()
                }
            )?
        }
    };
}

pub mod bank;
pub mod brand;
pub mod city;
pub mod currency;
pub mod customer;
pub mod invoice;
pub mod opening_balance;
pub mod salesman;
pub mod stock;
pub mod stock_group;
pub mod supplier;
pub mod unit;
pub mod warehouse;

pub use bank::{Bank, CreateBank};
pub use brand::{Brand, CreateBrand};
pub use city::{City, CreateCity};
pub use currency::{CreateCurrency, Currency};
pub use customer::{CreateCustomer, Customer, PriceType};
pub use invoice::{EditableInvoice, InvoicePayload, PartyInvoice, PartyKind};
pub use opening_balance::{
    CreateOpeningBalanceRequest, OpeningBalanceDetail, OpeningBalanceLine,
    OpeningBalanceLinePayload, OpeningBalanceSummary,
};
pub use salesman::{CreateSalesman, Salesman};
pub use stock::{
    CreateStock, CreateStockDetail, PriceQtyTier, Stock, StockDetailLookup, StockPriceRow,
    TaxOption,
};
pub use stock_group::{CreateStockGroup, StockGroup};
pub use supplier::{CreateSupplier, Supplier};
pub use unit::{CreateUnit, Unit};
pub use warehouse::{CreateWarehouse, Warehouse};

/// A master record served under its own REST collection.
pub trait Entity:
    Keyed + Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Create/patch payload, also used as the dialog's working copy.
    type Form: EntityForm + for<'a> From<&'a Self>;

    const RESOURCE_PATH: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    fn id(&self) -> &str;

    /// Manually assigned display-ordering code, when the entity has one.
    fn serial_number(&self) -> Option<&str> {
        None
    }

    /// Working copy for the edit dialog, populated from this row.
    fn to_form(&self) -> Self::Form {
        Self::Form::from(self)
    }
}

pub trait EntityForm:
    Validate + Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Contents of a freshly opened "new" dialog.
    fn blank() -> Self {
        Self::default()
    }

    /// The body actually sent to the API. Forms holding dates override this
    /// to normalise them to `YYYY-MM-DD`.
    fn to_payload(&self) -> Self {
        self.clone()
    }
}
