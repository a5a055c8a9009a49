pub mod document;
pub mod lookup;
pub mod models;
pub mod util;
pub mod validation;

pub use document::OpeningBalanceDocument;
pub use lookup::{Keyed, LookupIndex};
pub use models::{Entity, EntityForm};
pub use util::date::{to_date_only_string, DateInput};
pub use util::errors::ValidationError;
pub use util::sort::sort_by_serial_number;
pub use validation::{validate_invoices, Validate};
