pub mod date;
pub mod errors;
pub mod sort;
