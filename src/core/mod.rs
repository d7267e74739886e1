pub mod errors;
pub mod types;

pub use errors::InputError;
pub use types::{SortDirection, Student};
