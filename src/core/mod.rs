pub mod lookup;

pub use crate::domain::model::{LookupOutcome, ValidationResult, Word};
pub use crate::domain::ports::{ConfigProvider, HttpClient};
pub use crate::utils::error::Result;
pub use lookup::LookupProxy;
