//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod rate;

// Re-export main types for cleaner imports
pub use currency::{CurrencyCatalog, CurrencyInfo};
pub use error::{ExchangeError, FetchError};
pub use rate::{RateFeed, RateQueryResult, RateRecord, RateTable};
