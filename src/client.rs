//! Currency catalog and rate lookups on top of a [`RateFeed`].

use tracing::{debug, info, instrument};

use crate::core::currency::{CurrencyCatalog, CurrencyInfo, USD_CODE};
use crate::core::{ExchangeError, RateFeed, RateQueryResult, RateRecord, RateTable};

/// Base used to discover the catalog. Its own code is absent from the table.
const BOOTSTRAP_BASE: &str = "usd";

pub struct ExchangeClient {
    feed: Box<dyn RateFeed>,
    catalog: CurrencyCatalog,
    last_result: Option<RateQueryResult>,
}

impl ExchangeClient {
    /// Builds the catalog from the USD rate table. Fails without a partial client.
    pub async fn create(feed: Box<dyn RateFeed>) -> Result<Self, ExchangeError> {
        let table = feed.fetch_rates(BOOTSTRAP_BASE).await?;
        let catalog = catalog_from_table(&table);
        info!("Loaded {} currencies", catalog.len());

        Ok(Self::with_catalog(feed, catalog))
    }

    pub fn with_catalog(feed: Box<dyn RateFeed>, catalog: CurrencyCatalog) -> Self {
        Self {
            feed,
            catalog,
            last_result: None,
        }
    }

    pub fn catalog(&self) -> &CurrencyCatalog {
        &self.catalog
    }

    /// Lists `"<code> : <name>"` for every known currency, sorted by code.
    pub fn list_entries(&self) -> Result<Vec<String>, ExchangeError> {
        if self.catalog.is_empty() {
            return Err(ExchangeError::EmptyCatalog);
        }

        Ok(self
            .catalog
            .iter()
            .map(|c| format!("{} : {}", c.code, c.name))
            .collect())
    }

    pub fn code_exists(&self, code: &str) -> bool {
        self.catalog.contains(code)
    }

    /// Fetches the `from` table and stores the `to` entry as the last result.
    ///
    /// The stored result is only replaced on success.
    #[instrument(skip(self))]
    pub async fn get_rate(&mut self, from: &str, to: &str) -> Result<(), ExchangeError> {
        let from = from.to_uppercase();
        let to = to.to_uppercase();

        if !self.code_exists(&from) {
            return Err(ExchangeError::UnknownFromCode(from));
        }
        if !self.code_exists(&to) {
            return Err(ExchangeError::UnknownToCode(to));
        }

        let table = self.feed.fetch_rates(&from).await?;
        if table.is_empty() {
            return Err(ExchangeError::NilResponse(from));
        }

        let record = lookup_target(&table, &to).ok_or_else(|| {
            ExchangeError::UnknownTargetInFeed {
                from: from.clone(),
                to: to.clone(),
            }
        })?;

        let result = RateQueryResult::new(&from, &to, record);
        debug!(rate = result.rate, inverse = result.inverse_rate, "Stored rate");
        self.last_result = Some(result);
        Ok(())
    }

    pub fn last_result(&self) -> Result<&RateQueryResult, ExchangeError> {
        self.last_result.as_ref().ok_or(ExchangeError::NoResult)
    }

    pub fn last_result_summary(&self) -> Result<&str, ExchangeError> {
        self.last_result().map(|r| r.summary.as_str())
    }
}

fn catalog_from_table(table: &RateTable) -> CurrencyCatalog {
    table
        .values()
        .map(|r| {
            (
                r.alpha_code.to_uppercase(),
                CurrencyInfo::new(&r.code, &r.name, &r.numeric_code),
            )
        })
        .chain(std::iter::once((USD_CODE.to_string(), CurrencyInfo::usd())))
        .collect()
}

// Feed keys are lowercase in practice; tolerate other spellings.
fn lookup_target<'a>(table: &'a RateTable, code: &str) -> Option<&'a RateRecord> {
    table.get(&code.to_lowercase()).or_else(|| {
        table
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(code))
            .map(|(_, record)| record)
    })
}
