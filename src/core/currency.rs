//! Currency identities and the catalog of known codes

use std::collections::BTreeMap;
use std::collections::btree_map;

/// Alpha code of the bootstrap currency. The feed omits it from its own table.
pub const USD_CODE: &str = "USD";
pub const USD_NAME: &str = "United States dollar";
pub const USD_NUMERIC_CODE: &str = "840";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: String,
    pub name: String,
    pub numeric_code: String,
}

impl CurrencyInfo {
    pub fn new(code: &str, name: &str, numeric_code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            numeric_code: numeric_code.to_string(),
        }
    }

    pub fn usd() -> Self {
        Self::new(USD_CODE, USD_NAME, USD_NUMERIC_CODE)
    }
}

/// Known currencies keyed by uppercase ISO 4217 alpha code.
///
/// Iteration is ordered by code, so listings are stable between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyCatalog {
    entries: BTreeMap<String, CurrencyInfo>,
}

impl CurrencyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &str) -> Option<&CurrencyInfo> {
        self.entries.get(&code.to_uppercase())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(&code.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Values<'_, String, CurrencyInfo> {
        self.entries.values()
    }
}

impl FromIterator<(String, CurrencyInfo)> for CurrencyCatalog {
    fn from_iter<I: IntoIterator<Item = (String, CurrencyInfo)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(code, info)| (code.to_uppercase(), info))
                .collect(),
        }
    }
}
