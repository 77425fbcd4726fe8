//! Locale-aware resolution of display data.
//!
//! `glossa` answers questions such as "what is the Traditional Chinese name
//! of the Japanese yen" from ICU-style per-locale resource bundles. A request
//! is canonicalized through an alias table, expanded into a fallback chain
//! (`zh_Hant_TW -> zh_Hant -> zh -> root`) and resolved against a
//! [`bundle::BundleStore`]. Listings are sorted by a pluggable
//! [`collation::Collator`], and [`verify::ConsistencyVerifier`] checks a
//! whole data set against documented gaps.
//!
//! ```
//! use glossa::bundle::MemoryBundleStore;
//! use glossa::collation::CodePointCollator;
//! use glossa::domain::IntlData;
//! use glossa::locale::LocaleTag;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = MemoryBundleStore::new();
//! store.insert_json("curr", "zh", json!({ "Currencies": { "JPY": ["JP¥", "日元"] } }))?;
//! let data = IntlData::load(Arc::new(store), Arc::new(CodePointCollator))?;
//! let name = data.currencies().name("JPY", &LocaleTag::parse("zh_Hans_SG"))?;
//! assert_eq!(name, "日元");
//! # Ok(()) }
//! ```

pub mod bundle;
pub mod cli;
pub mod collation;
pub mod display_locale;
pub mod domain;
pub mod locale;
pub mod resolver;
pub mod runner;
pub mod verify;
