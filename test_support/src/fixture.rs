//! The fixture data set.

use anyhow::{Context, Result};
use glossa::bundle::MemoryBundleStore;
use glossa::collation::CaseFoldingCollator;
use glossa::domain::IntlData;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Locales listed by the fixture's `locales` bundle.
pub const FIXTURE_LOCALES: &[&str] = &[
    "as", "de", "de_AT", "en", "en_US", "en_US_POSIX", "he", "he_IL", "nn", "nn_NO", "ti", "zh", "zh_Hans",
    "zh_Hans_SG", "zh_Hant", "zh_Hant_TW",
];

fn locales_root() -> Value {
    let locales: serde_json::Map<String, Value> = FIXTURE_LOCALES
        .iter()
        .map(|locale| ((*locale).to_owned(), Value::from(*locale)))
        .collect();
    json!({
        "Locales": locales,
        "Aliases": {
            "iw": "he",
            "iw_IL": "he_IL",
            "no_NO_NY": "nn_NO",
            "zh_SG": "zh_Hans_SG",
            "zh_TW": "zh_Hant_TW"
        }
    })
}

/// Every `(bundle, locale, document)` triple of the fixture.
#[must_use]
pub fn fixture_documents() -> Vec<(&'static str, &'static str, Value)> {
    vec![
        ("locales", "root", locales_root()),
        (
            "locales",
            "en",
            json!({ "Locales": {
                "de": "German",
                "de_AT": "German (Austria)",
                "en": "English",
                "he": "Hebrew",
                "zh": "Chinese",
                "zh_Hant_TW": "Chinese (Traditional, Taiwan)"
            } }),
        ),
        (
            "locales",
            "de",
            json!({ "Locales": { "de": "Deutsch", "en": "Englisch" } }),
        ),
        (
            "curr",
            "root",
            json!({
                "Currencies": {
                    "EUR": ["€", "EUR"],
                    "JPY": ["JP¥", "JPY"],
                    "USD": ["US$", "USD"]
                },
                "Alpha3ToNumeric": { "ARP": 32, "ARS": 32, "EUR": 978, "JPY": 392, "USD": 840 },
                "NumericToAlpha3": {
                    "32": ["ARP", "ARS"],
                    "392": "JPY",
                    "840": "USD",
                    "978": "EUR"
                }
            }),
        ),
        (
            "curr",
            "en",
            json!({
                "Currencies": {
                    "EUR": ["€", "Euro"],
                    "JPY": ["¥", "Japanese Yen"],
                    "USD": ["$", "US Dollar"]
                },
                "CurrencyMeta": { "DEFAULT": [2, 0], "JPY": [0, 0], "CHF": [2, 5] }
            }),
        ),
        (
            "curr",
            "de",
            json!({ "Currencies": { "EUR": ["€", "Euro"], "USD": ["$", "US-Dollar"] } }),
        ),
        (
            "curr",
            "zh",
            json!({ "Currencies": { "JPY": ["JP¥", "日元"], "USD": ["US$", "美元"] } }),
        ),
        (
            "curr",
            "zh_Hant",
            json!({ "Currencies": { "JPY": ["¥", "日圓"] } }),
        ),
        (
            "curr",
            "he",
            json!({ "Currencies": { "USD": ["$", "דולר אמריקאי"] } }),
        ),
        (
            "curr",
            "as",
            json!({ "Currencies": { "EUR": ["€", "ইউৰো"] } }),
        ),
        (
            "lang",
            "root",
            json!({
                "Languages": { "de": "de", "en": "en", "he": "he", "zh": "zh" },
                "Scripts": { "Cyrl": "Cyrl", "Hans": "Hans", "Hant": "Hant", "Latn": "Latn" },
                "Aliases": { "iw": "he", "in": "id" },
                "Alpha2ToAlpha3": { "de": "deu", "en": "eng", "he": "heb", "zh": "zho" }
            }),
        ),
        (
            "lang",
            "en",
            json!({
                "Languages": { "de": "German", "en": "English", "he": "Hebrew", "zh": "Chinese" },
                "Scripts": {
                    "Cyrl": "Cyrillic",
                    "Hans": "Simplified Han",
                    "Hant": "Traditional Han",
                    "Latn": "Latin"
                }
            }),
        ),
        (
            "lang",
            "de",
            json!({ "Languages": { "de": "Deutsch", "en": "Englisch", "zh": "Chinesisch" } }),
        ),
        (
            "region",
            "root",
            json!({ "Countries": { "AT": "AT", "DE": "DE", "JP": "JP", "US": "US" } }),
        ),
        (
            "region",
            "en",
            json!({ "Countries": {
                "AT": "Austria",
                "DE": "Germany",
                "JP": "Japan",
                "US": "United States"
            } }),
        ),
        (
            "region",
            "de",
            json!({ "Countries": { "AT": "Österreich", "DE": "Deutschland" } }),
        ),
    ]
}

/// Load the fixture into an in-memory store.
///
/// # Errors
///
/// Fails if a fixture document is not representable as bundle data.
pub fn fixture_store() -> Result<MemoryBundleStore> {
    let mut store = MemoryBundleStore::new();
    for (bundle, locale, document) in fixture_documents() {
        store
            .insert_json(bundle, locale, document)
            .with_context(|| format!("insert {bundle}/{locale}"))?;
    }
    Ok(store)
}

/// Fixture context with case-folding collation.
///
/// # Errors
///
/// Fails if the fixture cannot be loaded.
pub fn fixture_data() -> Result<IntlData> {
    let store = fixture_store()?;
    IntlData::load(Arc::new(store), Arc::new(CaseFoldingCollator)).context("load fixture data")
}

/// Write the fixture as `<root>/<bundle>/<locale>.json` files.
///
/// # Errors
///
/// Fails on I/O errors.
pub fn write_data_dir(root: &Path) -> Result<()> {
    for (bundle, locale, document) in fixture_documents() {
        let dir = root.join(bundle);
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let file = dir.join(format!("{locale}.json"));
        let text = serde_json::to_string_pretty(&document).context("serialize fixture")?;
        fs::write(&file, text).with_context(|| format!("write {}", file.display()))?;
    }
    Ok(())
}

/// Temporary directory holding the fixture data set under `data/`.
///
/// # Errors
///
/// Fails on I/O errors.
pub fn data_dir() -> Result<TempDir> {
    let temp = tempfile::tempdir().context("create temp dir")?;
    write_data_dir(&temp.path().join("data"))?;
    Ok(temp)
}
