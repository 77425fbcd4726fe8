//! Currency names, symbols and metadata.

use super::kind::CURRENCY_SYMBOL_INDEX;
use super::{DomainKind, IntlData};
use crate::bundle::{KeyPath, ResourceEntry};
use crate::locale::LocaleTag;
use crate::resolver::{AnchorPolicy, ResolveError, expect_integer, expect_string, unexpected};
use indexmap::IndexMap;

const BUNDLE: &str = "curr";
const META_KEY: &str = "CurrencyMeta";
const FRACTION_DIGITS_INDEX: usize = 0;
const ROUNDING_INCREMENT_INDEX: usize = 1;
/// Metadata is locale independent and published under `en`.
const META_ANCHOR: &str = "en";

/// Currency queries against the `curr` bundle.
///
/// Symbols and names follow the display locale's fallback chain. Fraction
/// digits and rounding increments are read at a fixed anchor and fall back to
/// the `DEFAULT` record. Numeric codes live at root.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyData<'a> {
    data: &'a IntlData,
}

impl<'a> CurrencyData<'a> {
    pub(crate) const fn new(data: &'a IntlData) -> Self {
        Self { data }
    }

    fn meta_policy() -> AnchorPolicy {
        AnchorPolicy::with_default(LocaleTag::parse(META_ANCHOR), 1)
    }

    /// All currency codes listed at root.
    ///
    /// # Errors
    ///
    /// Fails when the root listing is missing.
    pub fn currencies(&self) -> Result<Vec<String>, ResolveError> {
        self.data.entities(DomainKind::Currency)
    }

    /// Symbol of `currency` for `display`, such as `€` or `US$`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] when no locale of the chain
    /// defines the symbol.
    pub fn symbol(&self, currency: &str, display: &LocaleTag) -> Result<String, ResolveError> {
        let chain = self.data.chain_for(display)?;
        let path = KeyPath::new()
            .key(DomainKind::Currency.names_key())
            .key(currency)
            .index(CURRENCY_SYMBOL_INDEX);
        let entry = self.data.resolver().resolve(BUNDLE, &chain, &path)?;
        expect_string(BUNDLE, &path, entry)
    }

    /// Display name of `currency` for `display`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] when no locale of the chain
    /// defines the name.
    pub fn name(&self, currency: &str, display: &LocaleTag) -> Result<String, ResolveError> {
        self.data.display_name(DomainKind::Currency, currency, display)
    }

    /// All currency names for `display`, collated by name.
    ///
    /// Currencies without a name anywhere in the chain are left out.
    ///
    /// # Errors
    ///
    /// Fails on unknown display locales and store errors.
    pub fn names(&self, display: &LocaleTag) -> Result<IndexMap<String, String>, ResolveError> {
        self.data.collated_names(DomainKind::Currency, display)
    }

    /// Number of minor-unit digits, falling back to the `DEFAULT` record.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] when neither the currency
    /// nor the default record defines the value.
    pub fn fraction_digits(&self, currency: &str) -> Result<u32, ResolveError> {
        self.meta(currency, FRACTION_DIGITS_INDEX)
    }

    /// Rounding increment, falling back to the `DEFAULT` record.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fraction_digits`].
    pub fn rounding_increment(&self, currency: &str) -> Result<u32, ResolveError> {
        self.meta(currency, ROUNDING_INCREMENT_INDEX)
    }

    /// ISO 4217 numeric code of `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] for currencies without a
    /// numeric code.
    pub fn numeric_code(&self, currency: &str) -> Result<u32, ResolveError> {
        let path = KeyPath::new().key("Alpha3ToNumeric").key(currency);
        let entry = self
            .data
            .resolver()
            .resolve_anchored(BUNDLE, &AnchorPolicy::root(), &path)?;
        let value = expect_integer(BUNDLE, &path, &entry)?;
        u32::try_from(value).map_err(|_| unexpected(BUNDLE, &path, "non-negative integer", &entry))
    }

    /// Alphabetic codes sharing the numeric code `numeric`.
    ///
    /// Several codes can map to one number (historic currencies), so the
    /// result is a list in data order.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] for unassigned numbers.
    pub fn for_numeric_code(&self, numeric: u32) -> Result<Vec<String>, ResolveError> {
        let path = KeyPath::new()
            .key("NumericToAlpha3")
            .key(numeric.to_string());
        let entry = self
            .data
            .resolver()
            .resolve_anchored(BUNDLE, &AnchorPolicy::root(), &path)?;
        match entry {
            ResourceEntry::String(code) => Ok(vec![code]),
            ResourceEntry::Sequence(items) => items
                .into_iter()
                .map(|item| expect_string(BUNDLE, &path, item))
                .collect(),
            other => Err(unexpected(BUNDLE, &path, "string or sequence", &other)),
        }
    }

    fn meta(&self, currency: &str, index: usize) -> Result<u32, ResolveError> {
        let path = KeyPath::new().key(META_KEY).key(currency).index(index);
        let entry = self
            .data
            .resolver()
            .resolve_anchored(BUNDLE, &Self::meta_policy(), &path)?;
        let value = expect_integer(BUNDLE, &path, &entry)?;
        u32::try_from(value).map_err(|_| unexpected(BUNDLE, &path, "non-negative integer", &entry))
    }
}
