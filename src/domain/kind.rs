//! The data domains served by the crate.

use crate::bundle::KeyPath;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A family of entities sharing one bundle and one name table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    /// ISO 4217 currencies.
    Currency,
    /// Languages.
    Language,
    /// Locales, named by their display name.
    Locale,
    /// Regions and countries.
    Region,
    /// Writing systems.
    Script,
}

/// Position of the display name inside a currency record.
pub(crate) const CURRENCY_NAME_INDEX: usize = 1;
/// Position of the symbol inside a currency record.
pub(crate) const CURRENCY_SYMBOL_INDEX: usize = 0;

impl DomainKind {
    /// Every domain, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Currency,
        Self::Language,
        Self::Locale,
        Self::Region,
        Self::Script,
    ];

    /// Bundle directory holding the domain's data.
    #[must_use]
    pub const fn bundle(self) -> &'static str {
        match self {
            Self::Currency => "curr",
            Self::Language | Self::Script => "lang",
            Self::Locale => "locales",
            Self::Region => "region",
        }
    }

    /// Top-level table listing entities and their display names.
    #[must_use]
    pub const fn names_key(self) -> &'static str {
        match self {
            Self::Currency => "Currencies",
            Self::Language => "Languages",
            Self::Locale => "Locales",
            Self::Region => "Countries",
            Self::Script => "Scripts",
        }
    }

    /// Key path of the display name of `entity`.
    ///
    /// ```
    /// use glossa::domain::DomainKind;
    ///
    /// assert_eq!(DomainKind::Currency.name_path("USD").to_string(), "Currencies/USD/1");
    /// assert_eq!(DomainKind::Region.name_path("DE").to_string(), "Countries/DE");
    /// ```
    #[must_use]
    pub fn name_path(self, entity: &str) -> KeyPath {
        let path = KeyPath::new().key(self.names_key()).key(entity);
        match self {
            Self::Currency => path.index(CURRENCY_NAME_INDEX),
            _ => path,
        }
    }

    /// Lower-case label used on the command line and in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::Language => "language",
            Self::Locale => "locale",
            Self::Region => "region",
            Self::Script => "script",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DomainKind::Currency, "curr")]
    #[case(DomainKind::Language, "lang")]
    #[case(DomainKind::Script, "lang")]
    #[case(DomainKind::Locale, "locales")]
    #[case(DomainKind::Region, "region")]
    fn bundles(#[case] kind: DomainKind, #[case] bundle: &str) {
        assert_eq!(kind.bundle(), bundle);
    }

    #[test]
    fn labels_match_value_enum_names() {
        for kind in DomainKind::ALL {
            let parsed = <DomainKind as ValueEnum>::from_str(kind.as_str(), false);
            assert_eq!(parsed, Ok(kind));
        }
    }
}
