//! Errors surfaced by entry resolution and the domain providers.

use crate::bundle::{BundleError, KeyPath};
use crate::locale::{AliasError, LocaleTag};
use miette::Diagnostic;
use thiserror::Error;

/// Failures returned to callers of the resolution engine.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    /// No locale consulted defines the requested key, including any default
    /// key retry.
    #[error("missing resource `{key_path}` in bundle `{bundle}` (looked up from `{locale}`)")]
    #[diagnostic(
        code(glossa::resolver::missing_resource),
        help("the data set has no value for this key in the locale or any of its parents")
    )]
    MissingResource {
        /// Bundle that was queried.
        bundle: String,
        /// First locale of the chain that was walked.
        locale: Box<LocaleTag>,
        /// Requested key path.
        key_path: KeyPath,
    },

    /// The requested display locale is not part of the known universe.
    #[error("unknown locale `{locale}`")]
    #[diagnostic(
        code(glossa::resolver::unknown_locale),
        help("use one of the locales listed by the `locales` bundle, or one of its aliases")
    )]
    UnknownLocale {
        /// Locale as requested by the caller.
        locale: Box<LocaleTag>,
    },

    /// The value exists but has the wrong shape.
    #[error("entry `{key_path}` in bundle `{bundle}` is a {found}, expected {expected}")]
    #[diagnostic(code(glossa::resolver::unexpected_type))]
    UnexpectedType {
        /// Bundle that was queried.
        bundle: String,
        /// Key path of the offending value.
        key_path: KeyPath,
        /// Shape the caller needed.
        expected: &'static str,
        /// Shape found in the data.
        found: &'static str,
    },

    /// An alias table in the data set maps an alias onto another alias.
    #[error("invalid alias table in bundle `{bundle}`")]
    #[diagnostic(
        code(glossa::resolver::invalid_aliases),
        help("every alias must point directly at a canonical identifier")
    )]
    InvalidAliases {
        /// Bundle holding the alias table.
        bundle: String,
        /// The offending alias pair.
        #[source]
        source: AliasError,
    },

    /// The bundle store failed for a reason other than absence.
    #[error(transparent)]
    #[diagnostic(code(glossa::resolver::bundle))]
    Bundle(#[from] BundleError),
}

impl ResolveError {
    /// Return `true` for [`ResolveError::MissingResource`].
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingResource { .. })
    }
}
