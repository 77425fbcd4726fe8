//! Locale identifiers, alias canonicalization and fallback chains.
//!
//! These types are pure and cheap to recompute: nothing here performs I/O or
//! holds mutable state, so they can be shared freely across threads.

mod alias;
mod chain;
mod tag;

pub use alias::{AliasError, AliasMap};
pub use chain::{FallbackChain, LocaleChainResolver};
pub use tag::{LocaleTag, ROOT_NAME};
