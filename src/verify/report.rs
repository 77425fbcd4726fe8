//! Verifier findings.

use crate::domain::DomainKind;
use crate::locale::LocaleTag;
use serde::Serialize;
use std::fmt;

/// Entity label used for findings that concern a whole locale.
pub const ANY_ENTITY: &str = "*";

/// What went wrong for one (entity, locale) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Data is missing and no exception documents it.
    UndocumentedGap,
    /// An exception documents a gap that no longer exists.
    StaleException,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UndocumentedGap => "undocumented gap",
            Self::StaleException => "stale exception",
        })
    }
}

/// A single verifier finding.
///
/// Ordering follows the field order so sorted reports group by domain, then
/// entity, then locale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Violation {
    /// Domain being checked.
    pub domain: DomainKind,
    /// Entity code, or [`ANY_ENTITY`].
    pub entity: String,
    /// Locale the finding applies to.
    pub locale: LocaleTag,
    /// Kind of finding.
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {}: {}",
            self.domain, self.entity, self.locale, self.kind
        )
    }
}

/// Outcome of one verifier run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    domain: DomainKind,
    checked: usize,
    violations: Vec<Violation>,
}

impl Report {
    pub(crate) fn new(domain: DomainKind, checked: usize, mut violations: Vec<Violation>) -> Self {
        violations.sort();
        Self {
            domain,
            checked,
            violations,
        }
    }

    /// Domain that was checked.
    #[must_use]
    pub const fn domain(&self) -> DomainKind {
        self.domain
    }

    /// Number of (entity, locale) pairs examined.
    #[must_use]
    pub const fn checked(&self) -> usize {
        self.checked
    }

    /// Findings in sorted order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Return `true` when nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of findings of `kind`.
    #[must_use]
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "{violation}")?;
        }
        write!(
            f,
            "{}: {} pairs checked, {} undocumented gaps, {} stale exceptions",
            self.domain,
            self.checked,
            self.count(ViolationKind::UndocumentedGap),
            self.count(ViolationKind::StaleException)
        )
    }
}
