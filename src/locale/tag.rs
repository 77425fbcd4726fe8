//! Structured locale identifiers.
//!
//! A [`LocaleTag`] splits an ICU-style identifier such as `zh_Hans_SG` into
//! its language, script, region and variant subtags. Parsing never fails:
//! subtags that do not have the shape of a script or region are kept as
//! opaque variants so legacy identifiers like `no_NO_NY` still round-trip.
//!
//! # Examples
//!
//! ```
//! use glossa::locale::LocaleTag;
//!
//! let tag = LocaleTag::parse("zh-hans-sg");
//! assert_eq!(tag.to_string(), "zh_Hans_SG");
//! assert_eq!(tag.script(), Some("Hans"));
//! assert_eq!(tag.subtag_count(), 3);
//! assert!(LocaleTag::parse("root").is_root());
//! ```

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Text form of the root locale.
pub const ROOT_NAME: &str = "root";

/// A normalized locale identifier.
///
/// Subtags are stored in the fixed order `language, script, region,
/// variants`. The root locale has no subtags at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
}

impl LocaleTag {
    /// The root locale, terminal element of every fallback chain.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            language: String::new(),
            script: None,
            region: None,
            variants: Vec::new(),
        }
    }

    /// Parse an identifier using `_` or `-` separators.
    ///
    /// Empty input and `root` (in any case) produce the root locale.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw
            .trim()
            .split(['_', '-'])
            .filter(|part| !part.is_empty());
        let Some(language) = parts.next() else {
            return Self::root();
        };
        if language.eq_ignore_ascii_case(ROOT_NAME) {
            return Self::root();
        }

        let mut tag = Self {
            language: language.to_ascii_lowercase(),
            ..Self::root()
        };
        for part in parts {
            if tag.region.is_none() && tag.variants.is_empty() {
                if tag.script.is_none() && is_script(part) {
                    tag.script = Some(titlecase(part));
                    continue;
                }
                if is_region(part) {
                    tag.region = Some(part.to_ascii_uppercase());
                    continue;
                }
            }
            tag.variants.push(part.to_ascii_uppercase());
        }
        tag
    }

    /// Return `true` when `raw` is a language subtag of ASCII letters
    /// followed by ASCII alphanumeric subtags, joined by `_` or `-`.
    ///
    /// This is looser than BCP 47 so ICU identifiers such as `no_NO_NY`
    /// qualify. Whether a data set knows the locale is a separate question.
    #[must_use]
    pub fn is_well_formed(raw: &str) -> bool {
        let mut parts = raw.trim().split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        !language.is_empty()
            && language.bytes().all(|b| b.is_ascii_alphabetic())
            && parts.all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_alphanumeric()))
    }

    /// Return `true` for the root locale.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// Language subtag; empty for root.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Script subtag such as `Hans`.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Region subtag such as `SG` or `419`.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Variant subtags in order of appearance.
    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Number of subtags; zero for root.
    #[must_use]
    pub fn subtag_count(&self) -> usize {
        if self.is_root() {
            return 0;
        }
        1 + usize::from(self.script.is_some())
            + usize::from(self.region.is_some())
            + self.variants.len()
    }

    /// Drop the rightmost subtag, returning `None` for root.
    ///
    /// Variants go first (last variant first), then the region, then the
    /// script. A bare language becomes root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let mut parent = self.clone();
        if parent.variants.pop().is_some() {
            return Some(parent);
        }
        if parent.region.take().is_some() {
            return Some(parent);
        }
        if parent.script.take().is_some() {
            return Some(parent);
        }
        Some(Self::root())
    }
}

fn is_script(part: &str) -> bool {
    part.len() == 4 && part.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region(part: &str) -> bool {
    match part.len() {
        2 => part.bytes().all(|b| b.is_ascii_alphabetic()),
        3 => part.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

fn titlecase(part: &str) -> String {
    let mut out = part.to_ascii_lowercase();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(ROOT_NAME);
        }
        f.write_str(&self.language)?;
        for part in self
            .script
            .iter()
            .chain(self.region.iter())
            .chain(self.variants.iter())
        {
            write!(f, "_{part}")?;
        }
        Ok(())
    }
}

impl FromStr for LocaleTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for LocaleTag {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for LocaleTag {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<LocaleTag> for String {
    fn from(value: LocaleTag) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("zh_Hans_SG", "zh_Hans_SG", 3)]
    #[case("ZH-hans-sg", "zh_Hans_SG", 3)]
    #[case("en_US_POSIX", "en_US_POSIX", 3)]
    #[case("es_419", "es_419", 2)]
    #[case("no_NO_NY", "no_NO_NY", 3)]
    #[case("ja_JP_traditional", "ja_JP_TRADITIONAL", 3)]
    #[case("en__POSIX", "en_POSIX", 2)]
    #[case("", "root", 0)]
    #[case("Root", "root", 0)]
    fn parse_normalizes_case_and_counts_subtags(
        #[case] raw: &str,
        #[case] expected: &str,
        #[case] count: usize,
    ) {
        let tag = LocaleTag::parse(raw);
        assert_eq!(tag.to_string(), expected);
        assert_eq!(tag.subtag_count(), count);
    }

    #[rstest]
    #[case("no_NO_NY", true)]
    #[case("ja_JP_TRADITIONAL", true)]
    #[case("zh-Hant-TW", true)]
    #[case("es_419", true)]
    #[case("root", true)]
    #[case("", false)]
    #[case("en__US", false)]
    #[case("419", false)]
    #[case("en US", false)]
    fn well_formed_identifiers(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(LocaleTag::is_well_formed(raw), expected);
    }

    #[test]
    fn opaque_subtags_become_variants() {
        let tag = LocaleTag::parse("de_1996_x");
        assert_eq!(tag.region(), None);
        assert_eq!(tag.variants(), ["1996", "X"]);
    }

    #[test]
    fn script_is_only_recognized_before_region() {
        let tag = LocaleTag::parse("sr_RS_Latn");
        assert_eq!(tag.script(), None);
        assert_eq!(tag.region(), Some("RS"));
        assert_eq!(tag.variants(), ["LATN"]);
    }

    #[test]
    fn parent_drops_rightmost_subtag() {
        let tag = LocaleTag::parse("sr_Latn_RS");
        let parent = tag.parent();
        assert_eq!(parent.as_ref().map(ToString::to_string).as_deref(), Some("sr_Latn"));
        assert_eq!(LocaleTag::parse("sr").parent(), Some(LocaleTag::root()));
        assert_eq!(LocaleTag::root().parent(), None);
    }

    #[test]
    fn serde_uses_text_form() -> serde_json::Result<()> {
        let tag: LocaleTag = serde_json::from_str("\"zh-Hant-TW\"")?;
        assert_eq!(serde_json::to_string(&tag)?, "\"zh_Hant_TW\"");
        Ok(())
    }
}
