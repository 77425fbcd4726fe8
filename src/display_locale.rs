//! Display-locale selection for the command line.
//!
//! Precedence is the per-command `--display` flag, then the merged `locale`
//! setting (CLI, config file or `GLOSSA_LOCALE`), then the host locale, and
//! finally [`DEFAULT_DISPLAY_LOCALE`].

use crate::locale::{LocaleTag, ROOT_NAME};

/// Locale used when nothing else yields a valid tag.
pub const DEFAULT_DISPLAY_LOCALE: &str = "en";

/// Host locale lookup.
pub trait SystemLocale {
    /// Return the host locale string when available.
    fn system_locale(&self) -> Option<String>;
}

/// Host locale provider backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SysLocale;

impl SystemLocale for SysLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Normalize a raw locale string such as `de_AT.UTF-8` into a [`LocaleTag`].
///
/// Encoding and modifier suffixes are stripped. The POSIX `C` locale and
/// strings that are not well-formed locale identifiers yield `None`; `root`
/// is accepted as is. ICU-only identifiers such as `no_NO_NY` are kept.
///
/// # Examples
///
/// ```
/// use glossa::display_locale::normalize_locale_tag;
///
/// let tag = normalize_locale_tag("de_AT.UTF-8").map(|tag| tag.to_string());
/// assert_eq!(tag.as_deref(), Some("de_AT"));
/// assert!(normalize_locale_tag("C").is_none());
/// assert!(normalize_locale_tag("not a locale").is_none());
/// ```
#[must_use]
pub fn normalize_locale_tag(raw: &str) -> Option<LocaleTag> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() || stripped == "C" || stripped.eq_ignore_ascii_case("POSIX") {
        return None;
    }
    if stripped.eq_ignore_ascii_case(ROOT_NAME) {
        return Some(LocaleTag::root());
    }
    LocaleTag::is_well_formed(stripped).then(|| LocaleTag::parse(stripped))
}

/// Pick the display locale from the available sources.
///
/// # Examples
///
/// ```
/// use glossa::display_locale::{SystemLocale, resolve_display_locale};
///
/// struct StubSystem(Option<String>);
/// impl SystemLocale for StubSystem {
///     fn system_locale(&self) -> Option<String> {
///         self.0.clone()
///     }
/// }
///
/// let system = StubSystem(Some("fr_FR.UTF-8".into()));
/// assert_eq!(resolve_display_locale(Some("zh-Hans"), None, &system).to_string(), "zh_Hans");
/// assert_eq!(resolve_display_locale(None, None, &system).to_string(), "fr_FR");
/// assert_eq!(resolve_display_locale(None, None, &StubSystem(None)).to_string(), "en");
/// ```
#[must_use]
pub fn resolve_display_locale(
    explicit: Option<&str>,
    configured: Option<&str>,
    system: &impl SystemLocale,
) -> LocaleTag {
    let host = system.system_locale();
    [explicit, configured, host.as_deref()]
        .into_iter()
        .flatten()
        .find_map(normalize_locale_tag)
        .unwrap_or_else(|| LocaleTag::parse(DEFAULT_DISPLAY_LOCALE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct NoSystem;

    impl SystemLocale for NoSystem {
        fn system_locale(&self) -> Option<String> {
            None
        }
    }

    #[rstest]
    #[case("en_US.UTF-8", Some("en_US"))]
    #[case("sr_RS@latin", Some("sr_RS"))]
    #[case("zh-Hant-TW", Some("zh_Hant_TW"))]
    #[case("root", Some("root"))]
    #[case("no_NO_NY", Some("no_NO_NY"))]
    #[case("ja_JP_TRADITIONAL.UTF-8", Some("ja_JP_TRADITIONAL"))]
    #[case("POSIX", None)]
    #[case("", None)]
    fn normalizes(#[case] raw: &str, #[case] expected: Option<&str>) {
        let tag = normalize_locale_tag(raw).map(|tag| tag.to_string());
        assert_eq!(tag.as_deref(), expected);
    }

    struct FrenchSystem;

    impl SystemLocale for FrenchSystem {
        fn system_locale(&self) -> Option<String> {
            Some(String::from("fr_FR.UTF-8"))
        }
    }

    #[rstest]
    #[case(Some("no_NO_NY"), None)]
    #[case(None, Some("no_NO_NY"))]
    fn icu_identifiers_are_not_replaced_by_host(
        #[case] explicit: Option<&str>,
        #[case] configured: Option<&str>,
    ) {
        let tag = resolve_display_locale(explicit, configured, &FrenchSystem);
        assert_eq!(tag.to_string(), "no_NO_NY");
    }

    #[test]
    fn invalid_explicit_value_falls_through() {
        let tag = resolve_display_locale(Some("!!"), Some("de"), &NoSystem);
        assert_eq!(tag.to_string(), "de");
    }
}
