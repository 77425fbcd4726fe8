//! Value parsers for clap arguments.

use crate::locale::{LocaleTag, ROOT_NAME};

/// Accept `root` or any well-formed ICU locale identifier, with `_` or `-`.
///
/// Membership in the data set is checked later, against its locale universe.
pub(super) fn parse_locale(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(String::from("locale must not be empty"));
    }
    if trimmed.eq_ignore_ascii_case(ROOT_NAME) {
        return Ok(trimmed.to_owned());
    }
    if LocaleTag::is_well_formed(trimmed) {
        Ok(trimmed.to_owned())
    } else {
        Err(format!("invalid locale '{trimmed}'"))
    }
}

/// Accept an entity code made of ASCII letters, digits and underscores.
pub(super) fn parse_code(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(String::from("code must not be empty"));
    }
    if trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(trimmed.to_owned())
    } else {
        Err(format!("invalid code '{trimmed}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en_US", true)]
    #[case("zh-Hans-SG", true)]
    #[case("ROOT", true)]
    #[case("no_NO_NY", true)]
    #[case("ja_JP_TRADITIONAL", true)]
    #[case("", false)]
    #[case("not a locale", false)]
    fn locales(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(parse_locale(raw).is_ok(), ok);
    }

    #[rstest]
    #[case("USD", true)]
    #[case("zh_Hant", true)]
    #[case("U$D", false)]
    fn codes(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(parse_code(raw).is_ok(), ok);
    }
}
