//! Consistency verifier runs over the fixture data set.

use anyhow::{Result, bail, ensure};
use glossa::domain::DomainKind;
use glossa::locale::LocaleTag;
use glossa::verify::{CatalogError, ConsistencyVerifier, ExceptionCatalog, ViolationKind};
use rstest::rstest;
use test_support::fixture_data;

const CURRENCY_CATALOG: &str = "\
domain: currency
locales_without_any: [ti, zh]
entities:
  USD: [as, de_AT]
  EUR: [en]
";

fn locales(raw: &[&str]) -> Vec<LocaleTag> {
    raw.iter().copied().map(LocaleTag::parse).collect()
}

fn codes(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|code| (*code).to_owned()).collect()
}

#[test]
fn currency_report() -> Result<()> {
    let data = fixture_data()?;
    let catalog = ExceptionCatalog::from_yaml(CURRENCY_CATALOG, "currency.yaml")?;
    let verifier = ConsistencyVerifier::for_domain(&data, DomainKind::Currency, catalog)?;
    let report = verifier.verify(
        &codes(&["EUR", "JPY", "USD"]),
        &locales(&["as", "de", "de_AT", "en", "ti", "zh"]),
    );
    insta::assert_snapshot!("currency_report", report.to_string());
    Ok(())
}

#[rstest]
#[case::documented(&["as"], 0)]
#[case::undocumented(&["he"], 1)]
fn usd_gaps(#[case] documented: &[&str], #[case] expected: usize) -> Result<()> {
    let data = fixture_data()?;
    let catalog = ExceptionCatalog::new(DomainKind::Currency).with_entity("USD", documented.iter().copied());
    let verifier = ConsistencyVerifier::new(&data, catalog)?;
    let report = verifier.verify(&codes(&["USD"]), &locales(&["as", "he"]));
    ensure!(
        report.count(ViolationKind::UndocumentedGap) == expected,
        "unexpected findings:\n{report}"
    );
    Ok(())
}

#[test]
fn self_exceptions_apply_to_matching_entity_only() -> Result<()> {
    let data = fixture_data()?;
    let catalog = ExceptionCatalog::new(DomainKind::Language).with_self_untranslated(["en", "he"]);
    let verifier = ConsistencyVerifier::new(&data, catalog)?;
    let report = verifier.verify(&codes(&["en", "he"]), &locales(&["en", "he"]));
    let lines: Vec<String> = report.violations().iter().map(ToString::to_string).collect();
    ensure!(
        lines
            == [
                "language en @ en: stale exception",
                "language en @ he: undocumented gap",
            ],
        "unexpected findings:\n{report}"
    );
    Ok(())
}

#[test]
fn verify_all_covers_the_universe() -> Result<()> {
    let data = fixture_data()?;
    let verifier = ConsistencyVerifier::new(&data, ExceptionCatalog::new(DomainKind::Region))?;
    let report = verifier.verify_all()?;
    ensure!(report.checked() == 4 * data.universe().len(), "{}", report.checked());
    ensure!(!report.is_clean());
    Ok(())
}

#[test]
fn catalog_with_unknown_locale_is_rejected() -> Result<()> {
    let data = fixture_data()?;
    let catalog = ExceptionCatalog::new(DomainKind::Currency).with_entity("USD", ["xx"]);
    match ConsistencyVerifier::new(&data, catalog) {
        Err(CatalogError::UnknownLocale { locale, .. }) => {
            ensure!(locale == LocaleTag::parse("xx"), "{locale}");
            Ok(())
        }
        other => bail!("expected UnknownLocale, got {other:?}"),
    }
}

#[test]
fn malformed_catalog_points_into_the_source() -> Result<()> {
    let src = "domain: currency\nentities:\n  USD: [as\n";
    let Err(CatalogError::Parse(err)) = ExceptionCatalog::from_yaml(src, "broken.yaml") else {
        bail!("unterminated flow sequence should not parse");
    };
    let span = err.span().ok_or_else(|| anyhow::anyhow!("parse error without a span"))?;
    ensure!(span.offset() <= src.len(), "span {span:?} outside source");
    Ok(())
}
