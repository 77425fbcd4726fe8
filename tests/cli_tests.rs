//! End-to-end tests for the `glossa` binary using `assert_cmd`.
//!
//! Each test runs the compiled binary inside a temporary directory holding
//! the fixture data set under `data/`.

use anyhow::{Context, Result};
use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;
use test_support::data_dir;

fn glossa(temp: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("glossa").context("locate glossa binary")?;
    cmd.current_dir(temp.path())
        .env_remove("GLOSSA_CONFIG_PATH")
        .env_remove("GLOSSA_LOCALE")
        .env_remove("GLOSSA_DATA_DIR")
        .env_remove("GLOSSA_COLLATION");
    Ok(cmd)
}

#[rstest]
#[case("iw_IL", "he_IL -> he -> root\n")]
#[case("zh_SG", "zh_Hans_SG -> zh_Hans -> zh -> root\n")]
#[case("de-AT", "de_AT -> de -> root\n")]
#[case("no_NO_NY", "nn_NO -> nn -> root\n")]
fn chain_prints_fallback_order(#[case] locale: &str, #[case] expected: &str) -> Result<()> {
    let temp = data_dir()?;
    glossa(&temp)?
        .args(["chain", locale])
        .assert()
        .success()
        .stdout(expected.to_owned());
    Ok(())
}

#[rstest]
#[case(&["name", "currency", "JPY", "--display", "zh_Hans_SG"], "日元\n")]
#[case(&["name", "currency", "JPY", "--display", "zh_TW"], "日圓\n")]
#[case(&["name", "region", "AT", "--display", "de_AT"], "Österreich\n")]
#[case(&["--locale", "de", "name", "language", "zh"], "Chinesisch\n")]
#[case(&["--locale", "no_NO_NY", "name", "language", "de"], "de\n")]
fn name_resolves_through_the_chain(#[case] args: &[&str], #[case] expected: &str) -> Result<()> {
    let temp = data_dir()?;
    glossa(&temp)?
        .args(args)
        .assert()
        .success()
        .stdout(expected.to_owned());
    Ok(())
}

#[test]
fn names_are_collated() -> Result<()> {
    let temp = data_dir()?;
    glossa(&temp)?
        .args(["names", "region", "--display", "de"])
        .assert()
        .success()
        .stdout("DE\tDeutschland\nJP\tJP\nUS\tUS\nAT\tÖsterreich\n");
    Ok(())
}

#[test]
fn currency_prints_metadata() -> Result<()> {
    let temp = data_dir()?;
    glossa(&temp)?
        .args(["--locale", "en", "currency", "JPY"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("symbol: ¥")
                .and(predicate::str::contains("name: Japanese Yen"))
                .and(predicate::str::contains("fraction_digits: 0"))
                .and(predicate::str::contains("numeric_code: 392")),
        );
    Ok(())
}

#[test]
fn unknown_display_locale_fails() -> Result<()> {
    let temp = data_dir()?;
    glossa(&temp)?
        .args(["name", "currency", "USD", "--display", "xx_YY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown locale `xx_YY`"));
    Ok(())
}

#[test]
fn missing_command_fails() -> Result<()> {
    let temp = data_dir()?;
    glossa(&temp)?
        .assert()
        .failure()
        .stderr(predicate::str::contains("no command given"));
    Ok(())
}

#[test]
fn verify_reports_gaps_and_fails() -> Result<()> {
    let temp = data_dir()?;
    let catalog = temp.path().join("currency.yaml");
    fs::write(&catalog, "domain: currency\nentities:\n  USD: [as]\n")
        .with_context(|| format!("write {}", catalog.display()))?;
    glossa(&temp)?
        .args(["verify", "currency", "--catalog"])
        .arg(&catalog)
        .arg("USD")
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("currency USD @ de_AT: undocumented gap")
                .and(predicate::str::contains("currency USD @ as:").not()),
        )
        .stderr(predicate::str::contains("violation(s) found for currency"));
    Ok(())
}

#[test]
fn verify_rejects_catalog_for_another_domain() -> Result<()> {
    let temp = data_dir()?;
    let catalog = temp.path().join("region.yaml");
    fs::write(&catalog, "domain: region\n")
        .with_context(|| format!("write {}", catalog.display()))?;
    glossa(&temp)?
        .args(["verify", "currency", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog is for region, expected currency"));
    Ok(())
}
