//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal: it opens the data directory named by
//! the merged [`Cli`] and writes each command's output to the supplied
//! writer.

use crate::bundle::JsonBundleStore;
use crate::cli::{Cli, Commands};
use crate::display_locale::{SysLocale, SystemLocale, resolve_display_locale};
use crate::domain::{DomainKind, IntlData};
use crate::locale::LocaleTag;
use crate::verify::{ConsistencyVerifier, ExceptionCatalog};
use anyhow::{Context, Result, anyhow, bail};
use camino::Utf8PathBuf;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Execute the command of a merged [`Cli`], writing results to `out`.
///
/// # Errors
///
/// Returns an error when no command was given, when the data directory or
/// catalog cannot be read, when a lookup fails, or when verification reports
/// violations.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    run_with_system(cli, out, &SysLocale)
}

/// Like [`run`], with an explicit host-locale provider.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_system(cli: &Cli, out: &mut impl Write, system: &impl SystemLocale) -> Result<()> {
    let Some(command) = cli.command.as_ref() else {
        bail!("no command given; run with --help for usage");
    };
    let data = open_data(cli)?;
    let display = |explicit: Option<&String>| {
        resolve_display_locale(explicit.map(String::as_str), cli.locale.as_deref(), system)
    };
    match command {
        Commands::Chain { locale } => {
            let chain = data.universe().chains().chain(&LocaleTag::parse(locale));
            writeln!(out, "{chain}")?;
        }
        Commands::Name {
            domain,
            code,
            display: explicit,
        } => {
            let name = data.name(*domain, code, &display(explicit.as_ref()))?;
            writeln!(out, "{name}")?;
        }
        Commands::Names {
            domain,
            display: explicit,
        } => {
            for (code, name) in data.names(*domain, &display(explicit.as_ref()))? {
                writeln!(out, "{code}\t{name}")?;
            }
        }
        Commands::Currency {
            code,
            display: explicit,
        } => write_currency(&data, code, &display(explicit.as_ref()), out)?,
        Commands::Verify {
            domain,
            catalog,
            entities,
        } => verify(&data, *domain, catalog, entities, out)?,
    }
    Ok(())
}

fn open_data(cli: &Cli) -> Result<IntlData> {
    let dir = Utf8PathBuf::from_path_buf(cli.data_dir.clone())
        .map_err(|path| anyhow!("data directory {} is not valid UTF-8", path.display()))?;
    let store = JsonBundleStore::open(&dir).with_context(|| format!("opening data directory {dir}"))?;
    let collator = cli.collation.unwrap_or_default().collator();
    let data = IntlData::load(Arc::new(store), collator)
        .with_context(|| format!("loading locale universe from {dir}"))?;
    debug!(%dir, locales = data.universe().len(), "data directory ready");
    Ok(data)
}

fn write_currency(
    data: &IntlData,
    code: &str,
    display: &LocaleTag,
    out: &mut impl Write,
) -> Result<()> {
    let currencies = data.currencies();
    writeln!(out, "symbol: {}", currencies.symbol(code, display)?)?;
    writeln!(out, "name: {}", currencies.name(code, display)?)?;
    writeln!(out, "fraction_digits: {}", currencies.fraction_digits(code)?)?;
    writeln!(out, "rounding_increment: {}", currencies.rounding_increment(code)?)?;
    match currencies.numeric_code(code) {
        Ok(numeric) => writeln!(out, "numeric_code: {numeric}")?,
        Err(err) if err.is_missing() => debug!(%code, "no numeric code"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn verify(
    data: &IntlData,
    domain: DomainKind,
    catalog_path: &Path,
    entities: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let path = Utf8PathBuf::from_path_buf(catalog_path.to_path_buf())
        .map_err(|path| anyhow!("catalog path {} is not valid UTF-8", path.display()))?;
    let catalog = ExceptionCatalog::from_path(&path)?;
    let verifier = ConsistencyVerifier::for_domain(data, domain, catalog)?;
    let report = if entities.is_empty() {
        verifier.verify_all()?
    } else {
        let locales: Vec<LocaleTag> = data.universe().iter().cloned().collect();
        verifier.verify(entities, &locales)
    };
    writeln!(out, "{report}")?;
    if report.is_clean() {
        Ok(())
    } else {
        bail!(
            "{} violation(s) found for {domain}",
            report.violations().len()
        )
    }
}
