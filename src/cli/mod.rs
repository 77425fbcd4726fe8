//! Command line interface definition using clap.
//!
//! [`Cli`] doubles as the configuration schema: [`merge_with_config`] layers
//! defaults, discovered configuration files, `GLOSSA_*` environment
//! variables and explicit flags, in that order.

use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use ortho_config::declarative::LayerComposition;
use ortho_config::figment::{Figment, providers::Env};
use ortho_config::uncased::Uncased;
use ortho_config::{
    ConfigDiscovery, MergeComposer, OrthoConfig, OrthoMergeExt, OrthoResult, sanitize_value,
};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use crate::collation::{CaseFoldingCollator, CodePointCollator, Collator};
use crate::domain::DomainKind;

mod parsing;

use parsing::{parse_code, parse_locale};

const CONFIG_ENV_VAR: &str = "GLOSSA_CONFIG_PATH";
const ENV_PREFIX: &str = "GLOSSA_";

/// Query locale display data and check its completeness.
#[derive(Debug, Parser, Serialize, Deserialize, OrthoConfig)]
#[command(author, version, about, long_about = None)]
#[ortho_config(prefix = "GLOSSA")]
pub struct Cli {
    /// Directory holding `<bundle>/<locale>.json` data files.
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    #[ortho_config(default = default_data_dir())]
    pub data_dir: PathBuf,

    /// Default display locale (for example: en, de_AT, zh-Hans).
    #[arg(long, value_name = "LOCALE", value_parser = parse_locale)]
    pub locale: Option<String>,

    /// Ordering used for name listings.
    #[arg(long, value_enum, value_name = "MODE")]
    pub collation: Option<CollationMode>,

    /// Enable verbose diagnostic logging.
    #[arg(short, long)]
    #[ortho_config(default = false)]
    pub verbose: bool,

    /// Subcommand to execute.
    ///
    /// `OrthoConfig` merging ignores this field; CLI parsing supplies it.
    #[serde(skip)]
    #[command(subcommand)]
    #[ortho_config(skip_cli)]
    pub command: Option<Commands>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            locale: None,
            collation: None,
            verbose: false,
            command: None,
        }
    }
}

/// Name ordering strategies available without an ICU binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CollationMode {
    /// Case-insensitive comparison with a code-point tiebreak.
    #[default]
    CaseFolding,
    /// Plain Unicode scalar order.
    CodePoint,
}

impl CollationMode {
    /// Collator implementing this mode.
    #[must_use]
    pub fn collator(self) -> Arc<dyn Collator> {
        match self {
            Self::CaseFolding => Arc::new(CaseFoldingCollator),
            Self::CodePoint => Arc::new(CodePointCollator),
        }
    }
}

/// Available top-level commands.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Commands {
    /// Print the fallback chain of a locale.
    Chain {
        /// Locale to expand.
        #[arg(value_name = "LOCALE", value_parser = parse_locale)]
        locale: String,
    },

    /// Print the display name of one entity.
    Name {
        /// Domain of the entity.
        #[arg(value_enum)]
        domain: DomainKind,
        /// Entity code, such as `USD`, `de`, `AT` or `Latn`.
        #[arg(value_name = "CODE", value_parser = parse_code)]
        code: String,
        /// Display locale; overrides `--locale`.
        #[arg(long, value_name = "LOCALE", value_parser = parse_locale)]
        display: Option<String>,
    },

    /// Print every display name of a domain, collated.
    Names {
        /// Domain to list.
        #[arg(value_enum)]
        domain: DomainKind,
        /// Display locale; overrides `--locale`.
        #[arg(long, value_name = "LOCALE", value_parser = parse_locale)]
        display: Option<String>,
    },

    /// Print symbol, name and metadata of a currency.
    Currency {
        /// ISO 4217 alphabetic code.
        #[arg(value_name = "CODE", value_parser = parse_code)]
        code: String,
        /// Display locale; overrides `--locale`.
        #[arg(long, value_name = "LOCALE", value_parser = parse_locale)]
        display: Option<String>,
    },

    /// Check a domain against an exception catalog.
    ///
    /// Exits with a failure status when violations are found.
    Verify {
        /// Domain to check.
        #[arg(value_enum)]
        domain: DomainKind,
        /// YAML exception catalog.
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        /// Entities to check; defaults to every entity listed at root.
        #[arg(value_name = "CODE", value_parser = parse_code)]
        #[serde(default)]
        entities: Vec<String>,
    },
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Parse CLI arguments.
///
/// Returns both the parsed CLI struct and the `ArgMatches` required for
/// configuration merging.
///
/// # Errors
///
/// Returns a `clap::Error` when parsing fails.
pub fn parse_from<I, T>(iter: I) -> Result<(Cli, ArgMatches), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = Cli::command();
    let matches = command.try_get_matches_from_mut(iter)?;
    // Clone matches before from_arg_matches_mut consumes the values.
    let matches_for_merge = matches.clone();
    let mut matches_for_parse = matches;
    let cli = Cli::from_arg_matches_mut(&mut matches_for_parse)
        .map_err(|clap_err| clap_err.with_cmd(&command))?;
    Ok((cli, matches_for_merge))
}

/// Return the prefixed environment provider for CLI configuration.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
}

fn config_discovery() -> ConfigDiscovery {
    ConfigDiscovery::builder("glossa")
        .env_var(CONFIG_ENV_VAR)
        .build()
}

/// The merge pipeline treats an empty JSON object as "no overrides".
fn is_empty_value(value: &serde_json::Value) -> bool {
    matches!(value, serde_json::Value::Object(map) if map.is_empty())
}

fn cli_overrides_from_matches(cli: &Cli, matches: &ArgMatches) -> OrthoResult<serde_json::Value> {
    let mut map = match sanitize_value(cli)? {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(Arc::new(ortho_config::OrthoError::Validation {
                key: String::from("cli"),
                message: format!(
                    "expected parsed CLI values to serialize to an object, got {other:?}"
                ),
            }));
        }
    };

    map.remove("command");
    for field in ["data_dir", "verbose"] {
        if matches.value_source(field) != Some(ValueSource::CommandLine) {
            map.remove(field);
        }
    }

    Ok(serde_json::Value::Object(map))
}

/// Merge configuration layers over the parsed CLI values.
///
/// # Errors
///
/// Returns an [`ortho_config::OrthoError`] if layer composition or merging
/// fails.
pub fn merge_with_config(cli: &Cli, matches: &ArgMatches) -> OrthoResult<Cli> {
    let command = cli.command.clone();
    let mut errors = Vec::new();
    let mut composer = MergeComposer::with_capacity(4);

    match sanitize_value(&Cli::default()) {
        Ok(value) => composer.push_defaults(value),
        Err(err) => errors.push(err),
    }

    let mut file_layers = config_discovery().compose_layers();
    errors.append(&mut file_layers.required_errors);
    if file_layers.value.is_empty() {
        errors.append(&mut file_layers.optional_errors);
    }
    for layer in file_layers.value {
        composer.push_layer(layer);
    }

    let env_provider = env_provider()
        .map(|key| Uncased::new(key.as_str().to_ascii_uppercase()))
        .split("__");
    match Figment::from(env_provider)
        .extract::<serde_json::Value>()
        .into_ortho_merge()
    {
        Ok(value) => composer.push_environment(value),
        Err(err) => errors.push(err),
    }

    match cli_overrides_from_matches(cli, matches) {
        Ok(value) if !is_empty_value(&value) => composer.push_cli(value),
        Ok(_) => {}
        Err(err) => errors.push(err),
    }

    let composition = LayerComposition::new(composer.layers(), errors);
    let mut merged = composition.into_merge_result(Cli::merge_from_layers)?;
    merged.command = command;
    Ok(merged)
}
