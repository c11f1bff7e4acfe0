use crate::i18n::{Catalog, Translator, Untranslated};
use anyhow::{Context as _, Result};
use figment::providers::{Env, Format as _, Toml};
use figment::Figment;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_CONFIG_FILE: &str = "AccountImport.toml";
const ENV_PREFIX: &str = "ACCOUNT_IMPORT_";

/// Reads `AccountImport.toml` (or the file named by `ACCOUNT_IMPORT_CONFIG`)
/// overridden by `ACCOUNT_IMPORT_*` environment variables.
/// Nested keys are separated by `__`, e.g. `ACCOUNT_IMPORT_EMAIL__SENDER`.
pub fn figment(config_file: Option<&Path>) -> Figment {
    let config_file = config_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Env::var_or("ACCOUNT_IMPORT_CONFIG", DEFAULT_CONFIG_FILE).into());
    Figment::new()
        .merge(Toml::file(config_file))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG"]).split("__"))
}

#[derive(Debug, Default, Deserialize)]
struct TranslationConfig {
    catalog: Option<PathBuf>,
}

/// Builds the translator named by the `translations` section.
/// Without a configured catalog phrases stay untranslated.
pub fn translator(figment: &Figment) -> Result<Arc<dyn Translator>> {
    let config: TranslationConfig = if figment.contains("translations") {
        figment
            .extract_inner("translations")
            .context("failed to read translation configuration")?
    } else {
        TranslationConfig::default()
    };
    let translator: Arc<dyn Translator> = match config.catalog {
        Some(path) => Arc::new(Catalog::from_file(path)?),
        None => Arc::new(Untranslated),
    };
    Ok(translator)
}
