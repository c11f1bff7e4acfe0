use super::Translator;
use anyhow::{Context as _, Result};
use figment::providers::{Format as _, Toml};
use figment::Figment;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// A table of translations keyed by English source phrase.
///
/// Catalog files are flat TOML tables:
/// ```toml
/// "Account imported" = "Konto importiert"
/// "username" = "Benutzername"
/// ```
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    translations: HashMap<String, String>,
}

impl Catalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read translation catalog {}", path.display()))?;
        let translations: HashMap<String, String> = Figment::from(Toml::string(&contents))
            .extract()
            .with_context(|| format!("invalid translation catalog {}", path.display()))?;
        info!(
            path = %path.display(),
            entries = translations.len(),
            "loaded translation catalog"
        );
        Ok(Self { translations })
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl Translator for Catalog {
    fn lookup(&self, source: &str) -> Option<&str> {
        self.translations
            .get(source)
            .map(String::as_str)
            .filter(|translation| !translation.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for Catalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            translations: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn finds_translation() {
        let catalog: Catalog = [("username", "Benutzername")].into_iter().collect();
        assert_eq!(Some("Benutzername"), catalog.lookup("username"));
    }

    #[test]
    fn missing_translation_is_none() {
        let catalog: Catalog = [("username", "Benutzername")].into_iter().collect();
        assert_eq!(None, catalog.lookup("password"));
    }

    #[test]
    fn empty_translation_counts_as_missing() {
        let catalog: Catalog = [("username", "")].into_iter().collect();
        assert_eq!(None, catalog.lookup("username"));
    }

    #[test]
    fn loads_catalog_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "de.toml",
                r#"
                "Account imported" = "Konto importiert"
                "Below you will find your new login credentials." = "Nachfolgend finden Sie Ihre neuen Zugangsdaten."
                "#,
            )?;
            let catalog = Catalog::from_file("de.toml").map_err(|e| e.to_string())?;
            assert_eq!(2, catalog.len());
            assert_eq!(Some("Konto importiert"), catalog.lookup("Account imported"));
            assert_eq!(
                Some("Nachfolgend finden Sie Ihre neuen Zugangsdaten."),
                catalog.lookup("Below you will find your new login credentials.")
            );
            Ok(())
        });
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        Jail::expect_with(|_| {
            assert!(Catalog::from_file("missing.toml").is_err());
            Ok(())
        });
    }
}
