use crate::i18n::{Catalog, DEFAULT_LOCALE, FILES_ATTACHED_KEY, Translate};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LUMIO_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`$XDG_CONFIG_HOME/lumio/config.toml` and friends)
/// 4. ~/.lumio/config.toml (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LUMIO_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("lumio").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".lumio").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Locale used to look up labels such as the attachment delimiter
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Label overrides: locale -> translation key -> label
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            labels: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), locale = %config.locale, "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Built-in labels with this config's overrides applied
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::builtin();
        catalog.merge(&self.labels);
        catalog
    }

    /// Attachment delimiter for `locale`, or for the configured locale
    pub fn attachment_label(&self, locale: Option<&str>) -> String {
        let catalog = self.catalog();
        let view = catalog.for_locale(locale.unwrap_or(&self.locale));
        view.translate_or_key(FILES_ATTACHED_KEY).to_string()
    }

    pub fn set_label(&mut self, locale: &str, key: &str, label: &str) {
        self.labels
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.locale, "en");
        assert!(config.labels.is_empty());
        assert_eq!(config.attachment_label(None), "Files attached");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config {
            locale: "es".to_string(),
            ..Default::default()
        };
        config.set_label("es", FILES_ATTACHED_KEY, "Adjuntos");

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.attachment_label(None), "Adjuntos");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_load_hand_written_toml() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "locale = \"fr-CA\"\n\n[labels.fr]\n\"CHAT_INTERFACE$FILES_ATTACHED\" = \"Pièces jointes\"\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.attachment_label(None), "Pièces jointes");
        assert_eq!(config.attachment_label(Some("de")), "Angehängte Dateien");

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "locale = [")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/lumio.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/lumio.toml"));
        Ok(())
    }
}
