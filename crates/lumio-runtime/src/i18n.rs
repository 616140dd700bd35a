use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Translation key of the marker that precedes an attachment listing
pub const FILES_ATTACHED_KEY: &str = "CHAT_INTERFACE$FILES_ATTACHED";

/// Locale every lookup falls back to
pub const DEFAULT_LOCALE: &str = "en";

const BUILTIN_FILES_ATTACHED: &[(&str, &str)] = &[
    ("de", "Angehängte Dateien"),
    ("en", "Files attached"),
    ("es", "Archivos adjuntos"),
    ("fr", "Fichiers joints"),
    ("ja", "添付ファイル"),
    ("pt", "Arquivos anexados"),
];

/// Source of localized labels, keyed by a fixed identifier
pub trait Translate {
    fn translate(&self, key: &str) -> Option<&str>;

    /// Label for `key`, or the key itself when no translation exists
    fn translate_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.translate(key).unwrap_or(key)
    }
}

/// Labels per locale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

impl Catalog {
    /// Catalog with the labels lumio ships with
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for (locale, label) in BUILTIN_FILES_ATTACHED {
            catalog.insert(*locale, FILES_ATTACHED_KEY, *label);
        }
        catalog
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), label.into());
    }

    /// Overlay labels, replacing existing entries with the same locale and key
    pub fn merge(&mut self, overrides: &BTreeMap<String, BTreeMap<String, String>>) {
        for (locale, labels) in overrides {
            for (key, label) in labels {
                self.insert(locale.clone(), key.clone(), label.clone());
            }
        }
    }

    /// View of the catalog resolving through `locale`, its language, then `en`
    pub fn for_locale(&self, locale: &str) -> LocaleCatalog<'_> {
        LocaleCatalog {
            catalog: self,
            chain: fallback_chain(locale),
        }
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|labels| labels.get(key))
            .map(String::as_str)
    }
}

/// A catalog bound to one locale and its fallbacks
#[derive(Debug, Clone)]
pub struct LocaleCatalog<'a> {
    catalog: &'a Catalog,
    chain: Vec<String>,
}

impl LocaleCatalog<'_> {
    /// Locales consulted, most specific first
    pub fn chain(&self) -> &[String] {
        &self.chain
    }
}

impl Translate for LocaleCatalog<'_> {
    fn translate(&self, key: &str) -> Option<&str> {
        self.chain
            .iter()
            .find_map(|locale| self.catalog.lookup(locale, key))
    }
}

/// `pt_BR` -> [`pt-BR`, `pt`, `en`]
fn fallback_chain(locale: &str) -> Vec<String> {
    let normalized = locale.trim().replace('_', "-");
    let mut chain = Vec::new();

    if !normalized.is_empty() {
        chain.push(normalized.clone());
        if let Some((language, _)) = normalized.split_once('-') {
            chain.push(language.to_string());
        }
    }
    chain.push(DEFAULT_LOCALE.to_string());
    chain.dedup();
    chain
}
