use super::PageCatalog;
use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use wayfinder_api::{PageAnnotation, PageDefinition, PageHandle};

/// A page catalog written down as JSON.
///
/// ```json
/// { "pages": [
///     { "module": "app.pages.home",
///       "page": { "id": "home", "title": "Home", "icon": "Home" },
///       "content": "Welcome" }
/// ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PageManifest {
    #[serde(default)]
    pub pages: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ManifestEntry {
    /// Module path used by the namespace filter.
    pub module: String,
    /// Navigation metadata. Entries without it are not navigable.
    #[serde(default)]
    pub page: Option<PageAnnotation>,
    /// Free-form payload handed to the page factory.
    #[serde(default)]
    pub content: String,
}

impl PageManifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Turn every entry into a page definition, creating each page handle with
    /// `factory`.
    pub fn into_catalog<F>(self, factory: F) -> PageCatalog
    where
        F: Fn(&ManifestEntry) -> PageHandle,
    {
        self.pages
            .into_iter()
            .map(|entry| {
                let page = factory(&entry);
                match entry.page {
                    Some(annotation) => PageDefinition::annotated(entry.module, annotation, page),
                    None => PageDefinition::unannotated(entry.module, page),
                }
            })
            .collect()
    }
}
