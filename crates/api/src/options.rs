use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Start-up configuration of the navigation system. Read once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NavigationOptions {
    /// Module prefixes to include during discovery. Empty means everything
    /// the page source yields.
    pub include_namespaces: Vec<String>,
    /// Install the search box on the menu when it is connected.
    pub searchable_menu: bool,
    /// Maximum back-history depth; the oldest entries are dropped first.
    pub history_limit: Option<usize>,
    /// Fail discovery on annotated definitions that are not pages instead of
    /// skipping them.
    pub reject_ineligible_pages: bool,
}

impl NavigationOptions {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    pub fn searchable(mut self, enabled: bool) -> Self {
        self.searchable_menu = enabled;
        self
    }

    pub fn includes_module(&self, module: &str) -> bool {
        self.include_namespaces.is_empty()
            || self
                .include_namespaces
                .iter()
                .any(|prefix| module.starts_with(prefix.as_str()))
    }
}
