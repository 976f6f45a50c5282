use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Opaque icon descriptor.
///
/// The core never resolves icons; it carries the symbolic name to the menu
/// surface, which maps it onto whatever asset system the host uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Icon(Cow<'static, str>);

impl Icon {
    pub const PAGE: Icon = Icon(Cow::Borrowed("Page"));
    pub const HOME: Icon = Icon(Cow::Borrowed("Home"));
    pub const SETTING: Icon = Icon(Cow::Borrowed("Setting"));
    pub const ADD: Icon = Icon(Cow::Borrowed("Add"));
    pub const FOLDER: Icon = Icon(Cow::Borrowed("NewFolder"));
    pub const FIND: Icon = Icon(Cow::Borrowed("Find"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::PAGE
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Icon {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}
