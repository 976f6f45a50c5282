//! Explicit page registration, the replacement for scanning the application
//! for annotated page types.

mod manifest;

pub use manifest::{ManifestEntry, PageManifest};

use std::any::Any;
use wayfinder_api::{PageAnnotation, PageDefinition, PageHandle, PageSource};

/// Pages registered by the host at start-up.
#[derive(Debug, Clone, Default)]
pub struct PageCatalog {
    definitions: Vec<PageDefinition>,
}

impl PageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an annotated page living in `module`.
    pub fn register<P: Any + Send + Sync>(
        &mut self,
        module: impl Into<String>,
        annotation: PageAnnotation,
        page: P,
    ) -> &mut Self {
        self.definitions.push(PageDefinition::annotated(
            module,
            annotation,
            PageHandle::new(page),
        ));
        self
    }

    pub fn register_definition(&mut self, definition: PageDefinition) -> &mut Self {
        self.definitions.push(definition);
        self
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl PageSource for PageCatalog {
    fn definitions(&self) -> Vec<PageDefinition> {
        self.definitions.clone()
    }
}

impl FromIterator<PageDefinition> for PageCatalog {
    fn from_iter<I: IntoIterator<Item = PageDefinition>>(iter: I) -> Self {
        Self {
            definitions: iter.into_iter().collect(),
        }
    }
}
