use super::icon::Icon;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque reference to a renderable unit of UI.
///
/// The navigation core stores the handle and hands it back to the render
/// target verbatim. Only the host knows what is inside.
#[derive(Clone)]
pub struct PageHandle {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl PageHandle {
    pub fn new<T: Any + Send + Sync>(page: T) -> Self {
        Self {
            inner: Arc::new(page),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True when both handles point at the same page instance.
    pub fn same_page(&self, other: &PageHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for PageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_page(other)
    }
}

impl fmt::Debug for PageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PageHandle").field(&self.type_name).finish()
    }
}

/// Declarative navigation metadata a page carries about itself.
///
/// Everything in [`PageMetadata`] except the page handle. This is the part
/// that can live in a manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageAnnotation {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// `Page` unless the declaration names another icon.
    #[serde(default = "default_icon", skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,
    #[serde(default)]
    pub is_footer_item: bool,
    #[serde(default)]
    pub separator_before: bool,
    #[serde(default)]
    pub separator_after: bool,
}

fn default_icon() -> Option<Icon> {
    Some(Icon::PAGE)
}

impl PageAnnotation {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            parent_id: None,
            icon: default_icon(),
            order: 0,
            header_text: None,
            is_footer_item: false,
            separator_before: false,
            separator_after: false,
        }
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header_text = Some(text.into());
        self
    }

    pub fn footer(mut self) -> Self {
        self.is_footer_item = true;
        self
    }

    pub fn separator_before(mut self) -> Self {
        self.separator_before = true;
        self
    }

    pub fn separator_after(mut self) -> Self {
        self.separator_after = true;
        self
    }
}

/// A single navigable page as seen by the builder, the service and the registry.
/// Produced once by discovery and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub id: String,
    pub parent_id: Option<String>,
    pub title: String,
    pub icon: Option<Icon>,
    pub order: i32,
    pub header_text: Option<String>,
    pub is_footer_item: bool,
    pub separator_before: bool,
    pub separator_after: bool,
    pub page: PageHandle,
}

impl PageMetadata {
    pub fn from_annotation(annotation: PageAnnotation, page: PageHandle) -> Self {
        Self {
            id: annotation.id,
            parent_id: annotation.parent_id,
            title: annotation.title,
            icon: annotation.icon,
            order: annotation.order,
            // blank header text behaves like no header at all
            header_text: annotation.header_text.filter(|h| !h.trim().is_empty()),
            is_footer_item: annotation.is_footer_item,
            separator_before: annotation.separator_before,
            separator_after: annotation.separator_after,
            page,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Whether a page definition can actually be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Eligibility {
    #[default]
    Page,
    /// Abstract base that is never instantiated on its own.
    Abstract,
    /// Something that is not a page implementation at all.
    NotAPage,
}

impl Eligibility {
    pub fn is_eligible(self) -> bool {
        matches!(self, Eligibility::Page)
    }
}

/// One entry of the host's page enumeration: where the page lives, whether
/// it opted into navigation, and the handle to render it.
#[derive(Debug, Clone)]
pub struct PageDefinition {
    pub module: String,
    pub annotation: Option<PageAnnotation>,
    pub eligibility: Eligibility,
    pub page: PageHandle,
}

impl PageDefinition {
    pub fn annotated(
        module: impl Into<String>,
        annotation: PageAnnotation,
        page: PageHandle,
    ) -> Self {
        Self {
            module: module.into(),
            annotation: Some(annotation),
            eligibility: Eligibility::Page,
            page,
        }
    }

    pub fn unannotated(module: impl Into<String>, page: PageHandle) -> Self {
        Self {
            module: module.into(),
            annotation: None,
            eligibility: Eligibility::Page,
            page,
        }
    }

    pub fn with_eligibility(mut self, eligibility: Eligibility) -> Self {
        self.eligibility = eligibility;
        self
    }
}
