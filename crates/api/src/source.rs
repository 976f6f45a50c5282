use crate::models::PageDefinition;

/// Host-provided enumeration of every page definition in the application.
pub trait PageSource: Send + Sync {
    fn definitions(&self) -> Vec<PageDefinition>;
}

impl PageSource for Vec<PageDefinition> {
    fn definitions(&self) -> Vec<PageDefinition> {
        self.clone()
    }
}

impl PageSource for [PageDefinition] {
    fn definitions(&self) -> Vec<PageDefinition> {
        self.to_vec()
    }
}
