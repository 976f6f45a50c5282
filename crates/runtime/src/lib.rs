mod registry;

pub use registry::NavigationRegistry;

use std::path::Path;
use wayfinder_api::{NavigationOptions, PageHandle};
use wayfinder_core::PageManifest;

/// Assemble a registry from a page manifest.
///
/// Each page handle carries the entry's `content` string.
pub fn build_registry(
    options: NavigationOptions,
    manifest: PageManifest,
) -> wayfinder_core::Result<NavigationRegistry> {
    let catalog = manifest.into_catalog(|entry| PageHandle::new(entry.content.clone()));
    NavigationRegistry::new(options, &catalog)
}

pub fn build_registry_from_manifest(
    options: NavigationOptions,
    manifest: &Path,
) -> wayfinder_core::Result<NavigationRegistry> {
    build_registry(options, PageManifest::from_file(manifest)?)
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(wayfinder_core::logging::init_logging(component, to_stderr))
}
