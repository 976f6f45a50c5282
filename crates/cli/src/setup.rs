use crate::Cli;
use anyhow::Context;
use wayfinder_api::NavigationOptions;
use wayfinder_core::{PageManifest, config::load_options};
use wayfinder_runtime::NavigationRegistry;

/// Catalog used when no `--manifest` is given.
pub const SAMPLE_MANIFEST: &str = include_str!("../assets/sample_pages.json");

/// Options from `--config` (or the shell defaults), then the flag overrides.
pub fn options(cli: &Cli) -> anyhow::Result<NavigationOptions> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)
            .with_context(|| format!("failed to read options from {}", path.display()))?,
        None => NavigationOptions::default().searchable(true),
    };
    if !cli.namespaces.is_empty() {
        options.include_namespaces = cli.namespaces.clone();
    }
    if cli.no_search {
        options.searchable_menu = false;
    }
    Ok(options)
}

pub fn manifest(cli: &Cli) -> anyhow::Result<PageManifest> {
    match &cli.manifest {
        Some(path) => PageManifest::from_file(path)
            .with_context(|| format!("failed to read manifest {}", path.display())),
        None => Ok(PageManifest::from_json_str(SAMPLE_MANIFEST)?),
    }
}

pub fn registry(cli: &Cli) -> anyhow::Result<NavigationRegistry> {
    let registry = wayfinder_runtime::build_registry(options(cli)?, manifest(cli)?)?;
    Ok(registry)
}
