//! Turns the host's page enumeration into the flat list of [`PageMetadata`]
//! records the rest of the system works from.

use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};
use wayfinder_api::error::CatalogResult;
use wayfinder_api::{CatalogError, NavigationOptions, PageMetadata, PageSource};

/// Discover every navigable page the source yields.
///
/// Definitions outside `options.include_namespaces` are ignored, as are
/// definitions without an annotation. Annotated definitions that are not real
/// pages are skipped with a warning, or rejected when
/// `options.reject_ineligible_pages` is set.
///
/// The result is validated (unique ids, no parent cycles) and sorted by
/// `(parent_id, order)` with top-level pages first. The sort is a convenience;
/// the menu builder applies its own ordering.
pub fn discover(
    source: &dyn PageSource,
    options: &NavigationOptions,
) -> CatalogResult<Vec<PageMetadata>> {
    let mut pages: Vec<PageMetadata> = Vec::new();
    let mut modules: HashMap<String, String> = HashMap::new();

    for definition in source.definitions() {
        if !options.includes_module(&definition.module) {
            trace!(module = %definition.module, "outside namespace filter");
            continue;
        }

        let Some(annotation) = definition.annotation else {
            trace!(module = %definition.module, "no navigation annotation");
            continue;
        };

        if !definition.eligibility.is_eligible() {
            if options.reject_ineligible_pages {
                return Err(CatalogError::IneligiblePage {
                    id: annotation.id,
                    module: definition.module,
                });
            }
            warn!(
                id = %annotation.id,
                module = %definition.module,
                eligibility = ?definition.eligibility,
                "skipping annotated definition that is not a page"
            );
            continue;
        }

        if let Some(first) = modules.get(&annotation.id) {
            return Err(CatalogError::DuplicateId {
                id: annotation.id,
                first: first.clone(),
                second: definition.module,
            });
        }
        modules.insert(annotation.id.clone(), definition.module);

        pages.push(PageMetadata::from_annotation(annotation, definition.page));
    }

    validate_parents(&pages)?;

    // Stable: equal keys keep enumeration order
    pages.sort_by(|a, b| a.parent_id.cmp(&b.parent_id).then(a.order.cmp(&b.order)));

    debug!(count = pages.len(), "discovered pages");
    Ok(pages)
}

/// Reject parent cycles and report parents that do not resolve.
fn validate_parents(pages: &[PageMetadata]) -> CatalogResult<()> {
    let parents: HashMap<&str, Option<&str>> = pages
        .iter()
        .map(|p| (p.id.as_str(), p.parent_id.as_deref()))
        .collect();

    for page in pages {
        if let Some(parent) = page.parent_id.as_deref() {
            if !parents.contains_key(parent) {
                warn!(
                    id = %page.id,
                    parent = %parent,
                    "parent page not found; page will be placed at top level"
                );
            }
        }
    }

    let mut settled: HashSet<&str> = HashSet::new();
    for page in pages {
        let mut path: Vec<&str> = Vec::new();
        let mut cursor = Some(page.id.as_str());

        while let Some(id) = cursor {
            if settled.contains(id) {
                break;
            }
            if let Some(pos) = path.iter().position(|seen| *seen == id) {
                let mut ids: Vec<String> = path[pos..].iter().map(|s| s.to_string()).collect();
                ids.push(id.to_string());
                return Err(CatalogError::ParentCycle { ids });
            }
            path.push(id);
            cursor = parents.get(id).copied().flatten().filter(|p| parents.contains_key(p));
        }

        settled.extend(path);
    }

    Ok(())
}
