mod common;

use common::{FakeMenu, RecordingFrame};
use std::io::Write;
use std::sync::Arc;
use wayfinder_api::{
    CatalogError, Eligibility, MenuNode, MenuSection, MenuSurface, NavigationOptions,
    PageAnnotation, PageDefinition, PageHandle,
};
use wayfinder_core::{PageCatalog, error::WayfinderError};
use wayfinder_runtime::{NavigationRegistry, build_registry_from_manifest};

fn sample_catalog() -> PageCatalog {
    let mut catalog = PageCatalog::default();
    catalog
        .register(
            "SampleApp.Apps.HomePage",
            PageAnnotation::new("home_page", "Home")
                .icon("Home")
                .header("General Pages")
                .separator_after(),
            "home_page".to_string(),
        )
        .register(
            "SampleApp.Apps.ProjectsPage",
            PageAnnotation::new("ProjectsPage", "Projects")
                .icon("NewFolder")
                .order(2),
            "ProjectsPage".to_string(),
        )
        .register(
            "SampleApp.Apps.NewProjectPage",
            PageAnnotation::new("NewProjectPage", "New Project")
                .icon("Add")
                .parent("ProjectsPage"),
            "NewProjectPage".to_string(),
        )
        .register(
            "SampleApp.Apps.SettingsPage",
            PageAnnotation::new("settings_page", "Settings")
                .icon("Setting")
                .order(999)
                .footer(),
            "settings_page".to_string(),
        );
    catalog
}

fn connected(options: NavigationOptions) -> (NavigationRegistry, Arc<RecordingFrame>, Arc<FakeMenu>) {
    let registry = NavigationRegistry::new(options, &sample_catalog()).unwrap();
    let frame = Arc::new(RecordingFrame::default());
    registry.attach_render_target(frame.clone());
    let menu = Arc::new(FakeMenu::default());
    registry.connect_menu(menu.clone() as Arc<dyn MenuSurface>);
    (registry, frame, menu)
}

#[test]
fn test_first_page_is_lowest_top_level_main_page() {
    let registry = NavigationRegistry::new(NavigationOptions::default(), &sample_catalog()).unwrap();
    assert_eq!(registry.first_page().map(|p| p.id.as_str()), Some("home_page"));
    assert_eq!(registry.footer_items().len(), 1);
    assert_eq!(registry.menu().items(MenuSection::Footer), registry.footer_items());
    assert_eq!(registry.menu().item_count(), 4);
    assert!(registry.main_items().iter().any(|n| matches!(n, MenuNode::Header(h) if h == "General Pages")));
}

#[test]
fn test_no_first_page_without_main_pages() {
    let mut catalog = PageCatalog::default();
    catalog.register(
        "app.Settings",
        PageAnnotation::new("settings", "Settings").footer(),
        "settings".to_string(),
    );
    let registry = NavigationRegistry::new(NavigationOptions::default(), &catalog).unwrap();
    assert!(registry.first_page().is_none());

    let menu = Arc::new(FakeMenu::default());
    registry.attach_render_target(Arc::new(RecordingFrame::default()));
    registry.connect_menu(menu.clone() as Arc<dyn MenuSurface>);
    assert_eq!(registry.service().current_page_id(), None);
}

#[test]
fn test_connect_menu_opens_first_page_once() {
    let (registry, frame, menu) = connected(NavigationOptions::default());

    assert_eq!(frame.shown(), vec!["home_page"]);
    assert_eq!(menu.selected().as_deref(), Some("home_page"));
    assert!(!registry.service().can_go_back());
    assert_eq!(menu.main.lock().unwrap().len(), 4);
    assert_eq!(menu.footer.lock().unwrap().len(), 1);
}

#[test]
fn test_connect_menu_opens_first_page_without_selection_events() {
    let registry = NavigationRegistry::new(NavigationOptions::default(), &sample_catalog()).unwrap();
    let frame = Arc::new(RecordingFrame::default());
    registry.attach_render_target(frame.clone());
    let menu = Arc::new(FakeMenu::quiet());
    registry.connect_menu(menu.clone() as Arc<dyn MenuSurface>);

    assert_eq!(frame.shown(), vec!["home_page"]);
    assert_eq!(registry.service().current_page_id().as_deref(), Some("home_page"));
    assert_eq!(menu.selected().as_deref(), Some("home_page"));
    assert!(!registry.service().can_go_back());

    // Clicks still navigate on a quiet menu
    menu.select("ProjectsPage");
    assert_eq!(frame.shown(), vec!["home_page", "ProjectsPage"]);
}

#[test]
fn test_menu_selection_drives_navigation() {
    let (registry, frame, menu) = connected(NavigationOptions::default());

    menu.select("settings_page");
    assert_eq!(registry.service().current_page_id().as_deref(), Some("settings_page"));
    assert_eq!(frame.shown(), vec!["home_page", "settings_page"]);
}

#[test]
fn test_selection_follows_navigation_into_nested_items() {
    let (registry, _frame, menu) = connected(NavigationOptions::default());

    registry.service().navigate("NewProjectPage");
    assert_eq!(menu.selected().as_deref(), Some("NewProjectPage"));

    registry.service().navigate("settings_page");
    assert_eq!(menu.selected().as_deref(), Some("settings_page"));

    registry.service().go_back();
    assert_eq!(menu.selected().as_deref(), Some("NewProjectPage"));
    assert_eq!(registry.service().history(), vec!["home_page"]);
}

#[test]
fn test_search_installed_when_enabled() {
    let (registry, _frame, menu) = connected(NavigationOptions::default().searchable(true));
    let search = menu.search_box().expect("search input installed");

    search.type_text("new");
    assert_eq!(search.suggestions(), vec!["New Project"]);
    assert_eq!(menu.main_titles(), vec!["New Project"]);

    search.submit();
    assert_eq!(registry.service().current_page_id().as_deref(), Some("NewProjectPage"));
    assert_eq!(menu.main_titles(), vec!["Home", "Projects"]);
    assert!(search.suggestions().is_empty());
}

#[test]
fn test_search_not_installed_when_disabled() {
    let (_registry, _frame, menu) = connected(NavigationOptions::default());
    assert!(menu.search_box().is_none());
}

#[test]
fn test_catalog_errors_surface_from_new() {
    let mut catalog = PageCatalog::default();
    catalog
        .register("app.A", PageAnnotation::new("a", "A"), ())
        .register("app.B", PageAnnotation::new("a", "Also A"), ());

    match NavigationRegistry::new(NavigationOptions::default(), &catalog) {
        Err(WayfinderError::Catalog(CatalogError::DuplicateId { id, .. })) => assert_eq!(id, "a"),
        other => panic!("expected duplicate id error, got {:?}", other.err()),
    }
}

#[test]
fn test_namespace_filter_and_ineligible_pages() {
    let mut catalog = sample_catalog();
    catalog
        .register("Other.Pages.Elsewhere", PageAnnotation::new("elsewhere", "Elsewhere"), ())
        .register_definition(
            PageDefinition::annotated(
                "SampleApp.Apps.Base",
                PageAnnotation::new("base", "Base"),
                PageHandle::new(()),
            )
            .with_eligibility(Eligibility::Abstract),
        );

    let options = NavigationOptions::default().with_namespaces(["SampleApp.Apps"]);
    let registry = NavigationRegistry::new(options, &catalog).unwrap();
    let ids: Vec<_> = registry.navigator().pages().map(|p| p.id.clone()).collect();
    assert_eq!(ids.len(), 4);
    assert!(!ids.contains(&"elsewhere".to_string()));
    assert!(!ids.contains(&"base".to_string()));
}

#[test]
fn test_build_registry_from_manifest() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "pages": [
            {{ "module": "demo.Home", "page": {{ "id": "home", "title": "Home", "order": 1 }}, "content": "Welcome" }},
            {{ "module": "demo.About", "page": {{ "id": "about", "title": "About", "order": 0 }}, "content": "About us" }},
            {{ "module": "demo.Helper", "content": "not a page" }}
        ] }}"#
    )
    .unwrap();

    let registry = build_registry_from_manifest(NavigationOptions::default(), file.path()).unwrap();
    let first = registry.first_page().unwrap();
    assert_eq!(first.id, "about");
    assert_eq!(first.page.downcast_ref::<String>().map(String::as_str), Some("About us"));
    assert_eq!(registry.navigator().pages().count(), 2);
}
