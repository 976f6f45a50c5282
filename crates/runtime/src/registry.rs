use std::sync::{Arc, Weak};
use tracing::{debug, info};
use wayfinder_api::{
    MenuBuild, MenuNode, MenuSection, MenuSurface, NavigationEvent, NavigationOptions, NavigationService, PageMetadata,
    PageSource, RenderTarget, SubscriptionId, models::find_in,
};
use wayfinder_core::{MenuBuilder, PageNavigator, SearchOverlay, discover};

/// One navigation system for one running application.
///
/// Discovers pages once, builds the menu once, and owns the navigator. The
/// host shell attaches its render target and connects its menu.
pub struct NavigationRegistry {
    options: NavigationOptions,
    menu: MenuBuild,
    service: Arc<PageNavigator>,
    first_page: Option<PageMetadata>,
}

impl NavigationRegistry {
    pub fn new(options: NavigationOptions, source: &dyn PageSource) -> wayfinder_core::Result<Self> {
        let pages = discover(source, &options)?;
        let menu = MenuBuilder::new().build(&pages);

        let first_page = pages
            .iter()
            .filter(|p| !p.is_footer_item && p.is_top_level())
            .min_by_key(|p| p.order)
            .cloned();

        info!(
            pages = pages.len(),
            first_page = first_page.as_ref().map(|p| p.id.as_str()),
            "navigation registry assembled"
        );

        let service = PageNavigator::new(pages, &options);

        Ok(Self {
            options,
            menu,
            service,
            first_page,
        })
    }

    pub fn options(&self) -> &NavigationOptions {
        &self.options
    }

    pub fn menu(&self) -> &MenuBuild {
        &self.menu
    }

    pub fn main_items(&self) -> &[MenuNode] {
        self.menu.items(MenuSection::Main)
    }

    pub fn footer_items(&self) -> &[MenuNode] {
        self.menu.items(MenuSection::Footer)
    }

    pub fn service(&self) -> Arc<dyn NavigationService> {
        self.service.clone()
    }

    pub fn navigator(&self) -> &Arc<PageNavigator> {
        &self.service
    }

    /// Top-level main-section page with the lowest order.
    pub fn first_page(&self) -> Option<&PageMetadata> {
        self.first_page.as_ref()
    }

    pub fn attach_render_target(&self, target: Arc<dyn RenderTarget>) {
        self.service.attach_render_target(target);
    }

    /// Bind the built menu to `menu`, route selection into navigation, keep
    /// the menu's selection in step with the current page, install search if
    /// enabled, and open the first page.
    ///
    /// Returns the subscription that keeps the selection in sync.
    pub fn connect_menu(&self, menu: Arc<dyn MenuSurface>) -> SubscriptionId {
        menu.set_main_items(self.menu.main.clone());
        menu.set_footer_items(self.menu.footer.clone());

        self.service.connect(menu.as_ref());

        let sync = SelectionSync {
            menu: Arc::downgrade(&menu),
            main: self.menu.main.clone(),
            footer: self.menu.footer.clone(),
        };
        let subscription = self.service.subscribe(Arc::new(move |event: &NavigationEvent| {
            if let NavigationEvent::Navigated { to, .. } = event {
                sync.select(to);
            }
        }));

        if self.options.searchable_menu {
            let overlay = SearchOverlay::new(self.service(), self.menu.main.clone());
            overlay.attach(&menu);
        }

        if let Some(first) = &self.first_page {
            if find_in(&self.menu.main, &first.id).is_some() {
                menu.set_selected_item(&first.id);
            }
            if self.service.current_page_id().as_deref() != Some(first.id.as_str()) {
                self.service.navigate(&first.id);
            }
        } else {
            debug!("no default page to open");
        }

        subscription
    }
}

/// Moves the menu selection to the item of the page just navigated to.
struct SelectionSync {
    menu: Weak<dyn MenuSurface>,
    main: Vec<MenuNode>,
    footer: Vec<MenuNode>,
}

impl SelectionSync {
    fn select(&self, id: &str) {
        let Some(menu) = self.menu.upgrade() else {
            return;
        };
        if find_in(&self.main, id)
            .or_else(|| find_in(&self.footer, id))
            .is_some()
        {
            menu.set_selected_item(id);
        }
    }
}
