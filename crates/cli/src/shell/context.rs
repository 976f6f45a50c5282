use super::surface::{TerminalFrame, TerminalMenu, TerminalSearchBox, Transcript};
use nu_ansi_term::Color;
use std::sync::Arc;
use wayfinder_api::{MenuItem, MenuSurface, NavigationEvent, NavigationService, PageMetadata};
use wayfinder_runtime::NavigationRegistry;

/// Everything a shell command can reach: the registry and the terminal
/// surfaces connected to it.
#[derive(Clone)]
pub struct ShellContext {
    pub registry: Arc<NavigationRegistry>,
    pub menu: Arc<TerminalMenu>,
    pub frame: Arc<TerminalFrame>,
    pub transcript: Arc<Transcript>,
}

impl ShellContext {
    /// Attach a terminal frame and menu to `registry`. This opens the default
    /// page.
    pub fn connect(registry: NavigationRegistry) -> Self {
        let registry = Arc::new(registry);
        let transcript = Arc::new(Transcript::default());
        let frame = Arc::new(TerminalFrame::new(transcript.clone()));
        let menu = Arc::new(TerminalMenu::default());

        let failures = transcript.clone();
        registry.service().subscribe(Arc::new(move |event: &NavigationEvent| {
            if let NavigationEvent::Failed { target, reason } = event {
                let target = target.as_deref().unwrap_or("-");
                failures.push(format!(
                    "{} {}: {}",
                    Color::Red.paint("cannot navigate"),
                    target,
                    reason
                ));
            }
        }));

        registry.attach_render_target(frame.clone());
        registry.connect_menu(menu.clone() as Arc<dyn MenuSurface>);

        Self {
            registry,
            menu,
            frame,
            transcript,
        }
    }

    pub fn service(&self) -> Arc<dyn NavigationService> {
        self.registry.service()
    }

    pub fn current(&self) -> Option<PageMetadata> {
        self.service().current()
    }

    /// Titles from the root down to the current page.
    pub fn trail(&self) -> Vec<String> {
        match self.service().current_page_id() {
            Some(id) => self
                .service()
                .breadcrumbs(&id)
                .into_iter()
                .map(|page| page.title)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn page_ids(&self) -> Vec<String> {
        self.registry
            .navigator()
            .pages()
            .map(|page| page.id.clone())
            .collect()
    }

    /// Look up a menu item in the full (unfiltered) menu.
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.registry.menu().find_item(id)
    }

    pub fn search_box(&self) -> Option<Arc<TerminalSearchBox>> {
        self.menu.search_box()
    }

    pub fn drain_output(&self) -> Vec<String> {
        self.transcript.drain()
    }
}
