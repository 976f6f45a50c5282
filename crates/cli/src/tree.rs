use crate::shell::view::render_menu;
use wayfinder_api::MenuSection;
use wayfinder_runtime::NavigationRegistry;

pub fn run(registry: &NavigationRegistry) -> anyhow::Result<()> {
    let menu = registry.menu();
    println!(
        "{}",
        render_menu(
            menu.items(MenuSection::Main),
            menu.items(MenuSection::Footer),
            None
        )
    );
    Ok(())
}
