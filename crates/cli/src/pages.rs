use crate::shell::view::PageRow;
use tabled::{Table, settings::Style};
use wayfinder_runtime::NavigationRegistry;

pub fn run(registry: &NavigationRegistry) -> anyhow::Result<()> {
    let rows: Vec<PageRow> = registry.navigator().pages().map(PageRow::from).collect();
    if rows.is_empty() {
        println!("NO PAGES FOUND");
        return Ok(());
    }
    println!("{}", Table::new(&rows).with(Style::psql()));
    Ok(())
}
