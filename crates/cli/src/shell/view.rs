use nu_ansi_term::{Color, Style};
use tabled::Tabled;
use wayfinder_api::{MenuItem, MenuNode, MenuSection, PageMetadata};

/// A table row describing one discovered page
#[derive(Tabled)]
pub struct PageRow {
    pub id: String,
    pub title: String,
    pub parent: String,
    pub icon: String,
    pub order: i32,
    pub section: String,
}

impl From<&PageMetadata> for PageRow {
    fn from(page: &PageMetadata) -> Self {
        Self {
            id: page.id.clone(),
            title: page.title.clone(),
            parent: page.parent_id.clone().unwrap_or_else(|| "-".to_string()),
            icon: page
                .icon
                .as_ref()
                .map(|icon| icon.to_string())
                .unwrap_or_else(|| "-".to_string()),
            order: page.order,
            section: if page.is_footer_item {
                MenuSection::Footer
            } else {
                MenuSection::Main
            }
            .to_string(),
        }
    }
}

/// One back-history entry; step 1 is the page `back` returns to.
#[derive(Tabled)]
pub struct HistoryRow {
    pub step: usize,
    pub id: String,
    pub title: String,
}

/// Render both menu sections as an indented tree, highlighting `selected`.
pub fn render_menu(main: &[MenuNode], footer: &[MenuNode], selected: Option<&str>) -> String {
    let mut lines = Vec::new();
    render_nodes(main, selected, &mut lines);
    if !footer.is_empty() {
        let marker = format!("════ {} ════", MenuSection::Footer);
        lines.push(Style::new().dimmed().paint(marker).to_string());
        render_nodes(footer, selected, &mut lines);
    }
    if lines.is_empty() {
        return "NO MENU ITEMS".to_string();
    }
    lines.join("\n")
}

fn render_nodes(nodes: &[MenuNode], selected: Option<&str>, lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            MenuNode::Header(text) => lines.push(Color::LightBlue.bold().paint(text).to_string()),
            MenuNode::Separator => lines.push(Style::new().dimmed().paint("────").to_string()),
            MenuNode::Item(item) => render_item(item, 0, selected, lines),
        }
    }
}

fn render_item(item: &MenuItem, depth: usize, selected: Option<&str>, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let icon = item.icon.as_ref().map(|icon| icon.as_str()).unwrap_or("-");
    let label = format!("[{}] {}", icon, item.title);
    let id = Color::DarkGray.paint(format!("({})", item.id));
    if selected == Some(item.id.as_str()) {
        let style = Color::LightGreen.bold();
        lines.push(format!("{}{} {} {}", indent, style.paint("▶"), style.paint(label), id));
    } else {
        lines.push(format!("{}  {} {}", indent, label, id));
    }
    for child in &item.children {
        render_item(child, depth + 1, selected, lines);
    }
}

/// `Home > Projects > New Project`
pub fn render_trail(trail: &[PageMetadata]) -> String {
    trail
        .iter()
        .map(|page| page.title.as_str())
        .collect::<Vec<_>>()
        .join(&Color::DarkGray.paint(" > ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_api::{Icon, PageAnnotation, PageHandle};

    fn item(id: &str, title: &str, children: Vec<MenuItem>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            title: title.to_string(),
            icon: Some(Icon::PAGE),
            children,
        }
    }

    #[test]
    fn test_render_menu_nests_children() {
        let main = vec![
            MenuNode::Header("General Pages".to_string()),
            MenuNode::Item(item("home", "Home", vec![])),
            MenuNode::Separator,
            MenuNode::Item(item(
                "projects",
                "Projects",
                vec![item("new", "New Project", vec![])],
            )),
        ];
        let footer = vec![MenuNode::Item(item("settings", "Settings", vec![]))];

        let text = render_menu(&main, &footer, Some("new"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("General Pages"));
        assert!(lines[4].starts_with("  ") && lines[4].contains("New Project"));
        assert!(lines[3].contains("[Page] Projects"));
        assert!(lines[4].contains("▶"));
        assert!(!lines[3].contains("▶"));
        assert!(lines[5].contains("════ footer ════"));
        assert!(lines[6].contains("Settings"));
    }

    #[test]
    fn test_render_empty_menu() {
        assert_eq!(render_menu(&[], &[], None), "NO MENU ITEMS");
    }

    #[test]
    fn test_page_row_defaults() {
        let page = PageMetadata::from_annotation(
            PageAnnotation::new("settings", "Settings").footer(),
            PageHandle::new(()),
        );
        let row = PageRow::from(&page);
        assert_eq!(row.parent, "-");
        assert_eq!(row.icon, "Page");
        assert_eq!(row.section, "footer");
    }
}
