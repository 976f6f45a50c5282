use super::icon::Icon;
use std::fmt;

/// The two top-level groupings of a built menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuSection {
    Main,
    Footer,
}

impl fmt::Display for MenuSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuSection::Main => f.write_str("main"),
            MenuSection::Footer => f.write_str("footer"),
        }
    }
}

/// A selectable menu entry. Children are filled in by the menu builder only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub icon: Option<Icon>,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Number of items in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(MenuItem::subtree_len).sum::<usize>()
    }

    /// Depth-first search of this subtree.
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Copy without children, used when a menu is shown flat.
    pub fn without_children(&self) -> MenuItem {
        MenuItem {
            id: self.id.clone(),
            title: self.title.clone(),
            icon: self.icon.clone(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Header(String),
    Separator,
    Item(MenuItem),
}

impl MenuNode {
    pub fn as_item(&self) -> Option<&MenuItem> {
        match self {
            MenuNode::Item(item) => Some(item),
            _ => None,
        }
    }
}

/// Walk a section's items depth-first, parents before their children.
pub fn flatten_items(nodes: &[MenuNode]) -> Vec<&MenuItem> {
    fn visit<'a>(item: &'a MenuItem, out: &mut Vec<&'a MenuItem>) {
        out.push(item);
        for child in &item.children {
            visit(child, out);
        }
    }

    let mut out = Vec::new();
    for item in nodes.iter().filter_map(MenuNode::as_item) {
        visit(item, &mut out);
    }
    out
}

/// Output of one menu build: the main and footer sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBuild {
    pub main: Vec<MenuNode>,
    pub footer: Vec<MenuNode>,
}

impl MenuBuild {
    pub fn items(&self, section: MenuSection) -> &[MenuNode] {
        match section {
            MenuSection::Main => &self.main,
            MenuSection::Footer => &self.footer,
        }
    }

    /// Total number of item nodes in both sections, nested ones included.
    pub fn item_count(&self) -> usize {
        self.main
            .iter()
            .chain(self.footer.iter())
            .filter_map(MenuNode::as_item)
            .map(MenuItem::subtree_len)
            .sum()
    }

    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        find_in(&self.main, id).or_else(|| find_in(&self.footer, id))
    }
}

pub fn find_in<'a>(nodes: &'a [MenuNode], id: &str) -> Option<&'a MenuItem> {
    nodes
        .iter()
        .filter_map(MenuNode::as_item)
        .find_map(|item| item.find(id))
}
