//! Builds the two-section menu tree from the flat page list.

use std::collections::{HashMap, VecDeque};
use tracing::debug;
use wayfinder_api::{MenuBuild, MenuItem, MenuNode, PageMetadata};

/// One entry of a section's top-level list before items are materialized.
enum Slot {
    Header(String),
    Separator,
    Item(usize),
}

#[derive(Default)]
pub struct MenuBuilder;

impl MenuBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the main and footer sections.
    ///
    /// Every record becomes exactly one item. A record whose parent has already
    /// been built is nested under it (whatever section the parent is in);
    /// otherwise it lands at the top of its own section. Headers and
    /// separators always go to the record's own section's top-level list.
    pub fn build(&self, flat: &[PageMetadata]) -> MenuBuild {
        let mut main: Vec<Slot> = Vec::new();
        let mut footer: Vec<Slot> = Vec::new();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); flat.len()];
        let mut built: HashMap<&str, usize> = HashMap::with_capacity(flat.len());

        for idx in processing_order(flat) {
            let page = &flat[idx];
            let target = if page.is_footer_item {
                &mut footer
            } else {
                &mut main
            };

            if let Some(text) = page.header_text.as_ref().filter(|h| !h.trim().is_empty()) {
                target.push(Slot::Header(text.clone()));
            }
            if page.separator_before {
                target.push(Slot::Separator);
            }

            match page.parent_id.as_deref().and_then(|p| built.get(p)) {
                Some(&parent) => children[parent].push(idx),
                None => target.push(Slot::Item(idx)),
            }

            if page.separator_after {
                target.push(Slot::Separator);
            }

            built.insert(page.id.as_str(), idx);
        }

        let result = MenuBuild {
            main: materialize(&main, flat, &children),
            footer: materialize(&footer, flat, &children),
        };
        debug!(
            pages = flat.len(),
            main = result.main.len(),
            footer = result.footer.len(),
            "menu built"
        );
        result
    }
}

/// Order in which records are turned into items: parents before any of their
/// descendants, siblings by ascending `order`, ties by input position.
///
/// Records whose parent is absent or unknown form the root group. The walk is
/// level by level from the roots. Anything left over (only possible with a
/// parent cycle) is appended so no record is ever dropped.
fn processing_order(flat: &[PageMetadata]) -> Vec<usize> {
    let index: HashMap<&str, usize> = flat
        .iter()
        .enumerate()
        .map(|(idx, page)| (page.id.as_str(), idx))
        .collect();

    let by_priority = |a: &usize, b: &usize| flat[*a].order.cmp(&flat[*b].order).then(a.cmp(b));

    let mut roots: Vec<usize> = Vec::new();
    let mut kids: Vec<Vec<usize>> = vec![Vec::new(); flat.len()];
    for (idx, page) in flat.iter().enumerate() {
        match page.parent_id.as_deref().and_then(|p| index.get(p)) {
            Some(&parent) if parent != idx => kids[parent].push(idx),
            _ => roots.push(idx),
        }
    }
    roots.sort_by(by_priority);
    for group in &mut kids {
        group.sort_by(by_priority);
    }

    let mut order = Vec::with_capacity(flat.len());
    let mut visited = vec![false; flat.len()];
    let mut queue: VecDeque<usize> = roots.into();
    while let Some(idx) = queue.pop_front() {
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        order.push(idx);
        queue.extend(kids[idx].iter().copied());
    }

    let mut stragglers: Vec<usize> = (0..flat.len()).filter(|idx| !visited[*idx]).collect();
    stragglers.sort_by(by_priority);
    order.extend(stragglers);
    order
}

fn materialize(slots: &[Slot], flat: &[PageMetadata], children: &[Vec<usize>]) -> Vec<MenuNode> {
    slots
        .iter()
        .map(|slot| match slot {
            Slot::Header(text) => MenuNode::Header(text.clone()),
            Slot::Separator => MenuNode::Separator,
            Slot::Item(idx) => MenuNode::Item(item(*idx, flat, children)),
        })
        .collect()
}

fn item(idx: usize, flat: &[PageMetadata], children: &[Vec<usize>]) -> MenuItem {
    let page = &flat[idx];
    MenuItem {
        id: page.id.clone(),
        title: page.title.clone(),
        icon: page.icon.clone(),
        children: children[idx]
            .iter()
            .map(|child| item(*child, flat, children))
            .collect(),
    }
}
