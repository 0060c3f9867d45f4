//! Resolution of layout regions from a role-tagged part tree

use serde::{Deserialize, Serialize};

/// Structural role a part plays in the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartRole {
    Sidebar,
    Navbar,
    Content,
}

/// A layout child: tagged with a role, untagged, or a nested group
#[derive(Debug, Clone, PartialEq)]
pub enum Part<T> {
    Tagged(PartRole, T),
    Untagged(T),
    Group(Vec<Part<T>>),
}

impl<T> Part<T> {
    pub fn sidebar(item: T) -> Self {
        Part::Tagged(PartRole::Sidebar, item)
    }

    pub fn navbar(item: T) -> Self {
        Part::Tagged(PartRole::Navbar, item)
    }

    pub fn content(item: T) -> Self {
        Part::Tagged(PartRole::Content, item)
    }

    pub fn role(&self) -> Option<PartRole> {
        match self {
            Part::Tagged(role, _) => Some(*role),
            _ => None,
        }
    }
}

/// The regions found in a part tree
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSlots<T> {
    pub sidebar: Option<T>,
    pub navbars: Vec<T>,
    pub content: Option<T>,
}

impl<T> Default for ResolvedSlots<T> {
    fn default() -> Self {
        Self {
            sidebar: None,
            navbars: Vec::new(),
            content: None,
        }
    }
}

/// Walk `parts` depth-first in document order.
///
/// A later sidebar or content part replaces an earlier one; navbars keep
/// their order. Untagged parts are dropped.
pub fn resolve_slots<T, I>(parts: I) -> ResolvedSlots<T>
where
    I: IntoIterator<Item = Part<T>>,
{
    let mut slots = ResolvedSlots::default();
    collect(parts, &mut slots);
    slots
}

fn collect<T, I>(parts: I, slots: &mut ResolvedSlots<T>)
where
    I: IntoIterator<Item = Part<T>>,
{
    for part in parts {
        match part {
            Part::Tagged(PartRole::Sidebar, item) => slots.sidebar = Some(item),
            Part::Tagged(PartRole::Navbar, item) => slots.navbars.push(item),
            Part::Tagged(PartRole::Content, item) => slots.content = Some(item),
            Part::Untagged(_) => {}
            Part::Group(children) => collect(children, slots),
        }
    }
}
