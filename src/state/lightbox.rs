//! Lightbox state machine: grouped image navigation with circular wrap.
//!
//! Groups are built once from the page's linked images and immutable
//! afterward. The open state always satisfies
//! `0 <= index < group.len()`; transitions that would break that are
//! ignored.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use std::collections::HashMap;

/// Group key for linked images that carry no explicit group.
pub const DEFAULT_GROUP: &str = "default";

/// One linked image: target source and caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxItem {
    pub href: String,
    pub title: String,
}

/// Named, ordered groups of linked images, built once at page init.
#[derive(Clone, Debug, Default)]
pub struct LightboxGroups {
    groups: HashMap<String, Vec<LightboxItem>>,
}

impl LightboxGroups {
    /// Build groups from `(group key, href, title)` triples; items with no
    /// key fall into [`DEFAULT_GROUP`]. Order within a group follows the
    /// input order.
    pub fn from_links<'a, I>(links: I) -> Self
    where
        I: IntoIterator<Item = (Option<&'a str>, &'a str, &'a str)>,
    {
        let mut groups: HashMap<String, Vec<LightboxItem>> = HashMap::new();
        for (group, href, title) in links {
            groups
                .entry(group.unwrap_or(DEFAULT_GROUP).to_owned())
                .or_default()
                .push(LightboxItem { href: href.to_owned(), title: title.to_owned() });
        }
        Self { groups }
    }

    pub fn items(&self, group: &str) -> Option<&[LightboxItem]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    pub fn len(&self, group: &str) -> usize {
        self.groups.get(group).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Keyboard-driven transitions, only meaningful while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Prev,
    Next,
}

/// Map a keyboard key to a lightbox action.
pub fn key_action(key: &str) -> Option<LightboxAction> {
    match key {
        "Escape" => Some(LightboxAction::Close),
        "ArrowLeft" => Some(LightboxAction::Prev),
        "ArrowRight" => Some(LightboxAction::Next),
        _ => None,
    }
}

/// `closed` or `open(group, index)`. The only mutable cross-call state in
/// the system.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    current: Option<(String, usize)>,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Open at a specific item. Ignored if the group or index is unknown,
    /// preserving the index invariant.
    pub fn open(&mut self, groups: &LightboxGroups, group: &str, index: usize) {
        if index < groups.len(group) {
            self.current = Some((group.to_owned(), index));
        }
    }

    /// Close and drop the group/index, releasing the displayed item.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Advance to the next item in the group, wrapping circularly.
    pub fn next(&mut self, groups: &LightboxGroups) {
        if let Some((group, index)) = &mut self.current {
            let len = groups.len(group);
            if len > 0 {
                *index = (*index + 1) % len;
            }
        }
    }

    /// Step back to the previous item in the group, wrapping circularly.
    pub fn prev(&mut self, groups: &LightboxGroups) {
        if let Some((group, index)) = &mut self.current {
            let len = groups.len(group);
            if len > 0 {
                *index = (*index + len - 1) % len;
            }
        }
    }

    /// Apply a keyboard action. No-op while closed.
    pub fn apply(&mut self, action: LightboxAction, groups: &LightboxGroups) {
        if !self.is_open() {
            return;
        }
        match action {
            LightboxAction::Close => self.close(),
            LightboxAction::Prev => self.prev(groups),
            LightboxAction::Next => self.next(groups),
        }
    }

    /// The currently displayed item, if open.
    pub fn current<'a>(&self, groups: &'a LightboxGroups) -> Option<&'a LightboxItem> {
        let (group, index) = self.current.as_ref()?;
        groups.items(group)?.get(*index)
    }

    pub fn index(&self) -> Option<usize> {
        self.current.as_ref().map(|(_, index)| *index)
    }
}
