//! Multi-select tag toggling

use crate::types::{PreferenceSelections, TagGroup, TagSet};

/// Toggle one tag: add it if absent, remove it if present
///
/// Applying the same toggle twice yields the original set.
pub fn toggle_tag(set: &TagSet, tag: &str) -> TagSet {
    let mut next = set.clone();
    if !next.remove(tag) {
        next.insert(tag.to_string());
    }
    next
}

impl PreferenceSelections {
    /// Toggle a tag within one group, in place
    pub fn toggle(&mut self, group: TagGroup, tag: &str) {
        let next = toggle_tag(self.group(group), tag);
        *self.group_mut(group) = next;
    }
}
