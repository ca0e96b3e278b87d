//! Holder Grouping Resolver
//!
//! Partitions a holder collection into named display groups plus an
//! "ungrouped" bucket.
//!
//! # Resolution Rules
//!
//! | Holder `group`       | Lands in |
//! |----------------------|----------|
//! | `Some("Founders")`   | the `Founders` group |
//! | `None` / `Some("")`  | the ungrouped bucket |
//!
//! - Groups appear in the order their name is first seen in the input.
//! - Holders inside each group, and the ungrouped bucket, are sorted by name
//!   in collation order (see [`crate::collate`]).
//! - A group exists only while at least one holder references it.
//! - Pure logic: no I/O, no side effects, borrows the snapshot.

use std::collections::HashMap;

use crate::collate::sort_by_name;
use crate::types::Holder;

/// Literal token the drag layer uses for the "no group" drop target
pub const UNGROUPED: &str = "ungrouped";

/// One named group and its holders
#[derive(Debug, Clone, PartialEq)]
pub struct HolderGroup<'a> {
    pub name: &'a str,
    pub holders: Vec<&'a Holder>,
}

/// Result of grouping a holder collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HolderGrouping<'a> {
    /// Named groups, first-seen order
    pub groups: Vec<HolderGroup<'a>>,
    /// Holders without a group; reported even when empty
    pub ungrouped: Vec<&'a Holder>,
}

impl<'a> HolderGrouping<'a> {
    /// Group names in display order
    pub fn group_names(&self) -> Vec<&'a str> {
        self.groups.iter().map(|g| g.name).collect()
    }

    /// Look up a group by name
    pub fn group(&self, name: &str) -> Option<&HolderGroup<'a>> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Total number of holders across all groups and the ungrouped bucket
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.holders.len()).sum::<usize>() + self.ungrouped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Partition `holders` into named groups and an ungrouped bucket.
///
/// Single pass over the input; buckets are keyed by group name and sorted
/// afterwards. Never fails: a missing group is the expected "ungrouped" state.
pub fn resolve_groups(holders: &[Holder]) -> HolderGrouping<'_> {
    let mut groups: Vec<HolderGroup<'_>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut ungrouped: Vec<&Holder> = Vec::new();

    for holder in holders {
        match holder.group_name() {
            Some(name) => {
                let idx = *positions.entry(name).or_insert_with(|| {
                    groups.push(HolderGroup {
                        name,
                        holders: Vec::new(),
                    });
                    groups.len() - 1
                });
                groups[idx].holders.push(holder);
            }
            None => ungrouped.push(holder),
        }
    }

    for group in &mut groups {
        sort_by_name(&mut group.holders, |h| h.name.as_str());
    }
    sort_by_name(&mut ungrouped, |h| h.name.as_str());

    tracing::debug!(
        groups = groups.len(),
        ungrouped = ungrouped.len(),
        "resolved holder groups"
    );

    HolderGrouping { groups, ungrouped }
}

// ============================================================================
// Tests
// ============================================================================
