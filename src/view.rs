//! Derived sidebar state for one render pass
//!
//! Bundles the holder grouping and the per-round participation summaries,
//! plus the wire identifiers the drag-capture layer needs for every handle
//! and drop zone. Recomputed from scratch on every snapshot.

use crate::drag::DragEndpoint;
use crate::grouping::{resolve_groups, HolderGrouping, UNGROUPED};
use crate::participation::{summarize_rounds, RoundParticipation};
use crate::types::{Holder, Round};

/// Everything the sidebar shows, derived from one holders/rounds snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView<'a> {
    pub grouping: HolderGrouping<'a>,
    pub rounds: Vec<RoundParticipation<'a>>,
}

impl<'a> SidebarView<'a> {
    /// Derive the view. Pure; call again whenever the host hands over a new snapshot.
    pub fn derive(holders: &'a [Holder], rounds: &[Round]) -> Self {
        let view = Self {
            grouping: resolve_groups(holders),
            rounds: summarize_rounds(rounds, holders),
        };
        tracing::debug!(
            holders = holders.len(),
            rounds = rounds.len(),
            "derived sidebar view"
        );
        view
    }

    /// The holder list shows its explicit empty state
    pub fn is_empty_holders(&self) -> bool {
        self.grouping.is_empty()
    }

    /// The round list shows its explicit empty state
    pub fn is_empty_rounds(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Every group drop zone id, named groups first, then the ungrouped zone.
    ///
    /// A group literally named `ungrouped` has no zone of its own: its wire id
    /// would be the ungrouped zone's id.
    pub fn drop_targets(&self) -> Vec<String> {
        self.grouping
            .groups
            .iter()
            .filter(|g| {
                let reserved = g.name == UNGROUPED;
                if reserved {
                    tracing::warn!(
                        group = g.name,
                        holders = g.holders.len(),
                        "group name collides with the ungrouped drop zone"
                    );
                }
                !reserved
            })
            .map(|g| group_drop_id(Some(g.name)))
            .chain(std::iter::once(group_drop_id(None)))
            .collect()
    }
}

/// Drag id of a holder handle
pub fn holder_drag_id(name: &str) -> String {
    DragEndpoint::HolderHandle(name.to_string()).to_string()
}

/// Drag id of the round handle at `index`
pub fn round_drag_id(index: usize) -> String {
    DragEndpoint::RoundHandle(index).to_string()
}

/// Drop id of a group zone; `None` is the ungrouped zone
pub fn group_drop_id(group: Option<&str>) -> String {
    DragEndpoint::GroupTarget(group.map(str::to_string)).to_string()
}
