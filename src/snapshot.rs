//! Holder/round snapshots for saving, loading and applying intents.
//!
//! The sidebar never owns cap-table state. This module is the host side used by
//! the command-line driver and tests: it reads a JSON snapshot, checks the
//! invariants the sidebar relies on, and applies the intents the dispatcher emits.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::drag::DragIntent;
use crate::error::{Result, SidebarError};
use crate::types::{Holder, Round};

/// Holders and rounds as the host stores them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SidebarSnapshot {
    #[serde(default)]
    pub holders: Vec<Holder>,
    /// Authoritative round order
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl SidebarSnapshot {
    pub fn new(holders: Vec<Holder>, rounds: Vec<Round>) -> Self {
        Self { holders, rounds }
    }

    /// Save snapshot to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        tracing::debug!(path = ?path.as_ref(), "snapshot saved");
        Ok(())
    }

    /// Load snapshot from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let snapshot: Self = serde_json::from_str(&content)?;
        tracing::debug!(
            path = ?path.as_ref(),
            holders = snapshot.holders.len(),
            rounds = snapshot.rounds.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Check the invariants the sidebar depends on.
    ///
    /// Holder names are drag keys, so they must be non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.holders.len());
        for holder in &self.holders {
            if holder.name.is_empty() {
                return Err(SidebarError::validation("Holder name must not be empty"));
            }
            if !seen.insert(holder.name.as_str()) {
                return Err(SidebarError::validation(format!(
                    "Duplicate holder name '{}'",
                    holder.name
                )));
            }
        }
        Ok(())
    }

    pub fn holder(&self, name: &str) -> Option<&Holder> {
        self.holders.iter().find(|h| h.name == name)
    }

    /// Apply an intent emitted by the dispatcher.
    ///
    /// Returns whether the snapshot changed. A reorder moves the round at `from`
    /// so it ends up at `to`; regrouping a holder into its current group
    /// changes nothing.
    pub fn apply_intent(&mut self, intent: &DragIntent) -> Result<bool> {
        match intent {
            DragIntent::ReorderRounds { from, to } => {
                let len = self.rounds.len();
                if *from >= len || *to >= len {
                    tracing::warn!(from, to, len, "rejecting out-of-range round reorder");
                    return Err(SidebarError::intent(format!(
                        "Round reorder {from} -> {to} out of range for {len} rounds"
                    )));
                }
                let round = self.rounds.remove(*from);
                self.rounds.insert(*to, round);
                tracing::info!(from, to, "reordered rounds");
                Ok(from != to)
            }
            DragIntent::MoveHolderToGroup { holder_name, group } => {
                let Some(holder) = self.holders.iter_mut().find(|h| &h.name == holder_name) else {
                    tracing::warn!(holder = %holder_name, "rejecting regroup of unknown holder");
                    return Err(SidebarError::intent(format!(
                        "Unknown holder '{holder_name}'"
                    )));
                };
                if holder.group_name() == group.as_deref() {
                    tracing::debug!(holder = %holder_name, "holder already in target group");
                    return Ok(false);
                }
                holder.group = group.clone();
                tracing::info!(holder = %holder_name, group = ?group, "moved holder");
                Ok(true)
            }
            DragIntent::NoOp(_) => Ok(false),
        }
    }
}
