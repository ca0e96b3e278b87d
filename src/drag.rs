//! Drag Intent Dispatcher
//!
//! Turns one completed drag gesture into at most one domain intent for the host.
//! The dispatcher is stateless: every call stands alone and nothing is mutated.
//!
//! # Endpoints
//!
//! The drag-capture layer identifies draggables and drop targets with string
//! ids. They are parsed once into [`DragEndpoint`] so dispatch works on
//! variants instead of prefixes:
//!
//! | Wire id                 | Endpoint |
//! |-------------------------|----------|
//! | `sidebar-round-<index>` | `RoundHandle(index)` |
//! | `holder-<name>`         | `HolderHandle(name)` |
//! | `group-<name>`          | `GroupTarget(Some(name))` |
//! | `group-ungrouped`       | `GroupTarget(None)` |
//!
//! # Transitions
//!
//! ```text
//! (source, no target)                  -> NoOp(Cancelled)
//! (RoundHandle(a), RoundHandle(a))     -> NoOp(SameRound)
//! (RoundHandle(a), RoundHandle(b))     -> ReorderRounds { from: a, to: b }
//! (HolderHandle(n), GroupTarget(g))    -> MoveHolderToGroup { n, g }
//! anything else                        -> NoOp(UnsupportedPairing)
//! ```
//!
//! Dropping a holder onto the group it already belongs to still produces
//! `MoveHolderToGroup`; only identical round indices are suppressed.

use std::fmt;

use crate::grouping::UNGROUPED;

/// Wire prefix for round drag handles
pub const ROUND_PREFIX: &str = "sidebar-round-";
/// Wire prefix for holder drag handles
pub const HOLDER_PREFIX: &str = "holder-";
/// Wire prefix for group drop targets
pub const GROUP_PREFIX: &str = "group-";

/// A drag source or drop target in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragEndpoint {
    /// Handle of the round at this position in the host's collection
    RoundHandle(usize),
    /// Handle of the holder with this name
    HolderHandle(String),
    /// Drop zone of a named group, or of the ungrouped bucket when `None`
    GroupTarget(Option<String>),
}

impl DragEndpoint {
    /// Parse a wire identifier.
    ///
    /// Prefixes are stripped, never pattern-matched, so a holder name that
    /// itself contains `group-` stays intact. Round indices must be
    /// non-negative integers; anything else yields `None`.
    pub fn parse(id: &str) -> Option<Self> {
        if let Some(index) = id.strip_prefix(ROUND_PREFIX) {
            return index.parse::<usize>().ok().map(Self::RoundHandle);
        }
        if let Some(name) = id.strip_prefix(HOLDER_PREFIX) {
            return Some(Self::HolderHandle(name.to_string()));
        }
        if let Some(token) = id.strip_prefix(GROUP_PREFIX) {
            let group = (token != UNGROUPED).then(|| token.to_string());
            return Some(Self::GroupTarget(group));
        }
        None
    }

    /// Short name of the endpoint kind, for logs
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RoundHandle(_) => "round",
            Self::HolderHandle(_) => "holder",
            Self::GroupTarget(_) => "group",
        }
    }
}

impl fmt::Display for DragEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundHandle(index) => write!(f, "{ROUND_PREFIX}{index}"),
            Self::HolderHandle(name) => write!(f, "{HOLDER_PREFIX}{name}"),
            Self::GroupTarget(Some(group)) => write!(f, "{GROUP_PREFIX}{group}"),
            Self::GroupTarget(None) => write!(f, "{GROUP_PREFIX}{UNGROUPED}"),
        }
    }
}

/// Why a gesture produced no intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoOpReason {
    /// Released outside any drop target, or cancelled
    Cancelled,
    /// Round dropped back onto its own position
    SameRound,
    /// Source or target id is not a recognized endpoint
    MalformedIdentifier,
    /// Recognized endpoints that have no transition between them
    UnsupportedPairing,
}

impl NoOpReason {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Cancelled => "no drop target",
            Self::SameRound => "round dropped onto itself",
            Self::MalformedIdentifier => "unrecognized drag identifier",
            Self::UnsupportedPairing => "unsupported source/target pairing",
        }
    }
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of one completed drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragIntent {
    /// Move the round at `from` to position `to`
    ReorderRounds { from: usize, to: usize },
    /// Put `holder_name` into `group` (`None` = ungrouped)
    MoveHolderToGroup {
        holder_name: String,
        group: Option<String>,
    },
    /// Nothing to do
    NoOp(NoOpReason),
}

impl DragIntent {
    #[inline]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp(_))
    }
}

impl fmt::Display for DragIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReorderRounds { from, to } => write!(f, "reorder round {from} -> {to}"),
            Self::MoveHolderToGroup {
                holder_name,
                group: Some(group),
            } => write!(f, "move '{holder_name}' to group '{group}'"),
            Self::MoveHolderToGroup {
                holder_name,
                group: None,
            } => write!(f, "move '{holder_name}' to ungrouped"),
            Self::NoOp(reason) => write!(f, "no-op ({reason})"),
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Dispatch a gesture over typed endpoints.
///
/// `target` is `None` when the gesture ended outside any drop target.
pub fn dispatch(source: &DragEndpoint, target: Option<&DragEndpoint>) -> DragIntent {
    let Some(target) = target else {
        return DragIntent::NoOp(NoOpReason::Cancelled);
    };

    match (source, target) {
        (DragEndpoint::RoundHandle(from), DragEndpoint::RoundHandle(to)) => {
            if from == to {
                DragIntent::NoOp(NoOpReason::SameRound)
            } else {
                DragIntent::ReorderRounds {
                    from: *from,
                    to: *to,
                }
            }
        }
        (DragEndpoint::HolderHandle(name), DragEndpoint::GroupTarget(group)) => {
            DragIntent::MoveHolderToGroup {
                holder_name: name.clone(),
                group: group.clone(),
            }
        }
        _ => DragIntent::NoOp(NoOpReason::UnsupportedPairing),
    }
}

/// Dispatch a gesture over wire identifiers, as reported by the drag layer.
///
/// Malformed identifiers resolve to a no-op; nothing here ever fails.
pub fn on_drag_end(source_id: &str, target_id: Option<&str>) -> DragIntent {
    let Some(target_id) = target_id else {
        tracing::debug!(source = source_id, "drag ended without a drop target");
        return DragIntent::NoOp(NoOpReason::Cancelled);
    };

    let (Some(source), Some(target)) = (
        DragEndpoint::parse(source_id),
        DragEndpoint::parse(target_id),
    ) else {
        tracing::debug!(
            source = source_id,
            target = target_id,
            "ignoring drag with unrecognized identifier"
        );
        return DragIntent::NoOp(NoOpReason::MalformedIdentifier);
    };

    let intent = dispatch(&source, Some(&target));
    tracing::debug!(
        source_kind = source.kind(),
        target_kind = target.kind(),
        %intent,
        "dispatched drag gesture"
    );
    intent
}
