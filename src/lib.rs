//! Cap-table Sidebar Library
//!
//! State derivation and drag intent dispatch for the holders/rounds sidebar of
//! a cap-table editor. The host owns holders and rounds; this crate derives the
//! grouped holder list and per-round participation from each snapshot, and
//! turns completed drag gestures into intents the host applies.

pub mod callbacks;
pub mod cli;
pub mod collate;
pub mod drag;
pub mod error;
pub mod grouping;
pub mod participation;
pub mod snapshot;
pub mod types;
pub mod view;

// Re-export main types for convenience
pub use callbacks::SidebarCallbacks;
pub use drag::{dispatch, on_drag_end, DragEndpoint, DragIntent, NoOpReason};
pub use error::{Result, SidebarError};
pub use grouping::{resolve_groups, HolderGroup, HolderGrouping, UNGROUPED};
pub use participation::{direct_holders, pro_rata_holders, summarize_rounds, RoundParticipation};
pub use snapshot::SidebarSnapshot;
pub use types::{Holder, Instrument, InstrumentKind, ProRataType, Round};
pub use view::SidebarView;
