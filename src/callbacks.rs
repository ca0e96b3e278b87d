//! Host callback boundary
//!
//! The host owns holders and rounds. The sidebar hands it intents through
//! optional callbacks; a callback that was never registered disables the
//! matching capability (no round dragging without `on_reorder_rounds`, and so on).

use std::fmt;

use crate::drag::{on_drag_end, DragIntent};
use crate::types::Holder;

type ReorderFn<'a> = Box<dyn FnMut(usize, usize) + 'a>;
type MoveHolderFn<'a> = Box<dyn FnMut(&str, Option<&str>) + 'a>;
type EditHolderFn<'a> = Box<dyn FnMut(&Holder) + 'a>;
type EditRoundFn<'a> = Box<dyn FnMut(usize) + 'a>;
type TriggerFn<'a> = Box<dyn FnMut() + 'a>;

/// Optional host callbacks plus the host-computed preview gate.
#[derive(Default)]
pub struct SidebarCallbacks<'a> {
    on_reorder_rounds: Option<ReorderFn<'a>>,
    on_move_holder_to_group: Option<MoveHolderFn<'a>>,
    on_edit_holder: Option<EditHolderFn<'a>>,
    on_edit_round: Option<EditRoundFn<'a>>,
    on_add_round: Option<TriggerFn<'a>>,
    on_add_holder: Option<TriggerFn<'a>>,
    on_preview: Option<TriggerFn<'a>>,
    /// Whether the preview trigger is enabled; computed by the host
    pub can_proceed_to_preview: bool,
}

impl<'a> SidebarCallbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_reorder_rounds(mut self, f: impl FnMut(usize, usize) + 'a) -> Self {
        self.on_reorder_rounds = Some(Box::new(f));
        self
    }

    pub fn on_move_holder_to_group(mut self, f: impl FnMut(&str, Option<&str>) + 'a) -> Self {
        self.on_move_holder_to_group = Some(Box::new(f));
        self
    }

    pub fn on_edit_holder(mut self, f: impl FnMut(&Holder) + 'a) -> Self {
        self.on_edit_holder = Some(Box::new(f));
        self
    }

    pub fn on_edit_round(mut self, f: impl FnMut(usize) + 'a) -> Self {
        self.on_edit_round = Some(Box::new(f));
        self
    }

    pub fn on_add_round(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_add_round = Some(Box::new(f));
        self
    }

    pub fn on_add_holder(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_add_holder = Some(Box::new(f));
        self
    }

    pub fn on_preview(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_preview = Some(Box::new(f));
        self
    }

    pub fn with_preview_enabled(mut self, enabled: bool) -> Self {
        self.can_proceed_to_preview = enabled;
        self
    }

    // ------------------------------------------------------------------------
    // Capabilities
    // ------------------------------------------------------------------------

    #[inline]
    pub fn can_reorder_rounds(&self) -> bool {
        self.on_reorder_rounds.is_some()
    }

    #[inline]
    pub fn can_regroup_holders(&self) -> bool {
        self.on_move_holder_to_group.is_some()
    }

    /// Preview is enabled only when a callback exists and the host allows it
    #[inline]
    pub fn can_preview(&self) -> bool {
        self.on_preview.is_some() && self.can_proceed_to_preview
    }

    // ------------------------------------------------------------------------
    // Delivery
    // ------------------------------------------------------------------------

    /// Dispatch a completed gesture and deliver the resulting intent.
    ///
    /// The intent is returned whether or not a callback received it.
    pub fn handle_drag_end(&mut self, source_id: &str, target_id: Option<&str>) -> DragIntent {
        let intent = on_drag_end(source_id, target_id);
        self.deliver(&intent);
        intent
    }

    /// Hand an already-dispatched intent to the matching callback.
    ///
    /// Returns `true` if a callback received it.
    pub fn deliver(&mut self, intent: &DragIntent) -> bool {
        match intent {
            DragIntent::ReorderRounds { from, to } => match self.on_reorder_rounds.as_mut() {
                Some(f) => {
                    f(*from, *to);
                    true
                }
                None => {
                    tracing::debug!(%intent, "round reordering disabled; intent dropped");
                    false
                }
            },
            DragIntent::MoveHolderToGroup { holder_name, group } => {
                match self.on_move_holder_to_group.as_mut() {
                    Some(f) => {
                        f(holder_name.as_str(), group.as_deref());
                        true
                    }
                    None => {
                        tracing::debug!(%intent, "holder regrouping disabled; intent dropped");
                        false
                    }
                }
            }
            DragIntent::NoOp(_) => false,
        }
    }

    pub fn edit_holder(&mut self, holder: &Holder) -> bool {
        fire(self.on_edit_holder.as_mut(), |f| f(holder))
    }

    pub fn edit_round(&mut self, index: usize) -> bool {
        fire(self.on_edit_round.as_mut(), |f| f(index))
    }

    pub fn add_round(&mut self) -> bool {
        fire(self.on_add_round.as_mut(), |f| f())
    }

    pub fn add_holder(&mut self) -> bool {
        fire(self.on_add_holder.as_mut(), |f| f())
    }

    /// Fire the preview trigger if it is enabled. Returns whether it fired.
    pub fn preview(&mut self) -> bool {
        if !self.can_proceed_to_preview {
            tracing::debug!("preview requested while gated off");
            return false;
        }
        fire(self.on_preview.as_mut(), |f| f())
    }
}

fn fire<F: ?Sized>(callback: Option<&mut Box<F>>, call: impl FnOnce(&mut F)) -> bool {
    match callback {
        Some(f) => {
            call(f.as_mut());
            true
        }
        None => false,
    }
}

impl fmt::Debug for SidebarCallbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarCallbacks")
            .field("on_reorder_rounds", &self.on_reorder_rounds.is_some())
            .field("on_move_holder_to_group", &self.on_move_holder_to_group.is_some())
            .field("on_edit_holder", &self.on_edit_holder.is_some())
            .field("on_edit_round", &self.on_edit_round.is_some())
            .field("on_add_round", &self.on_add_round.is_some())
            .field("on_add_holder", &self.on_add_holder.is_some())
            .field("on_preview", &self.on_preview.is_some())
            .field("can_proceed_to_preview", &self.can_proceed_to_preview)
            .finish()
    }
}
