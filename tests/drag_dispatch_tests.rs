//! Tests for the Drag Intent Dispatcher
//!
//! These tests verify:
//! - Round reorder and holder regroup transitions over wire identifiers
//! - No-op outcomes for cancelled, identical and unsupported gestures
//! - Prefix stripping for holder names with reserved substrings

use captable_sidebar::{on_drag_end, DragEndpoint, DragIntent, NoOpReason};

// =============================================================================
// Round Reorder
// =============================================================================

#[test]
fn test_valid_round_reorder() {
    assert_eq!(
        on_drag_end("sidebar-round-0", Some("sidebar-round-2")),
        DragIntent::ReorderRounds { from: 0, to: 2 }
    );
}

#[test]
fn test_round_dropped_on_itself_is_noop() {
    assert_eq!(
        on_drag_end("sidebar-round-1", Some("sidebar-round-1")),
        DragIntent::NoOp(NoOpReason::SameRound)
    );
}

#[test]
fn test_round_reorder_backwards() {
    assert_eq!(
        on_drag_end("sidebar-round-5", Some("sidebar-round-0")),
        DragIntent::ReorderRounds { from: 5, to: 0 }
    );
}

#[test]
fn test_round_with_unparseable_index_is_noop() {
    assert!(on_drag_end("sidebar-round-one", Some("sidebar-round-2")).is_noop());
    assert!(on_drag_end("sidebar-round-0", Some("sidebar-round-2.5")).is_noop());
}

// =============================================================================
// Holder Regroup
// =============================================================================

#[test]
fn test_holder_to_real_group() {
    assert_eq!(
        on_drag_end("holder-Alice", Some("group-Founders")),
        DragIntent::MoveHolderToGroup {
            holder_name: "Alice".to_string(),
            group: Some("Founders".to_string()),
        }
    );
}

#[test]
fn test_holder_to_ungrouped() {
    assert_eq!(
        on_drag_end("holder-Alice", Some("group-ungrouped")),
        DragIntent::MoveHolderToGroup {
            holder_name: "Alice".to_string(),
            group: None,
        }
    );
}

#[test]
fn test_holder_name_containing_group_prefix() {
    assert_eq!(
        on_drag_end("holder-group-ungrouped", Some("group-Investors")),
        DragIntent::MoveHolderToGroup {
            holder_name: "group-ungrouped".to_string(),
            group: Some("Investors".to_string()),
        }
    );
}

#[test]
fn test_group_names_with_spaces_and_dashes() {
    assert_eq!(
        on_drag_end("holder-Jane Doe", Some("group-Series A - Lead")),
        DragIntent::MoveHolderToGroup {
            holder_name: "Jane Doe".to_string(),
            group: Some("Series A - Lead".to_string()),
        }
    );
}

#[test]
fn test_redundant_holder_move_is_still_emitted() {
    // Same gesture twice: the dispatcher has no memory and no knowledge of current groups
    let first = on_drag_end("holder-Alice", Some("group-Founders"));
    let second = on_drag_end("holder-Alice", Some("group-Founders"));
    assert_eq!(first, second);
    assert!(!first.is_noop());
}

// =============================================================================
// No-op Pairings
// =============================================================================

#[test]
fn test_unrecognized_pairing() {
    assert_eq!(
        on_drag_end("holder-Alice", Some("sidebar-round-0")),
        DragIntent::NoOp(NoOpReason::UnsupportedPairing)
    );
    assert_eq!(
        on_drag_end("sidebar-round-0", Some("group-Founders")),
        DragIntent::NoOp(NoOpReason::UnsupportedPairing)
    );
    assert_eq!(
        on_drag_end("group-Founders", Some("group-ungrouped")),
        DragIntent::NoOp(NoOpReason::UnsupportedPairing)
    );
}

#[test]
fn test_missing_drop_target() {
    assert_eq!(
        on_drag_end("holder-Alice", None),
        DragIntent::NoOp(NoOpReason::Cancelled)
    );
}

#[test]
fn test_unknown_identifier_kinds() {
    assert_eq!(
        on_drag_end("card-7", Some("group-Founders")),
        DragIntent::NoOp(NoOpReason::MalformedIdentifier)
    );
    assert_eq!(
        on_drag_end("holder-Alice", Some("trash")),
        DragIntent::NoOp(NoOpReason::MalformedIdentifier)
    );
}

// =============================================================================
// Endpoint Wire Format
// =============================================================================

#[test]
fn test_endpoint_display_parses_back() {
    let endpoints = [
        DragEndpoint::RoundHandle(12),
        DragEndpoint::HolderHandle("group-x".to_string()),
        DragEndpoint::GroupTarget(Some("Founders".to_string())),
        DragEndpoint::GroupTarget(None),
    ];
    for endpoint in endpoints {
        assert_eq!(DragEndpoint::parse(&endpoint.to_string()), Some(endpoint));
    }
}
