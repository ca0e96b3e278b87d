//! Cap-table sidebar - command-line driver
//!
//! Loads a holders/rounds snapshot, prints the derived sidebar, and replays
//! drag gestures through the dispatcher the same way the editor host does.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use captable_sidebar::cli::{Cli, Commands};
use captable_sidebar::view::{group_drop_id, holder_drag_id, round_drag_id};
use captable_sidebar::{DragIntent, SidebarCallbacks, SidebarSnapshot, SidebarView};

/// Initialize logging; `RUST_LOG` overrides the default `info` level
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logger();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let result = match cli.command {
        Commands::Show {
            snapshot,
            can_preview,
        } => run_show(&snapshot, can_preview),
        Commands::Validate { snapshot } => run_validate(&snapshot),
        Commands::Drag {
            snapshot,
            source,
            target,
            write,
        } => run_drag(&snapshot, &source, target.as_deref(), write),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn load_valid(path: &Path) -> Result<SidebarSnapshot> {
    info!("Loading snapshot from: {:?}", path);
    let snapshot = SidebarSnapshot::load_from_file(path)
        .with_context(|| format!("Failed to load snapshot from {:?}", path))?;
    snapshot
        .validate()
        .with_context(|| format!("Snapshot {:?} is invalid", path))?;
    Ok(snapshot)
}

fn run_validate(path: &Path) -> Result<()> {
    let snapshot = load_valid(path)?;
    println!(
        "✓ Snapshot is valid: {} holders, {} rounds",
        snapshot.holders.len(),
        snapshot.rounds.len()
    );
    Ok(())
}

fn run_show(path: &Path, can_preview: bool) -> Result<()> {
    let snapshot = load_valid(path)?;
    let view = SidebarView::derive(&snapshot.holders, &snapshot.rounds);

    println!("Holders");
    if view.is_empty_holders() {
        println!("  (no holders yet)");
    }
    for group in &view.grouping.groups {
        println!("  [{}]  {}", group.name, group_drop_id(Some(group.name)));
        for holder in &group.holders {
            println!("    {}  {}", holder.name, holder_drag_id(&holder.name));
        }
    }
    println!("  [ungrouped]  {}", group_drop_id(None));
    for holder in &view.grouping.ungrouped {
        println!("    {}  {}", holder.name, holder_drag_id(&holder.name));
    }

    println!("Rounds");
    if view.is_empty_rounds() {
        println!("  (no rounds yet)");
    }
    for round in &view.rounds {
        let date = round
            .round_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "undated".to_string());
        println!("  {}  ({})  {}", round.label, date, round_drag_id(round.index));
        let direct: Vec<&str> = round.direct.iter().map(|h| h.name.as_str()).collect();
        let pro_rata: Vec<&str> = round.pro_rata.iter().map(|h| h.name.as_str()).collect();
        println!("    direct:   {}", direct.join(", "));
        println!("    pro-rata: {}", pro_rata.join(", "));
    }

    println!(
        "Preview: {}",
        if can_preview { "enabled" } else { "disabled" }
    );
    Ok(())
}

fn run_drag(path: &Path, source: &str, target: Option<&str>, write: bool) -> Result<()> {
    let snapshot = RefCell::new(load_valid(path)?);
    let applied = RefCell::new(None);
    let apply = |intent: DragIntent| {
        let outcome = snapshot.borrow_mut().apply_intent(&intent);
        *applied.borrow_mut() = Some(outcome);
    };

    // Without --write the host registers no mutation callbacks, so the
    // intent is reported but never delivered.
    let mut callbacks = SidebarCallbacks::new();
    if write {
        callbacks = callbacks
            .on_reorder_rounds(|from, to| apply(DragIntent::ReorderRounds { from, to }))
            .on_move_holder_to_group(|holder_name, group| {
                apply(DragIntent::MoveHolderToGroup {
                    holder_name: holder_name.to_string(),
                    group: group.map(str::to_string),
                })
            });
    }

    let intent = callbacks.handle_drag_end(source, target);
    drop(callbacks);
    println!("Intent: {}", intent);

    let Some(outcome) = applied.into_inner() else {
        return Ok(());
    };
    let changed = outcome.context("Failed to apply intent")?;
    if changed {
        snapshot
            .into_inner()
            .save_to_file(path)
            .with_context(|| format!("Failed to write snapshot to {:?}", path))?;
        info!("Snapshot written to {:?}", path);
        println!("✓ Snapshot updated");
    } else {
        println!("Snapshot unchanged");
    }
    Ok(())
}
