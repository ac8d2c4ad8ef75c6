//! Library entry point: wires CLI parsing, I/O, the dedup pipeline, and the
//! post-merge report together. `main.rs` only handles process exit codes.

pub mod canon;
pub mod cli;
pub mod error;
pub mod invariants;
pub mod io;
pub mod layers;
pub mod merge;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod strkernel;
pub mod tables;
pub mod unionfind;

use std::collections::HashMap;

use tracing::{debug, info, warn};

use cli::Cli;
use error::GraphError;

pub fn run(cli: &Cli) -> Result<(), GraphError> {
	info!(input = %cli.input.display(), "loading graph");
	println!("Loading {}...", cli.input.display());

	let graph = io::load_graph(&cli.input)?;
	println!("Original: {} nodes, {} edges", graph.nodes.len(), graph.edges.len());

	let orig_total_count: i64 = graph.nodes.iter().map(|n| n.count).sum();
	println!("Total count (sum of all node counts): {orig_total_count}");

	for node in &graph.nodes {
		if !node.id.contains('@') {
			warn!(id = %node.id, "node id has no '@', layers will treat it as opaque");
		}
	}

	info!(no_fuzzy = cli.no_fuzzy, "running dedup layers");
	let result = pipeline::build_alias_map(&graph.nodes, cli.no_fuzzy);

	println!("\n=== Deduplication Layer Stats ===");
	for stat in &result.layer_stats {
		debug!(layer = stat.name, changes = stat.changes, "layer complete");
		println!("  {}: {} changes", stat.name, stat.changes);
	}

	let merge_count = result.best_id_groups.values().filter(|g| g.len() > 1).count();
	let total_merged: usize = result.best_id_groups.values().filter(|g| g.len() > 1).map(|g| g.len()).sum();
	println!("\n  Merge groups: {merge_count}");
	println!("  Total nodes merged: {total_merged}");
	println!("  Unique nodes after dedup: {}", result.best_id_groups.len());

	if cli.report {
		let nodes_by_id: HashMap<String, &model::Node> =
			graph.nodes.iter().map(|n| (n.id.clone(), n)).collect();
		report::print_merge_report(&result.best_id_groups, &nodes_by_id);
	}

	if cli.dry_run {
		println!("\n[DRY RUN] No files written.");
		return Ok(());
	}

	let nodes_by_id: HashMap<String, &model::Node> = graph.nodes.iter().map(|n| (n.id.clone(), n)).collect();
	let output_graph = merge::merge_all(&result.best_id_groups, &result.final_remap, &nodes_by_id, &graph.edges);

	println!("\n=== Invariant Checks ===");
	let inv = invariants::check(orig_total_count, &output_graph.nodes, &output_graph.edges);
	if !inv.count_conserved() {
		warn!(before = inv.total_count_before, after = inv.total_count_after, "total count not conserved");
		println!(
			"  WARNING: Total count changed! {} -> {} (diff: {})",
			inv.total_count_before,
			inv.total_count_after,
			inv.total_count_after - inv.total_count_before
		);
	} else {
		println!("  Total count conserved: {}", inv.total_count_after);
	}
	if inv.bad_endpoints > 0 {
		warn!(count = inv.bad_endpoints, "edge endpoints reference non-existent nodes");
		println!("  WARNING: {} edge endpoints reference non-existent nodes", inv.bad_endpoints);
	} else {
		println!("  All edge endpoints valid");
	}
	if inv.self_loops > 0 {
		warn!(count = inv.self_loops, "self-loops found after merge");
		println!("  WARNING: {} self-loops found", inv.self_loops);
	} else {
		println!("  No self-loops");
	}
	if inv.duplicate_ids {
		warn!("duplicate node ids found after merge");
		println!("  WARNING: Duplicate node IDs found!");
	} else {
		println!("  No duplicate node IDs");
	}

	let output_path = cli.output.clone().unwrap_or_else(|| cli.input.clone());
	io::save_graph(&output_graph, &cli.input, &output_path)?;

	let orig_node_count = graph.nodes.len();
	let orig_edge_count = graph.edges.len();
	let new_node_count = output_graph.nodes.len();
	let new_edge_count = output_graph.edges.len();
	println!("\nDone! {new_node_count} nodes, {new_edge_count} edges");
	println!(
		"Reduction: {} nodes removed ({:.1}%)",
		orig_node_count - new_node_count,
		(orig_node_count - new_node_count) as f64 / orig_node_count as f64 * 100.0
	);
	println!(
		"           {} edges removed ({:.1}%)",
		orig_edge_count - new_edge_count,
		(orig_edge_count - new_edge_count) as f64 / orig_edge_count.max(1) as f64 * 100.0
	);

	Ok(())
}
