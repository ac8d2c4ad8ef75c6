//! Orchestrates the seven layers into a single `original_id -> best_original_id`
//! remap (§4.3–§4.13).
//!
//! Each layer either rewrites `alias_map` entries in place (1–3) or returns a
//! `canonical -> canonical` merge delta that [`apply_layer_merges`] folds in
//! after resolving merge chains, so a later layer always sees a
//! single-hop-resolved `alias_map`.

use std::collections::{BTreeSet, HashMap};

use crate::canon::invert_alias_map;
use crate::layers::layer1::structural_cleanup;
use crate::layers::layer2::apply_domain_normalization;
use crate::layers::layer3::{apply_local_ocr_normalization, ocr_clean_local_for_display};
use crate::layers::layer3b::join_split_local_matches;
use crate::layers::layer3c::prefix_strip_matches;
use crate::layers::layer4::fuzzy_match_groups;
use crate::layers::layer5::single_to_full_name_matches;
use crate::layers::layer6::concatenation_matches;
use crate::layers::layer7::same_name_merge;
use crate::model::Node;

/// Name and change count for one layer's pass, printed as a user-facing report.
pub struct LayerStat {
	pub name: &'static str,
	pub changes: usize,
}

/// Everything [`build_alias_map`] hands back to the caller.
pub struct AliasMapResult {
	pub final_remap: HashMap<String, String>,
	pub best_id_groups: HashMap<String, BTreeSet<String>>,
	pub layer_stats: Vec<LayerStat>,
}

/// Resolve a `canonical -> canonical` merge delta to single-hop destinations,
/// then fold it into `alias_map`. Returns the number of raw ids whose
/// canonical changed. A chain `a -> b -> c` resolves to `a -> c`; a cycle
/// (which the layers should never produce, but OCR tables are full of
/// surprises) is broken at the first repeated destination instead of looping
/// forever.
fn apply_layer_merges(alias_map: &mut HashMap<String, String>, merges: &HashMap<String, String>) -> usize {
	if merges.is_empty() {
		return 0;
	}

	let mut resolved: HashMap<&str, &str> = HashMap::new();
	for src in merges.keys() {
		let mut dst = merges[src].as_str();
		let mut seen: BTreeSet<&str> = BTreeSet::new();
		seen.insert(src.as_str());
		while let Some(next) = merges.get(dst) {
			if seen.contains(next.as_str()) {
				break;
			}
			seen.insert(dst);
			dst = next.as_str();
		}
		resolved.insert(src.as_str(), dst);
	}

	let mut changes = 0;
	for current in alias_map.values_mut() {
		if let Some(dst) = resolved.get(current.as_str()) {
			if *dst != current.as_str() {
				*current = dst.to_string();
				changes += 1;
			}
		}
	}
	changes
}

/// Run all seven layers over `nodes` and produce the final id remap.
///
/// `no_fuzzy` skips Layer 4 (the only layer expensive enough to be worth
/// disabling on a quick pass). Printing the merge-group report is the
/// caller's responsibility — this function always returns `best_id_groups`
/// so the caller can do so itself.
pub fn build_alias_map(nodes: &[Node], no_fuzzy: bool) -> AliasMapResult {
	let nodes_by_id: HashMap<String, &Node> = nodes.iter().map(|n| (n.id.clone(), n)).collect();
	let all_original_ids: Vec<String> = nodes_by_id.keys().cloned().collect();

	let mut alias_map: HashMap<String, String> =
		all_original_ids.iter().map(|id| (id.clone(), id.clone())).collect();

	let mut layer_stats = Vec::new();

	let mut changes = 0;
	for nid in all_original_ids.iter() {
		let cleaned = structural_cleanup(nid);
		if &cleaned != alias_map.get(nid).unwrap() {
			alias_map.insert(nid.clone(), cleaned);
			changes += 1;
		}
	}
	layer_stats.push(LayerStat { name: "Layer 1: Structural Cleanup", changes });

	let mut changes = 0;
	for nid in all_original_ids.iter() {
		let current = alias_map.get(nid).unwrap().clone();
		let normalized = apply_domain_normalization(&current);
		if normalized != current {
			alias_map.insert(nid.clone(), normalized);
			changes += 1;
		}
	}
	layer_stats.push(LayerStat { name: "Layer 2: Domain Normalization", changes });

	let mut changes = 0;
	for nid in all_original_ids.iter() {
		let current = alias_map.get(nid).unwrap().clone();
		let ocr_fixed = apply_local_ocr_normalization(&current);
		if ocr_fixed != current {
			alias_map.insert(nid.clone(), ocr_fixed);
			changes += 1;
		}
	}
	layer_stats.push(LayerStat { name: "Layer 3: Local-Part OCR Normalization", changes });

	let join_merges = join_split_local_matches(&alias_map, &all_original_ids);
	let changes = apply_layer_merges(&mut alias_map, &join_merges);
	layer_stats.push(LayerStat { name: "Layer 3b: Join Split Locals", changes });

	let prefix_merges = prefix_strip_matches(&alias_map);
	let changes = apply_layer_merges(&mut alias_map, &prefix_merges);
	layer_stats.push(LayerStat { name: "Layer 3c: Prefix Stripping", changes });

	let fuzzy_merges = fuzzy_match_groups(&nodes_by_id, &alias_map, no_fuzzy);
	let changes = apply_layer_merges(&mut alias_map, &fuzzy_merges);
	layer_stats.push(LayerStat { name: "Layer 4: Fuzzy Edit-Distance", changes });

	let single_merges = single_to_full_name_matches(&alias_map, &nodes_by_id);
	let changes = apply_layer_merges(&mut alias_map, &single_merges);
	layer_stats.push(LayerStat { name: "Layer 5: Single-Part to Full-Name", changes });

	let concat_merges = concatenation_matches(&alias_map);
	let changes = apply_layer_merges(&mut alias_map, &concat_merges);
	layer_stats.push(LayerStat { name: "Layer 6: Concatenation Matching", changes });

	let same_name_merges = same_name_merge(&alias_map, &nodes_by_id);
	let changes = apply_layer_merges(&mut alias_map, &same_name_merges);
	layer_stats.push(LayerStat { name: "Layer 7: Same-Name Merge", changes });

	let canonical_to_originals = invert_alias_map(&alias_map);

	let mut best_id_groups: HashMap<String, BTreeSet<String>> = HashMap::new();
	let mut final_remap: HashMap<String, String> = HashMap::new();

	let mut canons: Vec<&String> = canonical_to_originals.keys().collect();
	canons.sort();
	for canon in canons {
		let original_ids = &canonical_to_originals[canon];
		let group_nodes: Vec<&Node> =
			original_ids.iter().filter_map(|oid| nodes_by_id.get(oid).copied()).collect();
		if group_nodes.is_empty() {
			continue;
		}
		let best_node = crate::merge::choose_canonical_node(&group_nodes);

		let mut best_id = structural_cleanup(&best_node.id);
		best_id = apply_domain_normalization(&best_id);
		if let Some(at) = best_id.find('@') {
			let (local, domain) = (&best_id[..at], &best_id[at + 1..]);
			let local = ocr_clean_local_for_display(local);
			best_id = format!("{local}@{domain}");
		}

		let group: BTreeSet<String> = original_ids.iter().cloned().collect();
		for oid in &group {
			final_remap.insert(oid.clone(), best_id.clone());
		}
		// A best_id collision across two distinct canonical groups overwrites
		// rather than merges here, same as the original: final_remap still
		// routes every raw id to best_id, but only the later group's members
		// land in best_id_groups.
		best_id_groups.insert(best_id, group);
	}

	AliasMapResult { final_remap, best_id_groups, layer_stats }
}
