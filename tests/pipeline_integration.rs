//! End-to-end coverage of the six concrete scenarios, driven through
//! `pipeline::build_alias_map` -> `merge::merge_all` exactly as `lib::run` does.

use std::collections::{BTreeSet, HashMap};

use corrgraph::merge::merge_all;
use corrgraph::model::Node;
use corrgraph::pipeline::build_alias_map;

fn node(id: &str, name: &str, count: i64) -> Node {
	Node {
		id: id.to_string(),
		name: name.to_string(),
		domain: id.split('@').nth(1).unwrap_or("").to_string(),
		sent: 0,
		received: 0,
		count,
		years: BTreeSet::new(),
		domain_count: 0,
		aliases: Vec::new(),
	}
}

fn dedup(nodes: Vec<Node>) -> Vec<Node> {
	let nodes_by_id: HashMap<String, &Node> = nodes.iter().map(|n| (n.id.clone(), n)).collect();
	let result = build_alias_map(&nodes, false);
	merge_all(&result.best_id_groups, &result.final_remap, &nodes_by_id, &[]).nodes
}

#[test]
fn epa_reordering_merges_lastname_firstname_swap() {
	let nodes = vec![
		node("pruitt.scott@epa.gov", "", 10),
		node("scott.pruitt@epa.gov", "Scott Pruitt", 4),
	];
	let merged = dedup(nodes);
	assert_eq!(merged.len(), 1);
	assert_eq!(merged[0].count, 14);
	assert_eq!(merged[0].name, "Scott Pruitt");
	let mut aliases = merged[0].aliases.clone();
	aliases.sort();
	assert_eq!(aliases, vec!["pruitt.scott@epa.gov", "scott.pruitt@epa.gov"]);
}

#[test]
fn domain_ocr_collapses_trailing_garbage_char() {
	let nodes = vec![node("bennett.tate@epa.govl", "", 3), node("bennett.tate@epa.gov", "", 7)];
	let merged = dedup(nodes);
	assert_eq!(merged.len(), 1);
	assert_eq!(merged[0].id, "bennett.tate@epa.gov");
	assert_eq!(merged[0].count, 10);
}

#[test]
fn split_local_rejoins_into_existing_two_token_canonical() {
	let nodes = vec![node("hupp.sydney@epa.gov", "", 20), node("syd.ney.hupp@epa.gov", "", 2)];
	let merged = dedup(nodes);
	assert_eq!(merged.len(), 1);
	assert_eq!(merged[0].count, 22);
}

#[test]
fn concatenated_local_merges_into_dotted_form() {
	let nodes = vec![node("bennett.tate@acme.com", "", 50), node("bennetttate@acme.com", "", 1)];
	let merged = dedup(nodes);
	assert_eq!(merged.len(), 1);
	assert_eq!(merged[0].count, 51);
}

#[test]
fn cross_domain_same_name_merges_via_layer_seven() {
	let nodes = vec![node("jsmith@acme.com", "J. Smith", 5), node("jsmith@acrne.com", "J. Smith", 2)];
	let merged = dedup(nodes);
	assert_eq!(merged.len(), 1);
	assert_eq!(merged[0].count, 7);
}

#[test]
fn traffic_gate_blocks_over_merge_of_high_volume_near_duplicates() {
	let nodes = vec![
		node("smith.john@epa.gov", "John Smith", 200),
		node("smith.jon@epa.gov", "Jon Smythe", 200),
	];
	let merged = dedup(nodes);
	assert_eq!(merged.len(), 2);
}
