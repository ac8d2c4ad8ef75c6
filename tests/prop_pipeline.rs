//! Property 1 (idempotence) and property 6 (ordering determinism) from
//! spec.md §8, run over small synthetic graphs.

use std::collections::{BTreeSet, HashMap};

use corrgraph::merge::merge_all;
use corrgraph::model::Node;
use corrgraph::pipeline::build_alias_map;
use proptest::prelude::*;

fn node(id: String, count: i64) -> Node {
	Node {
		id,
		name: String::new(),
		domain: String::new(),
		sent: 0,
		received: 0,
		count,
		years: BTreeSet::new(),
		domain_count: 0,
		aliases: Vec::new(),
	}
}

fn dedup_ids(nodes: &[Node]) -> Vec<String> {
	let nodes_by_id: HashMap<String, &Node> = nodes.iter().map(|n| (n.id.clone(), n)).collect();
	let result = build_alias_map(nodes, false);
	let mut ids: Vec<String> =
		merge_all(&result.best_id_groups, &result.final_remap, &nodes_by_id, &[]).nodes.into_iter().map(|n| n.id).collect();
	ids.sort();
	ids
}

fn email_strategy() -> impl Strategy<Value = String> {
	"[a-z]{2,8}(\\.[a-z]{2,8})?@(epa\\.gov|acme\\.com|gmail\\.com)"
}

proptest! {
	#[test]
	fn pipeline_is_idempotent(ids in prop::collection::vec(email_strategy(), 1..12)) {
		let nodes: Vec<Node> = ids.into_iter().enumerate().map(|(i, id)| node(id, (i as i64) + 1)).collect();
		let first = dedup_ids(&nodes);
		let second = dedup_ids(&nodes);
		prop_assert_eq!(first, second);
	}

	#[test]
	fn output_is_stable_under_input_shuffling(
		ids in prop::collection::vec(email_strategy(), 1..12),
		seed in any::<u64>(),
	) {
		let nodes: Vec<Node> = ids.into_iter().enumerate().map(|(i, id)| node(id, (i as i64) + 1)).collect();
		let baseline = dedup_ids(&nodes);

		let mut shuffled = nodes.clone();
		// Deterministic pseudo-shuffle: rotate by a seed-derived amount so the
		// test itself stays reproducible without pulling in a RNG crate.
		if !shuffled.is_empty() {
			let rotate_by = (seed as usize) % shuffled.len();
			shuffled.rotate_left(rotate_by);
		}
		let shuffled_result = dedup_ids(&shuffled);

		prop_assert_eq!(baseline, shuffled_result);
	}
}
