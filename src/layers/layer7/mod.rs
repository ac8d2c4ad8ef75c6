//! Layer 7: same-name merging, the final safety net (§4.11).
//!
//! Combines three strategies in sequence, each skipping canonicals the
//! previous ones already claimed: (1) same domain + same name, resolved
//! directly; (1b) same local + OCR-similar domain, its own union-find; (2+3)
//! same or fuzzy local + same name across domains, a shared union-find whose
//! final groups also absorb any strategy-1 destination reachable from a
//! member, so a person merged by strategy 1 doesn't end up orphaned from a
//! larger strategy-2/3 group that also contains them.

mod strategy1;
mod strategy1b;
mod strategy23;

use std::collections::{BTreeSet, HashMap};

use crate::canon::{invert_alias_map, total_count_for_canonical};
use crate::model::Node;

pub fn same_name_merge(alias_map: &HashMap<String, String>, nodes_by_id: &HashMap<String, &Node>) -> HashMap<String, String> {
	let canonical_to_originals = invert_alias_map(alias_map);

	let mut new_merges = strategy1::same_domain_same_name(alias_map, &canonical_to_originals, nodes_by_id);

	let merges_1b =
		strategy1b::cross_domain_same_local(alias_map, &canonical_to_originals, nodes_by_id, &new_merges);
	for (k, v) in merges_1b {
		new_merges.entry(k).or_insert(v);
	}

	let mut uf2 = strategy23::build_union_find(alias_map, &canonical_to_originals, nodes_by_id, &new_merges);

	for members in uf2.groups().into_values() {
		if members.len() <= 1 {
			continue;
		}
		let mut all_candidates: BTreeSet<String> = members.iter().cloned().collect();
		for m in &members {
			if let Some(dest) = new_merges.get(m) {
				all_candidates.insert(dest.clone());
			}
		}
		let best = all_candidates
			.iter()
			.max_by_key(|c| (total_count_for_canonical(c, &canonical_to_originals, nodes_by_id), (*c).clone()))
			.unwrap()
			.clone();
		for m in all_candidates {
			if m != best {
				new_merges.insert(m, best.clone());
			}
		}
	}

	new_merges
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, name: &str, count: i64) -> Node {
		Node {
			id: id.to_string(),
			name: name.to_string(),
			domain: String::new(),
			sent: 0,
			received: 0,
			count,
			years: Default::default(),
			domain_count: 0,
			aliases: Vec::new(),
		}
	}

	#[test]
	fn same_domain_same_name_merges_directly() {
		let a = node("jsmith@epa.gov", "John Smith", 10);
		let b = node("j.smith2@epa.gov", "John Smith", 4);
		let nodes_by_id: HashMap<String, &Node> =
			[("jsmith@epa.gov".to_string(), &a), ("j.smith2@epa.gov".to_string(), &b)].into_iter().collect();
		let alias_map: HashMap<String, String> = [
			("jsmith@epa.gov".to_string(), "jsmith@epa.gov".to_string()),
			("j.smith2@epa.gov".to_string(), "j.smith2@epa.gov".to_string()),
		]
		.into_iter()
		.collect();
		let merges = same_name_merge(&alias_map, &nodes_by_id);
		assert_eq!(merges.get("j.smith2@epa.gov"), Some(&"jsmith@epa.gov".to_string()));
	}
}
