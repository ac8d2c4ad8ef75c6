//! Layer 5: single-part to full-name matching (§4.10).
//!
//! Matches a bare local (`sydney@epa.gov`) to a multi-part local that
//! contains it (`hupp.sydney@epa.gov`) when the match is unambiguous, or
//! when one candidate dominates traffic by 5x.

use std::collections::HashMap;

use crate::canon::{invert_alias_map, total_count_for_canonical, unique_sorted_canonicals};
use crate::model::Node;

pub fn single_to_full_name_matches(
	alias_map: &HashMap<String, String>,
	nodes_by_id: &HashMap<String, &Node>,
) -> HashMap<String, String> {
	let canonical_to_originals = invert_alias_map(alias_map);

	let mut domain_canonicals: HashMap<String, Vec<(String, String)>> = HashMap::new();
	for canon in unique_sorted_canonicals(alias_map) {
		if let Some(at) = canon.find('@') {
			domain_canonicals
				.entry(canon[at + 1..].to_string())
				.or_default()
				.push((canon[..at].to_string(), canon.clone()));
		}
	}

	let mut new_merges: HashMap<String, String> = HashMap::new();

	for entries in domain_canonicals.values() {
		let mut singles: Vec<(&str, &str)> = Vec::new();
		let mut multis: Vec<(&str, &str, Vec<&str>)> = Vec::new();
		for (local, canon) in entries {
			let parts: Vec<&str> = local.split(['.', '_', '-']).filter(|p| p.len() > 1).collect();
			if parts.len() <= 1 {
				singles.push((local.as_str(), canon.as_str()));
			} else {
				multis.push((local.as_str(), canon.as_str(), parts));
			}
		}
		if singles.is_empty() || multis.is_empty() {
			continue;
		}

		for (single_local, single_canon) in &singles {
			if new_merges.contains_key(*single_canon) {
				continue;
			}
			let mut candidates: Vec<(&str, i64)> = Vec::new();
			for (_, multi_canon, parts) in &multis {
				if new_merges.contains_key(*multi_canon) {
					continue;
				}
				if parts.contains(single_local) {
					let count = total_count_for_canonical(multi_canon, &canonical_to_originals, nodes_by_id);
					candidates.push((multi_canon, count));
				}
			}
			if candidates.is_empty() {
				continue;
			}
			if candidates.len() == 1 {
				new_merges.insert(single_canon.to_string(), candidates[0].0.to_string());
			} else {
				candidates.sort_by(|a, b| b.1.cmp(&a.1));
				let top_count = candidates[0].1;
				let second_count = candidates[1].1;
				if top_count > 0 && (second_count == 0 || top_count as f64 / second_count.max(1) as f64 >= 5.0) {
					new_merges.insert(single_canon.to_string(), candidates[0].0.to_string());
				}
			}
		}
	}

	new_merges
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, count: i64) -> Node {
		Node {
			id: id.to_string(),
			name: String::new(),
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
	fn unambiguous_single_matches_the_one_multi() {
		let multi = node("hupp.sydney@epa.gov", 4);
		let single = node("sydney@epa.gov", 1);
		let nodes_by_id: HashMap<String, &Node> = [
			("hupp.sydney@epa.gov".to_string(), &multi),
			("sydney@epa.gov".to_string(), &single),
		]
		.into_iter()
		.collect();
		let alias_map: HashMap<String, String> = [
			("hupp.sydney@epa.gov".to_string(), "hupp.sydney@epa.gov".to_string()),
			("sydney@epa.gov".to_string(), "sydney@epa.gov".to_string()),
		]
		.into_iter()
		.collect();
		let merges = single_to_full_name_matches(&alias_map, &nodes_by_id);
		assert_eq!(merges.get("sydney@epa.gov"), Some(&"hupp.sydney@epa.gov".to_string()));
	}
}
