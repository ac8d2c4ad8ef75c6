//! Layer 7 strategy 1: same domain, same normalized display name.
//!
//! Resolves directly into a merge map — no union-find needed since every
//! group shares one domain and one name.

use std::collections::HashMap;

use crate::canon::{best_name_for_canonical, total_count_for_canonical, unique_sorted_canonicals, CanonicalToOriginals};
use crate::model::Node;

pub fn same_domain_same_name(
	alias_map: &HashMap<String, String>,
	canonical_to_originals: &CanonicalToOriginals,
	nodes_by_id: &HashMap<String, &Node>,
) -> HashMap<String, String> {
	let mut domain_name_groups: HashMap<(String, String), Vec<(String, i64)>> = HashMap::new();

	for canon in unique_sorted_canonicals(alias_map) {
		let Some(at) = canon.find('@') else { continue };
		let domain = canon[at + 1..].to_string();
		let name = best_name_for_canonical(&canon, canonical_to_originals, nodes_by_id);
		if name.is_empty() {
			continue;
		}
		let mut words: Vec<String> = name.to_lowercase().split_whitespace().map(str::to_string).collect();
		if words.len() < 2 {
			continue;
		}
		words.sort();
		let norm_name = words.join(" ");
		let count = total_count_for_canonical(&canon, canonical_to_originals, nodes_by_id);
		domain_name_groups.entry((domain, norm_name)).or_default().push((canon.clone(), count));
	}

	let mut new_merges = HashMap::new();
	for entries in domain_name_groups.values_mut() {
		if entries.len() < 2 {
			continue;
		}
		entries.sort_by(|a, b| b.1.cmp(&a.1));
		let best = entries[0].0.clone();
		for (canon, _) in entries.iter().skip(1) {
			new_merges.entry(canon.clone()).or_insert_with(|| best.clone());
		}
	}
	new_merges
}
