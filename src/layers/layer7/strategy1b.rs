//! Layer 7 strategy 2 (the original's "strategy 1b"): cross-domain, same
//! local, OCR-similar domain.
//!
//! OCR often garbles both the domain and the display name at once, so name
//! matching alone can't catch these; this strategy ignores the name
//! entirely and unions on local-part equality plus domain edit-distance.
//! Runs its own union-find, independent of strategy 2/3's.

use std::collections::HashMap;

use crate::canon::{total_count_for_canonical, unique_sorted_canonicals, CanonicalToOriginals};
use crate::model::Node;
use crate::strkernel::levenshtein;
use crate::tables::{COMMON_FIRST_NAMES, GENERIC_LOCALS};
use crate::unionfind::UnionFind;

pub fn cross_domain_same_local(
	alias_map: &HashMap<String, String>,
	canonical_to_originals: &CanonicalToOriginals,
	nodes_by_id: &HashMap<String, &Node>,
	already_merged: &HashMap<String, String>,
) -> HashMap<String, String> {
	let mut local_domain_groups: HashMap<String, Vec<(String, String, i64)>> = HashMap::new();

	for canon in unique_sorted_canonicals(alias_map) {
		if already_merged.contains_key(&canon) {
			continue;
		}
		let Some(at) = canon.find('@') else { continue };
		let (local, domain) = (canon[..at].to_string(), canon[at + 1..].to_string());
		let local_clean: Vec<&str> = local.split(['.', '_', '-']).filter(|p| !p.is_empty()).collect();
		if local_clean.len() == 1 && GENERIC_LOCALS.contains(local_clean[0]) {
			continue;
		}
		if COMMON_FIRST_NAMES.contains(local.to_lowercase().as_str()) {
			continue;
		}
		if local.len() <= 3 {
			continue;
		}
		let count = total_count_for_canonical(&canon, canonical_to_originals, nodes_by_id);
		local_domain_groups.entry(local).or_default().push((canon, domain, count));
	}

	let mut uf = UnionFind::new();
	for entries in local_domain_groups.values() {
		if entries.len() < 2 {
			continue;
		}
		for (canon, _, count) in entries {
			uf.add(canon, *count);
		}
		for i in 0..entries.len() {
			for j in (i + 1)..entries.len() {
				let (ci, di, _) = &entries[i];
				let (cj, dj, _) = &entries[j];
				if uf.find(ci) == uf.find(cj) {
					continue;
				}
				let dist = levenshtein(di, dj);
				let threshold = (di.len().max(dj.len()) / 3).max(3);
				if dist <= threshold && dist > 0 {
					uf.union(ci, cj);
				}
			}
		}
	}

	let mut new_merges = HashMap::new();
	for members in uf.groups().into_values() {
		if members.len() <= 1 {
			continue;
		}
		let best = members
			.iter()
			.max_by_key(|c| (total_count_for_canonical(c, canonical_to_originals, nodes_by_id), (*c).clone()))
			.unwrap()
			.clone();
		for m in members {
			if m != best && !already_merged.contains_key(&m) {
				new_merges.entry(m).or_insert(best.clone());
			}
		}
	}
	new_merges
}
