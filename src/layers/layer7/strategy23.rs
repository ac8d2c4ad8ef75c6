//! Layer 7 strategies 2 and 3 (the original's combined "strategy 2+3"):
//! cross-domain merges keyed on the display name, sharing one union-find so
//! a chain of partial matches (exact local, then fuzzy local) still lands
//! in one group.
//!
//! Strategy 2: identical local part and identical normalized name.
//! Strategy 3: fuzzy local part (full-string or permuted part-level edit
//! distance) and identical normalized name.
//!
//! Generic locals, common first names, and short locals require the
//! domains themselves to be edit-distance-similar before union — otherwise
//! a shared role mailbox or common given name would merge unrelated people.

use std::collections::HashMap;

use crate::canon::{best_name_for_canonical, total_count_for_canonical, unique_sorted_canonicals, CanonicalToOriginals};
use crate::model::Node;
use crate::strkernel::levenshtein;
use crate::tables::{COMMON_FIRST_NAMES, GENERIC_LOCALS};
use crate::unionfind::UnionFind;

struct Entry2 {
	canon: String,
	domain: String,
	count: i64,
}

struct Entry3 {
	canon: String,
	local: String,
	domain: String,
	count: i64,
	local_parts: Vec<String>,
	is_generic: bool,
}

fn is_generic_local(local: &str) -> bool {
	let parts: Vec<&str> = local.split(['.', '_', '-']).filter(|p| !p.is_empty()).collect();
	parts.len() == 1 && GENERIC_LOCALS.contains(parts[0])
}

fn permutations(n: usize) -> Vec<Vec<usize>> {
	if n == 0 {
		return vec![vec![]];
	}
	let mut items: Vec<usize> = (0..n).collect();
	let mut out = Vec::new();
	permute_rec(&mut items, 0, &mut out);
	out
}

fn permute_rec(items: &mut Vec<usize>, k: usize, out: &mut Vec<Vec<usize>>) {
	if k == items.len() {
		out.push(items.clone());
		return;
	}
	for i in k..items.len() {
		items.swap(k, i);
		permute_rec(items, k + 1, out);
		items.swap(k, i);
	}
}

pub fn build_union_find(
	alias_map: &HashMap<String, String>,
	canonical_to_originals: &CanonicalToOriginals,
	nodes_by_id: &HashMap<String, &Node>,
	skip_if_merged: &HashMap<String, String>,
) -> UnionFind {
	let mut uf = UnionFind::new();

	// --- Strategy 2: same local, same normalized name ---
	let mut local_name_groups: HashMap<(String, String), Vec<Entry2>> = HashMap::new();
	for canon in unique_sorted_canonicals(alias_map) {
		if skip_if_merged.contains_key(&canon) {
			continue;
		}
		let Some(at) = canon.find('@') else { continue };
		let (local, domain) = (canon[..at].to_string(), canon[at + 1..].to_string());
		let name = best_name_for_canonical(&canon, canonical_to_originals, nodes_by_id);
		if name.is_empty() {
			continue;
		}
		let mut words: Vec<String> = name.to_lowercase().split_whitespace().map(str::to_string).collect();
		words.sort();
		let norm_name = words.join(" ");
		let count = total_count_for_canonical(&canon, canonical_to_originals, nodes_by_id);
		local_name_groups.entry((local, norm_name)).or_default().push(Entry2 { canon, domain, count });
	}

	for ((local, _norm_name), entries) in &local_name_groups {
		if entries.len() < 2 {
			continue;
		}
		let require_domain_check =
			is_generic_local(local) || COMMON_FIRST_NAMES.contains(local.to_lowercase().as_str()) || local.len() <= 4;

		for e in entries {
			uf.add(&e.canon, e.count);
		}
		for i in 0..entries.len() {
			for j in (i + 1)..entries.len() {
				let (ei, ej) = (&entries[i], &entries[j]);
				if uf.find(&ei.canon) == uf.find(&ej.canon) {
					continue;
				}
				if require_domain_check {
					let dist = levenshtein(&ei.domain, &ej.domain);
					let threshold = (ei.domain.len().max(ej.domain.len()) / 3).max(3);
					if dist > threshold {
						continue;
					}
				}
				uf.union(&ei.canon, &ej.canon);
			}
		}
	}

	// --- Strategy 3: fuzzy local, same normalized name ---
	let mut name_groups: HashMap<String, Vec<Entry3>> = HashMap::new();
	for canon in unique_sorted_canonicals(alias_map) {
		if skip_if_merged.contains_key(&canon) {
			continue;
		}
		let Some(at) = canon.find('@') else { continue };
		let (local, domain) = (canon[..at].to_string(), canon[at + 1..].to_string());
		let is_generic = is_generic_local(&local);
		let name = best_name_for_canonical(&canon, canonical_to_originals, nodes_by_id);
		if name.is_empty() {
			continue;
		}
		let mut words: Vec<String> = name.to_lowercase().split_whitespace().map(str::to_string).collect();
		words.sort();
		let norm_name = words.join(" ");
		let count = total_count_for_canonical(&canon, canonical_to_originals, nodes_by_id);
		let mut local_parts: Vec<String> =
			local.split(['.', '_', '-']).map(str::to_string).collect();
		local_parts.sort();
		name_groups.entry(norm_name).or_default().push(Entry3 {
			canon,
			local,
			domain,
			count,
			local_parts,
			is_generic,
		});
	}

	for entries in name_groups.values() {
		if entries.len() < 2 {
			continue;
		}
		for e in entries {
			uf.add(&e.canon, e.count);
		}
		for i in 0..entries.len() {
			for j in (i + 1)..entries.len() {
				let (ei, ej) = (&entries[i], &entries[j]);
				if uf.find(&ei.canon) == uf.find(&ej.canon) {
					continue;
				}
				let local_dist = levenshtein(&ei.local, &ej.local);
				let shorter_local = ei.local.len().min(ej.local.len());
				if shorter_local < 3 {
					continue;
				}
				let local_threshold = (shorter_local / 4).max(2);
				let mut matched = local_dist <= local_threshold;

				if !matched && ei.local_parts.len() == ej.local_parts.len() && ei.local_parts.len() >= 2 {
					let mut best_part_dist = usize::MAX;
					for perm in permutations(ej.local_parts.len()) {
						let total: usize = (0..ei.local_parts.len())
							.map(|k| levenshtein(&ei.local_parts[k], &ej.local_parts[perm[k]]))
							.sum();
						best_part_dist = best_part_dist.min(total);
					}
					let part_threshold = (ei.local_parts.iter().map(|p| p.len()).sum::<usize>() / 4).max(2);
					matched = best_part_dist <= part_threshold;
				}
				if !matched {
					continue;
				}

				let require_domain_check = ei.is_generic
					|| ej.is_generic
					|| COMMON_FIRST_NAMES.contains(ei.local.to_lowercase().as_str())
					|| COMMON_FIRST_NAMES.contains(ej.local.to_lowercase().as_str())
					|| ei.local.len() <= 4
					|| ej.local.len() <= 4;
				if require_domain_check {
					let dist = levenshtein(&ei.domain, &ej.domain);
					let threshold = (ei.domain.len().max(ej.domain.len()) / 3).max(3);
					if dist > threshold {
						continue;
					}
				}

				uf.union(&ei.canon, &ej.canon);
			}
		}
	}

	uf
}
