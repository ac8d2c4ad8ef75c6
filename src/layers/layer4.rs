//! Layer 4: fuzzy edit-distance matching within a domain (§4.9).
//!
//! The only layer allowed to run its per-domain passes in parallel — each
//! domain's candidate set is independent, and the union-find merge itself
//! is sequential and single-threaded once candidate pairs are collected.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::canon::{best_name_for_canonical, invert_alias_map, total_count_for_canonical, CanonicalToOriginals};
use crate::model::Node;
use crate::strkernel::{jaro_winkler, levenshtein};
use crate::unionfind::UnionFind;

struct CanonInfo {
	canon: String,
	local: String,
	len: usize,
	count: i64,
	name: String,
}

/// A same-domain pair worth unioning, discovered independently per domain.
struct Candidate {
	a: String,
	b: String,
}

fn find_domain_candidates(
	domain: &str,
	canonicals: &[String],
	canonical_to_originals: &CanonicalToOriginals,
	nodes_by_id: &HashMap<String, &Node>,
) -> Vec<Candidate> {
	let _ = domain;
	if canonicals.len() < 2 {
		return Vec::new();
	}

	let mut canon_info: Vec<CanonInfo> = canonicals
		.iter()
		.map(|c| {
			let local = c.split('@').next().unwrap_or("").to_string();
			let count = total_count_for_canonical(c, canonical_to_originals, nodes_by_id);
			let name = best_name_for_canonical(c, canonical_to_originals, nodes_by_id);
			CanonInfo { canon: c.clone(), len: local.chars().count(), local, count, name }
		})
		.collect();
	canon_info.sort_by(|a, b| (a.len, &a.local).cmp(&(b.len, &b.local)));

	let mut out = Vec::new();
	for i in 0..canon_info.len() {
		for j in (i + 1)..canon_info.len() {
			let ci = &canon_info[i];
			let cj = &canon_info[j];

			let shorter = ci.len.min(cj.len);
			if shorter < 2 {
				continue;
			}
			let threshold = (shorter / 5).max(2);

			if cj.len > ci.len && cj.len - ci.len > threshold {
				break;
			}

			let dist = levenshtein(&ci.local, &cj.local);
			if dist > threshold {
				continue;
			}

			if !ci.name.is_empty() && !cj.name.is_empty() && dist == threshold {
				let ci_name_lower = ci.name.to_lowercase();
				let cj_name_lower = cj.name.to_lowercase();
				let jw = jaro_winkler(&ci_name_lower, &cj_name_lower);
				let w1: std::collections::HashSet<&str> = ci_name_lower.split_whitespace().collect();
				let w2: std::collections::HashSet<&str> = cj_name_lower.split_whitespace().collect();
				let common = w1.intersection(&w2).count();
				let total = w1.union(&w2).count();
				let token_sim = if total > 0 { common as f64 / total as f64 } else { 1.0 };
				let li_parts: std::collections::HashSet<&str> =
					ci.local.split('.').filter(|p| p.len() >= 3).collect();
				let lj_parts: std::collections::HashSet<&str> =
					cj.local.split('.').filter(|p| p.len() >= 3).collect();
				let shared_local = li_parts.intersection(&lj_parts).next().is_some();
				if jw < 0.85 && token_sim < 0.4 && !shared_local {
					continue;
				}
			}

			if ci.count > 50 && cj.count > 50 {
				let ratio = ci.count.max(cj.count) as f64 / (ci.count.min(cj.count).max(1)) as f64;
				if ratio < 2.0 {
					if !ci.name.is_empty() && !cj.name.is_empty() {
						if jaro_winkler(&ci.name.to_lowercase(), &cj.name.to_lowercase()) < 0.95 {
							continue;
						}
					} else {
						continue;
					}
				}
			}

			out.push(Candidate { a: ci.canon.clone(), b: cj.canon.clone() });
		}
	}
	out
}

pub fn fuzzy_match_groups(
	nodes_by_id: &HashMap<String, &Node>,
	alias_map: &HashMap<String, String>,
	skip: bool,
) -> HashMap<String, String> {
	if skip {
		return HashMap::new();
	}

	let canonical_to_originals = invert_alias_map(alias_map);

	let mut domain_groups: HashMap<String, Vec<String>> = HashMap::new();
	for canon in alias_map.values().collect::<std::collections::HashSet<_>>() {
		if let Some(at) = canon.find('@') {
			domain_groups.entry(canon[at + 1..].to_string()).or_default().push(canon.clone());
		}
	}

	let domains: Vec<&String> = domain_groups.keys().collect();
	let candidates: Vec<Candidate> = domains
		.par_iter()
		.flat_map(|domain| {
			find_domain_candidates(
				domain,
				&domain_groups[domain.as_str()],
				&canonical_to_originals,
				nodes_by_id,
			)
		})
		.collect();

	let mut uf = UnionFind::new();
	for c in &candidates {
		let a_count = total_count_for_canonical(&c.a, &canonical_to_originals, nodes_by_id);
		let b_count = total_count_for_canonical(&c.b, &canonical_to_originals, nodes_by_id);
		uf.add(&c.a, a_count);
		uf.add(&c.b, b_count);
		uf.union(&c.a, &c.b);
	}

	let mut new_merges = HashMap::new();
	for members in uf.groups().into_values() {
		if members.len() <= 1 {
			continue;
		}
		let best = members
			.iter()
			.max_by_key(|c| (total_count_for_canonical(c, &canonical_to_originals, nodes_by_id), (*c).clone()))
			.unwrap()
			.clone();
		for m in members {
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
	fn merges_single_edit_within_domain() {
		let smith = node("smith@epa.gov", "John Smith", 5);
		let smyth = node("smyth@epa.gov", "John Smith", 3);
		let nodes_by_id: HashMap<String, &Node> =
			[("smith@epa.gov".to_string(), &smith), ("smyth@epa.gov".to_string(), &smyth)].into_iter().collect();
		let alias_map: HashMap<String, String> = [
			("smith@epa.gov".to_string(), "smith@epa.gov".to_string()),
			("smyth@epa.gov".to_string(), "smyth@epa.gov".to_string()),
		]
		.into_iter()
		.collect();
		let merges = fuzzy_match_groups(&nodes_by_id, &alias_map, false);
		assert_eq!(merges.len(), 1);
	}

	#[test]
	fn skip_returns_empty() {
		let nodes_by_id: HashMap<String, &Node> = HashMap::new();
		let alias_map: HashMap<String, String> = HashMap::new();
		assert!(fuzzy_match_groups(&nodes_by_id, &alias_map, true).is_empty());
	}
}
