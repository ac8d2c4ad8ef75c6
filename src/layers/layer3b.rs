//! Layer 3b: join split local parts (§4.7).
//!
//! OCR sometimes inserts a stray dot in the middle of a name
//! (`syd.ney` -> `sydney`). For canonicals with 3+ local parts, try
//! re-joining them into two groups and see if that matches an existing
//! 2-part canonical on the same domain.
//!
//! Candidate part order comes from re-running Layers 1–2 on the raw id,
//! not from the (already alphabetically sorted) canonical — joining only
//! makes sense against the original adjacency of the OCR'd text.

use std::collections::{HashMap, HashSet};

use crate::canon::unique_sorted_canonicals;
use crate::layers::layer1::structural_cleanup;
use crate::layers::layer2::apply_domain_normalization;
use crate::layers::layer3::ocr_normalize_local;

fn local_parts(local: &str) -> Vec<&str> {
	local.split(['.', '_', '-']).filter(|p| p.len() > 1).collect()
}

fn sorted_pair(a: String, b: String) -> (String, String) {
	if a <= b {
		(a, b)
	} else {
		(b, a)
	}
}

pub fn join_split_local_matches(
	alias_map: &HashMap<String, String>,
	all_original_ids: &[String],
) -> HashMap<String, String> {
	let mut two_part: HashMap<String, HashMap<(String, String), String>> = HashMap::new();
	for canon in unique_sorted_canonicals(alias_map) {
		let Some(at) = canon.find('@') else { continue };
		let (local, domain) = (&canon[..at], &canon[at + 1..]);
		let parts = local_parts(local);
		if parts.len() == 2 {
			let key = sorted_pair(parts[0].to_string(), parts[1].to_string());
			two_part.entry(domain.to_string()).or_default().insert(key, canon.clone());
		}
	}

	let mut new_merges: HashMap<String, String> = HashMap::new();
	let mut seen_canons: HashSet<String> = HashSet::new();

	let mut ids: Vec<&String> = all_original_ids.iter().collect();
	ids.sort();

	for orig_id in ids {
		let Some(canon) = alias_map.get(orig_id) else { continue };
		if new_merges.contains_key(canon) || seen_canons.contains(canon) {
			continue;
		}
		seen_canons.insert(canon.clone());
		let Some(at) = canon.find('@') else { continue };
		let domain = &canon[at + 1..];
		let Some(known) = two_part.get(domain) else { continue };

		let cleaned = structural_cleanup(orig_id);
		let cleaned = apply_domain_normalization(&cleaned);
		let Some(at2) = cleaned.find('@') else { continue };
		let orig_local = &cleaned[..at2];
		let orig_parts = local_parts(orig_local);
		if orig_parts.len() < 3 {
			continue;
		}

		let join_candidates: Vec<(String, String)> = if orig_parts.len() == 3 {
			let (a, b, c) = (orig_parts[0], orig_parts[1], orig_parts[2]);
			vec![
				(format!("{a}{b}"), c.to_string()),
				(format!("{b}{a}"), c.to_string()),
				(format!("{a}{c}"), b.to_string()),
				(format!("{c}{a}"), b.to_string()),
				(format!("{b}{c}"), a.to_string()),
				(format!("{c}{b}"), a.to_string()),
			]
		} else {
			(1..orig_parts.len())
				.map(|split| (orig_parts[..split].concat(), orig_parts[split..].concat()))
				.collect()
		};

		let mut best_match: Option<String> = None;
		for (left, right) in join_candidates {
			if left.len() < 2 || right.len() < 2 {
				continue;
			}
			let left_n = ocr_normalize_local(&left);
			let right_n = ocr_normalize_local(&right);
			let key_n = sorted_pair(left_n, right_n);
			if let Some(target) = known.get(&key_n) {
				if target != canon {
					best_match = Some(target.clone());
					break;
				}
			}
			let key = sorted_pair(left, right);
			if let Some(target) = known.get(&key) {
				if target != canon {
					best_match = Some(target.clone());
					break;
				}
			}
		}

		if let Some(target) = best_match {
			new_merges.insert(canon.clone(), target);
		}
	}

	new_merges
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejoins_split_three_part_local() {
		let mut alias_map = HashMap::new();
		alias_map.insert("hupp.sydney@epa.gov".to_string(), "hupp.sydney@epa.gov".to_string());
		alias_map.insert("syd.ney.hupp@epa.gov".to_string(), "hupp.ney.syd@epa.gov".to_string());
		let ids = vec!["hupp.sydney@epa.gov".to_string(), "syd.ney.hupp@epa.gov".to_string()];
		let merges = join_split_local_matches(&alias_map, &ids);
		assert_eq!(merges.get("hupp.ney.syd@epa.gov"), Some(&"hupp.sydney@epa.gov".to_string()));
	}
}
