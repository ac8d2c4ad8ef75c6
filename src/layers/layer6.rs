//! Layer 6: concatenation matching (§4.11 predecessor).
//!
//! Matches a single concatenated token (`bennetttate@domain`) against a
//! known dotted form (`bennett.tate@domain`) by trying every split point;
//! merges only when exactly one split yields a known canonical.

use std::collections::HashMap;

use crate::canon::unique_sorted_canonicals;

fn sorted_key(parts: &[&str]) -> Vec<String> {
	let mut v: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
	v.sort();
	v
}

fn sorted_pair(a: String, b: String) -> Vec<String> {
	sorted_key(&[a.as_str(), b.as_str()])
}

pub fn concatenation_matches(alias_map: &HashMap<String, String>) -> HashMap<String, String> {
	let mut domain_canonicals: HashMap<String, Vec<(String, String)>> = HashMap::new();
	for canon in unique_sorted_canonicals(alias_map) {
		if let Some(at) = canon.find('@') {
			domain_canonicals
				.entry(canon[at + 1..].to_string())
				.or_default()
				.push((canon[..at].to_string(), canon.clone()));
		}
	}

	let mut domain_multiparts: HashMap<String, HashMap<Vec<String>, String>> = HashMap::new();
	for (domain, entries) in &domain_canonicals {
		for (local, canon) in entries {
			let parts: Vec<&str> = local.split(['.', '_', '-']).filter(|p| p.len() > 1).collect();
			if parts.len() >= 2 {
				let key = sorted_key(&parts);
				domain_multiparts.entry(domain.clone()).or_default().insert(key, canon.clone());
			}
		}
	}

	let mut new_merges: HashMap<String, String> = HashMap::new();

	for (domain, entries) in &domain_canonicals {
		let Some(known_multis) = domain_multiparts.get(domain) else { continue };
		if known_multis.is_empty() {
			continue;
		}

		for (local, canon) in entries {
			if new_merges.contains_key(canon) {
				continue;
			}
			let parts: Vec<&str> = local.split(['.', '_', '-']).filter(|p| p.len() > 1).collect();
			if parts.len() != 1 || local.len() < 6 {
				continue;
			}

			let chars: Vec<char> = local.chars().collect();
			let mut matches: std::collections::HashSet<String> = std::collections::HashSet::new();
			for split_pos in 2..chars.len().saturating_sub(1) {
				let left: String = chars[..split_pos].iter().collect();
				let right: String = chars[split_pos..].iter().collect();
				if left.len() < 2 || right.len() < 2 {
					continue;
				}
				let key = sorted_pair(left, right);
				if let Some(target) = known_multis.get(&key) {
					if target != canon {
						matches.insert(target.clone());
					}
				}
			}

			if matches.len() == 1 {
				new_merges.insert(canon.clone(), matches.into_iter().next().unwrap());
			}
		}
	}

	new_merges
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_concatenated_local_against_dotted_form() {
		let alias_map: HashMap<String, String> = [
			("bennett.tate@epa.gov".to_string(), "bennett.tate@epa.gov".to_string()),
			("bennetttate@epa.gov".to_string(), "bennetttate@epa.gov".to_string()),
		]
		.into_iter()
		.collect();
		let merges = concatenation_matches(&alias_map);
		assert_eq!(merges.get("bennetttate@epa.gov"), Some(&"bennett.tate@epa.gov".to_string()));
	}
}
