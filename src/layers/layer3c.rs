//! Layer 3c: prefix stripping (§4.8).
//!
//! OCR sometimes concatenates garbage from an adjacent field onto the
//! front or back of a local-part segment (`sydneyfhupp.sydney@epa.gov`,
//! where `sydneyf` is garbage glued ahead of the real `sydney`). Detects a
//! known name fragment at the start or end of a segment and, if stripping
//! the garbage yields an existing 2-part canonical, merges into it.

use std::collections::{HashMap, HashSet};

use crate::canon::unique_sorted_canonicals;

fn local_parts_nonempty(local: &str) -> Vec<&str> {
	local.split(['.', '_', '-']).filter(|p| !p.is_empty()).collect()
}

fn sorted_pair(a: String, b: String) -> (String, String) {
	if a <= b {
		(a, b)
	} else {
		(b, a)
	}
}

pub fn prefix_strip_matches(alias_map: &HashMap<String, String>) -> HashMap<String, String> {
	let canons = unique_sorted_canonicals(alias_map);

	let mut domain_name_parts: HashMap<String, HashSet<String>> = HashMap::new();
	let mut two_part_canonicals: HashMap<String, HashMap<(String, String), String>> = HashMap::new();
	for canon in &canons {
		let Some(at) = canon.find('@') else { continue };
		let (local, domain) = (&canon[..at], &canon[at + 1..]);
		let parts: Vec<&str> = local.split(['.', '_', '-']).filter(|p| p.len() > 1).collect();
		if parts.len() == 2 {
			let entry = domain_name_parts.entry(domain.to_string()).or_default();
			entry.insert(parts[0].to_string());
			entry.insert(parts[1].to_string());
			let key = sorted_pair(parts[0].to_string(), parts[1].to_string());
			two_part_canonicals.entry(domain.to_string()).or_default().insert(key, canon.clone());
		}
	}

	let mut new_merges: HashMap<String, String> = HashMap::new();

	for canon in &canons {
		if new_merges.contains_key(canon) {
			continue;
		}
		let Some(at) = canon.find('@') else { continue };
		let (local, domain) = (&canon[..at], &canon[at + 1..]);
		let Some(known_parts) = domain_name_parts.get(domain) else { continue };
		let known_twopart = two_part_canonicals.get(domain).cloned().unwrap_or_default();

		let parts = local_parts_nonempty(local);
		if parts.len() < 2 {
			continue;
		}

		let mut found = false;
		'outer: for (i, part) in parts.iter().enumerate() {
			for known_p in known_parts {
				if known_p.len() < 3 {
					continue;
				}
				if part.ends_with(known_p.as_str()) && part.len() > known_p.len() {
					let mut remaining: Vec<String> =
						parts[..i].iter().map(|s| s.to_string()).collect();
					remaining.push(known_p.clone());
					remaining.extend(parts[i + 1..].iter().map(|s| s.to_string()));
					let remaining: Vec<String> = remaining.into_iter().filter(|p| p.len() > 1).collect();
					if remaining.len() == 2 {
						let key = sorted_pair(remaining[0].clone(), remaining[1].clone());
						if let Some(target) = known_twopart.get(&key) {
							if target != canon {
								new_merges.insert(canon.clone(), target.clone());
								found = true;
								break 'outer;
							}
						}
					}
				}
			}
			for known_p in known_parts {
				if known_p.len() < 3 {
					continue;
				}
				if part.starts_with(known_p.as_str()) && part.len() > known_p.len() {
					let mut remaining: Vec<String> =
						parts[..i].iter().map(|s| s.to_string()).collect();
					remaining.push(known_p.clone());
					remaining.extend(parts[i + 1..].iter().map(|s| s.to_string()));
					let remaining: Vec<String> = remaining.into_iter().filter(|p| p.len() > 1).collect();
					if remaining.len() == 2 {
						let key = sorted_pair(remaining[0].clone(), remaining[1].clone());
						if let Some(target) = known_twopart.get(&key) {
							if target != canon {
								new_merges.insert(canon.clone(), target.clone());
								found = true;
								break 'outer;
							}
						}
					}
				}
			}
		}
		let _ = found;
	}

	new_merges
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_garbage_prefix_glued_to_known_name() {
		let mut alias_map = HashMap::new();
		alias_map.insert("a".to_string(), "hupp.sydney@epa.gov".to_string());
		alias_map.insert("b".to_string(), "sydneyfhupp.sydney@epa.gov".to_string());
		let merges = prefix_strip_matches(&alias_map);
		assert_eq!(merges.get("sydneyfhupp.sydney@epa.gov"), Some(&"hupp.sydney@epa.gov".to_string()));
	}
}
