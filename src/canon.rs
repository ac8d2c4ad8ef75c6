//! Helpers shared by Layers 4–7: counting and naming a canonical group
//! before it has been materialized into a merged node.

use std::collections::{BTreeSet, HashMap};

use crate::model::Node;

/// Deduplicated, sorted canonical keys currently in use. Iterating a
/// `HashSet` would make tie-breaks in later layers depend on hash-seed
/// randomization; this keeps every layer's output reproducible run to run.
pub fn unique_sorted_canonicals(alias_map: &HashMap<String, String>) -> Vec<String> {
	alias_map.values().cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

/// canonical key -> raw ids that currently map to it.
pub type CanonicalToOriginals = HashMap<String, Vec<String>>;

pub fn invert_alias_map(alias_map: &HashMap<String, String>) -> CanonicalToOriginals {
	let mut out: CanonicalToOriginals = HashMap::new();
	for (orig, canon) in alias_map {
		out.entry(canon.clone()).or_default().push(orig.clone());
	}
	out
}

/// Sum of `count` across every raw node currently mapped to `canonical`.
pub fn total_count_for_canonical(
	canonical: &str,
	canonical_to_originals: &CanonicalToOriginals,
	nodes_by_id: &HashMap<String, &Node>,
) -> i64 {
	let fallback = [canonical.to_string()];
	let originals = canonical_to_originals
		.get(canonical)
		.map(|v| v.as_slice())
		.unwrap_or(&fallback);
	originals
		.iter()
		.filter_map(|oid| nodes_by_id.get(oid))
		.map(|n| n.count)
		.sum()
}

/// Count-weighted best display name among all raw nodes mapped to
/// `canonical`, preferring two-plus word title-case names free of OCR
/// digraphs.
pub fn best_name_for_canonical(
	canonical: &str,
	canonical_to_originals: &CanonicalToOriginals,
	nodes_by_id: &HashMap<String, &Node>,
) -> String {
	let fallback = [canonical.to_string()];
	let originals = canonical_to_originals
		.get(canonical)
		.map(|v| v.as_slice())
		.unwrap_or(&fallback);

	let mut name_counts: HashMap<String, i64> = HashMap::new();
	for oid in originals {
		if let Some(node) = nodes_by_id.get(oid) {
			if !node.name.is_empty() {
				*name_counts.entry(node.name.clone()).or_insert(0) += node.count;
			}
		}
	}
	if name_counts.is_empty() {
		return String::new();
	}

	name_counts
		.into_iter()
		.max_by_key(|(name, freq)| {
			let words: Vec<&str> = name.split_whitespace().collect();
			let has_words = words.len() >= 2;
			let is_title = *name == title_case(name);
			let lower = name.to_lowercase();
			let ocr_penalty = ["rn", "ii", "ffl", "ffi", "0", "1", "3"]
				.iter()
				.filter(|p| lower.contains(**p))
				.count() as i64;
			(has_words, is_title, -ocr_penalty, *freq, name.clone())
		})
		.map(|(name, _)| name)
		.unwrap_or_default()
}

/// Python's `str.title()`: upper-case the first alphabetic char of each
/// whitespace-separated word, lower-case the rest.
pub fn title_case(s: &str) -> String {
	s.split(' ')
		.map(title_word)
		.collect::<Vec<_>>()
		.join(" ")
}

fn title_word(word: &str) -> String {
	let mut out = String::with_capacity(word.len());
	let mut at_word_start = true;
	for c in word.chars() {
		if c.is_alphabetic() {
			if at_word_start {
				out.extend(c.to_uppercase());
			} else {
				out.extend(c.to_lowercase());
			}
			at_word_start = false;
		} else {
			out.push(c);
			at_word_start = true;
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn title_case_matches_python_semantics() {
		assert_eq!(title_case("sydney hupp"), "Sydney Hupp");
		assert_eq!(title_case("o'brien"), "O'Brien");
	}
}
