//! Picks a canonical node and a display name for each merge group, then
//! folds the group into one output node (§4.12) and remaps edges through
//! the same alias table (§4.13).

use std::collections::{BTreeSet, HashMap};

use crate::canon::title_case;
use crate::layers::layer2::normalize_domain;
use crate::model::{Edge, Graph, Node, Stats};
use crate::stats::recompute_stats;
use crate::tables::{COMMON_FIRST_NAMES, GENERIC_LOCALS, LASTNAME_FIRST_DOMAINS};

const NON_NAME_WORDS: &[&str] = &[
	"press", "scheduling", "requests", "records", "planning", "counsel", "director", "manager",
	"editor", "congress", "intern", "orders", "updates", "alerts", "comments", "regulation",
	"regulatory", "operations", "program", "executive", "chairman", "president", "secretary",
	"treasurer", "governor", "senator", "representative",
];

fn local_name_parts(local: &str) -> Vec<&str> {
	local.split(['.', '_', '-']).filter(|p| p.len() > 1).collect()
}

/// Highest `count`, then a domain the original trusts as clean, then a
/// dotted local part, then name quality, then shortest id — the original's
/// stable five-key ordering, so ties resolve the same way on every run.
pub fn choose_canonical_node<'a>(group_nodes: &[&'a Node]) -> &'a Node {
	fn score(node: &Node) -> (i64, i32, i32, i32, std::cmp::Reverse<usize>) {
		let domain_clean = if matches!(node.domain.as_str(), "epa.gov" | "gmail.com" | "yahoo.com")
			|| (node.domain.ends_with(".gov") && !node.domain.contains(['q', '3', '0']))
		{
			1
		} else {
			0
		};

		let local = node.id.split('@').next().unwrap_or(&node.id);
		let has_dot = if local.contains('.') { 1 } else { 0 };

		let mut name_score = 0;
		if !node.name.is_empty() {
			let words: Vec<&str> = node.name.split_whitespace().collect();
			if words.len() >= 2 {
				name_score += 2;
			}
			if node.name == title_case(&node.name) || node.name == node.name.to_uppercase() {
				name_score += 1;
			}
			let lower = node.name.to_lowercase();
			if ["rn", "ii", "0", "1", "3"].iter().any(|p| lower.contains(p)) {
				name_score -= 1;
			}
		}

		(node.count, domain_clean, has_dot, name_score, std::cmp::Reverse(node.id.len()))
	}

	group_nodes.iter().copied().max_by_key(|n| score(n)).expect("group_nodes is non-empty")
}

/// Most frequent (weighted by node `count`) name in the group, tie-broken by
/// word count, title-casing, and an OCR-artifact penalty.
pub fn best_display_name(group_nodes: &[&Node]) -> String {
	let mut name_counts: HashMap<&str, i64> = HashMap::new();
	for n in group_nodes {
		if !n.name.is_empty() {
			*name_counts.entry(n.name.as_str()).or_insert(0) += n.count;
		}
	}
	if name_counts.is_empty() {
		return String::new();
	}

	name_counts
		.into_iter()
		.max_by_key(|(name, freq)| {
			let words: Vec<&str> = name.split_whitespace().collect();
			let has_two_words = words.len() >= 2;
			let is_title = *name == title_case(name);
			let lower = name.to_lowercase();
			let ocr_score = -(["rn", "ii", "vv", "ffl", "svd", "liav"]
				.iter()
				.filter(|p| lower.contains(**p))
				.count() as i64);
			(has_two_words, is_title, *freq, ocr_score)
		})
		.map(|(name, _)| name.to_string())
		.unwrap_or_default()
}

/// Split a bare `Jgreen`-style single-word name into `J. Green`, unless it's
/// a common first name, a generic mailbox word, or too short to be a real
/// initial+surname.
fn split_initial_name(name: &str) -> Option<String> {
	if name.len() < 5 {
		return None;
	}
	let words: Vec<&str> = name.split_whitespace().collect();
	if words.len() != 1 {
		return None;
	}
	let word = words[0];
	let lower = word.to_lowercase();
	if COMMON_FIRST_NAMES.contains(lower.as_str()) || GENERIC_LOCALS.contains(lower.as_str()) {
		return None;
	}
	if NON_NAME_WORDS.contains(&lower.as_str()) {
		return None;
	}
	let mut chars = word.chars();
	let first = chars.next()?;
	if !first.is_uppercase() {
		return None;
	}
	let rest: String = chars.collect();
	if rest.len() < 3 {
		return None;
	}
	Some(format!("{first}. {}", title_case(&rest)))
}

/// Derive a display name from an email local part when the node carries
/// none, e.g. `hupp.sydney@epa.gov` -> `Hupp Sydney`.
fn name_from_email(email_id: &str) -> String {
	let Some(at) = email_id.find('@') else { return String::new() };
	let local = &email_id[..at];
	let parts: Vec<&str> = local_name_parts(local);
	if parts.is_empty() {
		return String::new();
	}
	if parts.len() == 1 && GENERIC_LOCALS.contains(parts[0].to_lowercase().as_str()) {
		return String::new();
	}
	if parts.len() == 1 {
		let titled = title_case(parts[0]);
		if let Some(split) = split_initial_name(&titled) {
			return split;
		}
	}
	parts.iter().map(|p| title_case(p)).collect::<Vec<_>>().join(" ")
}

/// Flip `Lastname Firstname` to `Firstname Lastname` for domains known to
/// use `lastname.firstname@` addressing, when the name's word order
/// actually matches the email's part order.
fn fix_name_order(name: &str, email_id: &str, domain: &str) -> String {
	if name.is_empty() || !email_id.contains('@') || !LASTNAME_FIRST_DOMAINS.contains(domain) {
		return name.to_string();
	}
	let words: Vec<&str> = name.split_whitespace().collect();
	if words.len() != 2 {
		return name.to_string();
	}
	let local = email_id.split('@').next().unwrap_or(email_id);
	let parts = local_name_parts(local);
	if parts.len() != 2 {
		return name.to_string();
	}
	let (email_last, email_first) = (parts[0].to_lowercase(), parts[1].to_lowercase());
	let (name_w0, name_w1) = (words[0].to_lowercase(), words[1].to_lowercase());
	if name_w0 == email_last && name_w1 == email_first {
		format!("{} {}", words[1], words[0])
	} else {
		name.to_string()
	}
}

/// Collapse each `best_id_groups` entry into one merged node: summed
/// traffic counts, unioned years, the best display name (falling back to a
/// name derived from the id), and a sorted alias list of every raw id
/// absorbed into it.
pub fn merge_nodes(
	best_id_groups: &HashMap<String, BTreeSet<String>>,
	nodes_by_id: &HashMap<String, &Node>,
) -> Vec<Node> {
	let mut merged_nodes = Vec::new();

	for (best_id, original_ids) in best_id_groups {
		let group_nodes: Vec<&Node> =
			original_ids.iter().filter_map(|oid| nodes_by_id.get(oid).copied()).collect();
		if group_nodes.is_empty() {
			continue;
		}

		let best_node = nodes_by_id.get(best_id).copied().unwrap_or(group_nodes[0]);
		let mut name = best_display_name(&group_nodes);

		let total_sent: i64 = group_nodes.iter().map(|n| n.sent).sum();
		let total_received: i64 = group_nodes.iter().map(|n| n.received).sum();
		let total_count: i64 = group_nodes.iter().map(|n| n.count).sum();
		let mut all_years = BTreeSet::new();
		for n in &group_nodes {
			all_years.extend(n.years.iter().copied());
		}
		let max_domain_count = group_nodes.iter().map(|n| n.domain_count).max().unwrap_or(0);

		let domain = normalize_domain(&best_node.domain);
		if name.is_empty() {
			name = best_node.name.clone();
		}
		if name.is_empty() {
			name = name_from_email(best_id);
		}
		if let Some(split) = split_initial_name(&name) {
			name = split;
		}
		name = fix_name_order(&name, best_id, &domain);

		merged_nodes.push(Node {
			id: best_id.clone(),
			name,
			domain,
			sent: total_sent,
			received: total_received,
			count: total_count,
			years: all_years,
			domain_count: max_domain_count,
			aliases: original_ids.iter().cloned().collect(),
		});
	}

	merged_nodes
}

/// Remap every edge endpoint through `final_remap`, drop self-loops created
/// by the merge, and aggregate duplicate `(source, target)` pairs by summing
/// weight and unioning years/doc_ids.
pub fn merge_edges(edges: &[Edge], final_remap: &HashMap<String, String>) -> Vec<Edge> {
	let mut edge_agg: HashMap<(String, String), Edge> = HashMap::new();

	for edge in edges {
		let src = final_remap.get(&edge.source).cloned().unwrap_or_else(|| edge.source.clone());
		let tgt = final_remap.get(&edge.target).cloned().unwrap_or_else(|| edge.target.clone());
		if src == tgt {
			continue;
		}

		let key = (src.clone(), tgt.clone());
		edge_agg
			.entry(key)
			.and_modify(|e| {
				e.weight += edge.weight;
				e.years.extend(edge.years.iter().copied());
				e.doc_ids.extend(edge.doc_ids.iter().cloned());
			})
			.or_insert_with(|| Edge {
				source: src,
				target: tgt,
				weight: edge.weight,
				years: edge.years.clone(),
				doc_ids: edge.doc_ids.clone(),
			});
	}

	edge_agg.into_values().collect()
}

/// Collapse merge groups into final nodes and edges and recompute stats in
/// one step — what `lib::run` actually calls after `pipeline::build_alias_map`.
pub fn merge_all(
	best_id_groups: &HashMap<String, BTreeSet<String>>,
	final_remap: &HashMap<String, String>,
	nodes_by_id: &HashMap<String, &Node>,
	edges: &[Edge],
) -> Graph {
	let nodes = merge_nodes(best_id_groups, nodes_by_id);
	let edges = merge_edges(edges, final_remap);
	let stats: Stats = recompute_stats(&nodes, &edges);
	Graph { stats, nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, name: &str, domain: &str, count: i64) -> Node {
		Node {
			id: id.to_string(),
			name: name.to_string(),
			domain: domain.to_string(),
			sent: 0,
			received: 0,
			count,
			years: BTreeSet::new(),
			domain_count: 0,
			aliases: Vec::new(),
		}
	}

	#[test]
	fn chooses_highest_count_node() {
		let a = node("jsmith@epa.gov", "John Smith", "epa.gov", 10);
		let b = node("j.smith2@epa.gov", "John Smith", "epa.gov", 4);
		let best = choose_canonical_node(&[&a, &b]);
		assert_eq!(best.id, "jsmith@epa.gov");
	}

	#[test]
	fn derives_name_from_two_part_local() {
		assert_eq!(name_from_email("hupp.sydney@epa.gov"), "Hupp Sydney");
	}

	#[test]
	fn splits_initial_lastname() {
		assert_eq!(split_initial_name("Jgreen"), Some("J. Green".to_string()));
		assert_eq!(split_initial_name("John"), None);
	}

	#[test]
	fn flips_lastname_first_order_for_epa() {
		assert_eq!(fix_name_order("Smith John", "smith.john@epa.gov", "epa.gov"), "John Smith");
		assert_eq!(fix_name_order("John Smith", "smith.john@epa.gov", "epa.gov"), "John Smith");
	}

	#[test]
	fn merges_edges_and_sums_weight() {
		let edges = vec![
			Edge { source: "a".into(), target: "b".into(), weight: 1, years: BTreeSet::new(), doc_ids: BTreeSet::new() },
			Edge { source: "a2".into(), target: "b".into(), weight: 2, years: BTreeSet::new(), doc_ids: BTreeSet::new() },
		];
		let mut remap = HashMap::new();
		remap.insert("a".to_string(), "a".to_string());
		remap.insert("a2".to_string(), "a".to_string());
		remap.insert("b".to_string(), "b".to_string());
		let merged = merge_edges(&edges, &remap);
		assert_eq!(merged.len(), 1);
		assert_eq!(merged[0].weight, 3);
	}
}
