//! Recomputes top-level graph statistics after merging (§4.13).

use std::collections::HashMap;

use crate::model::{Edge, Node, Stats, TopDomain};

/// Node/edge counts and the 50 busiest domains by node count, recomputed
/// from scratch rather than carried over from the input — merging can
/// change which domains dominate.
pub fn recompute_stats(nodes: &[Node], edges: &[Edge]) -> Stats {
	let mut domain_counts: HashMap<&str, i64> = HashMap::new();
	for node in nodes {
		if !node.domain.is_empty() {
			*domain_counts.entry(node.domain.as_str()).or_insert(0) += 1;
		}
	}

	let mut top_domains: Vec<TopDomain> = domain_counts
		.into_iter()
		.map(|(domain, count)| TopDomain { domain: domain.to_string(), count })
		.collect();
	top_domains.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
	top_domains.truncate(50);

	Stats { nodes: nodes.len() as i64, edges: edges.len() as i64, top_domains }
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeSet;

	fn node(domain: &str) -> Node {
		Node {
			id: format!("a@{domain}"),
			name: String::new(),
			domain: domain.to_string(),
			sent: 0,
			received: 0,
			count: 0,
			years: BTreeSet::new(),
			domain_count: 0,
			aliases: Vec::new(),
		}
	}

	#[test]
	fn ranks_domains_by_node_count() {
		let nodes = vec![node("epa.gov"), node("epa.gov"), node("gmail.com")];
		let stats = recompute_stats(&nodes, &[]);
		assert_eq!(stats.nodes, 3);
		assert_eq!(stats.top_domains[0].domain, "epa.gov");
		assert_eq!(stats.top_domains[0].count, 2);
	}
}
