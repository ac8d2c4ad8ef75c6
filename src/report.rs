//! `--report`: print merge groups with 2+ members, largest first (§4.12).

use std::collections::{BTreeSet, HashMap};

use crate::model::Node;

const MAX_GROUPS: usize = 100;

pub fn print_merge_report(best_id_groups: &HashMap<String, BTreeSet<String>>, nodes_by_id: &HashMap<String, &Node>) {
	println!("\n=== Merge Report (groups with 2+ members) ===");

	let mut groups: Vec<(&String, &BTreeSet<String>)> =
		best_id_groups.iter().filter(|(_, members)| members.len() > 1).collect();
	groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));

	for (best_id, members) in groups.iter().take(MAX_GROUPS) {
		println!("\n  Best ID: {best_id}");
		for m in members.iter() {
			let (name, count) = nodes_by_id.get(m).map(|n| (n.name.as_str(), n.count)).unwrap_or(("", 0));
			let marker = if *m == *best_id { " <-- canonical" } else { "" };
			println!("    {m} ({name}, count={count}){marker}");
		}
	}

	if groups.len() > MAX_GROUPS {
		println!("\n  ... and {} more groups", groups.len() - MAX_GROUPS);
	}
}
