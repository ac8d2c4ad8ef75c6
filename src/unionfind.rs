//! Weighted, path-compressed Union-Find over `String` keys (§4.2).
//!
//! Kept as a plain struct with value semantics rather than a class hierarchy:
//! a single parent/rank/weight triple keyed by the canonical string id is
//! easy to reason about and easy to test in isolation.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
pub struct UnionFind {
	parent: HashMap<String, String>,
	rank: HashMap<String, u32>,
	weight: HashMap<String, i64>,
}

impl UnionFind {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `x` if not already present, with initial activity `weight`.
	pub fn add(&mut self, x: &str, weight: i64) {
		if !self.parent.contains_key(x) {
			self.parent.insert(x.to_string(), x.to_string());
			self.rank.insert(x.to_string(), 0);
			self.weight.insert(x.to_string(), weight);
		}
	}

	/// Find the representative of `x`'s set, compressing the path to it.
	///
	/// Panics if `x` was never `add`ed — callers always `add` before `find`.
	pub fn find(&mut self, x: &str) -> String {
		let parent_of_x = self.parent.get(x).expect("find on unregistered key").clone();
		if parent_of_x == x {
			return parent_of_x;
		}
		let root = self.find(&parent_of_x);
		self.parent.insert(x.to_string(), root.clone());
		root
	}

	/// Union the sets containing `a` and `b`. The smaller-rank tree attaches
	/// under the larger; on a rank tie the surviving root's weight becomes
	/// the max of the two. A no-op if `a` and `b` are already in the same set.
	pub fn union(&mut self, a: &str, b: &str) {
		let mut ra = self.find(a);
		let mut rb = self.find(b);
		if ra == rb {
			return;
		}
		let rank_a = self.rank[&ra];
		let rank_b = self.rank[&rb];
		if rank_a < rank_b {
			std::mem::swap(&mut ra, &mut rb);
		}
		self.parent.insert(rb.clone(), ra.clone());
		if rank_a == rank_b {
			*self.rank.get_mut(&ra).unwrap() += 1;
		}
		let merged_weight = self.weight[&ra].max(self.weight[&rb]);
		self.weight.insert(ra, merged_weight);
	}

	/// Representative → members, in representative-key order for determinism.
	pub fn groups(&mut self) -> BTreeMap<String, Vec<String>> {
		let keys: Vec<String> = self.parent.keys().cloned().collect();
		let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
		for k in keys {
			let root = self.find(&k);
			out.entry(root).or_default().push(k);
		}
		for members in out.values_mut() {
			members.sort();
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn singleton_groups() {
		let mut uf = UnionFind::new();
		uf.add("a", 1);
		uf.add("b", 2);
		let groups = uf.groups();
		assert_eq!(groups.len(), 2);
	}

	#[test]
	fn union_merges_groups() {
		let mut uf = UnionFind::new();
		uf.add("a", 1);
		uf.add("b", 2);
		uf.add("c", 3);
		uf.union("a", "b");
		uf.union("b", "c");
		let groups = uf.groups();
		assert_eq!(groups.len(), 1);
		let members = groups.values().next().unwrap();
		assert_eq!(members, &vec!["a".to_string(), "b".to_string(), "c".to_string()]);
	}

	#[test]
	fn union_is_idempotent() {
		let mut uf = UnionFind::new();
		uf.add("a", 1);
		uf.add("b", 1);
		uf.union("a", "b");
		uf.union("a", "b");
		assert_eq!(uf.groups().len(), 1);
	}

	#[test]
	fn find_compresses_path() {
		let mut uf = UnionFind::new();
		for k in ["a", "b", "c", "d"] {
			uf.add(k, 0);
		}
		uf.union("a", "b");
		uf.union("b", "c");
		uf.union("c", "d");
		let root = uf.find("a");
		assert_eq!(uf.find("d"), root);
	}
}
