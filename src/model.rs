//! Wire-format graph model: the JSON shape described in SPEC_FULL.md §3/§6.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A node in the correspondence graph, keyed by its raw address `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
	pub id: String,

	#[serde(default)]
	pub name: String,

	#[serde(default)]
	pub domain: String,

	#[serde(default)]
	pub sent: i64,

	#[serde(default)]
	pub received: i64,

	#[serde(default)]
	pub count: i64,

	#[serde(default)]
	pub years: BTreeSet<i64>,

	#[serde(default)]
	pub domain_count: i64,

	/// Raw ids absorbed into this node. Empty on input, populated on output.
	#[serde(default)]
	pub aliases: Vec<String>,
}

/// A directed correspondence edge between two node ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
	pub source: String,
	pub target: String,

	#[serde(default = "default_weight")]
	pub weight: i64,

	#[serde(default)]
	pub years: BTreeSet<i64>,

	#[serde(default)]
	pub doc_ids: BTreeSet<String>,
}

fn default_weight() -> i64 {
	1
}

/// One entry of the recomputed `top_domains` statistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDomain {
	pub domain: String,
	pub count: i64,
}

/// Top-level graph statistics, recomputed on output (§4.13).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
	#[serde(default)]
	pub nodes: i64,

	#[serde(default)]
	pub edges: i64,

	#[serde(default)]
	pub top_domains: Vec<TopDomain>,
}

/// The full graph snapshot: `{stats, nodes[], edges[]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
	#[serde(default)]
	pub stats: Stats,
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}
