//! Graph load/save (§4.2, §4.14). Loading validates the two required
//! top-level arrays before attempting a full typed decode, so a malformed
//! file reports which array is missing instead of an opaque serde error.
//! Saving backs up the input file when overwriting it in place and writes
//! compact (non-pretty) JSON, matching the original's on-disk format.

use std::fs;
use std::path::Path;

use crate::error::GraphError;
use crate::model::Graph;

pub fn load_graph(input: &Path) -> Result<Graph, GraphError> {
	if !input.exists() {
		return Err(GraphError::InputNotFound(input.to_path_buf()));
	}

	let raw = fs::read_to_string(input)?;
	let value: serde_json::Value = serde_json::from_str(&raw)?;

	if !value.get("nodes").is_some_and(|v| v.is_array()) {
		return Err(GraphError::MissingNodes);
	}
	if !value.get("edges").is_some_and(|v| v.is_array()) {
		return Err(GraphError::MissingEdges);
	}

	let graph: Graph = serde_json::from_value(value)?;
	Ok(graph)
}

/// Write `graph` to `output`, backing up `input` to `input.bak` first if
/// `output == input`.
pub fn save_graph(graph: &Graph, input: &Path, output: &Path) -> Result<(), GraphError> {
	if output == input {
		let backup_path = {
			let mut s = input.as_os_str().to_os_string();
			s.push(".bak");
			std::path::PathBuf::from(s)
		};
		println!("\nBacking up to {}...", backup_path.display());
		fs::copy(input, &backup_path)?;
	}

	println!("Writing {}...", output.display());
	let file = fs::File::create(output)?;
	serde_json::to_writer(file, graph)?;
	Ok(())
}
