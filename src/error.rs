//! Fatal, top-level errors (§7). Every layer function below this is total —
//! only input decoding and output writing can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
	#[error("input file not found: {0}")]
	InputNotFound(PathBuf),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("malformed JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("input JSON is missing a top-level `nodes` array")]
	MissingNodes,

	#[error("input JSON is missing a top-level `edges` array")]
	MissingEdges,
}

impl GraphError {
	/// Process exit code for this error, per SPEC_FULL.md §6.
	pub fn exit_code(&self) -> i32 {
		match self {
			GraphError::InputNotFound(_) => 1,
			_ => 2,
		}
	}
}
