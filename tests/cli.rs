use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn sample_graph() -> &'static str {
	r#"{"stats":{"nodes":0,"edges":0,"top_domains":[]},"nodes":[
		{"id":"pruitt.scott@epa.gov","name":"","domain":"epa.gov","sent":0,"received":0,"count":10,"years":[],"domain_count":0,"aliases":[]},
		{"id":"scott.pruitt@epa.gov","name":"Scott Pruitt","domain":"epa.gov","sent":0,"received":0,"count":4,"years":[],"domain_count":0,"aliases":[]}
	],"edges":[]}"#
}

#[test]
fn missing_input_exits_with_code_one() {
	let bin = assert_cmd::cargo::cargo_bin!("corrgraph");
	let mut cmd = Command::new(bin);
	cmd.arg("/nonexistent/path/email_network.json");
	cmd.assert().failure().code(1);
}

#[test]
fn dry_run_does_not_write_output() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("email_network.json");
	std::fs::write(&input, sample_graph()).unwrap();
	let before = std::fs::read_to_string(&input).unwrap();

	let bin = assert_cmd::cargo::cargo_bin!("corrgraph");
	let mut cmd = Command::new(bin);
	cmd.arg(&input).arg("--dry-run");
	cmd.assert().success().stdout(predicate::str::contains("[DRY RUN]"));

	let after = std::fs::read_to_string(&input).unwrap();
	assert_eq!(before, after);
}

#[test]
fn report_prints_merge_groups() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("email_network.json");
	std::fs::write(&input, sample_graph()).unwrap();

	let bin = assert_cmd::cargo::cargo_bin!("corrgraph");
	let mut cmd = Command::new(bin);
	cmd.arg(&input).arg("--dry-run").arg("--report");
	cmd.assert().success().stdout(predicate::str::contains("Merge Report"));
}

#[test]
fn no_fuzzy_skips_layer_four() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("email_network.json");
	std::fs::write(&input, sample_graph()).unwrap();

	let bin = assert_cmd::cargo::cargo_bin!("corrgraph");
	let mut cmd = Command::new(bin);
	cmd.arg(&input).arg("--dry-run").arg("--no-fuzzy");
	cmd.assert().success().stdout(predicate::str::contains("Layer 4: Fuzzy Edit-Distance: 0 changes"));
}

#[test]
fn overwrite_backs_up_input_to_bak() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("email_network.json");
	std::fs::write(&input, sample_graph()).unwrap();

	let bin = assert_cmd::cargo::cargo_bin!("corrgraph");
	let mut cmd = Command::new(bin);
	cmd.arg(&input);
	cmd.assert().success();

	assert!(dir.path().join("email_network.json.bak").exists());
}
