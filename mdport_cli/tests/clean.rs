mod common;

use mdport_core::AnyEmptyResult;

#[test]
fn clean_removes_generated_directories() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write(&tmp.path().join("mdport.toml"), "clean = [\"primer/docs\", \"plugins\"]\n");
	common::write(&tmp.path().join("primer/docs/1.20/index.md"), "# 1.19 -> 1.20\n");
	common::write(&tmp.path().join("primer/keep.md"), "keep");

	common::mdport_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Removed primer/docs"));

	assert!(!tmp.path().join("primer/docs").exists());
	assert!(tmp.path().join("primer/keep.md").exists());

	common::mdport_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Nothing to clean."));

	Ok(())
}
