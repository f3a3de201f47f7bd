mod common;

use mdport_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn order_prints_positions_most_recent_first() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	for (version, title) in [
		("1.19", "1.19 -> 1.20"),
		("1.20.1", "1.20.1 -> 1.20.2"),
		("1.20", "1.20 -> 1.20.1"),
		("1.21", "1.21 -> 1.21.1"),
	] {
		common::write(
			&tmp.path().join(version).join("index.md"),
			&format!("# {title}\n"),
		);
	}

	let output = common::mdport_cmd()
		.arg("order")
		.arg(tmp.path())
		.output()?;
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout)?;
	let lines: Vec<Vec<&str>> = stdout
		.lines()
		.map(|line| line.split_whitespace().collect())
		.collect();
	assert_eq!(
		lines,
		vec![
			vec!["1.21", "2"],
			vec!["1.20.1", "3"],
			vec!["1.20", "4"],
			vec!["1.19", "5"],
		]
	);

	Ok(())
}

#[test]
fn order_respects_base_and_index_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write(&tmp.path().join("1.20/primer.md"), "# 1.19 -> 1.20\n");

	common::mdport_cmd()
		.arg("order")
		.arg(tmp.path())
		.arg("--base")
		.arg("10")
		.arg("--index-file")
		.arg("primer.md")
		.assert()
		.success()
		.stdout(predicates::str::contains("1.20").and(predicates::str::contains("10")));

	let primer = std::fs::read_to_string(tmp.path().join("1.20/primer.md"))?;
	assert_eq!(primer, "---\ntitle: 1.19 -> 1.20\nsidebar_position: 10\n---\n\n# 1.19 -> 1.20\n");

	Ok(())
}

#[test]
fn order_rejects_unparseable_versions() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write(&tmp.path().join("1.20-rc/index.md"), "# 1.19 -> 1.20\n");

	common::mdport_cmd()
		.arg("order")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("mdport::unparseable_version"));

	Ok(())
}

#[test]
fn order_empty_directory() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::mdport_cmd()
		.arg("order")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("No versioned documents found"));

	Ok(())
}
