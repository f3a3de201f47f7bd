use std::path::Path;

use assert_cmd::Command;

pub fn mdport_cmd() -> Command {
	let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdport"));
	cmd.env("NO_COLOR", "1").env_remove("MDPORT_LOG");
	cmd
}

pub fn write(path: &Path, content: &str) {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("create_dir_all: {e}"));
	}
	std::fs::write(path, content).unwrap_or_else(|e| panic!("write: {e}"));
}
