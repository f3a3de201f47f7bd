use std::path::Path;
use std::path::PathBuf;

use crate::Context;
use crate::LineSink;
use crate::MdportError;
use crate::MdportResult;
use crate::PatchChain;
use crate::PatchOutcome;
use crate::admonition::ADMONITION_CLOSE;

/// Run every line of `text` through the patch chain and join the output.
///
/// Each line passes through the whole chain before the next one starts.
/// A fresh [`Context`] is used for the document. Lines are split on `\n`
/// so a trailing newline survives as a trailing empty line. An admonition
/// still open after the last line is closed.
pub fn rewrite_text(chain: &PatchChain, text: &str) -> String {
	let mut output: Vec<String> = Vec::new();
	let mut ctx = Context::new();

	'lines: for line in text.split('\n') {
		if ctx.take_skip() {
			continue;
		}

		let mut current = line.to_string();
		for patch in chain.iter() {
			let mut sink = LineSink::new(&mut output);
			match patch.apply(current, &mut ctx, &mut sink) {
				PatchOutcome::Replace(next) => current = next,
				PatchOutcome::Suppress => continue 'lines,
			}
		}

		output.push(current);
	}

	if ctx.in_admonition() {
		output.push(ADMONITION_CLOSE.to_string());
	}

	output.join("\n")
}

/// Rewrite the document at `source` through `chain`, writing the result to
/// `destination` (or back to `source`). Returns the written path.
pub fn rewrite_file(
	chain: &PatchChain,
	source: &Path,
	destination: Option<&Path>,
) -> MdportResult<PathBuf> {
	tracing::debug!(source = %source.display(), patches = chain.len(), "rewriting document");
	let written = transform_file(source, destination, |text| Ok(rewrite_text(chain, text)))?;
	tracing::info!(path = %written.display(), "rewrote document");

	Ok(written)
}

/// Read `source`, apply `operation`, and write the result.
///
/// When `destination` differs from `source`, missing parent directories are
/// created and `source` is removed before the output is written, so a
/// destination that names the source through another spelling still ends
/// up holding the output. Nothing is written or removed if `operation`
/// fails.
pub fn transform_file<F>(
	source: &Path,
	destination: Option<&Path>,
	operation: F,
) -> MdportResult<PathBuf>
where
	F: FnOnce(&str) -> MdportResult<String>,
{
	let data = std::fs::read_to_string(source).map_err(MdportError::file_io(source))?;
	let output = operation(&data)?;

	let target = destination.unwrap_or(source);
	if target == source {
		std::fs::write(source, output).map_err(MdportError::file_io(source))?;
		return Ok(source.to_path_buf());
	}

	if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent).map_err(MdportError::file_io(parent))?;
	}
	std::fs::remove_file(source).map_err(MdportError::file_io(source))?;
	std::fs::write(target, output).map_err(MdportError::file_io(target))?;

	Ok(target.to_path_buf())
}
