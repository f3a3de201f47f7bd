use std::path::Path;
use std::path::PathBuf;

use crate::Header;
use crate::MdportConfig;
use crate::MdportError;
use crate::MdportResult;
use crate::category::write_category;
use crate::header::inject_header;
use crate::ordering::OrderedDocument;
use crate::ordering::order_documents;
use crate::rewrite::rewrite_file;

/// What a job file run produced.
#[derive(Debug, Default)]
pub struct RunReport {
	/// Category metadata files written.
	pub categories: Vec<PathBuf>,
	/// Documents written by rewrite jobs.
	pub rewritten: Vec<PathBuf>,
	/// Documents written by header jobs.
	pub headed: Vec<PathBuf>,
	/// Documents touched by ordering passes, in presentation order per pass.
	pub ordered: Vec<OrderedDocument>,
}

impl RunReport {
	/// Total number of documents written.
	pub fn document_count(&self) -> usize {
		self.rewritten.len() + self.headed.len() + self.ordered.len()
	}
}

/// Run every job of `config` with paths resolved against `root`.
///
/// Categories are written first, then rewrites, headers, and ordering
/// passes, each in file order. The first failure stops the run; documents
/// already written stay written.
pub fn run_jobs(root: &Path, config: &MdportConfig) -> MdportResult<RunReport> {
	let mut report = RunReport::default();

	for job in &config.category {
		report
			.categories
			.push(write_category(&root.join(&job.directory), &job.metadata())?);
	}

	for job in &config.rewrite {
		let chain = job.build_chain(&config.sources)?;
		let source = root.join(&job.source);
		let destination = job.destination.as_ref().map(|d| root.join(d));
		report
			.rewritten
			.push(rewrite_file(&chain, &source, destination.as_deref())?);
	}

	for job in &config.header {
		let header = Header::Static(job.header_text()?);
		let source = root.join(&job.source);
		let destination = job.destination.as_ref().map(|d| root.join(d));
		report
			.headed
			.push(inject_header(&header, &source, destination.as_deref())?);
	}

	for job in &config.ordering {
		report
			.ordered
			.extend(order_documents(&job.to_options(root))?);
	}

	tracing::info!(documents = report.document_count(), "run complete");
	Ok(report)
}

/// Remove the generated directories listed in `config.clean`. Missing
/// directories are skipped. Returns the directories that were removed.
pub fn clean(root: &Path, config: &MdportConfig) -> MdportResult<Vec<PathBuf>> {
	let mut removed = Vec::new();

	for directory in &config.clean {
		let path = root.join(directory);
		if !path.exists() {
			continue;
		}

		std::fs::remove_dir_all(&path).map_err(MdportError::file_io(&path))?;
		tracing::debug!(path = %path.display(), "removed generated directory");
		removed.push(path);
	}

	Ok(removed)
}
